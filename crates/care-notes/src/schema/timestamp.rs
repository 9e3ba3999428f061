//! Default `dateTime` for notes created without one.

use chrono::Local;

/// Format used for generated timestamps; the `Z` is a literal suffix.
const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// Current wall-clock time as ISO-8601 text ending in `Z`.
///
/// The clock read is local time. On a host whose timezone is not UTC the
/// `Z` marker is therefore inaccurate; callers relying on true UTC should
/// send an explicit `dateTime`.
pub fn default_timestamp() -> String {
    Local::now().naive_local().format(FORMAT).to_string()
}
