//! Structured logging and optional OpenTelemetry span export.
//!
//! # Telemetry invariants
//!
//! - **No note content** (resident names, note text, authors) appears in any
//!   span attribute or log field. Ids and counts only.
//! - Log level is configurable via `CARE_NOTES_LOG_LEVEL` (default: `info`)
//!   and overridden by `RUST_LOG`.

pub mod init;

pub use init::{init_telemetry, shutdown_telemetry};
