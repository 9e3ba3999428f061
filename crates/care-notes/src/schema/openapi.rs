//! The service's own OpenAPI document, embedded at compile time.

use anyhow::{Context, Result};
use openapiv3::OpenAPI;

const DOCUMENT: &str = include_str!("openapi.yaml");

/// Parse the embedded OpenAPI document.
///
/// # Errors
///
/// Returns an error if the embedded YAML is not a valid OpenAPI 3 document.
pub fn document() -> Result<OpenAPI> {
    serde_yaml::from_str(DOCUMENT).context("embedded OpenAPI document is invalid")
}
