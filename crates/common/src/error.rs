//! Error taxonomy shared across crates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::protocol::ErrorResponse;

/// Top-level service error type.
///
/// Variants map to HTTP status codes returned to callers:
/// - [`ServiceError::Validation`] → 422
/// - [`ServiceError::NotFound`] → 404
/// - [`ServiceError::Internal`] → 500
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Request input failed required-field or type checks.
    #[error("validation failed: {}", summarise(.0))]
    Validation(Vec<FieldError>),

    /// No note carries the requested id, given as the caller wrote it.
    ///
    /// Held as text so integer ids outside the [`NoteId`](crate::NoteId) range can still be
    /// named in the message.
    #[error("Care note with ID {0} not found")]
    NotFound(String),

    /// An unexpected internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Returns the HTTP status code that should be sent for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 422,
            ServiceError::NotFound(_) => 404,
            ServiceError::Internal(_) => 500,
        }
    }

    /// The `{"detail": ...}` body sent to the caller.
    ///
    /// Internal errors are reported generically; the cause stays in the logs.
    pub fn to_response(&self) -> ErrorResponse {
        match self {
            ServiceError::Validation(fields) => ErrorResponse::fields(fields.clone()),
            ServiceError::NotFound(_) => ErrorResponse::message(self.to_string()),
            ServiceError::Internal(_) => ErrorResponse::message("Internal Server Error"),
        }
    }
}

/// One field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Where the failure occurred, e.g. `["body", "residentName"]`.
    pub loc: Vec<String>,
    /// Human-readable description.
    pub msg: String,
    /// Machine-readable failure kind, e.g. `"missing"`.
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new(
        loc: impl IntoIterator<Item = impl Into<String>>,
        msg: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            loc: loc.into_iter().map(Into::into).collect(),
            msg: msg.into(),
            kind: kind.into(),
        }
    }

    /// A required body field is absent.
    pub fn missing(field: &str) -> Self {
        Self::new(["body", field], "Field required", "missing")
    }

    /// A body field is present but not a string.
    pub fn not_a_string(field: &str) -> Self {
        Self::new(["body", field], "Input should be a valid string", "string_type")
    }

    /// A body field is a blank string.
    pub fn too_short(field: &str) -> Self {
        Self::new(
            ["body", field],
            "String should have at least 1 character",
            "string_too_short",
        )
    }
}

fn summarise(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| format!("{}: {}", f.loc.join("."), f.msg))
        .collect::<Vec<_>>()
        .join("; ")
}
