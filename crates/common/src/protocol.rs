//! Request and response bodies exchanged over the care notes HTTP API.
//!
//! Field names are camelCase on the wire (`residentName`, `dateTime`, ...).

use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// Identifier assigned to a note by the store. Always positive.
pub type NoteId = i64;

// ---------------------------------------------------------------------------
// Care notes
// ---------------------------------------------------------------------------

/// A stored care note, as returned by every read and by creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub resident_name: String,
    /// ISO-8601 text with a trailing `Z`.
    pub date_time: String,
    pub content: String,
    pub author_name: String,
}

/// Body of `POST /care-notes`.
///
/// `date_time` is optional; the server fills in the current time when it is
/// omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    pub resident_name: String,
    pub content: String,
    pub author_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
}

// ---------------------------------------------------------------------------
// Service endpoints
// ---------------------------------------------------------------------------

/// Response body for `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving.
    pub status: String,
    /// Number of notes currently held in memory.
    pub notes_stored: usize,
}

// ---------------------------------------------------------------------------
// Error response
// ---------------------------------------------------------------------------

/// Body returned on any non-2xx status: `{"detail": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: ErrorDetail,
}

/// Either a plain message or a list of field-level validation failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Fields(Vec<FieldError>),
}

impl ErrorResponse {
    /// Build an error body carrying a single message.
    pub fn message(detail: impl Into<String>) -> Self {
        Self {
            detail: ErrorDetail::Message(detail.into()),
        }
    }

    /// Build an error body listing validation failures.
    pub fn fields(errors: Vec<FieldError>) -> Self {
        Self {
            detail: ErrorDetail::Fields(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn note_uses_camel_case_keys() {
        let note = Note {
            id: 1,
            resident_name: "Alice Johnson".into(),
            date_time: "2024-09-17T10:30:00Z".into(),
            content: "Medication administered as scheduled.".into(),
            author_name: "Nurse Smith".into(),
        };
        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "residentName": "Alice Johnson",
                "dateTime": "2024-09-17T10:30:00Z",
                "content": "Medication administered as scheduled.",
                "authorName": "Nurse Smith"
            })
        );
    }

    #[test]
    fn create_request_date_time_is_optional() {
        let req: CreateNoteRequest = serde_json::from_value(json!({
            "residentName": "Carol",
            "content": "Vitals checked",
            "authorName": "Nurse Lee"
        }))
        .unwrap();
        assert_eq!(req.date_time, None);

        let body = serde_json::to_value(&req).unwrap();
        assert!(body.get("dateTime").is_none());
    }

    #[test]
    fn message_detail_serialises_as_string() {
        let e = ErrorResponse::message("Care note with ID 999 not found");
        assert_eq!(
            serde_json::to_value(&e).unwrap(),
            json!({"detail": "Care note with ID 999 not found"})
        );
    }

    #[test]
    fn field_detail_serialises_as_list() {
        let e = ErrorResponse::fields(vec![FieldError::missing("content")]);
        let value = serde_json::to_value(&e).unwrap();
        assert_eq!(value["detail"][0]["loc"], json!(["body", "content"]));
        assert_eq!(value["detail"][0]["type"], "missing");
    }

    #[test]
    fn error_response_decodes_both_shapes() {
        let msg: ErrorResponse = serde_json::from_str(r#"{"detail":"Not Found"}"#).unwrap();
        assert_eq!(msg.detail, ErrorDetail::Message("Not Found".into()));

        let fields: ErrorResponse = serde_json::from_str(
            r#"{"detail":[{"loc":["body","content"],"msg":"Field required","type":"missing"}]}"#,
        )
        .unwrap();
        assert!(matches!(fields.detail, ErrorDetail::Fields(ref f) if f.len() == 1));
    }
}
