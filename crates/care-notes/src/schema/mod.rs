//! Creation-input validation and the default-timestamp policy.
//!
//! # Responsibilities
//!
//! - Check a decoded JSON body against the creation contract and report every
//!   failing field with a [`FieldError`].
//! - Resolve the optional `dateTime` into a final value in one step
//!   ([`CreateNote::normalize`]) before anything reaches the store.
//!
//! # Module invariants
//!
//! - **No store access.** Validation is pure; it never touches `crate::store`
//!   beyond producing a [`NewNote`].

pub mod openapi;
pub mod timestamp;

pub use timestamp::default_timestamp;

use common::{FieldError, ServiceError};
use serde_json::{Map, Value};

use crate::store::NewNote;

/// Body field names as they appear on the wire.
pub const RESIDENT_NAME: &str = "residentName";
pub const CONTENT: &str = "content";
pub const AUTHOR_NAME: &str = "authorName";
pub const DATE_TIME: &str = "dateTime";

/// Validated creation input. `date_time` is still unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateNote {
    pub resident_name: String,
    pub content: String,
    pub author_name: String,
    pub date_time: Option<String>,
}

impl CreateNote {
    /// Apply the default-timestamp policy and produce a [`NewNote`].
    ///
    /// A non-empty caller `dateTime` is kept verbatim; otherwise `now` is
    /// called once for the value.
    pub fn normalize(self, now: impl FnOnce() -> String) -> NewNote {
        let date_time = match self.date_time {
            Some(dt) if !dt.is_empty() => dt,
            _ => now(),
        };
        NewNote {
            resident_name: self.resident_name,
            date_time,
            content: self.content,
            author_name: self.author_name,
        }
    }
}

/// Validate a decoded `POST /care-notes` body.
///
/// # Errors
///
/// Returns [`ServiceError::Validation`] listing every field that is missing,
/// not a string, or empty, or a single body-level error if `body` is not an
/// object.
pub fn validate_create(body: &Value) -> Result<CreateNote, ServiceError> {
    let Value::Object(map) = body else {
        return Err(ServiceError::Validation(vec![FieldError::new(
            ["body"],
            "Input should be a valid dictionary or object to extract fields from",
            "model_attributes_type",
        )]));
    };

    let mut errors = Vec::new();
    let resident_name = required_text(map, RESIDENT_NAME, &mut errors);
    let content = required_text(map, CONTENT, &mut errors);
    let author_name = required_text(map, AUTHOR_NAME, &mut errors);
    let date_time = optional_text(map, DATE_TIME, &mut errors);

    match (resident_name, content, author_name) {
        (Some(resident_name), Some(content), Some(author_name)) if errors.is_empty() => {
            Ok(CreateNote {
                resident_name,
                content,
                author_name,
                date_time,
            })
        }
        _ => Err(ServiceError::Validation(errors)),
    }
}

fn required_text(
    map: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match map.get(field) {
        None => {
            errors.push(FieldError::missing(field));
            None
        }
        Some(Value::String(s)) if s.is_empty() => {
            errors.push(FieldError::too_short(field));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::not_a_string(field));
            None
        }
    }
}

fn optional_text(
    map: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match map.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::not_a_string(field));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kinds(err: ServiceError) -> Vec<(String, String)> {
        match err {
            ServiceError::Validation(fields) => fields
                .into_iter()
                .map(|f| (f.loc.last().cloned().unwrap_or_default(), f.kind))
                .collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_minimal_body() {
        let input = validate_create(&json!({
            "residentName": "Carol",
            "content": "Vitals checked",
            "authorName": "Nurse Lee"
        }))
        .unwrap();
        assert_eq!(input.resident_name, "Carol");
        assert_eq!(input.date_time, None);
    }

    #[test]
    fn null_date_time_counts_as_absent() {
        let input = validate_create(&json!({
            "residentName": "Carol",
            "content": "Vitals checked",
            "authorName": "Nurse Lee",
            "dateTime": null
        }))
        .unwrap();
        assert_eq!(input.date_time, None);
    }

    #[test]
    fn reports_every_missing_field() {
        let err = validate_create(&json!({})).unwrap_err();
        assert_eq!(
            kinds(err),
            vec![
                ("residentName".into(), "missing".into()),
                ("content".into(), "missing".into()),
                ("authorName".into(), "missing".into()),
            ]
        );
    }

    #[test]
    fn rejects_wrong_types_and_empty_text() {
        let err = validate_create(&json!({
            "residentName": 42,
            "content": "",
            "authorName": "Nurse Lee",
            "dateTime": false
        }))
        .unwrap_err();
        assert_eq!(
            kinds(err),
            vec![
                ("residentName".into(), "string_type".into()),
                ("content".into(), "string_too_short".into()),
                ("dateTime".into(), "string_type".into()),
            ]
        );
    }

    #[test]
    fn whitespace_only_text_is_accepted_verbatim() {
        let input = validate_create(&json!({
            "residentName": "Carol",
            "content": "   ",
            "authorName": "Nurse Lee"
        }))
        .unwrap();
        assert_eq!(input.content, "   ");
    }

    #[test]
    fn rejects_non_object_body() {
        let err = validate_create(&json!(["residentName"])).unwrap_err();
        assert_eq!(kinds(err), vec![("body".into(), "model_attributes_type".into())]);
    }

    #[test]
    fn normalize_keeps_explicit_date_time() {
        let input = CreateNote {
            resident_name: "Carol".into(),
            content: "Vitals checked".into(),
            author_name: "Nurse Lee".into(),
            date_time: Some("2024-01-02T03:04:05Z".into()),
        };
        let note = input.normalize(|| panic!("clock must not be read"));
        assert_eq!(note.date_time, "2024-01-02T03:04:05Z");
    }

    #[test]
    fn normalize_fills_absent_or_empty_date_time() {
        for date_time in [None, Some(String::new())] {
            let input = CreateNote {
                resident_name: "Carol".into(),
                content: "Vitals checked".into(),
                author_name: "Nurse Lee".into(),
                date_time,
            };
            let note = input.normalize(|| "2030-05-06T07:08:09.000000Z".into());
            assert_eq!(note.date_time, "2030-05-06T07:08:09.000000Z");
        }
    }
}
