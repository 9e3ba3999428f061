//! HTTP mapping for [`ServiceError`].

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::{FieldError, ServiceError};
use tracing::error;

/// Handler-level error: a [`ServiceError`] that knows how to become a response.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        Self(e)
    }
}

impl From<JsonRejection> for ApiError {
    /// Bodies that cannot be decoded are reported as validation errors, with
    /// the failure kind taken from the rejection.
    fn from(rejection: JsonRejection) -> Self {
        let kind = match &rejection {
            JsonRejection::MissingJsonContentType(_) => "content_type",
            JsonRejection::JsonSyntaxError(_) => "json_invalid",
            JsonRejection::JsonDataError(_) => "json_data",
            _ => "body_unreadable",
        };
        Self(ServiceError::Validation(vec![FieldError::new(
            ["body"],
            rejection.body_text(),
            kind,
        )]))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self(ServiceError::Validation(vec![FieldError::new(
            ["path"],
            rejection.body_text(),
            "path_invalid",
        )]))
    }
}

impl ApiError {
    /// A path parameter that is not an integer literal.
    pub fn not_an_integer(param: &str) -> Self {
        Self(ServiceError::Validation(vec![FieldError::new(
            ["path", param],
            "Input should be a valid integer, unable to parse string as an integer",
            "int_parsing",
        )]))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(error = %self.0, "request failed");
        }
        (status, Json(self.0.to_response())).into_response()
    }
}
