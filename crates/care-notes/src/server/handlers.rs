//! Axum request handlers for all service endpoints.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use common::{
    protocol::{ErrorResponse, HealthResponse, WelcomeResponse},
    Note, NoteId, ServiceError,
};
use openapiv3::OpenAPI;
use serde_json::Value;
use tracing::{debug, info};

use super::{error::ApiError, state::AppState};
use crate::schema::{self, default_timestamp};

/// `GET /` — welcome message.
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Care Notes API".into(),
    })
}

/// `GET /health` — liveness check with the current note count.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        notes_stored: state.store.len().await,
    })
}

/// `GET /openapi.json` — the service's OpenAPI document.
pub async fn openapi(State(state): State<AppState>) -> Json<OpenAPI> {
    Json(OpenAPI::clone(&state.api_doc))
}

/// `GET /care-notes` — every note in insertion order.
pub async fn list_notes(State(state): State<AppState>) -> Json<Vec<Note>> {
    Json(state.store.list_all().await)
}

/// `POST /care-notes` — validate the body, fill in `dateTime` if omitted, and
/// store the note.
///
/// Responds `201 Created` with the stored note, or `422` listing every
/// invalid field.
pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let Json(body) = payload?;
    let input = schema::validate_create(&body)?;
    let note = state.store.add(input.normalize(default_timestamp)).await;

    info!(note_id = note.id, "care note created");
    Ok((StatusCode::CREATED, Json(note)))
}

/// `GET /care-notes/{id}` — a single note, or `404` naming the missing id.
///
/// Any integer literal is a valid id; one outside the [`NoteId`] range can
/// never have been assigned and is reported as not found.
pub async fn get_note(
    State(state): State<AppState>,
    raw: Result<Path<String>, PathRejection>,
) -> Result<Json<Note>, ApiError> {
    let Path(raw) = raw?;
    let Some(id) = parse_note_id(&raw)? else {
        debug!(note_id = %raw, "care note id out of range");
        return Err(ServiceError::NotFound(raw).into());
    };
    match state.store.get_by_id(id).await {
        Some(note) => Ok(Json(note)),
        None => {
            debug!(note_id = id, "care note not found");
            Err(ServiceError::NotFound(id.to_string()).into())
        }
    }
}

/// Parse the `{id}` path segment.
///
/// `Ok(None)` means an integer literal (optional sign, then digits) too large
/// for [`NoteId`]; anything else that fails to parse is a 422.
fn parse_note_id(raw: &str) -> Result<Option<NoteId>, ApiError> {
    if let Ok(id) = raw.parse::<NoteId>() {
        return Ok(Some(id));
    }
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Ok(None)
    } else {
        Err(ApiError::not_an_integer("note_id"))
    }
}

/// Catch-all 404 handler.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::message("Not Found")))
}

/// Known path, unsupported method.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::message("Method Not Allowed")),
    )
}
