//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use openapiv3::OpenAPI;

use crate::store::NoteStore;

/// Application state shared across all request handlers.
///
/// All fields are cheaply cloneable (`Arc`-wrapped or already `Arc`-backed) so
/// that Axum can clone the state for each request without copying the notes.
#[derive(Clone)]
pub struct AppState {
    /// The authoritative note collection.
    pub store: NoteStore,
    /// Parsed OpenAPI document served from `/openapi.json`.
    pub api_doc: Arc<OpenAPI>,
}

impl AppState {
    /// Create a new [`AppState`] from a store and the parsed API document.
    pub fn new(store: NoteStore, api_doc: OpenAPI) -> Self {
        Self {
            store,
            api_doc: Arc::new(api_doc),
        }
    }
}

#[cfg(test)]
impl Default for AppState {
    /// A seeded store and the embedded API document, suitable for tests.
    fn default() -> Self {
        Self::new(
            NoteStore::seeded(),
            crate::schema::openapi::document().expect("embedded OpenAPI document"),
        )
    }
}
