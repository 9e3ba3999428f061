//! `care-notes-api` — service binary entry point.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from environment variables.
//! 2. Initialise the telemetry pipeline (JSON logs, optional OTLP export).
//! 3. Parse the embedded OpenAPI document.
//! 4. Build the [`NoteStore`], seeded unless disabled.
//! 5. Build the Axum router and serve until shutdown.

mod config;
mod schema;
mod server;
mod store;
mod telemetry;

use anyhow::Result;
use tracing::info;

use config::Config;
use server::state::AppState;
use store::NoteStore;

#[tokio::main]
async fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e:#}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init_telemetry(cfg.otel_exporter_otlp_endpoint.as_deref(), &cfg.log_level)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        port = cfg.port,
        otlp = cfg.otel_exporter_otlp_endpoint.is_some(),
        "care-notes-api starting"
    );

    // -----------------------------------------------------------------------
    // 3. API document
    // -----------------------------------------------------------------------
    let api_doc = schema::openapi::document()?;

    // -----------------------------------------------------------------------
    // 4. Note store
    // -----------------------------------------------------------------------
    let store = if cfg.seed_notes {
        NoteStore::seeded()
    } else {
        NoteStore::new()
    };
    info!(notes = store.len().await, "note store ready");

    // -----------------------------------------------------------------------
    // 5. HTTP server
    // -----------------------------------------------------------------------
    let result = server::serve(&cfg, AppState::new(store, api_doc)).await;

    telemetry::shutdown_telemetry();
    result
}
