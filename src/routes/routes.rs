//! Defines routes for the flattening API.
//!
//! ## Structure
//! - `GET  /healthz`  — liveness
//! - `POST /flatten`  — any JSON document, optional `?parent=` prefix
//! - `POST /metadata` — typed metadata object, `og`-namespaced output

use crate::{
    handlers::{
        health_handlers::healthz,
        metadata_handlers::{flatten_document, render_metadata},
    },
    services::flatten_service::FlattenService,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Build and return the router for all routes.
///
/// The router carries shared state (`FlattenService`) to all handlers.
pub fn routes() -> Router<FlattenService> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/flatten", post(flatten_document))
        .route("/metadata", post(render_metadata))
}
