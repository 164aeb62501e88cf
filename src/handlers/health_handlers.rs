//! Health handler.
//!
//! - GET /healthz  -> simple liveness ("ok") plus the configured depth limit

use crate::services::flatten_service::FlattenService;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

/// `GET /healthz`
///
/// Liveness check. Always returns 200 OK with a small JSON body.
/// The service has no external dependencies, so liveness implies readiness.
pub async fn healthz(State(service): State<FlattenService>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".into(),
            max_depth: service.flattener.max_depth(),
        }),
    )
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    max_depth: usize,
}
