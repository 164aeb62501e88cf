//! HTTP handlers that turn metadata documents into meta tag pairs.
//! Both return a JSON array of `{ "property", "content" }` records and
//! delegate the walk to `FlattenService`.

use crate::{
    errors::AppError,
    models::{Metadata, Property},
    services::flatten_service::FlattenService,
};
use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

/// Query params accepted by `POST /flatten`.
#[derive(Debug, Deserialize)]
pub struct FlattenQuery {
    /// Prefix for every emitted path, e.g. `og`.
    pub parent: Option<String>,
}

/// `POST /flatten` — flatten any JSON document.
///
/// A bare scalar body is only accepted together with `?parent=`.
pub async fn flatten_document(
    State(service): State<FlattenService>,
    Query(q): Query<FlattenQuery>,
    Json(document): Json<serde_json::Value>,
) -> Result<Json<Vec<Property>>, AppError> {
    let pairs = service.flatten_value(document, q.parent.as_deref())?;
    Ok(Json(pairs))
}

/// `POST /metadata` — flatten a typed metadata object.
///
/// The body must match one of the object-type shapes selected by its `type`
/// field; anything else is rejected by the JSON extractor before flattening.
pub async fn render_metadata(
    State(service): State<FlattenService>,
    Json(metadata): Json<Metadata>,
) -> Result<Json<Vec<Property>>, AppError> {
    tracing::debug!("rendering {} metadata", metadata.object_type());
    let pairs = service.render_metadata(&metadata)?;
    Ok(Json(pairs))
}
