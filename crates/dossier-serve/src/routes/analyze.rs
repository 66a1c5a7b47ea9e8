//! The narrative analysis endpoint.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use dossier_core::Entity;

use crate::error::ApiError;
use crate::state::AppState;

/// Successful analysis response.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    /// Narrative report in Markdown.
    pub text: String,
}

/// Resolve the narrative for the posted entity.
///
/// Route: `POST /api/analyze`, body: a JSON entity (event or origin).
pub async fn analyze(
    State(state): State<AppState>,
    Json(entity): Json<Entity>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    tracing::info!(key = %entity.cache_key(), subject = %entity.subject(), "analyze request");
    let text = state.narrative.resolve(&entity).await?;
    Ok(Json(AnalyzeResponse { text }))
}

/// Explicit preflight handler so any `OPTIONS /api/analyze` gets a 200 with
/// an empty body, whether or not the browser sent preflight headers. The
/// CORS layer fills in the response headers.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
