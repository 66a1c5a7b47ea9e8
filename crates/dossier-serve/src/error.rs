//! API error types and response formatting.
//!
//! Failures never leak details to clients: every error renders as a small
//! JSON object with a fixed `error` string, and the specifics go to the log.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::narrative::NarrativeError;
use crate::provider::ProviderError;

/// Config-error body, also the contract tested by clients.
pub const MISSING_API_KEY_BODY: &str = "Server Configuration Error: Missing API Key";

/// Generic failure body.
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

/// API error type that converts to appropriate HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Provider credential missing; reported per request as a 500 with a
    /// distinct body so operators can tell it apart from runtime faults.
    #[error("provider API key is not configured")]
    MissingApiKey,

    /// Upstream generation call failed or timed out.
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Anything else.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<NarrativeError> for ApiError {
    fn from(err: NarrativeError) -> Self {
        match err {
            NarrativeError::MissingApiKey => Self::MissingApiKey,
            NarrativeError::Provider(err) => Self::Provider(err),
        }
    }
}

/// JSON error response body.
#[derive(Debug, Clone, Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::MissingApiKey => {
                tracing::error!("rejecting request: provider API key is not configured");
                MISSING_API_KEY_BODY
            }
            Self::Provider(err) => {
                tracing::error!(error = %err, "provider call failed");
                INTERNAL_ERROR_BODY
            }
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                INTERNAL_ERROR_BODY
            }
        };

        let body = ErrorResponse {
            error: message.to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
