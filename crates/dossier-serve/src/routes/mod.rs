//! API route definitions.
//!
//! ## Routes
//!
//! - `GET /health` - Health check (no CORS requirements)
//! - `POST /api/analyze` - Resolve the narrative for a posted entity
//! - `OPTIONS /api/analyze` - Preflight, always 200 with an empty body
//!
//! Any other method on `/api/analyze` is answered with 405 by the method
//! router. The CORS policy is part of the endpoint contract: any origin,
//! the standard methods, and a fixed allow-list of request headers.

mod analyze;
mod health;

use axum::Router;
use axum::http::{HeaderName, Method, header};
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

/// CORS layer for the analyze endpoint.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::OPTIONS,
            Method::PATCH,
            Method::DELETE,
            Method::POST,
            Method::PUT,
        ])
        .allow_headers([
            HeaderName::from_static("x-csrf-token"),
            HeaderName::from_static("x-requested-with"),
            header::ACCEPT,
            HeaderName::from_static("accept-version"),
            header::CONTENT_LENGTH,
            HeaderName::from_static("content-md5"),
            header::CONTENT_TYPE,
            header::DATE,
            HeaderName::from_static("x-api-version"),
        ])
}

/// Build the complete API router.
pub fn router(state: AppState) -> Router {
    let public = Router::new().route("/health", get(health::health_check));

    let api = Router::new()
        .route(
            "/api/analyze",
            post(analyze::analyze).options(analyze::preflight),
        )
        .layer(cors());

    Router::new().merge(public).merge(api).with_state(state)
}
