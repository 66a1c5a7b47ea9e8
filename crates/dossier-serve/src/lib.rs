//! Dossier Serve - HTTP API for narrative lookups.
//!
//! This crate serves AI-generated Markdown narratives for catalog entities
//! (UAP events and celestial origins). Responses are cached durably in
//! SQLite so each entity is billed against the provider at most once.
//!
//! # Architecture
//!
//! - **AppState**: Shared state (narrative service, configuration)
//! - **CacheStore**: Durable SQLite key-value cache, opened once per process
//! - **NarrativeService**: Cache-then-generate orchestration; the only
//!   component allowed to contact the provider
//! - **Routes**: The analyze endpoint plus a health probe

pub mod cache;
pub mod config;
pub mod narrative;
pub mod provider;

mod error;
mod routes;
mod state;

pub use self::config::Config;
pub use self::error::ApiError;
pub use self::routes::router;
pub use self::state::AppState;
