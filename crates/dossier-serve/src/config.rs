//! Application configuration loaded from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use crate::provider::DEFAULT_MODEL;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:3001").
    pub bind_addr: String,

    /// Provider API key. `None` degrades `/api/analyze` to a configuration
    /// error; the rest of the server still runs.
    pub gemini_api_key: Option<String>,

    /// Provider model identifier.
    pub gemini_model: String,

    /// Path of the SQLite narrative cache.
    pub cache_db_path: PathBuf,

    /// Upper bound on a single provider call.
    pub provider_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables (all have defaults except the key):
    /// - `GEMINI_API_KEY`: Provider credential; without it the analyze
    ///   endpoint answers with a configuration error
    /// - `GEMINI_MODEL`: Model identifier (default: "gemini-2.5-flash")
    /// - `DOSSIER_BIND_ADDR`: Server bind address (default: "0.0.0.0:3001")
    /// - `DOSSIER_CACHE_DB`: SQLite cache path (default: "./dossier.db")
    /// - `DOSSIER_PROVIDER_TIMEOUT_SECS`: Provider timeout (default: 30)
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("DOSSIER_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3001".to_string());

        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let gemini_model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let cache_db_path = PathBuf::from(
            std::env::var("DOSSIER_CACHE_DB").unwrap_or_else(|_| "./dossier.db".to_string()),
        );

        let timeout_secs: u64 = match std::env::var("DOSSIER_PROVIDER_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("DOSSIER_PROVIDER_TIMEOUT_SECS must be an integer"))?,
            Err(_) => 30,
        };

        tracing::info!(
            bind_addr = %bind_addr,
            model = %gemini_model,
            cache_db = %cache_db_path.display(),
            api_key_present = gemini_api_key.is_some(),
            provider_timeout_secs = timeout_secs,
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            gemini_api_key,
            gemini_model,
            cache_db_path,
            provider_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
