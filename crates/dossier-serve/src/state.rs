//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::cache::CacheStore;
use crate::config::Config;
use crate::narrative::NarrativeService;
use crate::provider::{GeminiClient, NarrativeProvider};

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Narrative resolution (cache + provider), the only provider gateway.
    pub narrative: Arc<NarrativeService>,

    /// Application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create the application state from configuration.
    ///
    /// The cache connection is opened here, once, and held for the process
    /// lifetime. A cache that cannot be opened on disk degrades to an
    /// in-memory store: the service keeps answering, it just re-bills.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let cache = match CacheStore::open(&config.cache_db_path) {
            Ok(cache) => cache,
            Err(err) => {
                tracing::warn!(
                    path = %config.cache_db_path.display(),
                    error = %err,
                    "cache store unavailable, falling back to in-memory cache"
                );
                CacheStore::open_in_memory()?
            }
        };

        let provider: Option<Arc<dyn NarrativeProvider>> = match &config.gemini_api_key {
            Some(key) => Some(Arc::new(GeminiClient::new(
                key.clone(),
                config.gemini_model.clone(),
                config.provider_timeout,
            )?)),
            None => {
                tracing::warn!(
                    "GEMINI_API_KEY is not set; /api/analyze will answer with a configuration error"
                );
                None
            }
        };

        Ok(Self {
            narrative: Arc::new(NarrativeService::new(provider, cache)),
            config: Arc::new(config),
        })
    }

    /// State with an injected narrative service, bypassing env and disk.
    #[cfg(test)]
    pub(crate) fn with_service(narrative: NarrativeService) -> Self {
        let config = Config {
            bind_addr: "127.0.0.1:0".to_string(),
            gemini_api_key: None,
            gemini_model: crate::provider::DEFAULT_MODEL.to_string(),
            cache_db_path: std::path::PathBuf::from(":memory:"),
            provider_timeout: std::time::Duration::from_secs(30),
        };
        Self {
            narrative: Arc::new(narrative),
            config: Arc::new(config),
        }
    }
}
