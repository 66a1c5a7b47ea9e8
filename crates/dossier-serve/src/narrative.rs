//! Narrative resolution: cache-then-generate.
//!
//! This is the only place the provider is contacted, so the
//! check-cache-first policy holds for every caller (live endpoint and
//! warm-up traffic alike). The algorithm:
//!
//! 1. Derive the cache key from the entity.
//! 2. Return the cached narrative if present (no network).
//! 3. On a miss, build the prompt and run the provider; an empty provider
//!    answer becomes a literal placeholder, not an error.
//! 4. Best-effort cache write; a storage fault is logged and the fresh text
//!    is returned anyway.
//!
//! A cache fault on the read side degrades to an always-miss cache. Two
//! concurrent misses for the same key may both generate; the write-once
//! insert keeps that harmless.

use std::sync::Arc;

use dossier_core::{EMPTY_RESPONSE_TEXT, Entity, prompt};

use crate::cache::CacheStore;
use crate::provider::{NarrativeProvider, ProviderError};

/// Failure modes visible to callers of [`NarrativeService::resolve`].
///
/// Cache faults never appear here: they degrade to regeneration.
#[derive(Debug, thiserror::Error)]
pub enum NarrativeError {
    /// No provider credential was configured at startup.
    #[error("provider API key is not configured")]
    MissingApiKey,

    /// The upstream generation call failed after a cache miss.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Resolves entities to narrative Markdown, caching every generation.
pub struct NarrativeService {
    /// `None` when no API key was configured; decided once at construction.
    provider: Option<Arc<dyn NarrativeProvider>>,
    cache: CacheStore,
}

impl NarrativeService {
    pub fn new(provider: Option<Arc<dyn NarrativeProvider>>, cache: CacheStore) -> Self {
        Self { provider, cache }
    }

    /// Resolve the narrative for `entity`, from cache when possible.
    pub async fn resolve(&self, entity: &Entity) -> Result<String, NarrativeError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(NarrativeError::MissingApiKey)?;

        let key = entity.cache_key();
        match self.cache.get(&key) {
            Ok(Some(text)) => {
                tracing::debug!(key = %key, "cache hit");
                return Ok(text);
            }
            Ok(None) => {
                tracing::debug!(key = %key, "cache miss, generating");
            }
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "cache read failed, regenerating");
            }
        }

        let prompt = prompt::build(entity);
        let text = provider
            .generate(&prompt)
            .await?
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| EMPTY_RESPONSE_TEXT.to_string());

        if let Err(err) = self.cache.put(&key, &text) {
            tracing::warn!(key = %key, error = %err, "cache write failed, returning uncached text");
        }

        Ok(text)
    }
}
