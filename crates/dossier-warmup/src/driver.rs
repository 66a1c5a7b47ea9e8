//! Cache warm-up driver.
//!
//! Walks the fixed catalog sequentially and asks the live analyze endpoint
//! to resolve each entity, so the narrative cache is populated before real
//! traffic arrives. The endpoint is a remote call even when co-located, to
//! mirror production access patterns.
//!
//! Per entity: up to a bounded number of attempts with a fixed delay between
//! retries. Between entities: a fixed pacing delay regardless of outcome, to
//! bound the request rate against the provider. A permanently failed entity
//! never aborts the batch; it is recorded and reported at the end.

use std::time::Duration;

use async_trait::async_trait;
use dossier_core::Entity;

/// Retry and pacing policy for a warm-up run.
#[derive(Debug, Clone)]
pub struct WarmupOptions {
    /// Attempts per entity before recording a permanent failure.
    pub attempts: u32,
    /// Delay between attempts for the same entity.
    pub retry_delay: Duration,
    /// Pacing delay between catalog entries, regardless of outcome.
    pub item_delay: Duration,
}

impl Default for WarmupOptions {
    fn default() -> Self {
        Self {
            attempts: 3,
            retry_delay: Duration::from_secs(5),
            item_delay: Duration::from_secs(4),
        }
    }
}

/// Outcome of a warm-up run, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct WarmupReport {
    /// Cache keys resolved successfully.
    pub succeeded: Vec<String>,
    /// Cache keys that exhausted every attempt.
    pub failed: Vec<String>,
}

/// The analyze endpoint as seen by the driver.
#[async_trait]
pub trait AnalyzeClient: Send + Sync {
    /// Ask the endpoint to resolve (and thereby cache) one entity.
    async fn warm(&self, entity: &Entity) -> anyhow::Result<()>;
}

/// Production client: POSTs the entity to a running dossier-serve instance.
pub struct HttpAnalyzeClient {
    http: reqwest::Client,
    url: String,
}

impl HttpAnalyzeClient {
    /// `url` is the full endpoint address, e.g.
    /// `http://localhost:3001/api/analyze`. The generous timeout leaves room
    /// for a cache miss that has to wait on the provider.
    pub fn new(url: String) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(Self { http, url })
    }
}

#[async_trait]
impl AnalyzeClient for HttpAnalyzeClient {
    async fn warm(&self, entity: &Entity) -> anyhow::Result<()> {
        let response = self.http.post(&self.url).json(entity).send().await?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("endpoint answered {status}");
        }
        Ok(())
    }
}

/// Run the warm-up over `catalog`, returning a full report.
pub async fn run(
    client: &dyn AnalyzeClient,
    catalog: &[Entity],
    options: &WarmupOptions,
) -> WarmupReport {
    let mut report = WarmupReport::default();

    for (index, entity) in catalog.iter().enumerate() {
        if index > 0 {
            tokio::time::sleep(options.item_delay).await;
        }

        let id = entity.cache_key();
        let mut attempt = 1u32;
        let succeeded = loop {
            tracing::info!(id = %id, attempt, attempts = options.attempts, "warming entity");
            match client.warm(entity).await {
                Ok(()) => break true,
                Err(err) => {
                    tracing::warn!(id = %id, attempt, error = %err, "warm-up attempt failed");
                    if attempt >= options.attempts {
                        break false;
                    }
                    attempt += 1;
                    tokio::time::sleep(options.retry_delay).await;
                }
            }
        };

        if succeeded {
            tracing::info!(id = %id, "cached");
            report.succeeded.push(id);
        } else {
            tracing::error!(id = %id, "permanently failed");
            report.failed.push(id);
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_core::catalog;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::Instant;

    /// Client double that fails a scripted number of leading calls per run.
    struct FlakyClient {
        failures_before_success: usize,
        calls: AtomicUsize,
    }

    impl FlakyClient {
        fn new(failures_before_success: usize) -> Self {
            Self {
                failures_before_success,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AnalyzeClient for FlakyClient {
        async fn warm(&self, _entity: &Entity) -> anyhow::Result<()> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures_before_success {
                anyhow::bail!("transient failure");
            }
            Ok(())
        }
    }

    /// Client double that fails only for one specific id.
    struct RejectingClient {
        reject_id: String,
    }

    #[async_trait]
    impl AnalyzeClient for RejectingClient {
        async fn warm(&self, entity: &Entity) -> anyhow::Result<()> {
            if entity.cache_key() == self.reject_id {
                anyhow::bail!("endpoint answered 500 Internal Server Error");
            }
            Ok(())
        }
    }

    fn roswell() -> Entity {
        catalog::all()
            .into_iter()
            .find(|e| e.id() == "roswell")
            .unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn flaky_entity_succeeds_on_the_third_attempt() {
        let client = FlakyClient::new(2);
        let started = Instant::now();

        let report = run(&client, &[roswell()], &WarmupOptions::default()).await;

        assert_eq!(report.succeeded, vec!["roswell".to_string()]);
        assert!(report.failed.is_empty());
        assert_eq!(client.calls(), 3);
        // Exactly the two 5s inter-retry waits; no item pacing for one entry.
        assert_eq!(started.elapsed(), Duration::from_secs(10));
    }

    #[tokio::test(start_paused = true)]
    async fn attempts_are_bounded() {
        let client = FlakyClient::new(usize::MAX);

        let report = run(&client, &[roswell()], &WarmupOptions::default()).await;

        assert!(report.succeeded.is_empty());
        assert_eq!(report.failed, vec!["roswell".to_string()]);
        assert_eq!(client.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn a_permanent_failure_does_not_abort_the_batch() {
        let client = RejectingClient {
            reject_id: "roswell".to_string(),
        };
        let catalog = catalog::all();

        let report = run(&client, &catalog, &WarmupOptions::default()).await;

        assert_eq!(report.failed, vec!["roswell".to_string()]);
        assert_eq!(report.succeeded.len(), catalog.len() - 1);
    }

    #[tokio::test(start_paused = true)]
    async fn entries_are_paced_by_the_item_delay() {
        let client = FlakyClient::new(0);
        let catalog = vec![roswell(), roswell(), roswell()];
        let started = Instant::now();

        let report = run(&client, &catalog, &WarmupOptions::default()).await;

        assert_eq!(report.succeeded.len(), 3);
        // Two gaps of 4s between three instantly-successful entries.
        assert_eq!(started.elapsed(), Duration::from_secs(8));
    }

    #[tokio::test(start_paused = true)]
    async fn empty_catalog_reports_nothing() {
        let client = FlakyClient::new(0);
        let report = run(&client, &[], &WarmupOptions::default()).await;
        assert!(report.succeeded.is_empty());
        assert!(report.failed.is_empty());
        assert_eq!(client.calls(), 0);
    }
}
