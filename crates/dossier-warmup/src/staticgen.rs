//! Static narrative pre-generation.
//!
//! Build-time batch job for the no-backend deployment variant: one
//! `{id}.json` file per catalog entity under a public data directory, shape
//! `{ "text": "<markdown>" }`, fetched by clients directly. Existing files
//! are skipped so reruns only fill gaps; a per-entity failure is recorded
//! and the batch moves on.

use std::fs;
use std::path::{Path, PathBuf};

use dossier_core::{Entity, NO_DATA_GENERATED_TEXT, prompt};
use dossier_serve::provider::NarrativeProvider;

/// Outcome of a generation run, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct StaticReport {
    pub generated: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<String>,
}

/// File path for one entity's narrative.
pub fn narrative_path(out_dir: &Path, id: &str) -> PathBuf {
    out_dir.join(format!("{id}.json"))
}

/// Generate narrative files for `catalog` under `out_dir`.
///
/// With `force` set, existing files are regenerated instead of skipped.
/// Only failure to create the output directory aborts the run.
pub async fn generate(
    provider: &dyn NarrativeProvider,
    catalog: &[Entity],
    out_dir: &Path,
    force: bool,
) -> anyhow::Result<StaticReport> {
    fs::create_dir_all(out_dir)?;

    let mut report = StaticReport::default();
    for entity in catalog {
        let id = entity.cache_key();
        let path = narrative_path(out_dir, &id);

        if !force && path.exists() {
            tracing::info!(id = %id, "skipping, file already exists");
            report.skipped.push(id);
            continue;
        }

        match generate_one(provider, entity, &path).await {
            Ok(()) => {
                tracing::info!(id = %id, path = %path.display(), "saved");
                report.generated.push(id);
            }
            Err(err) => {
                tracing::error!(id = %id, error = %err, "generation failed");
                report.failed.push(id);
            }
        }
    }

    Ok(report)
}

async fn generate_one(
    provider: &dyn NarrativeProvider,
    entity: &Entity,
    path: &Path,
) -> anyhow::Result<()> {
    let text = provider
        .generate(&prompt::build(entity))
        .await?
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| NO_DATA_GENERATED_TEXT.to_string());

    let body = serde_json::to_string_pretty(&serde_json::json!({ "text": text }))?;
    fs::write(path, body)?;
    Ok(())
}
