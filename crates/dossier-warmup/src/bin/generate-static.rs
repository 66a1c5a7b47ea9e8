//! Static narrative file generator.
//!
//! Pre-generates one `{id}.json` narrative file per catalog entity for the
//! deployment variant that serves everything as static files, with no live
//! backend. Calls the provider directly, so `GEMINI_API_KEY` is required.
//!
//! # Usage
//!
//! ```bash
//! # Fill in any missing files under the default public data directory
//! generate-static
//!
//! # Regenerate everything into a custom directory
//! generate-static --out-dir ./dist/data --force
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use dossier_core::catalog;
use dossier_serve::Config;
use dossier_serve::provider::GeminiClient;
use dossier_warmup::staticgen;

/// Pre-generate static narrative files for every catalog entity.
#[derive(Parser, Debug)]
#[command(name = "generate-static")]
#[command(about = "Generate per-entity narrative JSON files for the static deployment", long_about = None)]
#[command(version)]
struct Args {
    /// Directory the `{id}.json` files are written to.
    #[arg(long, default_value = "./public/data")]
    out_dir: PathBuf,

    /// Regenerate files that already exist.
    #[arg(long)]
    force: bool,

    /// Path to .env file (optional).
    #[arg(long, env = "DOTENV_PATH", default_value = ".env")]
    dotenv: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if std::path::Path::new(&args.dotenv).exists() {
        dotenvy::from_path(&args.dotenv)?;
        eprintln!("Loaded environment from {}", args.dotenv);
    }

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let api_key = config
        .gemini_api_key
        .clone()
        .ok_or_else(|| anyhow::anyhow!("GEMINI_API_KEY is required to generate narratives"))?;

    let provider = GeminiClient::new(api_key, config.gemini_model.clone(), config.provider_timeout)?;
    let entries = catalog::all();

    println!("Static Narrative Generation");
    println!("===========================");
    println!("Output:   {}", args.out_dir.display());
    println!("Entities: {}", entries.len());
    println!();

    let report = staticgen::generate(&provider, &entries, &args.out_dir, args.force).await?;

    println!();
    println!("Summary");
    println!("-------");
    println!("Generated: {}", report.generated.len());
    println!("Skipped:   {}", report.skipped.len());
    println!("Failed:    {}", report.failed.len());
    for id in &report.failed {
        println!("  - {id}");
    }

    Ok(())
}
