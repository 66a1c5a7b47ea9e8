//! Cache warm-up driver.
//!
//! Walks the full catalog and resolves every entity through a running
//! dossier-serve instance, so the narrative cache is populated before live
//! traffic arrives.
//!
//! # Usage
//!
//! ```bash
//! # Warm the local dev server with the default pacing
//! dossier-warmup
//!
//! # Warm a deployed instance, faster pacing
//! dossier-warmup --api-url https://dossier.example.com/api/analyze --item-delay-secs 1
//! ```

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use dossier_core::catalog;
use dossier_warmup::{HttpAnalyzeClient, WarmupOptions, run};

/// Pre-populate the narrative cache through the analyze endpoint.
#[derive(Parser, Debug)]
#[command(name = "dossier-warmup")]
#[command(about = "Warm the narrative cache by resolving every catalog entity", long_about = None)]
#[command(version)]
struct Args {
    /// Full URL of the analyze endpoint.
    #[arg(long, env = "DOSSIER_API_URL", default_value = "http://localhost:3001/api/analyze")]
    api_url: String,

    /// Attempts per entity before recording a permanent failure.
    #[arg(long, default_value_t = 3)]
    attempts: u32,

    /// Seconds to wait between attempts for the same entity.
    #[arg(long, default_value_t = 5)]
    retry_delay_secs: u64,

    /// Seconds to wait between catalog entries, regardless of outcome.
    #[arg(long, default_value_t = 4)]
    item_delay_secs: u64,

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

    let options = WarmupOptions {
        attempts: args.attempts,
        retry_delay: Duration::from_secs(args.retry_delay_secs),
        item_delay: Duration::from_secs(args.item_delay_secs),
    };
    let entries = catalog::all();

    println!("Cache Warm-up");
    println!("=============");
    println!("Endpoint: {}", args.api_url);
    println!("Entities: {}", entries.len());
    println!();

    let client = HttpAnalyzeClient::new(args.api_url)?;
    let report = run(&client, &entries, &options).await;

    println!();
    println!("Summary");
    println!("-------");
    println!("Succeeded: {}", report.succeeded.len());
    println!("Failed:    {}", report.failed.len());
    for id in &report.failed {
        println!("  - {id}");
    }

    Ok(())
}
