//! Offline batch tools for the dossier services.
//!
//! Two jobs, one per binary:
//! - [`driver`]: pre-populate the live narrative cache through the analyze
//!   endpoint, with bounded retries and request pacing
//! - [`staticgen`]: pre-generate per-entity `{id}.json` narrative files for
//!   the static deployment variant that runs without a backend

pub mod driver;
pub mod staticgen;

pub use self::driver::{AnalyzeClient, HttpAnalyzeClient, WarmupOptions, WarmupReport, run};
pub use self::staticgen::{StaticReport, generate};
