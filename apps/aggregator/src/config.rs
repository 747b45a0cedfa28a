use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// CLI surface of the aggregation run. One invocation = one full rebuild of
/// every output collection from the given source files.
#[derive(Debug, Clone, Parser)]
#[command(name = "jobmarket-aggregate", version, about = "Aggregate scraped job postings into market intelligence collections")]
pub struct Args {
    /// Path to the LinkedIn jobs CSV.
    #[arg(long, default_value = "data/linkedin_jobs.csv")]
    pub linkedin: PathBuf,

    /// Path to the Glassdoor jobs CSV.
    #[arg(long, default_value = "data/glassdoor_jobs.csv")]
    pub glassdoor: PathBuf,

    /// Industry label applied to postings without a source-provided industry.
    #[arg(long, default_value = "Tech")]
    pub industry: String,

    /// Directory for derived CSV artifacts.
    #[arg(long, default_value = "out")]
    pub out_dir: PathBuf,

    /// Skip writing derived CSV artifacts.
    #[arg(long)]
    pub skip_export: bool,

    /// Run extraction and aggregation without touching the database.
    #[arg(long)]
    pub dry_run: bool,
}

/// Environment-sourced configuration. The database URL is only required
/// when the run actually writes to the sink.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Variant for `--dry-run`, where no database connection is made.
    pub fn from_env_offline() -> Self {
        dotenvy::dotenv().ok();
        Config {
            database_url: std::env::var("DATABASE_URL").unwrap_or_default(),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
