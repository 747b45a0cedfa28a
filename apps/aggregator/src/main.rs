mod aggregate;
mod config;
mod db;
mod errors;
mod export;
mod extract;
mod ingest;
mod models;
mod pipeline;
mod sink;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Args, Config};
use crate::db::create_pool;
use crate::sink::{PgSink, Sink};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = if args.dry_run {
        Config::from_env_offline()
    } else {
        Config::from_env()?
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting jobmarket aggregation v{} (industry: {})",
        env!("CARGO_PKG_VERSION"),
        args.industry
    );

    let pg_sink = if args.dry_run {
        None
    } else {
        let pool = create_pool(&config.database_url).await?;
        Some(PgSink::new(pool).await?)
    };
    let sink = pg_sink.as_ref().map(|s| s as &dyn Sink);

    let snapshot = pipeline::run(&args, sink).await?;

    info!(
        "Run complete: {} roles, {} skills, {} companies, {} postings, {} salary cohorts",
        snapshot.roles.len(),
        snapshot.skills.len(),
        snapshot.companies.len(),
        snapshot.job_postings.len(),
        snapshot.salary_analysis.len()
    );
    Ok(())
}
