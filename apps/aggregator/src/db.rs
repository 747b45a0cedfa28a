use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates the PostgreSQL connection pool for a run. The sink writes one
/// sequential transaction, so a couple of connections cover the whole batch;
/// the pool exists for reconnect handling, not concurrency.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(database_url)
        .await?;

    info!("PostgreSQL pool ready for batch write");
    Ok(pool)
}
