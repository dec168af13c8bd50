use anyhow::Result;
use sqlx::postgres::PgPoolOptions;

use crate::config::DatabaseConfig;

pub type DbPool = sqlx::PgPool;

/// Create the bounded connection pool and verify connectivity.
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .max_lifetime(config.max_lifetime)
        .idle_timeout(config.idle_timeout)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "connected to database"
    );
    Ok(pool)
}

/// Apply the SQL migrations in `migrations/` that have not run yet.
pub async fn run_migrations(pool: &DbPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
