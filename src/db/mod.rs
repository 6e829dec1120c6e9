/// Database access layer
///
/// This module provides:
/// - Connection pool construction
/// - The posts repository
pub mod post_repo;

use crate::config::DatabaseConfig;
use anyhow::Context;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use std::str::FromStr;
use std::time::Duration;

/// Create the PostgreSQL connection pool.
///
/// `LOCAL` deployments use a plain-text connection; otherwise TLS is required
/// but the server certificate is not verified against a CA.
pub async fn create_pool(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let ssl_mode = if config.local {
        PgSslMode::Disable
    } else {
        PgSslMode::Require
    };

    let connect_options = PgConnectOptions::from_str(&config.url)
        .context("Failed to parse DATABASE_URL")?
        .ssl_mode(ssl_mode);

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(connect_options)
        .await
        .context("Failed to connect to database")?;

    // Verify database connection
    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .context("Failed to verify database connection")?;

    tracing::info!(
        max_connections = config.max_connections,
        local = config.local,
        "database pool created"
    );

    Ok(pool)
}
