//! Postgres connection management
//!
//! Provides a pooled handle with TLS required for remote endpoints and a
//! scoped acquire/use/release helper. There is no retry, no backoff, and no
//! health checking: a connection failure is fatal for the invocation.

use anyhow::{Context, Result};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};
use std::future::Future;
use std::str::FromStr;
use tracing::debug;

use crate::config::Config;

/// Open a connection pool for the given connection string.
///
/// Remote endpoints are contacted with TLS required; local ones
/// (`localhost`, loopback) are not.
pub async fn connect(database_url: &str) -> Result<PgPool> {
    let mut options =
        PgConnectOptions::from_str(database_url).context("Invalid DATABASE_URL")?;

    if !is_local_host(options.get_host()) {
        options = options.ssl_mode(PgSslMode::Require);
    }

    debug!(host = options.get_host(), "Connecting to database");

    PgPoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .context("Failed to connect to database")
}

/// Open a pool, run the operation, and close the pool on every exit path.
///
/// The operation's outcome is returned only after the pool has been
/// released, so a failed query never leaks a connection.
///
/// # Example
/// ```ignore
/// let columns = with_pool(&config, |pool| async move {
///     inspect::table_columns(&pool, "api_consultas").await
/// })
/// .await?;
/// ```
pub async fn with_pool<T, F, Fut>(config: &Config, op: F) -> Result<T>
where
    F: FnOnce(PgPool) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let pool = connect(&config.database_url).await?;
    let result = op(pool.clone()).await;
    pool.close().await;
    result
}

fn is_local_host(host: &str) -> bool {
    matches!(host, "localhost" | "127.0.0.1" | "::1")
}
