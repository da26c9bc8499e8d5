//! Forward-only migration runner for `api_consultas`
//!
//! Applies the idempotent column additions and prints a confirmation.
//! Safe to re-run; there is no migration-history bookkeeping.

use anyhow::Result;
use common::{init_logging, load_dotenv};
use db_tools::migrate::{add_consulta_columns, MIGRATION_CONFIRMATION};
use db_tools::{with_pool, Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _guard = init_logging("migrate");
    load_dotenv();

    let config = Config::from_env()?;

    info!("Running migration...");

    with_pool(&config, |pool| async move {
        add_consulta_columns(&pool).await
    })
    .await?;

    println!("{}", MIGRATION_CONFIRMATION);

    Ok(())
}
