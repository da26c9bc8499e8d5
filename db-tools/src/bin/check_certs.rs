//! Certificate material check
//!
//! Lists companies carrying a certificate path or password hash, as
//! indented JSON.

use anyhow::Result;
use common::{init_logging, load_dotenv};
use db_tools::listing;
use db_tools::{print_json, with_pool, Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _guard = init_logging("check-certs");
    load_dotenv();

    let config = Config::from_env()?;

    with_pool(&config, |pool| async move {
        let rows = listing::companies_with_certificates(&pool).await?;
        info!(companies = rows.len(), "Companies with certificate material");
        print_json(&rows)
    })
    .await
}
