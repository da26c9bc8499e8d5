//! Data listing for the application tables
//!
//! Prints every row of `companies` and `users` as columnar tables.

use anyhow::Result;
use common::{init_logging, load_dotenv};
use db_tools::listing;
use db_tools::{print_table, with_pool, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let _guard = init_logging("list-data");
    load_dotenv();

    let config = Config::from_env()?;

    with_pool(&config, |pool| async move {
        let companies = listing::list_companies(&pool).await?;
        println!("--- Data: public.companies ---");
        print_table(&companies);

        let users = listing::list_users(&pool).await?;
        println!("--- Data: public.users ---");
        print_table(&users);

        Ok(())
    })
    .await
}
