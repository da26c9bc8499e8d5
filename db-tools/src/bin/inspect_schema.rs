//! Schema inspection for the consultation tables
//!
//! Chains three introspection queries: the `api_consultas` column list
//! (printed as JSON, the shape downstream tooling consumes), the
//! `companies`/`users` column lists, and the unique constraints declared on
//! `companies`.

use anyhow::Result;
use common::{init_logging, load_dotenv};
use db_tools::inspect;
use db_tools::{print_json, print_table, with_pool, Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _guard = init_logging("inspect-schema");
    load_dotenv();

    let config = Config::from_env()?;

    with_pool(&config, |pool| async move {
        let consulta_columns = inspect::table_columns(&pool, "api_consultas").await?;
        info!(
            columns = consulta_columns.len(),
            "Columns in api_consultas"
        );
        print_json(&consulta_columns)?;

        for table in ["companies", "users"] {
            let columns = inspect::table_columns(&pool, table).await?;
            println!("--- Schema: public.{} ---", table);
            print_table(&columns);
        }

        let constraints = inspect::unique_constraints(&pool, "companies").await?;
        println!("--- Unique constraints on public.companies ---");
        print_table(&constraints);

        Ok(())
    })
    .await
}
