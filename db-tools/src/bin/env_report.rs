//! Environment diagnostics
//!
//! Prints which configuration this process can see, with secrets masked.
//! Needs no database connection.

use anyhow::Result;
use common::{init_logging, load_dotenv};
use db_tools::env_report::EnvReport;

fn main() -> Result<()> {
    let _guard = init_logging("env-report");
    load_dotenv();

    let report = EnvReport::collect();

    println!("--- ENV REPORT ---");
    for line in report.lines() {
        println!("{}", line);
    }
    println!("------------------");

    Ok(())
}
