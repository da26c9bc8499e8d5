//! Database inspection and migration utilities
//!
//! This crate generalizes the one-shot database script pattern shared by the
//! fiscal-ops binaries: load configuration from the environment, open a
//! scoped connection pool, run one or more fixed statements, render the
//! result to stdout, and release the pool on every exit path.

pub mod config;
pub mod db;
pub mod env_report;
pub mod inspect;
pub mod listing;
pub mod migrate;
pub mod report;

pub use config::Config;
pub use db::{connect, with_pool};
pub use report::{print_json, print_table, Tabular};
