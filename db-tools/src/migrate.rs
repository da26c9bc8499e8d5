//! Forward-only schema migration
//!
//! A single idempotent DDL statement. There is no transaction wrapper, no
//! rollback, and no migration-history table: success is the absence of an
//! error, and re-running is safe because the statement uses
//! `ADD COLUMN IF NOT EXISTS`.

use anyhow::{Context, Result};
use sqlx::PgPool;

/// Adds the consultation validity and receipt columns to `api_consultas`.
pub const ADD_CONSULTA_COLUMNS_SQL: &str = "\
ALTER TABLE public.api_consultas \
  ADD COLUMN IF NOT EXISTS \"validadeFim\" timestamp, \
  ADD COLUMN IF NOT EXISTS \"siteReceipt\" text";

/// Confirmation line printed after a successful run.
pub const MIGRATION_CONFIRMATION: &str =
    "Migration applied successfully: columns validadeFim and siteReceipt added to api_consultas";

/// Apply the migration. Safe to run any number of times.
pub async fn add_consulta_columns(pool: &PgPool) -> Result<()> {
    sqlx::query(ADD_CONSULTA_COLUMNS_SQL)
        .execute(pool)
        .await
        .context("Migration failed")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ddl_is_idempotent_for_both_columns() {
        let occurrences = ADD_CONSULTA_COLUMNS_SQL
            .matches("ADD COLUMN IF NOT EXISTS")
            .count();
        assert_eq!(occurrences, 2);
    }

    #[test]
    fn ddl_targets_the_consultas_table() {
        assert!(ADD_CONSULTA_COLUMNS_SQL.starts_with("ALTER TABLE public.api_consultas"));
        assert!(ADD_CONSULTA_COLUMNS_SQL.contains("\"validadeFim\" timestamp"));
        assert!(ADD_CONSULTA_COLUMNS_SQL.contains("\"siteReceipt\" text"));
    }
}
