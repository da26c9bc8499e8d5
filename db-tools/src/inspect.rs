//! Schema introspection queries
//!
//! Reads the `information_schema` and `pg_constraint` catalogs rather than
//! application data. The casts to `text` keep the catalog's identifier
//! domains decodable as plain strings.

use anyhow::{Context, Result};
use serde::Serialize;
use sqlx::PgPool;

use crate::report::Tabular;

/// One row of `information_schema.columns` for a table.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct ColumnInfo {
    pub column_name: String,
    pub data_type: String,
    pub is_nullable: String,
    pub column_default: Option<String>,
}

/// A unique constraint with its reconstructed definition.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct UniqueConstraint {
    pub conname: String,
    pub definition: String,
}

const TABLE_COLUMNS_SQL: &str = "\
SELECT column_name::text AS column_name, \
       data_type::text AS data_type, \
       is_nullable::text AS is_nullable, \
       column_default::text AS column_default \
FROM information_schema.columns \
WHERE table_name = $1 AND table_schema = 'public' \
ORDER BY ordinal_position";

const UNIQUE_CONSTRAINTS_SQL: &str = "\
SELECT conname::text AS conname, \
       pg_get_constraintdef(c.oid) AS definition \
FROM pg_constraint c \
JOIN pg_namespace n ON n.oid = c.connamespace \
WHERE n.nspname = 'public' AND contype = 'u' AND conrelid = $1::regclass";

/// List the columns of a table in `public`, in ordinal position order.
///
/// A table with N columns yields exactly N rows; an unknown table yields
/// zero rows rather than an error.
pub async fn table_columns(pool: &PgPool, table: &str) -> Result<Vec<ColumnInfo>> {
    sqlx::query_as::<_, ColumnInfo>(TABLE_COLUMNS_SQL)
        .bind(table)
        .fetch_all(pool)
        .await
        .context(format!("Failed to read columns of {}", table))
}

/// List the unique constraints declared on a table in `public`.
pub async fn unique_constraints(pool: &PgPool, table: &str) -> Result<Vec<UniqueConstraint>> {
    sqlx::query_as::<_, UniqueConstraint>(UNIQUE_CONSTRAINTS_SQL)
        .bind(format!("public.{}", table))
        .fetch_all(pool)
        .await
        .context(format!("Failed to read constraints of {}", table))
}

impl Tabular for ColumnInfo {
    fn headers() -> Vec<&'static str> {
        vec!["column_name", "data_type", "is_nullable", "column_default"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.column_name.clone(),
            self.data_type.clone(),
            self.is_nullable.clone(),
            self.column_default.clone().unwrap_or_default(),
        ]
    }
}

impl Tabular for UniqueConstraint {
    fn headers() -> Vec<&'static str> {
        vec!["conname", "definition"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.conname.clone(), self.definition.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_query_reads_the_catalog_in_ordinal_order() {
        assert!(TABLE_COLUMNS_SQL.contains("information_schema.columns"));
        assert!(TABLE_COLUMNS_SQL.contains("column_name"));
        assert!(TABLE_COLUMNS_SQL.contains("data_type"));
        assert!(TABLE_COLUMNS_SQL.contains("ORDER BY ordinal_position"));
    }

    #[test]
    fn constraints_query_is_scoped_to_unique_constraints() {
        assert!(UNIQUE_CONSTRAINTS_SQL.contains("contype = 'u'"));
        assert!(UNIQUE_CONSTRAINTS_SQL.contains("pg_get_constraintdef"));
    }

    #[test]
    fn column_info_renders_missing_default_as_empty() {
        let info = ColumnInfo {
            column_name: "validadeFim".to_string(),
            data_type: "timestamp without time zone".to_string(),
            is_nullable: "YES".to_string(),
            column_default: None,
        };
        assert_eq!(
            info.row(),
            vec!["validadeFim", "timestamp without time zone", "YES", ""]
        );
    }
}
