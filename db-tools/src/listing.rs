//! Application data listings
//!
//! Fixed read-only queries against the application tables. The row structs
//! mirror what each statement selects; nothing else about the schema is
//! assumed.

use anyhow::{Context, Result};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::report::Tabular;

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct CompanyRow {
    pub id: Uuid,
    pub name: String,
    pub cnpj: Option<String>,
    #[sqlx(rename = "userId")]
    #[serde(rename = "userId")]
    pub user_id: i32,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct UserRow {
    pub id: i32,
    #[sqlx(rename = "openId")]
    #[serde(rename = "openId")]
    pub open_id: String,
    pub name: Option<String>,
}

/// A company that carries certificate material.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct CertificateRow {
    pub id: Uuid,
    pub name: String,
    #[sqlx(rename = "certificatePath")]
    #[serde(rename = "certificatePath")]
    pub certificate_path: Option<String>,
    #[sqlx(rename = "certificatePasswordHash")]
    #[serde(rename = "certificatePasswordHash")]
    pub certificate_password_hash: Option<String>,
}

const LIST_COMPANIES_SQL: &str = "SELECT id, name, cnpj, \"userId\" FROM public.companies";

const LIST_USERS_SQL: &str = "SELECT id, \"openId\", name FROM public.users";

const COMPANIES_WITH_CERTIFICATES_SQL: &str = "\
SELECT id, name, \"certificatePath\", \"certificatePasswordHash\" \
FROM public.companies \
WHERE \"certificatePath\" IS NOT NULL OR \"certificatePasswordHash\" IS NOT NULL \
LIMIT 10";

pub async fn list_companies(pool: &PgPool) -> Result<Vec<CompanyRow>> {
    sqlx::query_as::<_, CompanyRow>(LIST_COMPANIES_SQL)
        .fetch_all(pool)
        .await
        .context("Failed to list companies")
}

pub async fn list_users(pool: &PgPool) -> Result<Vec<UserRow>> {
    sqlx::query_as::<_, UserRow>(LIST_USERS_SQL)
        .fetch_all(pool)
        .await
        .context("Failed to list users")
}

/// Companies with a stored certificate path or password hash, capped at 10.
pub async fn companies_with_certificates(pool: &PgPool) -> Result<Vec<CertificateRow>> {
    sqlx::query_as::<_, CertificateRow>(COMPANIES_WITH_CERTIFICATES_SQL)
        .fetch_all(pool)
        .await
        .context("Failed to list companies with certificates")
}

impl Tabular for CompanyRow {
    fn headers() -> Vec<&'static str> {
        vec!["id", "name", "cnpj", "userId"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.cnpj.clone().unwrap_or_default(),
            self.user_id.to_string(),
        ]
    }
}

impl Tabular for UserRow {
    fn headers() -> Vec<&'static str> {
        vec!["id", "openId", "name"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.open_id.clone(),
            self.name.clone().unwrap_or_default(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certificate_listing_is_filtered_and_capped() {
        assert!(COMPANIES_WITH_CERTIFICATES_SQL.contains("IS NOT NULL"));
        assert!(COMPANIES_WITH_CERTIFICATES_SQL.contains("LIMIT 10"));
    }

    #[test]
    fn company_row_serializes_with_camel_case_columns() {
        let row = CompanyRow {
            id: Uuid::nil(),
            name: "Test Company".to_string(),
            cnpj: Some("12345678000195".to_string()),
            user_id: 7,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["userId"], 7);
        assert_eq!(json["cnpj"], "12345678000195");
    }

    #[test]
    fn user_row_renders_missing_name_as_empty() {
        let row = UserRow {
            id: 1,
            open_id: "test-openid-123".to_string(),
            name: None,
        };
        assert_eq!(row.row(), vec!["1", "test-openid-123", ""]);
    }
}
