//! Environment variable parsing helpers
//!
//! Provides ergonomic helpers for reading configuration from environment
//! variables. Configuration is collected once at process start into a
//! per-component `Config` struct; business logic never reads the ambient
//! environment directly.

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Load a `.env` file from the working directory, if one exists.
///
/// A missing file is not an error; an unreadable one is logged and ignored.
/// Call this before `Config::from_env()` so local overrides are visible.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!(error = %err, "Failed to load .env file"),
    }
}

/// Extension trait for parsing environment variables.
///
/// Provides convenient methods for reading env vars with defaults, required
/// values, and type parsing.
pub trait ConfigExt {
    /// Get an environment variable with a default value.
    ///
    /// # Example
    /// ```ignore
    /// let schema = String::env_or("DB_SCHEMA", "public");
    /// ```
    fn env_or(name: &str, default: &str) -> String {
        env::var(name).unwrap_or_else(|_| default.to_string())
    }

    /// Get a required environment variable, returning an error if not set.
    ///
    /// # Example
    /// ```ignore
    /// let db_url = String::env_required("DATABASE_URL")?;
    /// ```
    fn env_required(name: &str) -> Result<String> {
        env::var(name).context(format!("{} must be set", name))
    }

    /// Get an environment variable as a boolean.
    ///
    /// Returns `true` if the value is "true" (case-insensitive), otherwise `default`.
    fn env_bool(name: &str, default: bool) -> bool {
        env::var(name)
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(default)
    }

    /// Get an environment variable parsed as a specific type.
    ///
    /// Returns `default` if the variable is not set or fails to parse.
    ///
    /// # Example
    /// ```ignore
    /// let port: u16 = u16::env_parse("PORT", 3001);
    /// ```
    fn env_parse<T: FromStr>(name: &str, default: T) -> T {
        env::var(name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}

// Blanket implementation for all types
impl<T> ConfigExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable name so they stay independent under
    // the parallel test runner.

    #[test]
    fn env_or_falls_back_to_default() {
        assert_eq!(
            String::env_or("FISCAL_OPS_TEST_ABSENT_OR", "fallback"),
            "fallback"
        );
    }

    #[test]
    fn env_or_prefers_set_value() {
        env::set_var("FISCAL_OPS_TEST_SET_OR", "configured");
        assert_eq!(
            String::env_or("FISCAL_OPS_TEST_SET_OR", "fallback"),
            "configured"
        );
    }

    #[test]
    fn env_required_reports_missing_variable() {
        let err = String::env_required("FISCAL_OPS_TEST_ABSENT_REQUIRED").unwrap_err();
        assert!(err
            .to_string()
            .contains("FISCAL_OPS_TEST_ABSENT_REQUIRED must be set"));
    }

    #[test]
    fn env_parse_handles_garbage() {
        env::set_var("FISCAL_OPS_TEST_GARBAGE_PORT", "not-a-number");
        assert_eq!(u16::env_parse("FISCAL_OPS_TEST_GARBAGE_PORT", 3001), 3001);
    }

    #[test]
    fn env_parse_reads_numeric_value() {
        env::set_var("FISCAL_OPS_TEST_NUMERIC_PORT", "8080");
        assert_eq!(u16::env_parse("FISCAL_OPS_TEST_NUMERIC_PORT", 3001), 8080);
    }

    #[test]
    fn env_bool_is_case_insensitive() {
        env::set_var("FISCAL_OPS_TEST_BOOL", "TRUE");
        assert!(bool::env_bool("FISCAL_OPS_TEST_BOOL", false));
        assert!(!bool::env_bool("FISCAL_OPS_TEST_BOOL_ABSENT", false));
    }
}
