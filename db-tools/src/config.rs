//! Configuration for the database utilities
//!
//! Handles environment variable parsing. The connection string is treated as
//! an opaque URL; anything malformed surfaces as a connection failure later.

use anyhow::Result;
use common::ConfigExt;

/// Configuration for a single database utility invocation
pub struct Config {
    pub database_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Fails fast when `DATABASE_URL` is absent, before any connection is
    /// attempted.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database_url: String::env_required("DATABASE_URL")?,
        })
    }
}
