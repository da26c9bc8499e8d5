//! Configuration for the consultation probe
//!
//! Handles environment variable parsing. The token is required; the CNPJ
//! defaults to the fixture the probe has always exercised.

use anyhow::Result;
use common::ConfigExt;

/// CNPJ used when none is configured.
pub const DEFAULT_CNPJ: &str = "09157307000175";

/// Configuration for a single probe invocation
pub struct Config {
    pub api_token: String,
    pub cnpj: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_token: String::env_required("INFOSIMPLES_API_TOKEN")?,
            cnpj: String::env_or("CONSULTA_CNPJ", DEFAULT_CNPJ),
        })
    }
}
