//! Manual connectivity probe for the Infosimples PGFN consultation API
//!
//! Issues one POST with the configured token and CNPJ and prints the raw
//! JSON response. A failed call is reported, not retried; the response is
//! never validated field by field.

mod config;

use anyhow::{Context, Result};
use common::{init_logging, load_dotenv};
use config::Config;
use serde::Serialize;
use tracing::{error, info};

const PGFN_ENDPOINT: &str = "https://api.infosimples.com/api/v2/consultas/receita-federal/pgfn";

/// Request body the PGFN endpoint expects. The credential travels in the
/// body, not in a header.
#[derive(Debug, Serialize)]
struct ConsultaRequest {
    token: String,
    cnpj: String,
    preferencia_emissao: &'static str,
}

impl ConsultaRequest {
    fn new(config: &Config) -> Self {
        Self {
            token: config.api_token.clone(),
            cnpj: config.cnpj.clone(),
            preferencia_emissao: "nova",
        }
    }
}

async fn run_probe(config: &Config) -> Result<serde_json::Value> {
    let client = reqwest::Client::new();

    let response = client
        .post(PGFN_ENDPOINT)
        .json(&ConsultaRequest::new(config))
        .send()
        .await
        .context("Failed to reach consultation API")?;

    response
        .json::<serde_json::Value>()
        .await
        .context("Failed to read consultation response")
}

#[tokio::main]
async fn main() -> Result<()> {
    let _guard = init_logging("consulta-probe");
    load_dotenv();

    let config = Config::from_env()?;

    info!(cnpj = %config.cnpj, "Issuing PGFN consultation");

    // A probe failure is a finding, not a crash: report it and exit clean.
    match run_probe(&config).await {
        Ok(body) => {
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        Err(err) => {
            error!(error = %err, "Consultation failed");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_the_api_contract() {
        let config = Config {
            api_token: "tok_test".to_string(),
            cnpj: config::DEFAULT_CNPJ.to_string(),
        };
        let body = serde_json::to_value(ConsultaRequest::new(&config)).unwrap();
        assert_eq!(body["token"], "tok_test");
        assert_eq!(body["cnpj"], "09157307000175");
        assert_eq!(body["preferencia_emissao"], "nova");
    }

    #[test]
    fn endpoint_targets_the_pgfn_consultation() {
        assert_eq!(
            PGFN_ENDPOINT,
            "https://api.infosimples.com/api/v2/consultas/receita-federal/pgfn"
        );
    }
}
