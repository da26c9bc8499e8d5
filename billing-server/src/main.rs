//! Billing module web scaffold
//!
//! Skeleton only: request logging, permissive CORS, static file serving
//! from `public`, and a health endpoint. JSON and url-encoded bodies are
//! parsed by the framework's extractors when routes grow handlers; no
//! billing routes exist yet.

mod config;

use anyhow::{Context, Result};
use axum::extract::Request;
use axum::http::Method;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use common::{init_logging, load_dotenv};
use config::Config;
use serde::Serialize;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::info;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    module: &'static str,
    version: &'static str,
    timestamp: String,
}

async fn health() -> Json<HealthPayload> {
    Json(HealthPayload {
        status: "OK",
        module: "billing",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// One log line per inbound request, method and path, before the handler
/// runs. The subscriber supplies the timestamp prefix.
async fn log_requests(request: Request, next: Next) -> Response {
    info!("{}", request_line(request.method(), request.uri().path()));
    next.run(request).await
}

fn request_line(method: &Method, path: &str) -> String {
    format!("{} {}", method, path)
}

fn app(config: &Config) -> Router {
    Router::new()
        .route("/health", get(health))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(middleware::from_fn(log_requests))
        .layer(CorsLayer::permissive())
}

#[tokio::main]
async fn main() -> Result<()> {
    let _guard = init_logging("billing-server");
    load_dotenv();

    let config = Config::from_env();
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!(port = config.port, static_dir = %config.static_dir, "Billing module scaffold starting");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind listen port")?;

    axum::serve(listener, app(&config))
        .await
        .context("Server failed")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_the_module() {
        let Json(payload) = health().await;
        assert_eq!(payload.status, "OK");
        assert_eq!(payload.module, "billing");
        assert!(!payload.timestamp.is_empty());
    }

    #[test]
    fn request_line_carries_method_and_path() {
        assert_eq!(request_line(&Method::GET, "/x"), "GET /x");
        assert_eq!(request_line(&Method::POST, "/webhook"), "POST /webhook");
    }

    #[test]
    fn router_builds_with_defaults() {
        let config = Config {
            port: config::DEFAULT_PORT,
            static_dir: "public".to_string(),
        };
        let _ = app(&config);
    }
}
