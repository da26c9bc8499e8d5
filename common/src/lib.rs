//! Shared utilities for fiscal-ops components
//!
//! This crate provides common functionality used across all fiscal-ops components:
//! - Structured logging initialization
//! - Environment variable parsing helpers
//! - `.env` file loading

pub mod config;
pub mod logging;

pub use config::{load_dotenv, ConfigExt};
pub use logging::init_logging;
