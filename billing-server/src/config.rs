//! Configuration for the billing module scaffold

use common::ConfigExt;

/// Listen port when `PORT` is not set. The main application owns 3000;
/// this module runs beside it.
pub const DEFAULT_PORT: u16 = 3001;

pub struct Config {
    pub port: u16,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: u16::env_parse("PORT", DEFAULT_PORT),
            static_dir: String::env_or("STATIC_DIR", "public"),
        }
    }
}
