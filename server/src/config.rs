//! Server configuration, read once from the environment at startup.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// Local listen port (`PORT`, default 8080).
    pub port: u16,
    /// Base URL of the TOON conversion service (`TOON_SERVICE_URL`).
    pub toon_base_url: String,
    /// Outbound request timeout for the TOON service (`TOON_TIMEOUT_SECS`).
    pub toon_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);
        let toon_base_url = std::env::var("TOON_SERVICE_URL")
            .unwrap_or_else(|_| "http://localhost:4000".to_string());
        let timeout_secs = std::env::var("TOON_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);
        Self {
            port,
            toon_base_url,
            toon_timeout: Duration::from_secs(timeout_secs),
        }
    }
}
