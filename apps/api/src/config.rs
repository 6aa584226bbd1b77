use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration loaded from environment variables.
/// Every variable is optional — the service runs with defaults out of the box.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Path of the JSON session file standing in for browser local storage.
    pub session_store_path: PathBuf,
    /// Artificial delay applied by the mock stores to mimic network latency.
    pub mock_latency: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let latency_ms = std::env::var("MOCK_LATENCY_MS")
            .unwrap_or_else(|_| "500".to_string())
            .parse::<u64>()
            .context("MOCK_LATENCY_MS must be a number of milliseconds")?;

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            session_store_path: std::env::var("SESSION_STORE_PATH")
                .unwrap_or_else(|_| ".hirehelp_session.json".to_string())
                .into(),
            mock_latency: Duration::from_millis(latency_ms),
        })
    }
}
