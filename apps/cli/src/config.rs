use std::path::PathBuf;

use anyhow::{Context, Result};

/// Client configuration loaded from environment variables (and `.env` when
/// present). Only the API token is required.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub token: String,
    /// Root of the local progress store (the localStorage analogue).
    pub data_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_base_url: std::env::var("CAREERGAP_API_URL")
                .unwrap_or_else(|_| "http://localhost:4001".to_string()),
            token: require_env("CAREERGAP_TOKEN")?,
            data_dir: match std::env::var("CAREERGAP_DATA_DIR") {
                Ok(dir) => PathBuf::from(dir),
                Err(_) => PathBuf::from(require_env("HOME")?).join(".careergap"),
            },
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
