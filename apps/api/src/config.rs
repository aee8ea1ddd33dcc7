use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Bundled fixture catalog, relative to the workspace root.
pub const DEFAULT_DATA_DIR: &str = "apps/api/data";

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    /// Maximum number of courses attached to a match response.
    pub recommendation_limit: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let recommendation_limit = std::env::var("RECOMMENDATION_LIMIT")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<usize>()
            .context("RECOMMENDATION_LIMIT must be a positive integer")?;
        if recommendation_limit == 0 {
            bail!("RECOMMENDATION_LIMIT must be at least 1");
        }

        Ok(Config {
            data_dir: std::env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR)),
            recommendation_limit,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            recommendation_limit: 5,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}
