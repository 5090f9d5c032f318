//! Application configuration loaded from environment variables.

use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// HTTP server bind port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path to the KEN_ALL CSV bundled with the service.
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_port() -> u16 {
    3000
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("data/utf_ken_all.csv")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.dataset_path.as_os_str().is_empty() {
            return Err("DATASET_PATH must not be empty".to_string());
        }

        Ok(())
    }
}
