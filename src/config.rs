// src/config.rs

//! Scraper configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// HTTP client and fan-out behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds, applied to every outbound call
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Maximum concurrent subcategory requests per achievement fetch
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,

    /// Path to the region/data-center/server table
    #[serde(default = "defaults::data_centers_path")]
    pub data_centers_path: String,
}

impl ScraperConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::config(format!("failed to read {}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| AppError::config(format!("failed to parse {}: {e}", path.display())))
    }

    /// Load configuration or return defaults if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.user_agent.trim().is_empty() {
            return Err(AppError::config("user_agent is empty"));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config("timeout_secs must be > 0"));
        }
        if self.max_concurrent == 0 {
            return Err(AppError::config("max_concurrent must be > 0"));
        }
        if self.data_centers_path.trim().is_empty() {
            return Err(AppError::config("data_centers_path is empty"));
        }
        Ok(())
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            max_concurrent: defaults::max_concurrent(),
            data_centers_path: defaults::data_centers_path(),
        }
    }
}

mod defaults {
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; lodestone-scraper/0.1)".to_string()
    }

    pub fn timeout() -> u64 {
        10
    }

    pub fn max_concurrent() -> usize {
        8
    }

    pub fn data_centers_path() -> String {
        "data/data_centers.toml".to_string()
    }
}
