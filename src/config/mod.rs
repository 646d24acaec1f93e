//! Configuration loading and management

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding the dataset path
pub const DATA_PATH_ENV: &str = "FUSION_MOCK_DATA_PATH";

/// Page size used when neither the configuration nor the caller gives one
pub const DEFAULT_PAGE_SIZE: i64 = 25;

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Path to the JSON dataset document
    pub data_path: PathBuf,

    /// Page size used when a list call does not specify a limit
    #[serde(default = "default_page_size")]
    pub default_page_size: i64,
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl ClientConfig {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        ClientConfig {
            data_path: data_path.into(),
            default_page_size: default_page_size(),
        }
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config.with_env_overrides())
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config.with_env_overrides())
    }

    /// Apply environment overrides ([`DATA_PATH_ENV`] wins over the file).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(path) = std::env::var(DATA_PATH_ENV) {
            self.data_path = PathBuf::from(path);
        }
        self
    }
}
