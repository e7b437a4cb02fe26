//! Startup configuration, read once.
//!
//! The API credential comes from `PERENUAL_API_KEY`; the optional
//! `catalog.ron` in the working directory may override the endpoint and the
//! minimum loading time.

use std::fs;
use std::path::Path;
use std::time::Duration;

use catalog_engine::{EngineSettings, DEFAULT_BASE_URL, DEFAULT_MIN_LOADING};
use catalog_logging::catalog_info;
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILENAME: &str = "catalog.ron";
pub const API_KEY_VAR: &str = "PERENUAL_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
struct FileConfig {
    base_url: Option<String>,
    min_loading_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_url: String,
    pub api_key: String,
    pub min_loading: Duration,
}

impl AppConfig {
    fn from_parts(file: FileConfig, api_key: String) -> Self {
        Self {
            base_url: file
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key,
            min_loading: file
                .min_loading_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_MIN_LOADING),
        }
    }

    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            min_loading: self.min_loading,
        }
    }
}

/// Load configuration. A missing file means defaults; a missing key is sent
/// as-is and rejected upstream.
pub fn load(path: &Path) -> Result<AppConfig, ConfigError> {
    let file = read_file_config(path)?;
    let api_key = std::env::var(API_KEY_VAR).unwrap_or_default();
    let config = AppConfig::from_parts(file, api_key);
    catalog_info!(
        "Config: base_url={} min_loading={:?} key_set={}",
        config.base_url,
        config.min_loading,
        !config.api_key.is_empty()
    );
    Ok(config)
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(FileConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.display().to_string(),
                source,
            });
        }
    };
    ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.display().to_string(),
        reason: err.to_string(),
    })
}
