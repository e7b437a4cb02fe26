use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

use crate::{DEFAULT_BASE_URL, DEFAULT_MIN_LOADING};

pub type RequestToken = u64;

pub const LIST_FAILURE_MESSAGE: &str = "Failed to load plants";
pub const DETAIL_FAILURE_MESSAGE: &str = "Failed to load plant details";

/// The only failure the remote source reports. The message is meant for
/// display and deliberately carries no status code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid base url {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("http client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub base_url: String,
    pub api_key: String,
    /// Floor on how long a fetch appears to take.
    pub min_loading: Duration,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            min_loading: DEFAULT_MIN_LOADING,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    PageFetched {
        token: RequestToken,
        result: Result<Value, FetchError>,
    },
    DetailFetched {
        token: RequestToken,
        result: Result<Value, FetchError>,
    },
}
