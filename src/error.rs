use std::path::PathBuf;

use thiserror::Error;

use crate::api::ApiError;

/// Custom error types for vidscout
#[derive(Debug, Error)]
pub enum VidscoutError {
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Invalid config file {}: {message}", .path.display())]
    InvalidConfig { path: PathBuf, message: String },

    #[error("Invalid API base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VidscoutError {
    /// Attach the configured URL to an API client construction failure
    pub fn from_client(url: &str, error: ApiError) -> Self {
        match error {
            ApiError::InvalidUrl(message) => Self::InvalidBaseUrl {
                url: url.to_string(),
                message,
            },
            other => Self::Api(other),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
