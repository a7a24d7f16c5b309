//! Error handling for content loading operations.
//!
//! Provides error types with context for source resolution, network
//! retrieval and configuration failures. CSV parsing itself never fails.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV source not found at path: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("Invalid source '{source_spec}': {reason}")]
    InvalidSource { source_spec: String, reason: String },

    #[error("Fetching {url} failed after {attempts} attempts: {reason}")]
    FetchFailed {
        url: String,
        attempts: u32,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Interrupted: {reason}")]
    Interrupted { reason: String },
}

impl SiteError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an interruption error
    pub fn interrupted(reason: impl Into<String>) -> Self {
        Self::Interrupted {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
