//! Centralized error handling for folio
//!
//! This module provides a unified error handling approach using:
//! - `thiserror` for library-style errors with proper error types
//! - `anyhow` for application-level error handling with context
//!
//! # Usage
//!
//! ```rust,ignore
//! use folio_core::utils::error::{FolioResult, ResultExt};
//!
//! fn read(path: &str) -> FolioResult<String> {
//!     std::fs::read_to_string(path).with_file_context(path)
//! }
//! ```

use crate::form::FormField;
use thiserror::Error;

/// Core errors that can occur in folio
#[derive(Error, Debug)]
pub enum FolioError {
    /// One or more form fields were empty
    #[error("Validation failed: {}", FormField::join_labels(fields))]
    Validation { fields: Vec<FormField> },

    /// The primary relay send failed or returned a non-success status
    #[error("Remote send failed: {0}")]
    RemoteSend(#[source] RelayError),

    /// The auto-reply send failed (diagnostic only)
    #[error("Auto-reply failed: {0}")]
    AutoReply(#[source] RelayError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Opening the mail client failed
    #[error("Could not open {url}: {message}")]
    Launch { url: String, message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors reported by an email-relay collaborator
#[derive(Error, Debug)]
pub enum RelayError {
    /// The relay answered with something other than 200
    #[error("Relay returned status {status_code}: {message}")]
    UnexpectedStatus { status_code: u16, message: String },

    /// Network/HTTP errors
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The relay rejected the request before sending
    #[error("Relay rejected request: {0}")]
    Rejected(String),

    /// Relay is not configured
    #[error("Relay not configured: {0}")]
    NotConfigured(String),
}

impl RelayError {
    /// Build an error from a status the relay returned
    pub fn from_status(status_code: u16, message: impl Into<String>) -> Self {
        RelayError::UnexpectedStatus {
            status_code,
            message: message.into(),
        }
    }

    /// Status code carried by the error, if the relay answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RelayError::UnexpectedStatus { status_code, .. } => Some(*status_code),
            RelayError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<RelayError> for FolioError {
    fn from(err: RelayError) -> Self {
        FolioError::RemoteSend(err)
    }
}

/// Result type alias for folio operations
pub type FolioResult<T> = anyhow::Result<T>;

/// Extension trait for adding folio-specific context to errors
pub trait ResultExt<T> {
    /// Add file operation context to an error
    fn with_file_context(self, path: &str) -> FolioResult<T>;

    /// Add configuration context to an error
    fn with_config_context(self, setting: &str) -> FolioResult<T>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ResultExt<T> for Result<T, E> {
    fn with_file_context(self, path: &str) -> FolioResult<T> {
        use anyhow::Context;
        self.map_err(|e| anyhow::anyhow!(e))
            .with_context(|| format!("File operation failed: {}", path))
    }

    fn with_config_context(self, setting: &str) -> FolioResult<T> {
        use anyhow::Context;
        self.map_err(|e| anyhow::anyhow!(e))
            .with_context(|| format!("Configuration error for: {}", setting))
    }
}
