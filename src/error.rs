// src/error.rs
//! Application error types with structured error handling.
//!
//! Only failures that abort an invocation live here. The flows treat
//! transport errors, unexpected statuses, malformed lookup payloads and
//! a blocked browser as diagnostics (logged, never surfaced), so those
//! variants are produced by the API layer and absorbed before they
//! reach the user.

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Recording service answered HTTP {status}: {body_preview}")]
    RecorderService {
        status: reqwest::StatusCode,
        body_preview: String,
    },

    #[error("Hosting provider answered an unexpected HTTP {status}")]
    HostingService { status: reqwest::StatusCode },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error interacting with clipboard: {0}")]
    Clipboard(String),

    #[error("Error launching the browser: {0}")]
    Browser(String),

    #[error("Cannot read notebook at {path}: {source}")]
    NotebookUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Notebook at {path} is not well-formed JSON: {source}")]
    NotebookNotJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),

    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AppError {
    /// Whether this error belongs to the log-only taxonomy of the two
    /// flows (transport, unexpected status, malformed payload, browser).
    /// Everything else aborts the invocation.
    pub fn is_diagnostic(&self) -> bool {
        matches!(
            self,
            AppError::NetworkFailure(_)
                | AppError::RecorderService { .. }
                | AppError::HostingService { .. }
                | AppError::MalformedResponse(_)
                | AppError::Browser(_)
        )
    }
}

// Allow converting from anyhow::Error at the binary boundary,
// preserving the message.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal {
            message: err.to_string(),
            source: None,
        }
    }
}

impl From<arboard::Error> for AppError {
    fn from(err: arboard::Error) -> Self {
        AppError::Clipboard(format!("Clipboard error: {}", err))
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
