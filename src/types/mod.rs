// src/types/mod.rs
//! Validated domain newtypes and the validation error vocabulary.

use thiserror::Error;

mod domain_types;
mod notebook;

pub use domain_types::*;
pub use notebook::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid notebook path: {path} - {reason}")]
    InvalidNotebookPath { path: String, reason: String },

    #[error("Invalid endpoint URL: {url} - {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Invalid credential: {reason}")]
    InvalidCredential { reason: String },

    #[error("Invalid repository component: {value} - {reason}")]
    InvalidRepoComponent { value: String, reason: String },

    #[error("Unknown existence-check variant: {value} (expected 'direct' or 'proxy')")]
    UnknownProbeVariant { value: String },
}
