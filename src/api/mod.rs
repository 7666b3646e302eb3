// src/api/mod.rs
//! Remote service interaction — recording notebooks and probing repository content.
//!
//! Two capabilities live here, one per flow: the recording service that
//! issues shareable identifiers, and the existence question the publish
//! flow asks before choosing its destination.

pub mod client;
pub mod hosting;
pub mod recorder;
pub mod responses;

use crate::error::AppError;
use crate::types::{IssuedIdentifier, NotebookPath, NotebookSnapshot};

/// The ability to record a notebook snapshot in exchange for an identifier.
///
/// Business logic depends on this trait, never on HTTP details.
#[async_trait::async_trait]
pub trait LinkRecorder: Send + Sync {
    async fn record(&self, snapshot: &NotebookSnapshot) -> Result<IssuedIdentifier, AppError>;
}

/// The ability to answer whether the target repository already holds a
/// notebook at a given path.
///
/// Implementations are total: any failure on the wire collapses to
/// `false`, so the publish flow falls back to the create page rather
/// than pointing the user at an edit page that may not exist.
#[async_trait::async_trait]
pub trait ExistenceProbe: Send + Sync {
    async fn exists(&self, path: &NotebookPath) -> bool;
}

// Re-export the public interface
pub use client::{extract_response_text, ApiResponse};
pub use hosting::HostingProbe;
pub use recorder::{ProxiedProbe, RecorderClient};
