// src/lib.rs
//! nbshare library — shares Jupyter notebooks through a recording
//! service and stages them for publication in a content repository.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `ValidationError`
//! - **Configuration** — `ToolbarConfig`, `ProbeVariant`
//! - **Domain types** — `NotebookSnapshot`, `NotebookPath`, `IssuedIdentifier`, etc.
//! - **API clients** — `RecorderClient`, `HostingProbe`, `ProxiedProbe`
//! - **Link derivation** — `viewer_link`, `destination_for`
//! - **Flows** — `issue_link`, `stage_publish`

// Internal modules — must match what's in main.rs
mod actions;
mod api;
mod config;
mod constants;
mod error;
mod links;
mod output;
mod pipeline;
mod types;
mod workspace;

// --- Error Handling ---
pub use crate::error::{AppError, Result};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{
    CommandLineInput, ProbeVariant, ToolbarAction, ToolbarCommand, ToolbarConfig,
};

// --- Domain Types ---
pub use crate::types::{
    AccessToken, IssuedIdentifier, NotebookPath, NotebookSnapshot, NotebookState, ServiceEndpoint,
    ViewerLink,
};

// --- API Clients ---
pub use crate::api::{
    extract_response_text, responses::LookupPayload, ApiResponse, ExistenceProbe, HostingProbe,
    LinkRecorder, ProxiedProbe, RecorderClient,
};

// --- Link Derivation ---
pub use crate::links::{destination_for, repo_file_path, viewer_link, Destination};

// --- Output ---
pub use crate::output::{
    copy_to_clipboard, deliver, open_in_browser, CompletedOperation, DeliveryTarget,
    ExecutionStats, FailedOperation, OutputPlan, OutputReport, SystemDelivery,
};

// --- Pipeline Traits ---
pub use crate::pipeline::{Delivery, SnapshotSource};

// --- Flows ---
pub use crate::actions::{issue_link, stage_publish, PublishOutcome, ShareOutcome};

// --- Workspace ---
pub use crate::workspace::{logical_path, NotebookFile};
