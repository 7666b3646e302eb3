// src/pipeline.rs
//! Pipeline capability traits — abstract the stages both toolbar flows share.
//!
//! Each trait describes a single capability, enabling testing each stage in isolation.

use crate::error::AppError;
use crate::output::{OutputPlan, OutputReport};
use crate::types::NotebookState;

/// Captures the notebook a flow operates on.
pub trait SnapshotSource {
    fn capture(&self) -> Result<NotebookState, AppError>;
}

/// Carries a flow's results into the user's environment.
pub trait Delivery {
    fn deliver(&self, plan: OutputPlan) -> Result<OutputReport, AppError>;
}
