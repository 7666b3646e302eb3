// src/output/mod.rs
//! Output handling with clear separation of planning and execution.
//!
//! Flows build an [`OutputPlan`] describing what should reach the user,
//! then hand it to a [`crate::pipeline::Delivery`] implementation. The
//! plan is data; the execution lives behind the seam.

mod browser;
mod clipboard;
mod types;
mod writer;

use crate::error::AppError;
use crate::pipeline::Delivery;

// Re-export the public interface
pub use browser::open_in_browser;
pub use clipboard::copy_to_clipboard;
pub use types::{
    CompletedOperation, DeliveryTarget, ExecutionStats, FailedOperation, OutputPlan, OutputReport,
};
pub use writer::deliver;

/// Executes plans against the real system: clipboard, terminal, browser.
pub struct SystemDelivery;

impl Delivery for SystemDelivery {
    fn deliver(&self, plan: OutputPlan) -> Result<OutputReport, AppError> {
        deliver(plan)
    }
}
