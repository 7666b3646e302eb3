// src/output/writer.rs
//! Executes output plans by performing actual side effects.
//!
//! This module is the only place where clipboard, terminal and browser
//! effects occur, keeping the rest of the codebase pure and testable.
//!
//! A failed operation is logged and recorded, never fatal: the
//! remaining operations still run, so a broken clipboard does not
//! swallow the confirmation message.

use super::browser::open_in_browser;
use super::clipboard::copy_to_clipboard;
use super::types::*;
use crate::error::AppError;
use std::io::Write;
use std::time::Instant;

/// Delivers the output plan, performing all side effects in order.
pub fn deliver(plan: OutputPlan) -> Result<OutputReport, AppError> {
    let mut report = OutputReport::new();
    let start_time = Instant::now();

    log::info!(
        "Executing output plan with {} operations",
        plan.operations.len()
    );

    for operation in plan.operations {
        let op_start = Instant::now();
        match execute_operation(&operation) {
            Ok(bytes_delivered) => {
                let duration_ms = op_start.elapsed().as_millis() as u64;
                report = report.with_completed(CompletedOperation {
                    operation,
                    bytes_delivered,
                    duration_ms,
                });
            }
            Err(e) => {
                log::error!("Operation failed: {}", e);
                report = report.with_failed(FailedOperation {
                    operation,
                    error: e.to_string(),
                });
            }
        }
    }

    report.stats.total_duration_ms = start_time.elapsed().as_millis() as u64;

    log::info!(
        "Output plan execution complete: {} succeeded, {} failed in {}ms",
        report.stats.operations_completed,
        report.stats.operations_failed,
        report.stats.total_duration_ms
    );

    Ok(report)
}

/// Executes a single output operation.
fn execute_operation(operation: &DeliveryTarget) -> Result<usize, AppError> {
    match operation {
        DeliveryTarget::CopyToClipboard { content } => {
            copy_to_clipboard(content)?;
            Ok(content.len())
        }
        DeliveryTarget::Notify { message } => {
            println!("{}", message);
            Ok(message.len())
        }
        DeliveryTarget::OpenBrowser { url } => {
            open_in_browser(url)?;
            Ok(0)
        }
        DeliveryTarget::PrintToStdout { content } => {
            print_to_stdout(content)?;
            Ok(content.len())
        }
    }
}

/// Prints content to stdout.
fn print_to_stdout(content: &str) -> Result<(), AppError> {
    print!("{}", content);
    std::io::stdout().flush()?;
    Ok(())
}
