// src/output/types.rs
//! Type definitions for output operations.
//!
//! Flows describe their side effects as immutable plans. Execution is a
//! separate phase, so a failing clipboard never stops a notification
//! and tests can inspect plans without touching the system.

/// Represents a complete output plan.
#[derive(Debug, Clone, Default)]
pub struct OutputPlan {
    /// List of operations to perform, in order
    pub operations: Vec<DeliveryTarget>,
}

impl OutputPlan {
    /// Creates a new empty output plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an operation to the plan.
    pub fn with_operation(mut self, operation: DeliveryTarget) -> Self {
        self.operations.push(operation);
        self
    }
}

/// Represents a single output operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryTarget {
    /// Copy content to the system clipboard
    CopyToClipboard { content: String },
    /// Show the user a confirmation message
    Notify { message: String },
    /// Open a URL in the default browser
    OpenBrowser { url: String },
    /// Print to stdout (pipe mode)
    PrintToStdout { content: String },
}

/// Result of executing an output plan.
#[derive(Debug, Clone)]
pub struct OutputReport {
    /// Successfully completed operations
    pub completed: Vec<CompletedOperation>,
    /// Failed operations with errors
    pub failed: Vec<FailedOperation>,
    /// Execution statistics
    pub stats: ExecutionStats,
}

impl Default for OutputReport {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self {
            completed: Vec::new(),
            failed: Vec::new(),
            stats: ExecutionStats::default(),
        }
    }

    /// Adds a completed operation to the report.
    pub fn with_completed(mut self, operation: CompletedOperation) -> Self {
        self.stats.operations_completed += 1;
        self.stats.bytes_delivered += operation.bytes_delivered;
        self.completed.push(operation);
        self
    }

    /// Adds a failed operation to the report.
    pub fn with_failed(mut self, operation: FailedOperation) -> Self {
        self.stats.operations_failed += 1;
        self.failed.push(operation);
        self
    }

    /// Checks if all operations succeeded.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// A successfully completed operation.
#[derive(Debug, Clone)]
pub struct CompletedOperation {
    pub operation: DeliveryTarget,
    pub bytes_delivered: usize,
    pub duration_ms: u64,
}

/// A failed operation with error information.
#[derive(Debug, Clone)]
pub struct FailedOperation {
    pub operation: DeliveryTarget,
    pub error: String,
}

/// Execution statistics.
#[derive(Debug, Clone, Default)]
pub struct ExecutionStats {
    pub operations_completed: usize,
    pub operations_failed: usize,
    pub bytes_delivered: usize,
    pub total_duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plan_preserves_operation_order() {
        let plan = OutputPlan::new()
            .with_operation(DeliveryTarget::CopyToClipboard {
                content: "first".to_string(),
            })
            .with_operation(DeliveryTarget::Notify {
                message: "second".to_string(),
            });

        assert_eq!(plan.operations.len(), 2);
        assert!(matches!(
            plan.operations[0],
            DeliveryTarget::CopyToClipboard { .. }
        ));
        assert!(matches!(plan.operations[1], DeliveryTarget::Notify { .. }));
    }

    #[test]
    fn report_tracks_mixed_outcomes() {
        let report = OutputReport::new()
            .with_completed(CompletedOperation {
                operation: DeliveryTarget::Notify {
                    message: "done".to_string(),
                },
                bytes_delivered: 4,
                duration_ms: 1,
            })
            .with_failed(FailedOperation {
                operation: DeliveryTarget::OpenBrowser {
                    url: "https://example.com".to_string(),
                },
                error: "no browser".to_string(),
            });

        assert!(!report.is_success());
        assert_eq!(report.stats.operations_completed, 1);
        assert_eq!(report.stats.operations_failed, 1);
        assert_eq!(report.stats.bytes_delivered, 4);
    }
}
