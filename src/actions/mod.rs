// src/actions/mod.rs
//! The two toolbar flows: issuing a shareable link and staging a publish.
//!
//! Each flow asks exactly one question of a remote service, derives a
//! URL from the answer, and describes its side effects as an output
//! plan. All remote and system access goes through the capability
//! traits, so the flows themselves stay testable end to end.

mod publish;
mod share;

use crate::links::Destination;
use crate::output::OutputReport;
use crate::types::ViewerLink;

pub use publish::stage_publish;
pub use share::issue_link;

/// What the link-issuance flow produced.
///
/// `link` is `None` when the recording service declined or never
/// answered. That outcome is deliberately quiet: nothing was copied,
/// nothing is shown, the details are in the log.
#[derive(Debug)]
pub struct ShareOutcome {
    pub link: Option<ViewerLink>,
    pub report: OutputReport,
}

impl ShareOutcome {
    /// Whether a link was issued and every planned side effect landed.
    pub fn is_complete(&self) -> bool {
        self.link.is_some() && self.report.is_success()
    }
}

/// What the publish-staging flow produced.
#[derive(Debug)]
pub struct PublishOutcome {
    pub destination: Destination,
    pub report: OutputReport,
}

impl PublishOutcome {
    pub fn is_complete(&self) -> bool {
        self.report.is_success()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::error::AppError;
    use crate::output::{CompletedOperation, OutputPlan, OutputReport};
    use crate::pipeline::Delivery;
    use std::sync::Mutex;

    /// Delivery stub that records plans instead of executing them.
    pub struct RecordingDelivery {
        plans: Mutex<Vec<OutputPlan>>,
    }

    impl RecordingDelivery {
        pub fn new() -> Self {
            Self {
                plans: Mutex::new(Vec::new()),
            }
        }

        pub fn delivered(&self) -> Vec<OutputPlan> {
            self.plans
                .lock()
                .expect("plans lock should not be poisoned")
                .clone()
        }
    }

    impl Delivery for RecordingDelivery {
        fn deliver(&self, plan: OutputPlan) -> Result<OutputReport, AppError> {
            let report = plan.operations.iter().fold(OutputReport::new(), |r, op| {
                r.with_completed(CompletedOperation {
                    operation: op.clone(),
                    bytes_delivered: 0,
                    duration_ms: 0,
                })
            });
            self.plans
                .lock()
                .expect("plans lock should not be poisoned")
                .push(plan);
            Ok(report)
        }
    }
}
