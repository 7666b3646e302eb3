// src/actions/share.rs
//! Link-issuance flow: record the notebook, compose a viewer link,
//! hand it to the user.

use super::ShareOutcome;
use crate::api::LinkRecorder;
use crate::config::ToolbarConfig;
use crate::constants::LINK_COPIED_NOTICE;
use crate::error::AppError;
use crate::links::viewer_link;
use crate::output::{DeliveryTarget, OutputPlan, OutputReport};
use crate::pipeline::Delivery;
use crate::types::NotebookState;

/// Records the notebook and delivers the resulting viewer link.
///
/// A recording failure ends the flow without any user-visible output.
/// The user keeps whatever their clipboard held, the failure goes to
/// the log, and the process still counts as a normal run.
pub async fn issue_link(
    recorder: &dyn LinkRecorder,
    delivery: &dyn Delivery,
    config: &ToolbarConfig,
    state: &NotebookState,
) -> Result<ShareOutcome, AppError> {
    let identifier = match recorder.record(&state.snapshot).await {
        Ok(identifier) => identifier,
        Err(e) => {
            log::error!("Recording {} failed, no link issued: {}", state.path, e);
            return Ok(ShareOutcome {
                link: None,
                report: OutputReport::new(),
            });
        }
    };
    log::info!("Recorded {} as identifier {}", state.path, identifier);

    let link = viewer_link(
        &config.viewer_base,
        &config.viewer_content_base,
        &identifier,
    );

    let plan = if config.pipe {
        OutputPlan::new().with_operation(DeliveryTarget::PrintToStdout {
            content: format!("{}\n", link.as_str()),
        })
    } else {
        OutputPlan::new()
            .with_operation(DeliveryTarget::CopyToClipboard {
                content: link.as_str().to_string(),
            })
            .with_operation(DeliveryTarget::Notify {
                message: LINK_COPIED_NOTICE.to_string(),
            })
    };

    let report = delivery.deliver(plan)?;
    Ok(ShareOutcome {
        link: Some(link),
        report,
    })
}
