// src/actions/publish.rs
//! Publish-staging flow: decide between edit and create, then put the
//! notebook on the clipboard and the right page in front of the user.

use super::PublishOutcome;
use crate::api::ExistenceProbe;
use crate::config::ToolbarConfig;
use crate::constants::PUBLISH_PASTE_NOTICE;
use crate::error::AppError;
use crate::links::destination_for;
use crate::output::{DeliveryTarget, OutputPlan};
use crate::pipeline::Delivery;
use crate::types::NotebookState;

/// Stages the notebook for publication.
///
/// One existence question decides the destination. The probe never
/// fails, it only answers `false` when in doubt, so this flow always
/// reaches a page; at worst the user lands on the create page for a
/// file that already exists and sees the conflict there.
pub async fn stage_publish(
    probe: &dyn ExistenceProbe,
    delivery: &dyn Delivery,
    config: &ToolbarConfig,
    state: &NotebookState,
) -> Result<PublishOutcome, AppError> {
    let exists = probe.exists(&state.path).await;
    let destination = destination_for(config, &state.path, exists);
    log::info!(
        "Staging {} for publication via {} page: {}",
        state.path,
        if destination.is_edit() { "edit" } else { "create" },
        destination.url()
    );

    let plan = if config.pipe {
        OutputPlan::new().with_operation(DeliveryTarget::PrintToStdout {
            content: format!("{}\n", destination.url()),
        })
    } else {
        OutputPlan::new()
            .with_operation(DeliveryTarget::CopyToClipboard {
                content: state.snapshot.as_str().to_string(),
            })
            .with_operation(DeliveryTarget::Notify {
                message: PUBLISH_PASTE_NOTICE.to_string(),
            })
            .with_operation(DeliveryTarget::OpenBrowser {
                url: destination.url().to_string(),
            })
    };

    let report = delivery.deliver(plan)?;
    Ok(PublishOutcome {
        destination,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::RecordingDelivery;
    use crate::types::{NotebookPath, NotebookSnapshot};
    use pretty_assertions::assert_eq;

    struct FixedProbe {
        answer: bool,
    }

    #[async_trait::async_trait]
    impl ExistenceProbe for FixedProbe {
        async fn exists(&self, _: &NotebookPath) -> bool {
            self.answer
        }
    }

    fn state() -> NotebookState {
        NotebookState {
            snapshot: NotebookSnapshot::new_unchecked(r#"{"cells":[]}"#),
            path: NotebookPath::new("demo.ipynb").expect("path should validate"),
        }
    }

    #[tokio::test]
    async fn existing_notebook_stages_toward_edit_page() {
        let probe = FixedProbe { answer: true };
        let delivery = RecordingDelivery::new();
        let config = ToolbarConfig::default();

        let outcome = stage_publish(&probe, &delivery, &config, &state())
            .await
            .expect("flow should complete");

        assert!(outcome.is_complete());
        assert!(outcome.destination.is_edit());
        assert_eq!(
            outcome.destination.url(),
            "https://github.com/intel-sandbox/jupyterlite/edit/main/content/demo.ipynb"
        );

        let plans = delivery.delivered();
        assert_eq!(
            plans[0].operations,
            vec![
                DeliveryTarget::CopyToClipboard {
                    content: r#"{"cells":[]}"#.to_string(),
                },
                DeliveryTarget::Notify {
                    message: PUBLISH_PASTE_NOTICE.to_string(),
                },
                DeliveryTarget::OpenBrowser {
                    url: "https://github.com/intel-sandbox/jupyterlite/edit/main/content/demo.ipynb"
                        .to_string(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn absent_notebook_stages_toward_create_page() {
        let probe = FixedProbe { answer: false };
        let delivery = RecordingDelivery::new();
        let config = ToolbarConfig::default();

        let outcome = stage_publish(&probe, &delivery, &config, &state())
            .await
            .expect("flow should complete");

        assert!(!outcome.destination.is_edit());
        assert_eq!(
            outcome.destination.url(),
            "https://github.com/intel-sandbox/jupyterlite/new/main/content/?filename=demo.ipynb"
        );
    }

    #[tokio::test]
    async fn pipe_mode_prints_destination_only() {
        let probe = FixedProbe { answer: false };
        let delivery = RecordingDelivery::new();
        let config = ToolbarConfig {
            pipe: true,
            ..ToolbarConfig::default()
        };

        let outcome = stage_publish(&probe, &delivery, &config, &state())
            .await
            .expect("flow should complete");

        assert!(outcome.is_complete());
        let plans = delivery.delivered();
        assert_eq!(
            plans[0].operations,
            vec![DeliveryTarget::PrintToStdout {
                content:
                    "https://github.com/intel-sandbox/jupyterlite/new/main/content/?filename=demo.ipynb\n"
                        .to_string(),
            }]
        );
    }
}
