// src/links.rs
//! Pure URL derivation for both toolbar flows.
//!
//! Everything here is deterministic string composition over validated
//! inputs. No I/O, no encoding: recorded identifiers and notebook paths
//! are spliced into the templates byte for byte.

use crate::config::ToolbarConfig;
use crate::constants::CONTENT_ROOT;
use crate::types::{IssuedIdentifier, NotebookPath, ServiceEndpoint, ViewerLink};

/// Composes the shareable viewer link for a recorded notebook.
///
/// The viewer is handed the recorded copy's address through its
/// `fromURL` query parameter.
pub fn viewer_link(
    viewer_base: &ServiceEndpoint,
    content_base: &ServiceEndpoint,
    identifier: &IssuedIdentifier,
) -> ViewerLink {
    ViewerLink::new(format!(
        "{}/?fromURL={}/{}.ipynb",
        viewer_base.as_str(),
        content_base.as_str(),
        identifier.as_str()
    ))
}

/// Repository-relative location of a notebook under the content root.
pub fn repo_file_path(path: &NotebookPath) -> String {
    format!("{}/{}", CONTENT_ROOT, path.as_str())
}

/// Where the publish flow sends the user: the hosting provider's edit
/// page when the notebook already exists, its create page otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    EditExisting { url: String },
    CreateNew { url: String },
}

impl Destination {
    pub fn url(&self) -> &str {
        match self {
            Self::EditExisting { url } | Self::CreateNew { url } => url,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, Self::EditExisting { .. })
    }
}

/// Selects the publish destination from the existence answer.
///
/// `exists == true` is the only input that yields the edit page; every
/// probe failure has already been collapsed to `false` upstream.
pub fn destination_for(config: &ToolbarConfig, path: &NotebookPath, exists: bool) -> Destination {
    let base = config.hosting_web_base.as_str();
    if exists {
        Destination::EditExisting {
            url: format!(
                "{}/{}/{}/edit/{}/{}/{}",
                base,
                config.owner,
                config.repo,
                config.branch,
                CONTENT_ROOT,
                path.as_str()
            ),
        }
    } else {
        Destination::CreateNew {
            url: format!(
                "{}/{}/{}/new/{}/{}/?filename={}",
                base,
                config.owner,
                config.repo,
                config.branch,
                CONTENT_ROOT,
                path.as_str()
            ),
        }
    }
}
