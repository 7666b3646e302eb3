// src/workspace.rs
//! Captures the notebook handed over by the invoking environment.

use crate::error::AppError;
use crate::pipeline::SnapshotSource;
use crate::types::{NotebookPath, NotebookSnapshot, NotebookState, ValidationError};
use std::path::{Path, PathBuf};

/// A notebook file on disk, identified by the path the user passed in.
pub struct NotebookFile {
    path: PathBuf,
}

impl NotebookFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SnapshotSource for NotebookFile {
    fn capture(&self) -> Result<NotebookState, AppError> {
        let text =
            std::fs::read_to_string(&self.path).map_err(|source| AppError::NotebookUnreadable {
                path: self.path.clone(),
                source,
            })?;
        let snapshot =
            NotebookSnapshot::from_json_text(text).map_err(|source| AppError::NotebookNotJson {
                path: self.path.clone(),
                source,
            })?;
        let path = logical_path(&self.path)?;
        log::debug!("Captured notebook {} ({} bytes)", path, snapshot.len());
        Ok(NotebookState { snapshot, path })
    }
}

/// Derives the repository-facing path for a notebook argument.
///
/// A relative argument keeps its directory structure, mirroring the
/// workspace layout. An absolute argument carries machine-local
/// directories that mean nothing to the repository, so only its file
/// name survives.
pub fn logical_path(path: &Path) -> Result<NotebookPath, AppError> {
    let text = if path.is_absolute() {
        path.file_name()
            .ok_or_else(|| ValidationError::InvalidNotebookPath {
                path: path.display().to_string(),
                reason: "absolute path has no file name".to_string(),
            })?
            .to_string_lossy()
            .into_owned()
    } else {
        path.to_string_lossy().into_owned()
    };

    Ok(NotebookPath::new(text)?)
}
