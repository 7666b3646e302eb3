// src/types/notebook.rs
//! The captured state of a notebook document.

use super::ValidationError;
use std::fmt;

/// Serialized JSON text of a notebook at the moment of capture.
///
/// The snapshot is immutable once captured and scoped to a single
/// invocation. Well-formedness is a capture-time guarantee of the
/// provider (the notebook host serializes its own model); the flows
/// themselves never inspect the text again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotebookSnapshot(String);

impl NotebookSnapshot {
    /// Wrap serialized notebook text, verifying it is well-formed JSON.
    pub fn from_json_text(text: impl Into<String>) -> Result<Self, serde_json::Error> {
        let text = text.into();
        serde_json::from_str::<serde::de::IgnoredAny>(&text)?;
        Ok(Self(text))
    }

    /// Wrap arbitrary text without the well-formedness check (tests only).
    #[cfg(test)]
    pub fn new_unchecked(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Logical storage path of a notebook, relative to its workspace.
///
/// This is the path the publish flow appends under the repository's
/// content root, so it must stay inside it: relative, no traversal,
/// forward slashes, and the notebook extension (the toolbar only ever
/// operates on notebooks).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotebookPath(String);

impl NotebookPath {
    /// Create a new logical path with validation.
    pub fn new(path: impl Into<String>) -> Result<Self, ValidationError> {
        let mut path = path.into().trim().to_string();

        // A workspace-relative path may arrive spelled "./demo.ipynb".
        while let Some(rest) = path.strip_prefix("./") {
            path = rest.to_string();
        }

        let invalid = |reason: &str| ValidationError::InvalidNotebookPath {
            path: path.clone(),
            reason: reason.to_string(),
        };

        if path.is_empty() {
            return Err(invalid("path cannot be empty"));
        }
        if path.starts_with('/') {
            return Err(invalid("path must be relative"));
        }
        if path.contains('\\') {
            return Err(invalid("path must use forward slashes"));
        }
        if path.chars().any(|c| c.is_control()) {
            return Err(invalid("path cannot contain control characters"));
        }
        if path.split('/').any(|segment| segment == "..") {
            return Err(invalid("path cannot traverse outside the workspace"));
        }
        if path.split('/').any(|segment| segment.is_empty()) {
            return Err(invalid("path cannot contain empty segments"));
        }
        if !path.to_ascii_lowercase().ends_with(".ipynb") {
            return Err(invalid("path must name a .ipynb notebook"));
        }

        Ok(Self(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotebookPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything the flows need about the current notebook, read fresh on
/// every invocation. No state persists across invocations.
#[derive(Debug, Clone)]
pub struct NotebookState {
    pub snapshot: NotebookSnapshot,
    pub path: NotebookPath,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_accepts_well_formed_json() {
        assert!(NotebookSnapshot::from_json_text(r#"{"cells":[]}"#).is_ok());
        assert!(NotebookSnapshot::from_json_text("[1, 2, 3]").is_ok());
    }

    #[test]
    fn snapshot_rejects_malformed_json() {
        assert!(NotebookSnapshot::from_json_text("{not json").is_err());
        assert!(NotebookSnapshot::from_json_text("").is_err());
    }

    #[test]
    fn snapshot_preserves_text_exactly() {
        let text = "{\"cells\": []}\n";
        let snapshot = NotebookSnapshot::from_json_text(text).unwrap();
        assert_eq!(snapshot.as_str(), text);
    }

    #[test]
    fn path_accepts_workspace_relative_notebooks() {
        assert!(NotebookPath::new("demo.ipynb").is_ok());
        assert!(NotebookPath::new("reports/q3/summary.ipynb").is_ok());
        assert_eq!(
            NotebookPath::new("./demo.ipynb").unwrap().as_str(),
            "demo.ipynb"
        );
    }

    #[test]
    fn path_rejects_escapes_and_non_notebooks() {
        assert!(NotebookPath::new("").is_err());
        assert!(NotebookPath::new("/etc/passwd.ipynb").is_err());
        assert!(NotebookPath::new("../secrets.ipynb").is_err());
        assert!(NotebookPath::new("a/../b.ipynb").is_err());
        assert!(NotebookPath::new("dir//demo.ipynb").is_err());
        assert!(NotebookPath::new("notes\\demo.ipynb").is_err());
        assert!(NotebookPath::new("script.py").is_err());
    }
}
