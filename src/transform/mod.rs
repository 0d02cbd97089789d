//! Transformations applied to test-plan text.

pub mod classify;
pub mod port;

pub use classify::{Endpoint, EndpointClassifier, LookaheadClassifier};
pub use port::PortRewriter;

use crate::error::{FixPortsError, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// A transformation that can be applied to test-plan files.
pub trait Transform: Send + Sync {
    /// Applies the transformation to the given file content.
    fn apply(&self, source: &str, path: &Path) -> Result<TransformOutput>;

    /// Returns a description of the transformation.
    fn describe(&self) -> String;
}

/// The rewritten content of a file plus anything worth reporting about it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformOutput {
    pub content: String,
    pub warnings: Vec<RewriteWarning>,
}

/// A port line that could not be tied to a sampler path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteWarning {
    /// 1-based line number of the port.
    pub line: usize,
    /// Lines inspected after the port, when the classifier searched a window.
    pub window: Option<usize>,
}

impl fmt::Display for RewriteWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.window {
            // The span counts the port line itself.
            Some(window) => write!(
                f,
                "Found port at line {} but no path within next {} lines",
                self.line,
                window + 1
            ),
            None => write!(f, "Found port at line {} but no path for it", self.line),
        }
    }
}

/// Represents a change to be applied to a file.
#[derive(Debug, Clone)]
pub struct FileChange {
    pub path: PathBuf,
    pub original: String,
    pub transformed: String,
    pub warnings: Vec<RewriteWarning>,
}

impl FileChange {
    /// Returns true if the content was modified.
    pub fn is_modified(&self) -> bool {
        self.original != self.transformed
    }

    /// Writes the transformed content to disk.
    ///
    /// The file is overwritten even when nothing changed, and in place: a
    /// failure mid-write can leave it truncated.
    pub fn apply(&self) -> Result<()> {
        std::fs::write(&self.path, &self.transformed).map_err(|source| {
            FixPortsError::WriteFile {
                path: self.path.clone(),
                source,
            }
        })?;
        tracing::debug!(
            path = %self.path.display(),
            bytes = self.transformed.len(),
            modified = self.is_modified(),
            "wrote test plan"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_warning_message() {
        let warning = RewriteWarning {
            line: 12,
            window: Some(9),
        };
        assert_eq!(
            warning.to_string(),
            "Found port at line 12 but no path within next 10 lines"
        );
    }

    #[test]
    fn test_warning_message_without_window() {
        let warning = RewriteWarning {
            line: 3,
            window: None,
        };
        assert_eq!(warning.to_string(), "Found port at line 3 but no path for it");
    }

    #[test]
    fn test_file_change_writes_unmodified_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plan.jmx");
        std::fs::write(&path, "old").unwrap();

        let change = FileChange {
            path: path.clone(),
            original: "same".to_string(),
            transformed: "same".to_string(),
            warnings: Vec::new(),
        };
        assert!(!change.is_modified());
        change.apply().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "same");
    }

    #[test]
    fn test_file_change_write_error_names_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing/plan.jmx");

        let change = FileChange {
            path: path.clone(),
            original: String::new(),
            transformed: "x".to_string(),
            warnings: Vec::new(),
        };

        match change.apply() {
            Err(FixPortsError::WriteFile { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected write error, got {other:?}"),
        }
    }
}
