//! Error types for port rewriting.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for port rewriting operations.
#[derive(Error, Debug)]
pub enum FixPortsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Glob pattern error: {0}")]
    Glob(#[from] globset::Error),
}

/// A specialized Result type for port rewriting operations.
pub type Result<T> = std::result::Result<T, FixPortsError>;
