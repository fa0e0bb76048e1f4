//! Error types for input loading.

use std::path::PathBuf;
use thiserror::Error;

/// Malformed or unreadable input documents. Fatal to a run.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("top-level YAML must be a mapping in {path}")]
    NotAMapping { path: PathBuf },

    #[error("missing '{key}' key in {path}")]
    MissingKey { key: &'static str, path: PathBuf },

    #[error("'{key}' must be a list in {path}")]
    NotAList { key: &'static str, path: PathBuf },

    /// A list entry or attribute has the wrong shape (e.g., `fields[2].sql_expr`).
    #[error("{location} must be {expected} in {path}")]
    InvalidEntry {
        location: String,
        expected: &'static str,
        path: PathBuf,
    },
}

impl IngestError {
    pub(crate) fn invalid_entry(
        location: impl Into<String>,
        expected: &'static str,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self::InvalidEntry {
            location: location.into(),
            expected,
            path: path.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
