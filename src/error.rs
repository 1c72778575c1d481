//! Error types for scanning and publishing operations.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while watching and publishing a literature folder.
#[derive(Debug, Error)]
pub enum WatchError {
    /// The watched root is missing or not a directory. Fatal at start-up.
    #[error(
        "watch root '{path}' does not exist or is not a directory\n  Suggestion: pass an existing folder containing literature files"
    )]
    WatchRootInvalid {
        /// The offending path as given on the command line.
        path: PathBuf,
    },

    /// A filesystem operation that must succeed (metadata read, output write)
    /// failed. Per-file content reads never produce this variant; they degrade
    /// to empty content instead.
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// Path involved in the failed operation.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Record payload serialization failed while rendering the artifact.
    #[error("failed to serialize record payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl WatchError {
    /// Creates a `WatchRootInvalid` error for the given root path.
    #[must_use]
    pub fn invalid_root(path: &Path) -> Self {
        Self::WatchRootInvalid {
            path: path.to_path_buf(),
        }
    }

    /// Wraps an I/O error with the path it occurred on.
    #[must_use]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
