//! Path-related error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving or preparing the gallery directory.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the user's home directory (needed for `~` paths).
    #[error("cannot determine home directory")]
    NoHomeDir,

    /// Could not determine the platform data directory.
    #[error("cannot determine platform data directory")]
    NoDataDir,

    /// The gallery path exists but is not a directory.
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// The gallery directory is missing and creation was not allowed.
    #[error("gallery directory {0} does not exist")]
    DirectoryNotFound(PathBuf),

    /// Creating the gallery directory failed.
    #[error("failed to create {path}: {reason}")]
    CreateFailed {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying io failure description.
        reason: String,
    },

    /// The gallery directory failed the writability probe.
    #[error("{path} is not writable: {reason}")]
    NotWritable {
        /// Directory that failed the probe.
        path: PathBuf,
        /// Underlying io failure description.
        reason: String,
    },

    /// An empty path was provided.
    #[error("path cannot be empty")]
    EmptyPath,

    /// Failed to get the current working directory.
    #[error("cannot determine current directory: {0}")]
    CurrentDirError(String),
}
