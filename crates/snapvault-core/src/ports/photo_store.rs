//! Photo store port definition (trait abstraction).
//!
//! All operations run against a fixed, process-wide gallery directory chosen
//! at adapter construction time; file names never contain path separators.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::StoredEntry;

/// Domain-specific errors for photo store operations.
///
/// This error type abstracts away storage implementation details (io errors,
/// cloud SDK errors) and provides a clean interface for the service to
/// handle storage failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested file was not found in the gallery directory.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The payload handed to `write` was not valid base64.
    #[error("Invalid photo payload: {0}")]
    InvalidData(String),

    /// Storage backend error (filesystem, cloud, etc.).
    #[error("Storage error at {path}: {reason}")]
    Storage {
        /// Path or name the operation was addressing.
        path: String,
        /// Backend-reported failure description.
        reason: String,
    },
}

/// Trait for persisting photos in the gallery directory.
///
/// Payloads cross this boundary as base64 text; implementations decide how
/// to materialize them (decoded bytes on a local disk, object payloads in a
/// bucket, rows in a blob table).
#[async_trait]
pub trait PhotoStorePort: Send + Sync {
    /// List all stored photos (name + resolvable URI per entry).
    async fn list(&self) -> Result<Vec<StoredEntry>, StoreError>;

    /// Persist a base64-encoded photo under the given file name.
    ///
    /// Overwrites an existing file of the same name.
    async fn write(&self, file_name: &str, contents_base64: &str) -> Result<(), StoreError>;

    /// Delete the photo stored under the given file name.
    ///
    /// Fails with [`StoreError::NotFound`] when no such file exists.
    async fn delete(&self, file_name: &str) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error_message() {
        let msg = StoreError::NotFound("a.jpeg".to_string()).to_string();
        assert!(msg.contains("a.jpeg"));
    }

    #[test]
    fn test_storage_error_message_names_path() {
        let error = StoreError::Storage {
            path: "/gallery/b.jpeg".to_string(),
            reason: "read-only filesystem".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("/gallery/b.jpeg"));
        assert!(msg.contains("read-only"));
    }
}
