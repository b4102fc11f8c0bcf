//! Local-filesystem implementation of the photo store port.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use snapvault_core::{PhotoStorePort, StoreError, StoredEntry};

/// Photo store backed by a local gallery directory.
///
/// The directory must exist and be writable before the store is used; run
/// the resolved path through `snapvault_core::ensure_directory` at the
/// composition root.
pub struct FsPhotoStore {
    root: PathBuf,
}

impl FsPhotoStore {
    /// Create a store rooted at the given gallery directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The gallery directory this store operates on.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file_uri(path: &Path) -> String {
        format!("file://{}", path.display())
    }

    fn storage_error(path: &Path, err: &std::io::Error) -> StoreError {
        StoreError::Storage {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }
}

#[async_trait]
impl PhotoStorePort for FsPhotoStore {
    async fn list(&self) -> Result<Vec<StoredEntry>, StoreError> {
        let mut dir = tokio::fs::read_dir(&self.root)
            .await
            .map_err(|e| Self::storage_error(&self.root, &e))?;

        let mut entries = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| Self::storage_error(&self.root, &e))?
        {
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| Self::storage_error(&entry.path(), &e))?;
            if !file_type.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                // Skip probe files and editor droppings
                continue;
            }
            entries.push(StoredEntry::new(name, Self::file_uri(&entry.path())));
        }
        debug!(root = %self.root.display(), count = entries.len(), "listed gallery directory");
        Ok(entries)
    }

    async fn write(&self, file_name: &str, contents_base64: &str) -> Result<(), StoreError> {
        let bytes = STANDARD
            .decode(contents_base64)
            .map_err(|e| StoreError::InvalidData(e.to_string()))?;
        let path = self.root.join(file_name);
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| Self::storage_error(&path, &e))?;
        debug!(file = %path.display(), size = bytes.len(), "photo written");
        Ok(())
    }

    async fn delete(&self, file_name: &str) -> Result<(), StoreError> {
        let path = self.root.join(file_name);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                debug!(file = %path.display(), "photo removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StoreError::NotFound(file_name.to_string()))
            }
            Err(e) => Err(Self::storage_error(&path, &e)),
        }
    }
}
