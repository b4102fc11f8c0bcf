//! Gallery directory preparation.
//!
//! The composition root runs the resolved gallery path through
//! [`ensure_directory`] before handing it to a storage adapter, so every
//! later store operation can assume the directory exists and is writable.

use std::fs;
use std::path::Path;

use super::error::PathError;

/// Name of the throwaway file used to probe writability.
const WRITE_PROBE: &str = ".snapvault_write_test";

/// How to handle a missing gallery directory.
///
/// Intentionally non-interactive; adapters that want to prompt the user do
/// so before calling [`ensure_directory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectoryCreationStrategy {
    /// Create the directory (and parents) automatically if missing.
    #[default]
    AutoCreate,
    /// Treat a missing directory as an error.
    Disallow,
}

/// Ensure the gallery directory exists and is writable.
///
/// An existing path must be a directory; a missing one is created or
/// rejected according to `strategy`. Either way the directory is probed for
/// writability before returning.
pub fn ensure_directory(path: &Path, strategy: DirectoryCreationStrategy) -> Result<(), PathError> {
    match (path.exists(), strategy) {
        (true, _) if !path.is_dir() => {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
        (true, _) => {}
        (false, DirectoryCreationStrategy::AutoCreate) => {
            fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        }
        (false, DirectoryCreationStrategy::Disallow) => {
            return Err(PathError::DirectoryNotFound(path.to_path_buf()));
        }
    }

    verify_writable(path)
}

/// Verify a directory is writable by writing and removing a probe file.
pub fn verify_writable(path: &Path) -> Result<(), PathError> {
    let probe = path.join(WRITE_PROBE);
    fs::write(&probe, b"probe").map_err(|e| PathError::NotWritable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let _ = fs::remove_file(&probe);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_create_builds_missing_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("nested/photos");

        ensure_directory(&target, DirectoryCreationStrategy::AutoCreate).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn test_disallow_fails_on_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("absent");

        let result = ensure_directory(&target, DirectoryCreationStrategy::Disallow);
        assert!(matches!(result, Err(PathError::DirectoryNotFound(_))));
        assert!(!target.exists());
    }

    #[test]
    fn test_rejects_file_at_directory_path() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("occupied");
        fs::write(&target, b"not a dir").unwrap();

        let result = ensure_directory(&target, DirectoryCreationStrategy::AutoCreate);
        assert!(matches!(result, Err(PathError::NotADirectory(_))));
    }

    #[test]
    fn test_probe_file_is_cleaned_up() {
        let tmp = tempfile::tempdir().unwrap();
        verify_writable(tmp.path()).unwrap();
        assert!(!tmp.path().join(WRITE_PROBE).exists());
    }
}
