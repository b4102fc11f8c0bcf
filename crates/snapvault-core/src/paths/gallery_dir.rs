//! Gallery directory resolution.
//!
//! Provides utilities for resolving the gallery directory from explicit
//! paths, environment variables, or platform defaults.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Default location for stored photos, relative to the platform data
/// directory.
pub const DEFAULT_GALLERY_DIR_RELATIVE: &str = "snapvault/photos";

/// Environment variable that overrides the gallery directory.
const GALLERY_DIR_ENV: &str = "SNAPVAULT_PHOTOS_DIR";

/// How the gallery directory was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryDirSource {
    /// The caller passed an explicit path (e.g., app settings).
    Explicit,
    /// The path came from the `SNAPVAULT_PHOTOS_DIR` environment variable.
    EnvVar,
    /// Fallback default under the platform data directory.
    Default,
}

/// Resolution result for the gallery directory.
#[derive(Debug, Clone)]
pub struct GalleryDirResolution {
    /// The resolved path to the gallery directory.
    pub path: PathBuf,
    /// How the path was determined.
    pub source: GalleryDirSource,
}

/// Return the platform-specific default gallery directory.
///
/// Defaults to `<data_dir>/snapvault/photos` (e.g.
/// `~/.local/share/snapvault/photos` on Linux).
pub fn default_gallery_dir() -> Result<PathBuf, PathError> {
    let data = dirs::data_dir().ok_or(PathError::NoDataDir)?;
    Ok(data.join(DEFAULT_GALLERY_DIR_RELATIVE))
}

/// Resolve the gallery directory from an explicit override, env var, or
/// default.
///
/// Resolution order:
/// 1. Explicit path provided by caller (highest priority)
/// 2. `SNAPVAULT_PHOTOS_DIR` environment variable
/// 3. Default under the platform data directory
pub fn resolve_gallery_dir(explicit: Option<&str>) -> Result<GalleryDirResolution, PathError> {
    if let Some(path_str) = explicit {
        return Ok(GalleryDirResolution {
            path: normalize_user_path(path_str)?,
            source: GalleryDirSource::Explicit,
        });
    }

    if let Ok(env_path) = env::var(GALLERY_DIR_ENV) {
        if !env_path.trim().is_empty() {
            return Ok(GalleryDirResolution {
                path: normalize_user_path(&env_path)?,
                source: GalleryDirSource::EnvVar,
            });
        }
    }

    Ok(GalleryDirResolution {
        path: default_gallery_dir()?,
        source: GalleryDirSource::Default,
    })
}

/// Expand `~` and make relative paths absolute against the current directory.
fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serializes tests that touch the process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_gallery_dir_contains_relative() {
        let dir = default_gallery_dir().unwrap();
        assert!(dir.to_string_lossy().contains(DEFAULT_GALLERY_DIR_RELATIVE));
    }

    #[test]
    fn test_resolve_gallery_dir_prefers_explicit() {
        let _guard = ENV_LOCK.lock().unwrap();
        let prev = env::var(GALLERY_DIR_ENV).ok();
        unsafe {
            env::set_var(GALLERY_DIR_ENV, "/tmp/env-value");
        }
        let resolved = resolve_gallery_dir(Some("/tmp/explicit")).unwrap();
        assert_eq!(resolved.source, GalleryDirSource::Explicit);
        assert!(resolved.path.ends_with("explicit"));
        restore_env(GALLERY_DIR_ENV, prev);
    }

    #[test]
    fn test_resolve_gallery_dir_env_value() {
        let _guard = ENV_LOCK.lock().unwrap();
        let prev = env::var(GALLERY_DIR_ENV).ok();
        unsafe {
            env::set_var(GALLERY_DIR_ENV, "/tmp/from-env");
        }
        let resolved = resolve_gallery_dir(None).unwrap();
        assert_eq!(resolved.source, GalleryDirSource::EnvVar);
        assert!(resolved.path.ends_with("from-env"));
        restore_env(GALLERY_DIR_ENV, prev);
    }

    #[test]
    fn test_normalize_rejects_empty() {
        assert!(matches!(
            resolve_gallery_dir(Some("   ")),
            Err(PathError::EmptyPath)
        ));
    }

    #[test]
    fn test_normalize_expands_tilde() {
        let resolved = resolve_gallery_dir(Some("~/photos")).unwrap();
        assert!(resolved.path.is_absolute());
        assert!(resolved.path.ends_with("photos"));
    }

    fn restore_env(key: &str, previous: Option<String>) {
        if let Some(value) = previous {
            unsafe {
                env::set_var(key, value);
            }
        } else {
            unsafe {
                env::remove_var(key);
            }
        }
    }
}
