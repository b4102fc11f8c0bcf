//! Path utilities for the gallery directory.
//!
//! This module provides the canonical resolution of the directory photos are
//! stored in. The directory is resolved once at application startup and
//! injected into the storage adapter.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately

mod ensure;
mod error;
mod gallery_dir;

// Re-export public API

// Error type
pub use error::PathError;

// Gallery directory
pub use gallery_dir::{
    DEFAULT_GALLERY_DIR_RELATIVE, GalleryDirResolution, GalleryDirSource, default_gallery_dir,
    resolve_gallery_dir,
};

// Directory operations
pub use ensure::{DirectoryCreationStrategy, ensure_directory, verify_writable};
