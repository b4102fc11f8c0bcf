#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod events;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use config::{DEFAULT_QUALITY, GalleryConfig};
pub use domain::{CapturedImage, PHOTO_EXTENSION, Photo, StoredEntry, photo_file_name};
pub use events::GalleryEvent;
pub use ports::{
    CameraPort, CaptureError, GalleryError, GalleryEventEmitter, NoopEmitter, PhotoStorePort,
    StoreError,
};
pub use services::GalleryService;

// Re-export path utilities
pub use paths::{
    DEFAULT_GALLERY_DIR_RELATIVE, DirectoryCreationStrategy, GalleryDirResolution,
    GalleryDirSource, PathError, default_gallery_dir, ensure_directory, resolve_gallery_dir,
    verify_writable,
};

// Silence unused dev-dependency warnings
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tokio_test as _;
