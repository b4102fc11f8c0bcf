//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the gallery core expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `std::io`/`tokio::fs` types in any signature
//! - No camera SDK types in any signature
//! - Traits are minimal and operation-focused

pub mod camera;
pub mod event_emitter;
pub mod photo_store;

use thiserror::Error;

pub use camera::{CameraPort, CaptureError};
pub use event_emitter::{GalleryEventEmitter, NoopEmitter};
pub use photo_store::{PhotoStorePort, StoreError};

/// Canonical error type for gallery operations.
///
/// Adapters should map this to their own surface (toast messages, HTTP
/// status codes, serialized UI errors).
#[derive(Debug, Error)]
pub enum GalleryError {
    /// Camera capture or fetch failed.
    #[error(transparent)]
    Capture(#[from] CaptureError),

    /// Photo store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Delete was requested for a photo the gallery does not track.
    #[error("Unknown photo: {0}")]
    UnknownPhoto(String),
}
