//! Camera port definition (trait abstraction).
//!
//! Implementations bridge to host-platform capture plugins; the core only
//! sees capture handles and raw bytes.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::CapturedImage;

/// Errors related to camera operations.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The end user dismissed the capture dialog.
    #[error("Capture cancelled by user")]
    Cancelled,

    /// The camera backend failed to produce an image.
    #[error("Camera failure: {reason}")]
    Camera {
        /// Backend-reported failure description.
        reason: String,
    },

    /// The bytes behind a capture handle could not be read.
    #[error("Failed to fetch image data from {uri}: {reason}")]
    Fetch {
        /// URI of the capture handle.
        uri: String,
        /// Backend-reported failure description.
        reason: String,
    },
}

/// Trait for capturing images from the device camera.
///
/// # Usage
///
/// ```ignore
/// let camera: Arc<dyn CameraPort> = /* ... */;
/// let image = camera.capture(100).await?;
/// let bytes = camera.fetch(&image).await?;
/// ```
#[async_trait]
pub trait CameraPort: Send + Sync {
    /// Capture an image at the given quality (0-100).
    ///
    /// Returns a handle whose bytes can be read with [`fetch`](Self::fetch).
    /// User-dismissed capture surfaces as [`CaptureError::Cancelled`].
    async fn capture(&self, quality: u8) -> Result<CapturedImage, CaptureError>;

    /// Read the raw image bytes behind a capture handle.
    async fn fetch(&self, image: &CapturedImage) -> Result<Vec<u8>, CaptureError>;
}
