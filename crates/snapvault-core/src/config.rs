//! Public configuration for the gallery service.

/// Default capture quality requested from the camera.
pub const DEFAULT_QUALITY: u8 = 100;

/// Configuration for [`GalleryService`](crate::services::GalleryService).
///
/// Use the builder pattern methods to customize the configuration.
///
/// # Example
///
/// ```
/// use snapvault_core::GalleryConfig;
///
/// let config = GalleryConfig::new().with_quality(85);
/// assert_eq!(config.quality(), 85);
/// ```
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    /// Capture quality passed to the camera port (0-100).
    quality: u8,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
        }
    }
}

impl GalleryConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the capture quality (0-100).
    ///
    /// Values above 100 are clamped by camera backends, not here.
    /// Defaults to 100.
    #[must_use]
    pub const fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    /// The configured capture quality.
    pub const fn quality(&self) -> u8 {
        self.quality
    }
}
