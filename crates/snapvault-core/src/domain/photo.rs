//! Photo domain types.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// File extension for stored photos.
pub const PHOTO_EXTENSION: &str = "jpeg";

/// A photo tracked by the gallery.
///
/// Records are created either by a successful capture or by rebuilding the
/// list from a store listing. `file_name` is the photo's identity within the
/// gallery directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// File name of the stored image, unique within the gallery directory.
    pub file_name: String,
    /// Locally-resolvable URI for rendering the image without re-reading it
    /// from the store. Absent when the record was rebuilt from a listing
    /// that carries no resolvable reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_uri: Option<String>,
}

impl Photo {
    /// Create a new photo record.
    pub fn new(file_name: impl Into<String>, display_uri: Option<String>) -> Self {
        Self {
            file_name: file_name.into(),
            display_uri,
        }
    }

    /// Capture time derived from the file name.
    ///
    /// Returns `None` when the file name does not follow the
    /// `<unix-millis>.jpeg` pattern produced by [`photo_file_name`].
    pub fn taken_at(&self) -> Option<DateTime<Utc>> {
        let stem = self
            .file_name
            .strip_suffix(PHOTO_EXTENSION)?
            .strip_suffix('.')?;
        let millis: i64 = stem.parse().ok()?;
        Utc.timestamp_millis_opt(millis).single()
    }
}

/// Handle to a captured image, returned by the camera port.
///
/// The URI is camera-backend specific; the only contract is that the same
/// port can fetch the raw bytes behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedImage {
    /// URI from which the raw image bytes can be fetched.
    pub uri: String,
}

impl CapturedImage {
    /// Create a new capture handle.
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }
}

/// One entry of a store listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEntry {
    /// File name within the gallery directory.
    pub name: String,
    /// Resolvable URI for the stored file.
    pub uri: String,
}

impl StoredEntry {
    /// Create a new listing entry.
    pub fn new(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
        }
    }
}

/// Build the file name for a photo taken at the given instant.
///
/// File names are derived from the capture timestamp in milliseconds, so
/// records can be ordered (and [`Photo::taken_at`] recovered) from the
/// directory listing alone.
pub fn photo_file_name(taken_at: DateTime<Utc>) -> String {
    format!("{}.{PHOTO_EXTENSION}", taken_at.timestamp_millis())
}
