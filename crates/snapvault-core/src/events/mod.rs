//! Canonical event union for gallery mutations.
//!
//! This module is the single source of truth for events surfaced to
//! embedding applications (webview listeners, SSE handlers).
//!
//! # Wire Format
//!
//! Events are serialized with a `type` tag and camelCase payload keys:
//!
//! ```json
//! { "type": "photo_deleted", "fileName": "1700000000123.jpeg" }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::Photo;

/// Event types for all gallery mutations.
///
/// Each variant includes all necessary context for the event to be
/// self-describing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GalleryEvent {
    /// A photo was captured and stored.
    PhotoAdded {
        /// The newly stored photo record.
        photo: Photo,
    },

    /// A photo was deleted from the gallery.
    PhotoDeleted {
        /// File name of the removed photo.
        #[serde(rename = "fileName")]
        file_name: String,
    },

    /// The in-memory list was rebuilt from the store.
    GalleryRefreshed {
        /// Number of photos after the rebuild.
        #[serde(rename = "photoCount")]
        photo_count: usize,
    },
}

impl GalleryEvent {
    /// Create a photo added event.
    pub const fn photo_added(photo: Photo) -> Self {
        Self::PhotoAdded { photo }
    }

    /// Create a photo deleted event.
    pub const fn photo_deleted(file_name: String) -> Self {
        Self::PhotoDeleted { file_name }
    }

    /// Create a gallery refreshed event.
    pub const fn gallery_refreshed(photo_count: usize) -> Self {
        Self::GalleryRefreshed { photo_count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_deleted_wire_format() {
        let event = GalleryEvent::photo_deleted("1700000000123.jpeg".to_string());
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "photo_deleted");
        assert_eq!(json["fileName"], "1700000000123.jpeg");
    }

    #[test]
    fn test_photo_added_wire_format() {
        let photo = Photo::new("1.jpeg", Some("file:///gallery/1.jpeg".to_string()));
        let json = serde_json::to_value(GalleryEvent::photo_added(photo)).unwrap();
        assert_eq!(json["type"], "photo_added");
        assert_eq!(json["photo"]["fileName"], "1.jpeg");
    }

    #[test]
    fn test_gallery_refreshed_round_trip() {
        let event = GalleryEvent::gallery_refreshed(3);
        let json = serde_json::to_string(&event).unwrap();
        let back: GalleryEvent = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, GalleryEvent::GalleryRefreshed { photo_count: 3 }));
    }
}
