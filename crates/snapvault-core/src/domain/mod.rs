//! Domain types for the photo gallery.
//!
//! These types are independent of any infrastructure concerns
//! (camera hardware, filesystem, event transport).

mod photo;

pub use photo::{CapturedImage, PHOTO_EXTENSION, Photo, StoredEntry, photo_file_name};
