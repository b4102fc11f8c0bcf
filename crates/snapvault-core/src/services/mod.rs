//! Core services - the gallery's orchestration layer.
//!
//! Services here are pure orchestrators between ports (trait interfaces)
//! and domain logic. They don't know about concrete implementations.

mod gallery_service;

pub use gallery_service::GalleryService;
