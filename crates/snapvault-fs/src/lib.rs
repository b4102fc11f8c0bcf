#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

mod store;

// ============================================================================
// Public API
// ============================================================================

pub use store::FsPhotoStore;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
