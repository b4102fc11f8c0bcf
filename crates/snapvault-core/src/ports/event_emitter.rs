//! Event emitter trait for gallery event broadcasting.
//!
//! This module defines the abstraction for surfacing gallery mutations.
//! Implementations handle transport details (channels, webview bridges, SSE).

use crate::events::GalleryEvent;

/// Trait for emitting gallery events.
///
/// This abstraction keeps event plumbing out of the service API and prevents
/// channel types from becoming part of the public surface.
///
/// # Implementations
///
/// - `NoopEmitter` - For tests and callers that don't need events
/// - Adapter-specific implementations (webview bridge, SSE, etc.)
pub trait GalleryEventEmitter: Send + Sync {
    /// Emit a gallery event.
    ///
    /// Implementations should handle the event asynchronously or buffer it.
    /// This method should not block.
    fn emit(&self, event: GalleryEvent);

    /// Clone this emitter into a boxed trait object.
    ///
    /// This enables cloning of `Arc<dyn GalleryEventEmitter>` without
    /// requiring the underlying type to implement Clone.
    fn clone_box(&self) -> Box<dyn GalleryEventEmitter>;
}

/// A no-op event emitter for tests and callers without a listener.
#[derive(Debug, Clone, Default)]
pub struct NoopEmitter;

impl NoopEmitter {
    /// Create a new no-op emitter.
    pub const fn new() -> Self {
        Self
    }
}

impl GalleryEventEmitter for NoopEmitter {
    fn emit(&self, _event: GalleryEvent) {
        // Intentionally do nothing
    }

    fn clone_box(&self) -> Box<dyn GalleryEventEmitter> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_noop_emitter() {
        let emitter = NoopEmitter::new();

        // Should not panic
        emitter.emit(GalleryEvent::gallery_refreshed(0));
    }

    #[test]
    fn test_noop_emitter_clone_box() {
        let emitter = NoopEmitter::new();
        let _boxed: Box<dyn GalleryEventEmitter> = emitter.clone_box();
    }

    #[test]
    fn test_arc_emitter() {
        let emitter: Arc<dyn GalleryEventEmitter> = Arc::new(NoopEmitter::new());
        emitter.emit(GalleryEvent::gallery_refreshed(0));
    }
}
