//! Gallery service - orchestrates capture, storage, and the in-memory list.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{TimeDelta, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::config::GalleryConfig;
use crate::domain::{Photo, photo_file_name};
use crate::events::GalleryEvent;
use crate::ports::{CameraPort, GalleryError, GalleryEventEmitter, NoopEmitter, PhotoStorePort};

/// The photo gallery manager.
///
/// Owns the ordered in-memory photo list (most recent first) and keeps its
/// membership synchronized with the injected photo store. Constructed once
/// at the adapter's composition root with concrete port implementations and
/// shared by reference.
///
/// # Example
///
/// ```ignore
/// let gallery = Arc::new(GalleryService::new(camera, store, GalleryConfig::new()));
/// gallery.refresh().await;
/// let photo = gallery.take_photo().await?;
/// gallery.delete_photo(&photo).await?;
/// ```
pub struct GalleryService {
    camera: Arc<dyn CameraPort>,
    store: Arc<dyn PhotoStorePort>,
    emitter: Arc<dyn GalleryEventEmitter>,
    config: GalleryConfig,
    photos: RwLock<Vec<Photo>>,
}

impl GalleryService {
    /// Create a new gallery service with the given ports.
    ///
    /// Events are discarded until an emitter is attached with
    /// [`with_emitter`](Self::with_emitter).
    pub fn new(
        camera: Arc<dyn CameraPort>,
        store: Arc<dyn PhotoStorePort>,
        config: GalleryConfig,
    ) -> Self {
        Self {
            camera,
            store,
            emitter: Arc::new(NoopEmitter::new()),
            config,
            photos: RwLock::new(Vec::new()),
        }
    }

    /// Attach an event emitter.
    #[must_use]
    pub fn with_emitter(mut self, emitter: Arc<dyn GalleryEventEmitter>) -> Self {
        self.emitter = emitter;
        self
    }

    /// Rebuild the in-memory list from the store's current contents.
    ///
    /// Best-effort: a store failure is logged and leaves the current list
    /// untouched, so a startup refresh that fails yields an empty gallery.
    pub async fn refresh(&self) {
        match self.store.list().await {
            Ok(entries) => {
                let snapshot: Vec<Photo> = entries
                    .into_iter()
                    .map(|entry| Photo::new(entry.name, Some(entry.uri)))
                    .collect();
                let photo_count = snapshot.len();
                *self.photos.write().await = snapshot;
                debug!(photo_count, "gallery refreshed from store");
                self.emitter.emit(GalleryEvent::gallery_refreshed(photo_count));
            }
            Err(err) => {
                warn!(error = %err, "gallery refresh failed, keeping current list");
            }
        }
    }

    /// Capture a photo and persist it to the store.
    ///
    /// Sequence: capture at the configured quality, fetch the raw bytes
    /// behind the handle, base64-encode them, write under a fresh
    /// timestamp-derived file name, then prepend the record. Any failure
    /// fails the whole operation with no list mutation.
    pub async fn take_photo(&self) -> Result<Photo, GalleryError> {
        let image = self.camera.capture(self.config.quality()).await?;
        let bytes = self.camera.fetch(&image).await?;
        let payload = STANDARD.encode(&bytes);
        let file_name = self.next_file_name().await;
        self.store.write(&file_name, &payload).await?;

        let photo = Photo::new(file_name, Some(image.uri));
        self.photos.write().await.insert(0, photo.clone());
        info!(file_name = %photo.file_name, size = bytes.len(), "photo captured and stored");
        self.emitter.emit(GalleryEvent::photo_added(photo.clone()));
        Ok(photo)
    }

    /// Delete a photo from the store and the in-memory list.
    ///
    /// Fails with [`GalleryError::UnknownPhoto`] before touching storage
    /// when the record is not in the list; a store failure propagates and
    /// leaves the list unchanged (re-run [`refresh`](Self::refresh) to
    /// reconcile).
    pub async fn delete_photo(&self, photo: &Photo) -> Result<(), GalleryError> {
        {
            let photos = self.photos.read().await;
            if !photos.iter().any(|p| p.file_name == photo.file_name) {
                return Err(GalleryError::UnknownPhoto(photo.file_name.clone()));
            }
        }

        self.store.delete(&photo.file_name).await?;

        self.photos
            .write()
            .await
            .retain(|p| p.file_name != photo.file_name);
        info!(file_name = %photo.file_name, "photo deleted");
        self.emitter
            .emit(GalleryEvent::photo_deleted(photo.file_name.clone()));
        Ok(())
    }

    /// Snapshot of the photo list, most recent first.
    pub async fn photos(&self) -> Vec<Photo> {
        self.photos.read().await.clone()
    }

    /// Number of photos currently tracked.
    pub async fn photo_count(&self) -> usize {
        self.photos.read().await.len()
    }

    /// Generate a timestamp-derived file name not yet present in the list.
    ///
    /// Same-millisecond captures bump the timestamp forward until the name
    /// is free, preserving the uniqueness invariant for sequential adds.
    async fn next_file_name(&self) -> String {
        let photos = self.photos.read().await;
        let mut taken_at = Utc::now();
        loop {
            let candidate = photo_file_name(taken_at);
            if !photos.iter().any(|p| p.file_name == candidate) {
                return candidate;
            }
            taken_at += TimeDelta::milliseconds(1);
        }
    }
}
