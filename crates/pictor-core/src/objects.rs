//! Session-scoped object URLs for image bytes held in memory.
//!
//! A generated image that arrives as raw bytes is registered here and
//! referenced by a `blob:pictor/<uuid>` URL until it is revoked or the store
//! is dropped. Nothing here ever touches the disk.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use uuid::Uuid;

/// Prefix shared by every object URL.
pub const OBJECT_URL_PREFIX: &str = "blob:pictor/";

/// Image bytes plus their MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub bytes: Arc<[u8]>,
    pub content_type: String,
}

impl Blob {
    pub fn new(bytes: impl Into<Arc<[u8]>>, content_type: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            content_type: content_type.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Whether a URL refers to an in-memory object rather than a remote resource.
pub fn is_object_url(url: &str) -> bool {
    url.starts_with(OBJECT_URL_PREFIX)
}

/// In-memory registry of object URLs.
#[derive(Debug, Default)]
pub struct ObjectStore {
    objects: Mutex<HashMap<String, Blob>>,
}

impl ObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a blob and return its fresh URL.
    pub fn create(&self, blob: Blob) -> String {
        let url = format!("{OBJECT_URL_PREFIX}{}", Uuid::new_v4());
        tracing::debug!("Created object URL {url} ({} bytes)", blob.len());
        self.lock().insert(url.clone(), blob);
        url
    }

    /// Look up a blob by URL. Cloning is cheap; the bytes are shared.
    pub fn get(&self, url: &str) -> Option<Blob> {
        self.lock().get(url).cloned()
    }

    /// Release a URL. Returns `false` if it was unknown or already revoked.
    pub fn revoke(&self, url: &str) -> bool {
        self.lock().remove(url).is_some()
    }

    /// Number of live object URLs.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Blob>> {
        self.objects.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
