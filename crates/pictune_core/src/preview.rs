//! Display-only previews derived from a selected photo.
//!
//! A preview is an externally-backed resource: whoever holds a [`PreviewRef`]
//! must hand it back to the store that issued it. `PreviewRef` is neither
//! `Clone` nor `Copy` and [`PreviewStore::release`] takes it by value, so a
//! reference can be released at most once.

use crate::PhotoFile;
use derive_getters::Getters;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Handle to a live preview.
///
/// Handles are only minted by the stores in this crate. Code elsewhere
/// obtains one from [`PreviewStore::create`] and cannot forge it:
///
/// ```compile_fail
/// use pictune_core::PreviewRef;
///
/// let forged = PreviewRef::new(0);
/// ```
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct PreviewRef(u64);

impl PreviewRef {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Identifier within the issuing store.
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// What the UI shows in place of the photo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct Preview {
    /// Name of the previewed file
    file_name: String,
    /// Declared media type
    media_type: String,
    /// Size in bytes
    byte_len: usize,
}

impl Preview {
    /// Derives a preview from a photo.
    pub fn of(photo: &PhotoFile) -> Self {
        Self {
            file_name: photo.file_name().clone(),
            media_type: photo.media_type().clone(),
            byte_len: photo.byte_len(),
        }
    }
}

/// Issues and reclaims preview references.
///
/// Implementations live in this crate, since only it can mint [`PreviewRef`]s.
pub trait PreviewStore: Send {
    /// Creates a preview for `photo`.
    fn create(&mut self, photo: &PhotoFile) -> PreviewRef;

    /// Releases a preview. The handle is consumed.
    fn release(&mut self, preview: PreviewRef);

    /// Looks up a live preview.
    fn get(&self, preview: &PreviewRef) -> Option<&Preview>;

    /// Number of previews currently held.
    fn live_count(&self) -> usize;
}

/// Preview store backed by a map.
///
/// Tracks how many previews were ever created and released.
///
/// # Examples
///
/// ```
/// use pictune_core::{InMemoryPreviewStore, PhotoFile, PreviewStore};
///
/// let mut store = InMemoryPreviewStore::default();
/// let photo = PhotoFile::new("a.jpg", "image/jpeg", vec![0xFF, 0xD8, 0xFF]);
///
/// let preview = store.create(&photo);
/// assert_eq!(store.live_count(), 1);
/// store.release(preview);
/// assert_eq!(store.live_count(), 0);
/// assert_eq!(store.released(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryPreviewStore {
    next_id: u64,
    live: HashMap<u64, Preview>,
    created: u64,
    released: u64,
}

impl InMemoryPreviewStore {
    /// Total previews ever created.
    pub fn created(&self) -> u64 {
        self.created
    }

    /// Total previews ever released.
    pub fn released(&self) -> u64 {
        self.released
    }
}

impl PreviewStore for InMemoryPreviewStore {
    fn create(&mut self, photo: &PhotoFile) -> PreviewRef {
        let id = self.next_id;
        self.next_id += 1;
        self.live.insert(id, Preview::of(photo));
        self.created += 1;
        debug!(id, file = %photo.file_name(), "Created preview");
        PreviewRef::new(id)
    }

    fn release(&mut self, preview: PreviewRef) {
        if self.live.remove(&preview.id()).is_some() {
            self.released += 1;
            debug!(id = preview.id(), "Released preview");
        } else {
            warn!(id = preview.id(), "Released a preview this store does not hold");
        }
    }

    fn get(&self, preview: &PreviewRef) -> Option<&Preview> {
        self.live.get(&preview.id())
    }

    fn live_count(&self) -> usize {
        self.live.len()
    }
}
