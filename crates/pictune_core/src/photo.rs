//! Photos selected for analysis.

use derive_getters::Getters;
use pictune_error::{UploadError, UploadErrorKind};
use std::path::Path;
use tracing::{debug, instrument};

/// Media type used when the content matches no known signature.
pub const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// An in-memory photo awaiting submission.
///
/// The declared media type is sniffed from the file's magic bytes, so a PNG
/// renamed to `.txt` still counts as an image and a text file renamed to
/// `.png` does not.
///
/// # Examples
///
/// ```
/// use pictune_core::PhotoFile;
///
/// let png = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR".to_vec();
/// let photo = PhotoFile::from_bytes("beach.png", png);
/// assert_eq!(photo.media_type(), "image/png");
/// assert!(photo.is_image());
///
/// let notes = PhotoFile::from_bytes("notes.txt", b"hello".to_vec());
/// assert!(!notes.is_image());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct PhotoFile {
    /// File name sent along with the upload
    file_name: String,
    /// Declared media type (e.g. `image/jpeg`)
    media_type: String,
    /// Raw file content
    bytes: Vec<u8>,
}

impl PhotoFile {
    /// Wraps content whose media type is already known.
    pub fn new(file_name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Wraps content, sniffing its media type.
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let media_type = infer::get(&bytes)
            .map(|kind| kind.mime_type())
            .unwrap_or(FALLBACK_MEDIA_TYPE);
        Self::new(file_name, media_type, bytes)
    }

    /// Reads a file from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be read.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, UploadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            let shown = path.display().to_string();
            if e.kind() == std::io::ErrorKind::NotFound {
                UploadError::new(UploadErrorKind::NotFound(shown))
            } else {
                UploadError::new(UploadErrorKind::FileRead(format!("{}: {}", shown, e)))
            }
        })?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "photo".to_string());

        let photo = Self::from_bytes(file_name, bytes);
        debug!(media_type = %photo.media_type, size = photo.byte_len(), "Read photo");
        Ok(photo)
    }

    /// Reads a file the way a picker restricted to images would.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not an image.
    pub fn open_image(path: impl AsRef<Path>) -> Result<Self, UploadError> {
        let shown = path.as_ref().display().to_string();
        let photo = Self::open(path)?;
        if !photo.is_image() {
            return Err(UploadError::new(UploadErrorKind::NotAnImage {
                path: shown,
                media_type: photo.media_type,
            }));
        }
        Ok(photo)
    }

    /// Whether the declared media type is an image type.
    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }

    /// Size of the content in bytes.
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }
}
