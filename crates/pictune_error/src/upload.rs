//! Photo acquisition error types.

/// Kinds of failures while acquiring a photo from disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum UploadErrorKind {
    /// No file exists at the given path
    #[display("File not found: {}", _0)]
    NotFound(String),
    /// File exists but could not be read
    #[display("Failed to read file: {}", _0)]
    FileRead(String),
    /// The picker only hands out image files
    #[display("Not an image ({}): {}", media_type, path)]
    NotAnImage {
        /// Path that was offered
        path: String,
        /// Media type detected for it
        media_type: String,
    },
}

/// Photo acquisition error with location tracking.
///
/// # Examples
///
/// ```
/// use pictune_error::{UploadError, UploadErrorKind};
///
/// let err = UploadError::new(UploadErrorKind::NotFound("/tmp/missing.png".to_string()));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Upload Error: {} at line {} in {}", kind, line, file)]
pub struct UploadError {
    /// Error kind
    pub kind: UploadErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl UploadError {
    /// Create a new UploadError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: UploadErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
