//! Top-level error wrapper types.

use crate::{AnalysisError, ConfigError, JsonError, UploadError};
#[cfg(feature = "tui")]
use crate::TuiError;

/// Every error the workspace can produce.
///
/// # Examples
///
/// ```
/// use pictune_error::{ConfigError, PictuneError};
///
/// let err: PictuneError = ConfigError::new("timeout_ms must be positive").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PictuneErrorKind {
    /// Analysis request error
    #[from(AnalysisError)]
    Analysis(AnalysisError),
    /// Photo acquisition error
    #[from(UploadError)]
    Upload(UploadError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Report serialization error
    #[from(JsonError)]
    Json(JsonError),
    /// TUI error
    #[cfg(feature = "tui")]
    #[from(TuiError)]
    Tui(TuiError),
}

/// PicTune error with kind discrimination.
///
/// # Examples
///
/// ```
/// use pictune_error::{AnalysisError, AnalysisErrorKind, PictuneErrorKind, PictuneResult};
///
/// fn might_fail() -> PictuneResult<()> {
///     Err(AnalysisError::new(AnalysisErrorKind::Timeout))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), PictuneErrorKind::Analysis(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("PicTune Error: {}", _0)]
pub struct PictuneError(Box<PictuneErrorKind>);

impl PictuneError {
    /// Create a new error from a kind.
    pub fn new(kind: PictuneErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PictuneErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to PictuneErrorKind
impl<T> From<T> for PictuneError
where
    T: Into<PictuneErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for PicTune operations.
pub type PictuneResult<T> = std::result::Result<T, PictuneError>;
