//! Analysis request error types.

/// Ways an analysis request can fail.
///
/// Every kind is recoverable: the session returns to idle and the user may
/// submit again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum AnalysisErrorKind {
    /// Analysis was triggered with no photo held
    #[display("No photo selected")]
    NoFileSelected,
    /// The request did not settle before the client deadline and was aborted
    #[display("Request timed out")]
    Timeout,
    /// The API answered with a non-success status
    #[display("Server responded with {}: {}", status, message)]
    ServerError {
        /// HTTP status code
        status: u16,
        /// Message from the error body, or a generic fallback
        message: String,
    },
    /// Transport-level failure (connection refused, DNS, ...)
    #[display("Network error: {}", _0)]
    NetworkError(String),
    /// A success response whose body is not a valid analysis result
    #[display("Invalid response: {}", _0)]
    InvalidResponse(String),
}

impl AnalysisErrorKind {
    /// Builds a server error from a status code and an optional message
    /// extracted from the error body.
    ///
    /// Falls back to `"Server error: <status>"` when no message is available.
    ///
    /// # Examples
    ///
    /// ```
    /// use pictune_error::AnalysisErrorKind;
    ///
    /// let kind = AnalysisErrorKind::server(503, None);
    /// assert_eq!(kind.user_message(), "Server error: 503");
    ///
    /// let kind = AnalysisErrorKind::server(400, Some("bad image".to_string()));
    /// assert_eq!(kind.user_message(), "bad image");
    /// ```
    pub fn server(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("Server error: {}", status));
        Self::ServerError { status, message }
    }

    /// Text shown to the user when this error is surfaced as a notice.
    pub fn user_message(&self) -> String {
        match self {
            Self::NoFileSelected => "Please select a photo first".to_string(),
            Self::Timeout => "Request timed out. Please try again.".to_string(),
            Self::ServerError { message, .. } => message.clone(),
            Self::NetworkError(message) | Self::InvalidResponse(message) => {
                format!("Failed to analyze image: {}", message)
            }
        }
    }
}

/// Analysis error with source location tracking.
///
/// # Examples
///
/// ```
/// use pictune_error::{AnalysisError, AnalysisErrorKind};
///
/// let err = AnalysisError::new(AnalysisErrorKind::Timeout);
/// assert!(err.is_timeout());
/// assert!(format!("{}", err).contains("timed out"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Analysis Error: {} at line {} in {}", kind, line, file)]
pub struct AnalysisError {
    /// Error kind
    pub kind: AnalysisErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl AnalysisError {
    /// Create a new AnalysisError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AnalysisErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AnalysisErrorKind {
        &self.kind
    }

    /// Whether the request was aborted by the client deadline.
    pub fn is_timeout(&self) -> bool {
        self.kind == AnalysisErrorKind::Timeout
    }

    /// Text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        self.kind.user_message()
    }
}
