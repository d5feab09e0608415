//! Errors raised by the PicTune terminal front end.

/// What went wrong while driving the terminal or its background work.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TuiErrorKind {
    /// Raw mode, the alternate screen or bracketed paste could not be enabled
    #[display("Failed to set up terminal: {}", _0)]
    TerminalSetup(String),
    /// The terminal could not be handed back to the shell
    #[display("Failed to restore terminal: {}", _0)]
    TerminalRestore(String),
    /// Waiting for key, paste or resize input failed
    #[display("Failed to poll for events: {}", _0)]
    EventPoll(String),
    /// An input event arrived but could not be read
    #[display("Failed to read event: {}", _0)]
    EventRead(String),
    /// Drawing a frame failed
    #[display("Failed to render: {}", _0)]
    Rendering(String),
    /// An analysis task ended without reporting its outcome
    #[display("Failed to dispatch analysis: {}", _0)]
    Dispatch(String),
}

impl TuiErrorKind {
    /// Whether the terminal itself is at fault, as opposed to background work.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Dispatch(_))
    }
}

/// Terminal front end error with the location it was raised at.
///
/// # Examples
///
/// ```
/// use pictune_error::{TuiError, TuiErrorKind};
///
/// let err = TuiError::new(TuiErrorKind::Dispatch("task panicked".to_string()));
/// assert!(format!("{}", err).contains("dispatch analysis"));
/// assert!(!err.kind.is_terminal());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("TUI Error: {} at line {} in {}", kind, line, file)]
pub struct TuiError {
    /// Error kind
    pub kind: TuiErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl TuiError {
    /// Create a new TuiError at the caller's location.
    #[track_caller]
    pub fn new(kind: TuiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for terminal front end operations.
pub type TuiResult<T> = Result<T, TuiError>;
