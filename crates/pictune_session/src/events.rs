//! Events consumed and commands produced by a session.

use pictune_core::{AnalysisResult, LanguageFilter, PhotoFile};
use pictune_error::AnalysisError;

/// Something that happened to the session.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A file was dropped onto the upload area
    FileDropped(PhotoFile),
    /// A file was chosen with the picker
    FilePicked(PhotoFile),
    /// The user asked for the held photo to be analyzed
    SubmitRequested,
    /// The outstanding analysis request finished
    AnalysisSettled(Result<AnalysisResult, AnalysisError>),
    /// The user chose a language filter
    LanguageSelected(LanguageFilter),
    /// The user acknowledged the current notice
    NoticeDismissed,
}

/// Side effect the session asks its owner to perform.
///
/// The owner reports back with [`SessionEvent::AnalysisSettled`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Send this photo to the analysis API
    Analyze(PhotoFile),
}

/// Whether a request is outstanding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RequestState {
    /// Nothing in flight; submit is allowed
    #[default]
    Idle,
    /// One request in flight; submit is disabled
    Requesting,
}
