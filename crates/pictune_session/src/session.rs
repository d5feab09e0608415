//! The session state machine.

use crate::{Command, RequestState, SessionEvent};
use derive_getters::Getters;
use pictune_core::{
    AnalysisResult, InMemoryPreviewStore, LanguageFilter, PhotoFile, Preview, PreviewRef,
    PreviewStore, Song, filter_songs,
};
use pictune_error::{AnalysisError, AnalysisErrorKind};
use tracing::{debug, info, warn};

/// The photo awaiting submission and the preview issued for it.
#[derive(Debug, Getters)]
pub struct PendingUpload {
    /// Photo that will be sent on submit
    photo: PhotoFile,
    /// Live preview handle, owned by the session until released
    #[getter(skip)]
    preview: PreviewRef,
}

/// One interactive analysis session.
///
/// All state changes go through [`Session::update`]. The session never
/// performs I/O itself; it returns a [`Command`] that its owner executes and
/// answers with [`SessionEvent::AnalysisSettled`].
///
/// At most one preview is live at any time. Replacing the held photo releases
/// the old preview before a new one is created, and [`Session::end`] (also
/// run on drop) releases whatever is still held.
#[derive(Debug)]
pub struct Session<P: PreviewStore = InMemoryPreviewStore> {
    previews: P,
    pending: Option<PendingUpload>,
    result: Option<AnalysisResult>,
    language: LanguageFilter,
    state: RequestState,
    notice: Option<AnalysisError>,
    ended: bool,
}

impl Default for Session<InMemoryPreviewStore> {
    fn default() -> Self {
        Self::new(InMemoryPreviewStore::default())
    }
}

impl<P: PreviewStore> Session<P> {
    /// Starts a session that issues previews from `previews`.
    pub fn new(previews: P) -> Self {
        Self {
            previews,
            pending: None,
            result: None,
            language: LanguageFilter::default(),
            state: RequestState::Idle,
            notice: None,
            ended: false,
        }
    }

    /// Applies an event and returns the side effect it requires, if any.
    pub fn update(&mut self, event: SessionEvent) -> Option<Command> {
        if self.ended {
            warn!(?event, "Event received after session ended, ignoring");
            return None;
        }

        match event {
            SessionEvent::FileDropped(photo) => {
                if photo.is_image() {
                    self.hold(photo);
                } else {
                    debug!(
                        file = %photo.file_name(),
                        media_type = %photo.media_type(),
                        "Ignoring dropped non-image file"
                    );
                }
                None
            }
            SessionEvent::FilePicked(photo) => {
                self.hold(photo);
                None
            }
            SessionEvent::SubmitRequested => self.submit(),
            SessionEvent::AnalysisSettled(outcome) => {
                self.settle(outcome);
                None
            }
            SessionEvent::LanguageSelected(language) => {
                debug!(%language, "Language filter changed");
                self.language = language;
                None
            }
            SessionEvent::NoticeDismissed => {
                self.notice = None;
                None
            }
        }
    }

    fn hold(&mut self, photo: PhotoFile) {
        if let Some(old) = self.pending.take() {
            self.previews.release(old.preview);
        }
        let preview = self.previews.create(&photo);
        info!(file = %photo.file_name(), size = photo.byte_len(), "Photo selected");
        self.pending = Some(PendingUpload { photo, preview });
    }

    fn submit(&mut self) -> Option<Command> {
        if self.state == RequestState::Requesting {
            debug!("Submit ignored while a request is outstanding");
            return None;
        }

        let Some(pending) = &self.pending else {
            warn!("Submit requested with no photo held");
            self.notice = Some(AnalysisError::new(AnalysisErrorKind::NoFileSelected));
            return None;
        };

        self.result = None;
        self.notice = None;
        self.state = RequestState::Requesting;
        info!(file = %pending.photo.file_name(), "Submitting photo for analysis");
        Some(Command::Analyze(pending.photo.clone()))
    }

    fn settle(&mut self, outcome: Result<AnalysisResult, AnalysisError>) {
        if self.state != RequestState::Requesting {
            warn!("Analysis settled with no request outstanding, ignoring");
            return;
        }

        match outcome {
            Ok(result) => {
                info!(mood = %result.mood(), songs = result.songs().len(), "Analysis succeeded");
                self.result = Some(result);
            }
            Err(err) => {
                warn!(error = %err, "Analysis failed");
                self.notice = Some(err);
            }
        }
        self.state = RequestState::Idle;
    }

    /// Releases the held preview. Calling this more than once is harmless.
    pub fn end(&mut self) {
        if self.ended {
            return;
        }
        if let Some(pending) = self.pending.take() {
            self.previews.release(pending.preview);
        }
        self.ended = true;
        debug!("Session ended");
    }

    /// Songs from the last result that pass the current language filter.
    pub fn filtered_songs(&self) -> Vec<&Song> {
        filter_songs(self.result.as_ref(), self.language)
    }

    /// Whether submit would start a request right now.
    pub fn can_submit(&self) -> bool {
        self.pending.is_some() && self.state == RequestState::Idle && !self.ended
    }

    /// Whether a request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.state == RequestState::Requesting
    }

    /// Photo held for submission.
    pub fn pending(&self) -> Option<&PendingUpload> {
        self.pending.as_ref()
    }

    /// Preview of the held photo.
    pub fn preview(&self) -> Option<&Preview> {
        self.pending
            .as_ref()
            .and_then(|pending| self.previews.get(&pending.preview))
    }

    /// Last successful result, if it has not been cleared by a new submit.
    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Current language filter.
    pub fn language(&self) -> LanguageFilter {
        self.language
    }

    /// Request state.
    pub fn state(&self) -> RequestState {
        self.state
    }

    /// Error awaiting the user's attention.
    pub fn notice(&self) -> Option<&AnalysisError> {
        self.notice.as_ref()
    }

    /// Text of the current notice.
    pub fn notice_message(&self) -> Option<String> {
        self.notice.as_ref().map(AnalysisError::user_message)
    }

    /// The preview store.
    pub fn previews(&self) -> &P {
        &self.previews
    }

    /// Whether [`Session::end`] has run.
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl<P: PreviewStore> Drop for Session<P> {
    fn drop(&mut self) {
        self.end();
    }
}
