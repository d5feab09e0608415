//! Executing session commands against an analyzer.

use crate::{Command, Session, SessionEvent};
use pictune_core::{AnalysisResult, InMemoryPreviewStore, PhotoFile, PreviewStore};
use pictune_error::{AnalysisError, AnalysisErrorKind};
use pictune_interface::PhotoAnalyzer;
use std::sync::Arc;
use tracing::instrument;

/// Analyzes `photo`, failing with [`AnalysisErrorKind::NoFileSelected`] when
/// there is nothing to send. The analyzer is not contacted in that case.
pub async fn analyze(
    analyzer: &dyn PhotoAnalyzer,
    photo: Option<&PhotoFile>,
) -> Result<AnalysisResult, AnalysisError> {
    let Some(photo) = photo else {
        return Err(AnalysisError::new(AnalysisErrorKind::NoFileSelected));
    };
    analyzer.analyze(photo).await
}

/// Runs a command and returns the event that reports its outcome.
#[instrument(skip_all, fields(endpoint = analyzer.endpoint()))]
pub async fn execute(analyzer: &dyn PhotoAnalyzer, command: Command) -> SessionEvent {
    match command {
        Command::Analyze(photo) => {
            SessionEvent::AnalysisSettled(analyze(analyzer, Some(&photo)).await)
        }
    }
}

/// A session driven to completion inline.
///
/// Every command produced by an event is executed before
/// [`AnalysisWorkflow::dispatch`] returns, so the session is never observed
/// mid-request. Front ends that must stay responsive while a request is in
/// flight drive [`Session`] directly and run [`execute`] on a task instead.
pub struct AnalysisWorkflow<P: PreviewStore = InMemoryPreviewStore> {
    session: Session<P>,
    analyzer: Arc<dyn PhotoAnalyzer>,
}

impl AnalysisWorkflow<InMemoryPreviewStore> {
    /// Creates a workflow with an in-memory preview store.
    pub fn new(analyzer: Arc<dyn PhotoAnalyzer>) -> Self {
        Self::with_previews(analyzer, InMemoryPreviewStore::default())
    }
}

impl<P: PreviewStore> AnalysisWorkflow<P> {
    /// Creates a workflow issuing previews from `previews`.
    pub fn with_previews(analyzer: Arc<dyn PhotoAnalyzer>, previews: P) -> Self {
        Self {
            session: Session::new(previews),
            analyzer,
        }
    }

    /// Applies an event and executes any resulting commands.
    pub async fn dispatch(&mut self, event: SessionEvent) {
        let mut next = self.session.update(event);
        while let Some(command) = next {
            let settled = execute(self.analyzer.as_ref(), command).await;
            next = self.session.update(settled);
        }
    }

    /// The underlying session.
    pub fn session(&self) -> &Session<P> {
        &self.session
    }

    /// Consumes the workflow, ending its session.
    pub fn end(mut self) {
        self.session.end();
    }
}
