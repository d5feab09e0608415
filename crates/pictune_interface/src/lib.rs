//! Trait definitions for the PicTune client.
//!
//! The session state machine only knows about [`PhotoAnalyzer`]; the HTTP
//! client in `pictune_client` and the test doubles both implement it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use async_trait::async_trait;
use pictune_core::{AnalysisResult, PhotoFile};
use pictune_error::AnalysisError;

/// A backend that turns a photo into a mood and song recommendations.
#[async_trait]
pub trait PhotoAnalyzer: Send + Sync {
    /// Submit one photo and wait for the outcome.
    ///
    /// Implementations enforce their own deadline and classify failures into
    /// [`pictune_error::AnalysisErrorKind`].
    async fn analyze(&self, photo: &PhotoFile) -> Result<AnalysisResult, AnalysisError>;

    /// Where photos are sent (for logs and the UI footer).
    fn endpoint(&self) -> &str;
}
