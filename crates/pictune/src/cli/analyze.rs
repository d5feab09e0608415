//! One-shot analysis command handler.

use super::OutputFormat;
use pictune::{
    AnalysisClient, AnalysisError, AnalysisErrorKind, AnalysisWorkflow, ClientConfig,
    LanguageFilter, PhotoFile, PictuneResult, SessionEvent, render,
};
use std::path::Path;
use std::sync::Arc;

/// Send a photo for analysis and print the filtered recommendations.
#[tracing::instrument(skip(config), fields(endpoint = %config.analyze_url()))]
pub async fn analyze_photo(
    config: ClientConfig,
    photo: &Path,
    language: LanguageFilter,
    format: OutputFormat,
) -> PictuneResult<()> {
    let photo = PhotoFile::open_image(photo)?;
    let mut workflow = AnalysisWorkflow::new(Arc::new(AnalysisClient::new(config)));

    workflow
        .dispatch(SessionEvent::LanguageSelected(language))
        .await;
    workflow.dispatch(SessionEvent::FilePicked(photo)).await;
    workflow.dispatch(SessionEvent::SubmitRequested).await;

    let session = workflow.session();
    if let Some(err) = session.notice() {
        return Err(err.clone().into());
    }
    let Some(result) = session.result() else {
        return Err(AnalysisError::new(AnalysisErrorKind::NoFileSelected).into());
    };

    match format {
        OutputFormat::Human => print!("{}", render::human(result, session.language())),
        OutputFormat::Json => println!("{}", render::json(result, session.language())?),
    }

    workflow.end();
    Ok(())
}
