//! TUI launch command handler.

use pictune::{ClientConfig, PictuneResult};
use std::path::PathBuf;

/// Launch the terminal user interface.
#[cfg(feature = "tui")]
pub async fn launch_tui(config: ClientConfig, photo: Option<PathBuf>) -> PictuneResult<()> {
    use pictune::{AnalysisClient, PhotoAnalyzer, run_tui};
    use std::sync::Arc;

    tracing::info!(endpoint = %config.analyze_url(), "Launching TUI");

    let analyzer: Arc<dyn PhotoAnalyzer> = Arc::new(AnalysisClient::new(config));
    let runtime = tokio::runtime::Handle::current();
    tokio::task::block_in_place(|| run_tui(analyzer, runtime, photo))?;

    Ok(())
}

#[cfg(not(feature = "tui"))]
pub async fn launch_tui(_config: ClientConfig, _photo: Option<PathBuf>) -> PictuneResult<()> {
    eprintln!("Error: TUI feature not enabled. Rebuild with --features tui");
    std::process::exit(1);
}
