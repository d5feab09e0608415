//! PicTune CLI binary.
//!
//! This binary provides command-line access to PicTune:
//! - Analyze a photo and print its mood and matching songs
//! - Launch the TUI to pick photos and browse recommendations

use clap::Parser;
use pictune::PictuneErrorKind;
use pictune::logging::{LoggingConfig, default_log_file, init_logging};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, analyze_photo, launch_tui};

    // Load .env before anything reads the environment
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    let logging = LoggingConfig::new(log_level);
    match (&cli.command, default_log_file()) {
        // The TUI owns the terminal, so logs go to a file or nowhere
        (Commands::Tui { .. }, Some(path)) => init_logging(logging.with_log_file(path))?,
        (Commands::Tui { .. }, None) => {}
        _ => init_logging(logging)?,
    }

    let config = cli.client_config()?;

    let outcome = match cli.command {
        Commands::Analyze {
            photo,
            language,
            format,
        } => analyze_photo(config, &photo, language, format).await,
        Commands::Tui { photo } => launch_tui(config, photo).await,
    };

    if let Err(err) = outcome {
        match err.kind() {
            PictuneErrorKind::Analysis(e) => eprintln!("{}", e.user_message()),
            PictuneErrorKind::Upload(e) => eprintln!("{}", e.kind),
            PictuneErrorKind::Json(e) => eprintln!("{}", e.message),
            _ => return Err(err.into()),
        }
        std::process::exit(1);
    }

    Ok(())
}
