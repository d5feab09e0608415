//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use pictune::{ClientConfig, LanguageFilter, PictuneResult};
use std::path::PathBuf;
use std::time::Duration;

/// PicTune - detect the mood of a photo and get matching songs
#[derive(Parser, Debug)]
#[command(name = "pictune")]
#[command(about = "Detect the mood of a photo and get matching song recommendations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base URL of the analysis API (overrides config and environment)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Request timeout in milliseconds (overrides config and environment)
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Configuration file to use instead of ./pictune.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Resolve the client configuration, applying command-line overrides last.
    pub fn client_config(&self) -> PictuneResult<ClientConfig> {
        let mut config = ClientConfig::load_from(self.config.as_deref(), None)?;
        if let Some(url) = &self.api_url {
            config = config.with_base_url(url.clone());
        }
        if let Some(ms) = self.timeout_ms {
            config = config.with_timeout(Duration::from_millis(ms));
        }
        config.validate()?;
        Ok(config)
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a photo and print its mood and recommended songs
    Analyze {
        /// Path to the photo
        photo: PathBuf,

        /// Only show songs in this language (all, hindi, english)
        #[arg(long, default_value = "all")]
        language: LanguageFilter,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Launch the terminal user interface
    Tui {
        /// Photo to select on startup
        photo: Option<PathBuf>,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
