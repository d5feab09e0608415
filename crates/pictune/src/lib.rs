//! PicTune - photo mood detection and song recommendations
//!
//! PicTune sends a photo to a mood-analysis API and presents the detected mood
//! together with recommended songs, narrowed by language.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use pictune::{AnalysisClient, ClientConfig, LanguageFilter, PhotoFile};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AnalysisClient::new(ClientConfig::load()?);
//!     let photo = PhotoFile::open_image("beach.jpg")?;
//!
//!     let result = client.analyze_photo(&photo).await?;
//!     println!("Mood: {}", result.mood());
//!     for song in result.filtered(LanguageFilter::Hindi) {
//!         println!("{} - {}", song.title(), song.artist());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `tui` (default) - Terminal user interface
//!
//! # Architecture
//!
//! - `pictune_error` - Error types
//! - `pictune_core` - Songs, results, language filter, photos and previews
//! - `pictune_interface` - `PhotoAnalyzer` trait
//! - `pictune_client` - HTTP client and configuration
//! - `pictune_session` - Event-driven session state machine
//! - `pictune_tui` - Terminal UI
//!
//! This crate (`pictune`) re-exports everything for convenience.

pub mod logging;
pub mod render;

pub use pictune_client::*;
pub use pictune_core::*;
pub use pictune_error::*;
pub use pictune_interface::*;
pub use pictune_session::*;

#[cfg(feature = "tui")]
pub use pictune_tui::{App, InputMode, parse_dropped_path, run_tui};
