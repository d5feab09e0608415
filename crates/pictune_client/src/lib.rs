//! HTTP client for the PicTune mood-analysis API.
//!
//! [`AnalysisClient`] posts a photo as multipart form data to
//! `<base URL>/api/analyze-photo`, bounded by a client-side deadline, and
//! classifies the outcome into [`pictune_error::AnalysisErrorKind`].
//!
//! ```no_run
//! use pictune_client::{AnalysisClient, ClientConfig};
//! use pictune_core::PhotoFile;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AnalysisClient::new(ClientConfig::load()?);
//! let photo = PhotoFile::open_image("beach.jpg")?;
//! let result = client.analyze_photo(&photo).await?;
//! println!("Mood: {}", result.mood());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;

pub use client::{AnalysisClient, PHOTO_FIELD};
pub use config::{
    ClientConfig, DEFAULT_BASE_URL, DEFAULT_CONFIG_FILE, DEFAULT_TIMEOUT_MS, ENV_PREFIX,
};
