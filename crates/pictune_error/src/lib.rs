//! Error types for the PicTune client.
//!
//! This crate provides the foundation error types used throughout the PicTune workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use pictune_error::{AnalysisError, AnalysisErrorKind, PictuneResult};
//!
//! fn submit() -> PictuneResult<()> {
//!     Err(AnalysisError::new(AnalysisErrorKind::NoFileSelected))?
//! }
//!
//! match submit() {
//!     Ok(()) => println!("Submitted"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod config;
mod error;
mod json;
#[cfg(feature = "tui")]
mod tui;
mod upload;

pub use analysis::{AnalysisError, AnalysisErrorKind};
pub use config::ConfigError;
pub use error::{PictuneError, PictuneErrorKind, PictuneResult};
pub use json::JsonError;
#[cfg(feature = "tui")]
pub use tui::{TuiError, TuiErrorKind, TuiResult};
pub use upload::{UploadError, UploadErrorKind};
