//! Core data types for the PicTune client.
//!
//! This crate provides the data model shared by every PicTune front end: the
//! songs and mood returned by the analysis API, the language filter applied to
//! them, the photo awaiting submission and the preview handles derived from it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod language;
mod photo;
mod preview;
mod song;

pub use analysis::{AnalysisResult, filter_songs};
pub use language::LanguageFilter;
pub use photo::{FALLBACK_MEDIA_TYPE, PhotoFile};
pub use preview::{InMemoryPreviewStore, Preview, PreviewRef, PreviewStore};
pub use song::{AudioFeatures, Song, SongBuilder, SongBuilderError};
