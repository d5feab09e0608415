//! Scripted analyzer for session tests.

#![allow(dead_code)]

use async_trait::async_trait;
use pictune_core::{AnalysisResult, PhotoFile, Song};
use pictune_error::{AnalysisError, AnalysisErrorKind};
use pictune_interface::PhotoAnalyzer;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Answers every request with the same outcome and counts calls.
pub struct MockAnalyzer {
    outcome: Result<AnalysisResult, AnalysisErrorKind>,
    calls: AtomicUsize,
    seen: Mutex<Vec<String>>,
}

impl MockAnalyzer {
    pub fn succeeding(result: AnalysisResult) -> Self {
        Self {
            outcome: Ok(result),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(kind: AnalysisErrorKind) -> Self {
        Self {
            outcome: Err(kind),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// File names of every photo submitted, in order.
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().expect("poisoned").clone()
    }
}

#[async_trait]
impl PhotoAnalyzer for MockAnalyzer {
    async fn analyze(&self, photo: &PhotoFile) -> Result<AnalysisResult, AnalysisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .expect("poisoned")
            .push(photo.file_name().clone());
        self.outcome.clone().map_err(AnalysisError::new)
    }

    fn endpoint(&self) -> &str {
        "mock://analyze"
    }
}

pub fn song(title: &str, artist: &str, language: &str) -> Song {
    Song::builder()
        .title(title)
        .artist(artist)
        .language(language)
        .build()
        .expect("complete song")
}

pub fn happy_result() -> AnalysisResult {
    AnalysisResult::new(
        "Happy",
        vec![song("A", "B", "Hindi"), song("C", "D", "English")],
    )
}

pub fn png(name: &str) -> PhotoFile {
    PhotoFile::new(name, "image/png", b"\x89PNG\r\n\x1a\n".to_vec())
}

pub fn text_file(name: &str) -> PhotoFile {
    PhotoFile::new(name, "text/plain", b"hello".to_vec())
}
