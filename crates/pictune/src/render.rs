//! Printing analysis results outside the terminal UI.

use pictune_core::{AnalysisResult, LanguageFilter, Song};
use pictune_error::JsonError;
use serde::Serialize;
use std::fmt::Write;

/// Shown when the filter leaves no songs.
pub const NO_SONGS_MESSAGE: &str = "No songs found for this language";

/// Machine readable report of one analysis.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    /// Detected mood
    pub mood: &'a str,
    /// Filter the songs were narrowed by
    pub language: LanguageFilter,
    /// Songs passing the filter, in server order
    pub songs: Vec<&'a Song>,
}

impl<'a> Report<'a> {
    /// Build a report of `result` narrowed by `language`.
    pub fn new(result: &'a AnalysisResult, language: LanguageFilter) -> Self {
        Self {
            mood: result.mood(),
            language,
            songs: result.filtered(language),
        }
    }
}

/// Render the mood and filtered songs for a terminal.
///
/// # Examples
///
/// ```
/// use pictune::render::human;
/// use pictune::{AnalysisResult, LanguageFilter};
///
/// let result = AnalysisResult::new("Calm", Vec::new());
/// let text = human(&result, LanguageFilter::All);
/// assert!(text.starts_with("Detected Mood: Calm"));
/// assert!(text.contains("No songs found for this language"));
/// ```
pub fn human(result: &AnalysisResult, language: LanguageFilter) -> String {
    let songs = result.filtered(language);
    let mut out = String::new();

    let _ = writeln!(out, "Detected Mood: {}", result.mood());
    let _ = writeln!(
        out,
        "{} song{} ({})",
        songs.len(),
        if songs.len() == 1 { "" } else { "s" },
        language
    );
    let _ = writeln!(out);

    if songs.is_empty() {
        let _ = writeln!(out, "{}", NO_SONGS_MESSAGE);
        return out;
    }

    for (i, song) in songs.iter().enumerate() {
        let _ = write!(out, "{:>3}. {} - {}", i + 1, song.title(), song.artist());
        if !song.language().is_empty() {
            let _ = write!(out, " [{}]", song.language());
        }
        if let Some(genre) = song.genre() {
            let _ = write!(out, " {}", genre);
        }
        let _ = writeln!(out);

        if let Some(features) = song.audio_features() {
            let _ = writeln!(
                out,
                "     {} BPM | Energy {}% | Valence {}% | Match {}%",
                features.tempo_bpm(),
                features.energy_percent(),
                features.valence_percent(),
                features.match_percent()
            );
        }
    }

    out
}

/// Render the mood and filtered songs as pretty-printed JSON.
pub fn json(result: &AnalysisResult, language: LanguageFilter) -> Result<String, JsonError> {
    serde_json::to_string_pretty(&Report::new(result, language))
        .map_err(|e| JsonError::new(format!("Failed to serialize report: {}", e)))
}
