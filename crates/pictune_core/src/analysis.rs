//! Analysis results and the filtered view derived from them.

use crate::{LanguageFilter, Song};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The API's answer for one analyzed photo.
///
/// A result is immutable once received. A new successful analysis replaces it
/// wholesale.
///
/// # Examples
///
/// ```
/// use pictune_core::{AnalysisResult, LanguageFilter};
///
/// let result: AnalysisResult = serde_json::from_str(
///     r#"{"mood":"Happy","songs":[
///         {"title":"A","artist":"B","language":"Hindi"},
///         {"title":"C","artist":"D","language":"English"}]}"#,
/// ).unwrap();
///
/// assert_eq!(result.mood(), "Happy");
/// let hindi = result.filtered(LanguageFilter::Hindi);
/// assert_eq!(hindi.len(), 1);
/// assert_eq!(hindi[0].title(), "A");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct AnalysisResult {
    /// Detected mood label
    mood: String,
    /// Recommendations in server order
    #[serde(default, deserialize_with = "crate::song::null_as_default")]
    songs: Vec<Song>,
}

impl AnalysisResult {
    /// Creates a result from a mood and its recommendations.
    pub fn new(mood: impl Into<String>, songs: Vec<Song>) -> Self {
        Self {
            mood: mood.into(),
            songs,
        }
    }

    /// Songs passing `filter`, in server order.
    pub fn filtered(&self, filter: LanguageFilter) -> Vec<&Song> {
        self.songs.iter().filter(|song| filter.matches(song)).collect()
    }
}

/// Filtered view over the currently held result.
///
/// Returns an empty list when no result is held. Never reorders.
pub fn filter_songs(result: Option<&AnalysisResult>, filter: LanguageFilter) -> Vec<&Song> {
    result.map(|r| r.filtered(filter)).unwrap_or_default()
}
