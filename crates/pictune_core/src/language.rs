//! Language filter applied to recommendations.

use crate::Song;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// The language category a user narrows the song list to.
///
/// The id of each filter (`"all"`, `"hindi"`, `"english"`) is what a song's
/// lowercased language must equal to pass the filter. `All` passes every song.
///
/// # Examples
///
/// ```
/// use pictune_core::LanguageFilter;
///
/// let filter: LanguageFilter = "Hindi".parse().unwrap();
/// assert_eq!(filter, LanguageFilter::Hindi);
/// assert_eq!(filter.id(), "hindi");
/// assert_eq!(LanguageFilter::All.to_string(), "All Languages");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LanguageFilter {
    /// Every song, regardless of language
    #[default]
    #[display("All Languages")]
    All,
    /// Songs whose language is Hindi
    #[display("Hindi")]
    Hindi,
    /// Songs whose language is English
    #[display("English")]
    English,
}

impl LanguageFilter {
    /// Stable identifier, also the lowercase language a song must carry.
    pub fn id(self) -> &'static str {
        self.into()
    }

    /// Human readable label.
    pub fn label(self) -> String {
        self.to_string()
    }

    /// Whether `song` belongs in the filtered view.
    pub fn matches(self, song: &Song) -> bool {
        match self {
            Self::All => true,
            other => song.language().to_lowercase() == other.id(),
        }
    }

    /// The filter after this one, wrapping around.
    pub fn cycle_next(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let pos = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(pos + 1) % all.len()]
    }

    /// The filter before this one, wrapping around.
    pub fn cycle_previous(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let pos = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(pos + all.len() - 1) % all.len()]
    }
}
