//! Song recommendations returned by the analysis API.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Deserializer, Serialize};

/// Audio characteristics attached to a recommendation.
///
/// Note: Cannot derive `Eq` or `Hash` because every field is an `f64`.
///
/// # Examples
///
/// ```
/// use pictune_core::AudioFeatures;
///
/// let features = AudioFeatures::new(118.6, 0.72, 0.4, 0.915);
/// assert_eq!(features.tempo_bpm(), 119);
/// assert_eq!(features.energy_percent(), 72);
/// assert_eq!(features.match_percent(), 92);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Getters)]
pub struct AudioFeatures {
    /// Beats per minute
    tempo: f64,
    /// Energy in [0, 1]
    energy: f64,
    /// Musical positiveness in [0, 1]
    valence: f64,
    /// How well the song fits the detected mood, in [0, 1]
    match_score: f64,
}

impl AudioFeatures {
    /// Creates a new set of audio features.
    pub fn new(tempo: f64, energy: f64, valence: f64, match_score: f64) -> Self {
        Self {
            tempo,
            energy,
            valence,
            match_score,
        }
    }

    /// Tempo rounded to whole beats per minute.
    pub fn tempo_bpm(&self) -> i64 {
        self.tempo.round() as i64
    }

    /// Energy as a whole percentage.
    pub fn energy_percent(&self) -> u8 {
        as_percent(self.energy)
    }

    /// Valence as a whole percentage.
    pub fn valence_percent(&self) -> u8 {
        as_percent(self.valence)
    }

    /// Match score as a whole percentage.
    pub fn match_percent(&self) -> u8 {
        as_percent(self.match_score)
    }
}

fn as_percent(fraction: f64) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}

/// One recommended track.
///
/// Songs are read-only on the client: they are deserialized from the API,
/// filtered and displayed, never mutated.
///
/// # Examples
///
/// ```
/// use pictune_core::Song;
///
/// let song: Song = serde_json::from_str(
///     r#"{"title":"A","artist":"B","language":"Hindi"}"#,
/// ).unwrap();
/// assert_eq!(song.title(), "A");
/// assert!(song.genre().is_none());
/// assert!(song.audio_features().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct Song {
    /// Track title
    title: String,
    /// Performing artist
    artist: String,
    /// Free-form language label, compared case-insensitively
    #[serde(default, deserialize_with = "null_as_default")]
    #[builder(default)]
    language: String,
    /// Genre, when the API knows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    genre: Option<String>,
    /// Audio characteristics, when the API computed them
    #[serde(
        default,
        rename = "audioFeatures",
        skip_serializing_if = "Option::is_none"
    )]
    #[builder(default, setter(strip_option))]
    audio_features: Option<AudioFeatures>,
}

impl Song {
    /// Creates a new builder for `Song`.
    pub fn builder() -> SongBuilder {
        SongBuilder::default()
    }
}

/// Reads an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
