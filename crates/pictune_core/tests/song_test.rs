use pictune_core::{AnalysisResult, AudioFeatures, LanguageFilter, Song};

#[test]
fn full_song_deserializes() -> anyhow::Result<()> {
    let song: Song = serde_json::from_str(
        r#"{
            "title": "Kesariya",
            "artist": "Arijit Singh",
            "language": "Hindi",
            "genre": "Romantic",
            "audioFeatures": {"tempo": 93.7, "energy": 0.45, "valence": 0.61, "match_score": 0.88}
        }"#,
    )?;

    assert_eq!(song.title(), "Kesariya");
    assert_eq!(song.genre().as_deref(), Some("Romantic"));
    let features = song.audio_features().expect("features present");
    assert_eq!(features.tempo_bpm(), 94);
    assert_eq!(features.energy_percent(), 45);
    assert_eq!(features.valence_percent(), 61);
    assert_eq!(features.match_percent(), 88);
    Ok(())
}

#[test]
fn optional_fields_may_be_absent() -> anyhow::Result<()> {
    let song: Song = serde_json::from_str(r#"{"title":"A","artist":"B","language":"English"}"#)?;
    assert!(song.genre().is_none());
    assert!(song.audio_features().is_none());
    Ok(())
}

#[test]
fn missing_language_is_empty() -> anyhow::Result<()> {
    let song: Song = serde_json::from_str(r#"{"title":"A","artist":"B"}"#)?;
    assert_eq!(song.language(), "");
    Ok(())
}

#[test]
fn null_language_is_empty() -> anyhow::Result<()> {
    let result: AnalysisResult = serde_json::from_str(
        r#"{"mood":"Happy","songs":[
            {"title":"A","artist":"B","language":null},
            {"title":"C","artist":"D","language":"Hindi"}]}"#,
    )?;

    assert_eq!(result.songs().len(), 2);
    assert_eq!(result.songs()[0].language(), "");
    let hindi = result.filtered(LanguageFilter::Hindi);
    assert_eq!(hindi.len(), 1);
    assert_eq!(hindi[0].title(), "C");
    assert_eq!(result.filtered(LanguageFilter::All).len(), 2);
    Ok(())
}

#[test]
fn missing_songs_is_empty_list() -> anyhow::Result<()> {
    let result: AnalysisResult = serde_json::from_str(r#"{"mood":"Sad"}"#)?;
    assert!(result.songs().is_empty());
    Ok(())
}

#[test]
fn null_songs_is_empty_list() -> anyhow::Result<()> {
    let result: AnalysisResult = serde_json::from_str(r#"{"mood":"Happy","songs":null}"#)?;
    assert_eq!(result.mood(), "Happy");
    assert!(result.songs().is_empty());
    Ok(())
}

#[test]
fn result_without_mood_is_rejected() {
    let parsed = serde_json::from_str::<AnalysisResult>(r#"{"songs":[]}"#);
    assert!(parsed.is_err());
}

#[test]
fn serialization_uses_wire_names() -> anyhow::Result<()> {
    let song = Song::builder()
        .title("A")
        .artist("B")
        .language("Hindi")
        .audio_features(AudioFeatures::new(120.0, 0.5, 0.5, 0.5))
        .build()?;

    let json = serde_json::to_value(&song)?;
    assert!(json.get("audioFeatures").is_some());
    assert!(json["audioFeatures"].get("match_score").is_some());
    // Absent genre is omitted, not null
    assert!(json.get("genre").is_none());
    Ok(())
}

#[test]
fn percentages_are_clamped() {
    let features = AudioFeatures::new(-3.0, 1.4, -0.2, 0.004);
    assert_eq!(features.energy_percent(), 100);
    assert_eq!(features.valence_percent(), 0);
    assert_eq!(features.match_percent(), 0);
    assert_eq!(features.tempo_bpm(), -3);
}
