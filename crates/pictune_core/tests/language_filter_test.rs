use pictune_core::{AnalysisResult, LanguageFilter, Song, filter_songs};
use strum::IntoEnumIterator;

fn song(title: &str, language: &str) -> Song {
    Song::builder()
        .title(title)
        .artist("Someone")
        .language(language)
        .build()
        .expect("Failed to build song")
}

fn mixed_result() -> AnalysisResult {
    AnalysisResult::new(
        "Calm",
        vec![
            song("one", "Hindi"),
            song("two", "english"),
            song("three", "HINDI"),
            song("four", "Punjabi"),
            song("five", ""),
            song("six", "English"),
        ],
    )
}

fn titles(songs: &[&Song]) -> Vec<String> {
    songs.iter().map(|s| s.title().clone()).collect()
}

#[test]
fn happy_example_end_to_end() -> anyhow::Result<()> {
    let result: AnalysisResult = serde_json::from_str(
        r#"{"mood":"Happy","songs":[
            {"title":"A","artist":"B","language":"Hindi"},
            {"title":"C","artist":"D","language":"English"}]}"#,
    )?;

    assert_eq!(result.mood(), "Happy");
    assert_eq!(titles(&result.filtered(LanguageFilter::Hindi)), vec!["A"]);
    assert_eq!(titles(&result.filtered(LanguageFilter::English)), vec!["C"]);
    assert_eq!(titles(&result.filtered(LanguageFilter::All)), vec!["A", "C"]);
    Ok(())
}

#[test]
fn all_returns_every_song_in_order() {
    let result = mixed_result();
    let all = result.filtered(LanguageFilter::All);
    assert_eq!(all.len(), result.songs().len());
    for (filtered, original) in all.iter().zip(result.songs()) {
        assert_eq!(*filtered, original);
    }
}

#[test]
fn language_comparison_ignores_case() {
    let result = mixed_result();
    assert_eq!(
        titles(&result.filtered(LanguageFilter::Hindi)),
        vec!["one", "three"]
    );
    assert_eq!(
        titles(&result.filtered(LanguageFilter::English)),
        vec!["two", "six"]
    );
}

#[test]
fn membership_matches_rule_for_every_filter() {
    let result = mixed_result();
    for filter in LanguageFilter::iter() {
        let filtered = result.filtered(filter);
        for s in result.songs() {
            let expected = filter == LanguageFilter::All
                || s.language().to_lowercase() == filter.id();
            assert_eq!(
                filtered.contains(&s),
                expected,
                "{} under {:?}",
                s.title(),
                filter
            );
        }
    }
}

#[test]
fn filtered_view_is_ordered_subset() {
    let result = mixed_result();
    for filter in LanguageFilter::iter() {
        let filtered = result.filtered(filter);
        // Positions in the original list must be strictly increasing
        let positions: Vec<usize> = filtered
            .iter()
            .map(|f| {
                result
                    .songs()
                    .iter()
                    .position(|s| std::ptr::eq(s, *f))
                    .expect("filtered song not in result")
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn unknown_languages_only_pass_all() {
    let result = mixed_result();
    let punjabi_visible: Vec<LanguageFilter> = LanguageFilter::iter()
        .filter(|f| f.matches(&result.songs()[3]))
        .collect();
    assert_eq!(punjabi_visible, vec![LanguageFilter::All]);
}

#[test]
fn no_result_yields_empty_view() {
    for filter in LanguageFilter::iter() {
        assert!(filter_songs(None, filter).is_empty());
    }
    let result = mixed_result();
    assert_eq!(filter_songs(Some(&result), LanguageFilter::Hindi).len(), 2);
}

#[test]
fn filters_parse_from_ids() -> anyhow::Result<()> {
    assert_eq!("all".parse::<LanguageFilter>()?, LanguageFilter::All);
    assert_eq!("ENGLISH".parse::<LanguageFilter>()?, LanguageFilter::English);
    assert!("french".parse::<LanguageFilter>().is_err());
    Ok(())
}

#[test]
fn labels_and_ids() {
    assert_eq!(LanguageFilter::All.label(), "All Languages");
    assert_eq!(LanguageFilter::Hindi.label(), "Hindi");
    assert_eq!(LanguageFilter::English.id(), "english");
    assert_eq!(LanguageFilter::default(), LanguageFilter::All);
}

#[test]
fn cycling_wraps_around() {
    assert_eq!(LanguageFilter::All.cycle_next(), LanguageFilter::Hindi);
    assert_eq!(LanguageFilter::English.cycle_next(), LanguageFilter::All);
    assert_eq!(LanguageFilter::All.cycle_previous(), LanguageFilter::English);
    for filter in LanguageFilter::iter() {
        assert_eq!(filter.cycle_next().cycle_previous(), filter);
    }
}
