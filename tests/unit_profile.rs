// Unit tests for normalization, stop words and frequency profiles.
//
// Tests isolated pure functions through the public API: normalize edge
// cases, StopWordSet construction, and FrequencyProfiler invariants.

use wordprint::profile::frequency::{FrequencyProfiler, DEFAULT_TOP_WORDS};
use wordprint::profile::normalize::normalize;
use wordprint::profile::stopwords::{StopWordSet, DEFAULT_STOP_WORDS};
use wordprint::profile::traits::ProfileExtractor;

// ============================================================
// normalize — edge cases
// ============================================================

#[test]
fn normalize_empty_string() {
    assert_eq!(normalize(""), "");
}

#[test]
fn normalize_strips_trailing_punctuation() {
    assert_eq!(normalize("Hello,!"), "HELLO");
}

#[test]
fn normalize_keeps_digits_and_drops_hyphen() {
    assert_eq!(normalize("123-abc"), "123ABC");
}

#[test]
fn normalize_is_idempotent_on_normalized_input() {
    for raw in ["Hello,!", "123-abc", "it's", "(parenthetical)", "ÀBC"] {
        let once = normalize(raw);
        assert_eq!(normalize(&once), once, "not idempotent for {raw:?}");
    }
}

#[test]
fn normalize_output_is_uppercase_alphanumeric() {
    let out = normalize("Mixed_Case-123 with SPACES\t!");
    assert!(out
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
}

// ============================================================
// FrequencyProfiler — invariants
// ============================================================

fn long_text(distinct: usize) -> String {
    // word{i} repeated i+1 times, so every word has a distinct count
    (0..distinct)
        .flat_map(|i| std::iter::repeat(format!("word{i}")).take(i + 1))
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn profile_size_is_capped_at_default_top_words() {
    let text = long_text(150);
    let profile = FrequencyProfiler::default().extract(&text, &StopWordSet::default());
    assert_eq!(profile.len(), DEFAULT_TOP_WORDS);
    assert_eq!(profile.vocabulary_size, 150);
    // The most frequent word is the last one generated
    assert_eq!(profile.words[0].word, "WORD149");
}

#[test]
fn profile_is_ranked_by_frequency() {
    let text = long_text(30);
    let profile = FrequencyProfiler::default().extract(&text, &StopWordSet::default());
    assert!(profile
        .words
        .windows(2)
        .all(|w| w[0].frequency >= w[1].frequency));
}

#[test]
fn untruncated_profile_sums_to_one() {
    let text = "Alpha beta, gamma! BETA gamma gamma delta... 42 42";
    let profile = FrequencyProfiler::default().extract(text, &StopWordSet::default());
    assert!(!profile.is_truncated());
    let sum = profile.total_frequency();
    assert!((sum - 1.0).abs() < 1e-9, "Frequencies sum to {sum}");
}

#[test]
fn profile_keys_are_non_empty_and_exclude_stop_words() {
    let text = "The history of the island and an account in a book, - ; the end";
    let stop_words = StopWordSet::default();
    let profile = FrequencyProfiler::default().extract(text, &stop_words);
    assert!(!profile.is_empty());
    for entry in &profile.words {
        assert!(!entry.word.is_empty());
        assert!(
            !DEFAULT_STOP_WORDS.contains(&entry.word.as_str()),
            "{} is a stop word",
            entry.word
        );
        assert!(entry.frequency > 0.0 && entry.frequency <= 1.0);
    }
}

#[test]
fn only_stop_words_yields_empty_profile() {
    let profile =
        FrequencyProfiler::default().extract("the The THE the.", &StopWordSet::default());
    assert!(profile.is_empty());
    assert_eq!(profile.kept_tokens, 0);
    assert_eq!(profile.vocabulary_size, 0);
}

#[test]
fn whitespace_only_yields_empty_profile() {
    let profile = FrequencyProfiler::default().extract(" \n\t  ", &StopWordSet::default());
    assert!(profile.is_empty());
}

#[test]
fn tie_break_at_truncation_boundary_is_alphabetical() {
    // Four words with one occurrence each, only two survive
    let profiler = FrequencyProfiler::new(2);
    let profile = profiler.extract("delta alpha charlie bravo", &StopWordSet::empty());
    let kept: Vec<&str> = profile.words.iter().map(|w| w.word.as_str()).collect();
    assert_eq!(kept, vec!["ALPHA", "BRAVO"]);
}

#[test]
fn custom_stop_words_apply() {
    let stop_words = StopWordSet::parse("cat");
    let profile = FrequencyProfiler::default().extract("cat cat dog the", &stop_words);
    // "the" is no longer a stop word with a custom list
    assert!(profile.frequency("CAT").is_none());
    assert!((profile.frequency("DOG").unwrap() - 0.5).abs() < 1e-12);
    assert!((profile.frequency("THE").unwrap() - 0.5).abs() < 1e-12);
}

#[test]
fn profile_serializes_ranked_words() {
    let profile = FrequencyProfiler::default().extract("cat cat dog", &StopWordSet::default());
    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json["kept_tokens"], 3);
    assert_eq!(json["words"][0]["word"], "CAT");
    assert_eq!(json["words"][1]["word"], "DOG");
}
