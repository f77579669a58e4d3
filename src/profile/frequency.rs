// Top-N word frequency profiles.
//
// A profile is built in one pass over a document's tokens: normalize each
// token, drop empties and stop words, count the rest. Counts are then ranked
// and only the top N survive. Frequencies are relative to every kept token
// in the document, not just the survivors, so a truncated profile sums to
// less than 1.0.
//
// Ranking is by count descending, then by word ascending. Counts are exact
// integers, so equal frequencies are always detected as ties and the word
// order settles them the same way on every run.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::normalize::normalize;
use super::stopwords::StopWordSet;
use super::traits::ProfileExtractor;

/// Default number of words retained per profile.
pub const DEFAULT_TOP_WORDS: usize = 100;

/// One ranked entry of a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordFrequency {
    /// Normalized word (uppercase ASCII alphanumerics, never empty)
    pub word: String,
    /// Raw occurrence count in the document
    pub count: u64,
    /// count / kept tokens, in [0, 1]
    pub frequency: f64,
}

/// A document's most frequent words with their normalized frequencies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrequencyProfile {
    /// Retained words, highest frequency first
    pub words: Vec<WordFrequency>,
    /// Number of tokens that survived normalization and stop-word filtering
    pub kept_tokens: u64,
    /// Distinct kept words before truncation
    pub vocabulary_size: usize,
}

impl FrequencyProfile {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether truncation dropped part of the vocabulary.
    pub fn is_truncated(&self) -> bool {
        self.words.len() < self.vocabulary_size
    }

    /// Frequency of a normalized word, if it was retained.
    pub fn frequency(&self, word: &str) -> Option<f64> {
        self.words
            .iter()
            .find(|w| w.word == word)
            .map(|w| w.frequency)
    }

    /// The retained words as a flat map (word -> frequency).
    /// Used for computing similarity between two profiles.
    pub fn weights(&self) -> HashMap<&str, f64> {
        self.words
            .iter()
            .map(|w| (w.word.as_str(), w.frequency))
            .collect()
    }

    /// Sum of the retained frequencies. 1.0 for an untruncated, non-empty
    /// profile (up to rounding), less when truncated, 0.0 when empty.
    pub fn total_frequency(&self) -> f64 {
        self.words.iter().map(|w| w.frequency).sum()
    }
}

/// Frequency profiler that keeps the `top_n` most frequent words.
#[derive(Debug, Clone)]
pub struct FrequencyProfiler {
    pub top_n: usize,
}

impl Default for FrequencyProfiler {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_WORDS,
        }
    }
}

impl FrequencyProfiler {
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    /// Build a profile from a stream of raw tokens.
    pub fn profile_tokens<I, S>(&self, tokens: I, stop_words: &StopWordSet) -> FrequencyProfile
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: HashMap<String, u64> = HashMap::new();
        let mut kept_tokens: u64 = 0;

        for token in tokens {
            let word = normalize(token.as_ref());
            if word.is_empty() || stop_words.contains(&word) {
                continue;
            }
            *counts.entry(word).or_insert(0) += 1;
            kept_tokens += 1;
        }

        // Nothing countable: the profile is empty rather than a division by zero
        if kept_tokens == 0 {
            debug!("No countable words, returning empty profile");
            return FrequencyProfile::default();
        }

        let vocabulary_size = counts.len();
        let mut ranked: Vec<(String, u64)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(self.top_n);

        let total = kept_tokens as f64;
        let words = ranked
            .into_iter()
            .map(|(word, count)| WordFrequency {
                word,
                count,
                frequency: count as f64 / total,
            })
            .collect::<Vec<_>>();

        debug!(
            kept_tokens,
            vocabulary = vocabulary_size,
            retained = words.len(),
            "Built frequency profile"
        );

        FrequencyProfile {
            words,
            kept_tokens,
            vocabulary_size,
        }
    }
}

impl ProfileExtractor for FrequencyProfiler {
    fn extract(&self, text: &str, stop_words: &StopWordSet) -> FrequencyProfile {
        self.profile_tokens(text.split_whitespace(), stop_words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(text: &str) -> FrequencyProfile {
        FrequencyProfiler::default().extract(text, &StopWordSet::default())
    }

    #[test]
    fn test_basic_counts() {
        let p = profile("cat cat dog");
        assert_eq!(p.kept_tokens, 3);
        assert_eq!(p.len(), 2);
        assert_eq!(p.words[0].word, "CAT");
        assert_eq!(p.words[0].count, 2);
        assert!((p.words[0].frequency - 2.0 / 3.0).abs() < 1e-12);
        assert!((p.frequency("DOG").unwrap() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_stop_words_do_not_count() {
        let p = profile("The cat and the hat");
        assert_eq!(p.kept_tokens, 2);
        assert!(p.frequency("THE").is_none());
        assert!(p.frequency("AND").is_none());
        assert!((p.frequency("CAT").unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_tokens_do_not_count() {
        let p = profile("cat -- ... !!! dog");
        assert_eq!(p.kept_tokens, 2);
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn test_only_stop_words_gives_empty_profile() {
        let p = profile("the the THE The");
        assert!(p.is_empty());
        assert_eq!(p.kept_tokens, 0);
        assert_eq!(p.total_frequency(), 0.0);
    }

    #[test]
    fn test_case_and_punctuation_merge() {
        let p = profile("Dog, dog. DOG!");
        assert_eq!(p.len(), 1);
        assert_eq!(p.words[0].count, 3);
        assert!((p.words[0].frequency - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_ties_break_alphabetically() {
        let p = profile("zebra apple mango zebra apple mango");
        let order: Vec<&str> = p.words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(order, vec!["APPLE", "MANGO", "ZEBRA"]);
    }

    #[test]
    fn test_truncation_keeps_top_n() {
        let profiler = FrequencyProfiler::new(2);
        let p = profiler.extract("c c c b b a d", &StopWordSet::empty());
        assert_eq!(p.len(), 2);
        assert_eq!(p.vocabulary_size, 4);
        assert!(p.is_truncated());
        assert_eq!(p.words[0].word, "C");
        assert_eq!(p.words[1].word, "B");
        // Frequencies stay relative to all kept tokens
        assert!((p.words[0].frequency - 3.0 / 7.0).abs() < 1e-12);
        assert!(p.total_frequency() < 1.0);
    }

    #[test]
    fn test_untruncated_sums_to_one() {
        let p = profile("one two two three three three four four four four");
        assert!(!p.is_truncated());
        assert!((p.total_frequency() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_weights_map() {
        let p = profile("cat cat dog");
        let w = p.weights();
        assert_eq!(w.len(), 2);
        assert!((w["CAT"] - 2.0 / 3.0).abs() < 1e-12);
    }
}
