// Stop word sets.
//
// A stop word set holds normalized words that are excluded from all counting.
// It is built once at startup and passed by reference into every profiling
// call, so profiles never depend on hidden global state.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

use super::normalize::normalize;

/// The literal set used when nothing else is configured.
pub const DEFAULT_STOP_WORDS: [&str; 6] = ["A", "AND", "AN", "OF", "IN", "THE"];

/// Read-only set of normalized words excluded from frequency counting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl Default for StopWordSet {
    fn default() -> Self {
        Self::from_words(DEFAULT_STOP_WORDS)
    }
}

impl StopWordSet {
    /// A set that excludes nothing.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Build a set from raw words. Each word goes through the normalizer so
    /// that "the", "The" and "THE," all land on the same key; words that
    /// normalize to nothing are ignored.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// The English list shipped by the `stop-words` crate, normalized.
    pub fn english() -> Self {
        Self::from_words(get(LANGUAGE::English))
    }

    /// Parse a configuration value: `english` selects the bundled English
    /// list, anything else is treated as a comma-separated word list.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("english") {
            Self::english()
        } else {
            Self::from_words(trimmed.split(','))
        }
    }

    /// Whether a normalized word is excluded.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
