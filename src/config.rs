use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::corpus::DocumentCorpus;
use crate::profile::frequency::DEFAULT_TOP_WORDS;
use crate::profile::stopwords::StopWordSet;
use crate::ranking::pairs::DEFAULT_TOP_PAIRS;

/// Where the ranked report is written unless configured otherwise.
pub const DEFAULT_OUTPUT_PATH: &str = "similarity_results.txt";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Command
/// line flags override whatever is set here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Documents to compare (WORDPRINT_DOCUMENTS, a platform path list)
    pub documents: Vec<PathBuf>,
    /// Words excluded from counting (WORDPRINT_STOP_WORDS)
    pub stop_words: StopWordSet,
    /// Words kept per profile (WORDPRINT_TOP_WORDS, default 100)
    pub top_words: usize,
    /// Pairs shown and saved (WORDPRINT_TOP_PAIRS, default 10)
    pub top_pairs: usize,
    /// Report file (WORDPRINT_OUTPUT, default similarity_results.txt)
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            documents: Vec::new(),
            stop_words: StopWordSet::default(),
            top_words: DEFAULT_TOP_WORDS,
            top_pairs: DEFAULT_TOP_PAIRS,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup. Unset or blank
    /// values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let documents = get("WORDPRINT_DOCUMENTS")
            .map(|v| env::split_paths(&v).collect())
            .unwrap_or_default();

        let stop_words = get("WORDPRINT_STOP_WORDS")
            .map(|v| StopWordSet::parse(&v))
            .unwrap_or(defaults.stop_words);

        let top_words = match get("WORDPRINT_TOP_WORDS") {
            Some(v) => parse_count("WORDPRINT_TOP_WORDS", &v)?,
            None => defaults.top_words,
        };
        if top_words == 0 {
            anyhow::bail!("WORDPRINT_TOP_WORDS must be at least 1");
        }

        let top_pairs = match get("WORDPRINT_TOP_PAIRS") {
            Some(v) => parse_count("WORDPRINT_TOP_PAIRS", &v)?,
            None => defaults.top_pairs,
        };

        let output_path = get("WORDPRINT_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or(defaults.output_path);

        Ok(Self {
            documents,
            stop_words,
            top_words,
            top_pairs,
            output_path,
        })
    }

    /// The configured documents as a corpus.
    pub fn corpus(&self) -> DocumentCorpus {
        DocumentCorpus::new(self.documents.clone())
    }

    /// Check that at least one document is configured.
    /// Call this before any operation that reads documents.
    pub fn require_documents(&self) -> Result<()> {
        if self.documents.is_empty() {
            anyhow::bail!(
                "No documents to compare. Pass paths on the command line, use --dir,\n\
                 or set WORDPRINT_DOCUMENTS in your environment or .env file."
            );
        }
        Ok(())
    }
}

fn parse_count(key: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse()
        .with_context(|| format!("{key} must be a non-negative integer, got {value:?}"))
}
