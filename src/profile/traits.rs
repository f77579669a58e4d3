// Profile extractor trait — swap-ready abstraction.
//
// The pipeline only needs "text in, frequency profile out". The default
// implementation is the top-N frequency profiler, but a weighted or
// n-gram variant could slot in without touching ranking or output.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::frequency::FrequencyProfile;
use super::stopwords::StopWordSet;

/// Trait for turning a document's text into a frequency profile.
pub trait ProfileExtractor {
    /// Profile already-loaded text. Never fails: text with no countable
    /// words yields an empty profile.
    fn extract(&self, text: &str, stop_words: &StopWordSet) -> FrequencyProfile;

    /// Read a document from disk and profile it.
    ///
    /// The file is read in full. Bytes that are not valid UTF-8 are replaced
    /// before tokenization; they could never survive normalization anyway.
    /// A file that cannot be opened or read is an error and no partial
    /// profile is produced.
    fn extract_file(&self, path: &Path, stop_words: &StopWordSet) -> Result<FrequencyProfile> {
        let bytes = fs::read(path)
            .with_context(|| format!("Could not open file {}", path.display()))?;
        let text = String::from_utf8_lossy(&bytes);

        debug!(path = %path.display(), bytes = bytes.len(), "Read document");

        Ok(self.extract(&text, stop_words))
    }
}
