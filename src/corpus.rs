// Document corpus — the ordered list of input paths.
//
// The order is fixed once the corpus is built and defines the index space
// used by pair ranking. Directory discovery sorts by path so the same
// directory always produces the same indices.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// File extension picked up by directory discovery.
pub const DOCUMENT_EXTENSION: &str = "txt";

/// Ordered sequence of document paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentCorpus {
    paths: Vec<PathBuf>,
}

impl DocumentCorpus {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    /// Collect every `*.txt` file directly inside `dir`, sorted by path.
    pub fn discover(dir: &Path) -> Result<Self> {
        let entries = fs::read_dir(dir)
            .with_context(|| format!("Could not list directory {}", dir.display()))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry
                .with_context(|| format!("Could not list directory {}", dir.display()))?
                .path();
            let is_document = path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(DOCUMENT_EXTENSION));
            if is_document {
                paths.push(path);
            }
        }
        paths.sort();

        debug!(dir = %dir.display(), documents = paths.len(), "Discovered documents");

        Ok(Self { paths })
    }

    /// Append more documents after the existing ones.
    pub fn extend(&mut self, other: DocumentCorpus) {
        self.paths.extend(other.paths);
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Display name of the document at `index`, as printed in reports.
    pub fn name(&self, index: usize) -> String {
        self.paths
            .get(index)
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_sorted_txt_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "beta").unwrap();
        fs::write(dir.path().join("a.TXT"), "alpha").unwrap();
        fs::write(dir.path().join("notes.md"), "skip").unwrap();
        fs::create_dir(dir.path().join("c.txt")).unwrap();

        let corpus = DocumentCorpus::discover(dir.path()).unwrap();
        let names: Vec<String> = corpus
            .paths()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.TXT", "b.txt"]);
    }

    #[test]
    fn test_discover_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = DocumentCorpus::discover(&dir.path().join("missing"));
        assert!(result.is_err());
    }

    #[test]
    fn test_name_out_of_range() {
        let corpus = DocumentCorpus::new(vec![PathBuf::from("one.txt")]);
        assert_eq!(corpus.name(0), "one.txt");
        assert_eq!(corpus.name(5), "");
    }
}
