// Compare pipeline: profile every document, then rank all pairs.
//
// Documents are profiled one at a time in corpus order. The first document
// that cannot be read aborts the whole run; profiles already built are
// discarded and nothing is ranked or reported.

use std::path::Path;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info};

use crate::corpus::DocumentCorpus;
use crate::profile::frequency::FrequencyProfile;
use crate::profile::similarity::similarity_matrix;
use crate::profile::stopwords::StopWordSet;
use crate::profile::traits::ProfileExtractor;
use crate::ranking::pairs::{rank, top_pairs, PairScore};

/// Result of a full comparison run.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub corpus: DocumentCorpus,
    /// One profile per document, in corpus order
    pub profiles: Vec<FrequencyProfile>,
    /// Every unordered pair, best match first
    pub ranked: Vec<PairScore>,
}

impl Analysis {
    /// The best `k` pairs.
    pub fn top(&self, k: usize) -> &[PairScore] {
        top_pairs(&self.ranked, k)
    }

    /// Full n×n similarity matrix over the profiles.
    pub fn matrix(&self) -> Vec<Vec<f64>> {
        similarity_matrix(&self.profiles)
    }
}

/// Where the per-document "Processing: <path>" lines are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Announce {
    /// Alongside the human-readable report
    #[default]
    Stdout,
    /// Out of the way of machine-readable output on stdout
    Stderr,
    Quiet,
}

impl Announce {
    fn document(self, path: &Path) {
        match self {
            Announce::Stdout => println!("Processing: {}", path.display()),
            Announce::Stderr => eprintln!("Processing: {}", path.display()),
            Announce::Quiet => {}
        }
    }
}

/// Profile every document in the corpus, failing on the first unreadable one.
pub fn profile_corpus(
    corpus: &DocumentCorpus,
    extractor: &dyn ProfileExtractor,
    stop_words: &StopWordSet,
    announce: Announce,
) -> Result<Vec<FrequencyProfile>> {
    let pb = ProgressBar::new(corpus.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Profiling [{bar:30}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut profiles = Vec::with_capacity(corpus.len());

    for path in corpus.paths() {
        pb.suspend(|| announce.document(path));

        let profile = match extractor.extract_file(path, stop_words) {
            Ok(profile) => profile,
            Err(e) => {
                pb.abandon();
                error!(path = %path.display(), error = %e, "Document unreadable, aborting run");
                return Err(e);
            }
        };

        info!(
            path = %path.display(),
            kept_tokens = profile.kept_tokens,
            retained = profile.len(),
            "Profiled document"
        );

        profiles.push(profile);
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(profiles)
}

/// Run the full pipeline over a corpus, announcing documents on stdout.
pub fn run(
    corpus: &DocumentCorpus,
    extractor: &dyn ProfileExtractor,
    stop_words: &StopWordSet,
) -> Result<Analysis> {
    run_with(corpus, extractor, stop_words, Announce::Stdout)
}

/// Run the full pipeline, choosing where document announcements go.
pub fn run_with(
    corpus: &DocumentCorpus,
    extractor: &dyn ProfileExtractor,
    stop_words: &StopWordSet,
    announce: Announce,
) -> Result<Analysis> {
    let profiles = profile_corpus(corpus, extractor, stop_words, announce)?;
    let ranked = rank(&profiles);

    info!(
        documents = corpus.len(),
        pairs = ranked.len(),
        "Comparison complete"
    );

    Ok(Analysis {
        corpus: corpus.clone(),
        profiles,
        ranked,
    })
}
