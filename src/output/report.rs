// Ranked report lines and the sinks that persist them.
//
// The console and the report file share one line format:
//
//   1. "a.txt" and "b.txt" - Similarity Index: 1.000000
//
// Persisting is best-effort. A sink that cannot be opened is reported and
// the run carries on.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::corpus::DocumentCorpus;
use crate::ranking::pairs::PairScore;

/// Format one ranked pair. `rank` is 1-indexed.
pub fn format_pair_line(rank: usize, left: &str, right: &str, score: f64) -> String {
    format!("{rank}. \"{left}\" and \"{right}\" - Similarity Index: {score:.6}")
}

/// Heading written above the ranked lines.
pub fn report_header(top_pairs: usize) -> String {
    format!("Top {top_pairs} Similar Document Pairs:")
}

/// Format a ranked slice of pairs against the corpus' document names.
pub fn report_lines(corpus: &DocumentCorpus, pairs: &[PairScore]) -> Vec<String> {
    pairs
        .iter()
        .enumerate()
        .map(|(i, pair)| {
            format_pair_line(
                i + 1,
                &corpus.name(pair.left),
                &corpus.name(pair.right),
                pair.score,
            )
        })
        .collect()
}

/// A ranked pair resolved to document names, for machine-readable output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPair {
    pub rank: usize,
    pub left: String,
    pub right: String,
    pub score: f64,
}

pub fn ranked_pairs(corpus: &DocumentCorpus, pairs: &[PairScore]) -> Vec<RankedPair> {
    pairs
        .iter()
        .enumerate()
        .map(|(i, pair)| RankedPair {
            rank: i + 1,
            left: corpus.name(pair.left),
            right: corpus.name(pair.right),
            score: pair.score,
        })
        .collect()
}

/// Destination for a finished report.
pub trait ReportSink {
    /// Write the header and every line verbatim, one per line.
    fn write_report(&self, header: &str, lines: &[String]) -> Result<()>;

    /// Human-readable location, used in status messages.
    fn describe(&self) -> String;
}

/// Writes the report to a flat text file, replacing any previous contents.
pub struct FileSink {
    pub path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for FileSink {
    fn write_report(&self, header: &str, lines: &[String]) -> Result<()> {
        let file = File::create(&self.path).with_context(|| {
            format!("Could not save results to file {}", self.path.display())
        })?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "{header}")?;
        for line in lines {
            writeln!(writer, "{line}")?;
        }
        writer
            .flush()
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Persist a report without failing the run. Returns whether it was saved.
pub fn save_report(sink: &dyn ReportSink, header: &str, lines: &[String]) -> bool {
    match sink.write_report(header, lines) {
        Ok(()) => {
            info!(destination = %sink.describe(), lines = lines.len(), "Saved report");
            true
        }
        Err(e) => {
            warn!(destination = %sink.describe(), error = %e, "Report not saved");
            eprintln!("Error: {e:#}");
            false
        }
    }
}
