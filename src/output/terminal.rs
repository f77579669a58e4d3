// Colored terminal output for rankings, profiles and the similarity matrix.
//
// Ranked lines are printed exactly as they are saved to the report file;
// color is only applied to headings and decorations around them.

use colored::Colorize;

use crate::corpus::DocumentCorpus;
use crate::profile::frequency::FrequencyProfile;
use crate::ranking::pairs::PairScore;

use super::report::{ranked_pairs, report_lines};
use super::shorten_path;

/// Display the top ranked pairs.
pub fn display_ranking(corpus: &DocumentCorpus, pairs: &[PairScore], top_pairs: usize) {
    if corpus.len() < 2 {
        println!("Need at least two documents to compare.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Top {top_pairs} Similar Document Pairs ===").bold()
    );
    for line in report_lines(corpus, pairs) {
        println!("{line}");
    }
}

/// Print the ranked pairs as pretty JSON on stdout.
pub fn display_ranking_json(corpus: &DocumentCorpus, pairs: &[PairScore]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&ranked_pairs(corpus, pairs))?;
    println!("{json}");
    Ok(())
}

/// Display a single document's profile as a bar chart.
pub fn display_profile(name: &str, profile: &FrequencyProfile) {
    println!(
        "\n{}",
        format!(
            "=== Word Profile: {} ({} words counted, {} distinct) ===",
            name, profile.kept_tokens, profile.vocabulary_size
        )
        .bold()
    );
    println!();

    if profile.is_empty() {
        println!("  No countable words (every token was empty or a stop word).");
        return;
    }

    let bar_width: usize = 20;
    // Scale bars against the most frequent word so the leader fills the bar
    let max = profile.words[0].frequency;

    for (i, entry) in profile.words.iter().enumerate() {
        let filled = if max > 0.0 {
            (entry.frequency / max * bar_width as f64).round() as usize
        } else {
            0
        };
        let bar = format!(
            "[{}{}]",
            "=".repeat(filled),
            " ".repeat(bar_width.saturating_sub(filled))
        );

        let colored_bar = if i < 10 {
            bar.bright_green()
        } else if i < 50 {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };

        println!(
            "  {:>3}. {:<24} {} {:.6} ({})",
            i + 1,
            entry.word.bold(),
            colored_bar,
            entry.frequency,
            entry.count.to_string().dimmed()
        );
    }

    if profile.is_truncated() {
        println!(
            "\n  {}",
            format!(
                "Showing top {} of {} distinct words",
                profile.len(),
                profile.vocabulary_size
            )
            .dimmed()
        );
    }
}

/// Display the full similarity matrix with a numbered legend.
pub fn display_matrix(corpus: &DocumentCorpus, matrix: &[Vec<f64>]) {
    println!(
        "\n{}",
        format!("=== Similarity Matrix ({} documents) ===", corpus.len()).bold()
    );
    println!();

    for i in 0..corpus.len() {
        println!(
            "  {:>3}  {}",
            format!("[{}]", i + 1).dimmed(),
            shorten_path(&corpus.name(i), 60)
        );
    }
    println!();

    let mut header = String::from("       ");
    for j in 0..matrix.len() {
        header.push_str(&format!("{:>10}", format!("[{}]", j + 1)));
    }
    println!("{}", header.dimmed());

    for (i, row) in matrix.iter().enumerate() {
        let mut line = format!("  {:>5}", format!("[{}]", i + 1));
        for (j, value) in row.iter().enumerate() {
            if i == j {
                line.push_str(&format!("{:>10}", "-"));
            } else {
                line.push_str(&format!("{:>10.6}", value));
            }
        }
        println!("{line}");
    }
}
