use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use wordprint::config::Config;
use wordprint::corpus::DocumentCorpus;
use wordprint::output::report::{report_header, report_lines, save_report, FileSink};
use wordprint::output::terminal;
use wordprint::pipeline::{self, Announce};
use wordprint::profile::frequency::FrequencyProfiler;
use wordprint::profile::stopwords::StopWordSet;
use wordprint::profile::traits::ProfileExtractor;

/// Wordprint: frequent-word profiles and pairwise document similarity.
///
/// Builds a top-N word frequency profile for each document and ranks every
/// pair of documents by the frequencies of the words they share.
#[derive(Parser)]
#[command(name = "wordprint", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that builds profiles.
#[derive(Args)]
struct ProfileOptions {
    /// Words kept per profile (default: 100)
    #[arg(long)]
    top_words: Option<usize>,

    /// Comma-separated stop words, or `english` for the bundled English list
    #[arg(long)]
    stop_words: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank document pairs by similarity and save the top results
    Compare {
        /// Documents to compare (overrides WORDPRINT_DOCUMENTS)
        paths: Vec<PathBuf>,

        /// Also compare every .txt file in this directory
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Number of pairs to show and save (default: 10)
        #[arg(long)]
        top_pairs: Option<usize>,

        #[command(flatten)]
        profile: ProfileOptions,

        /// Report file (default: similarity_results.txt)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Don't write the report file
        #[arg(long)]
        no_save: bool,

        /// Print the ranking as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show a single document's word frequency profile
    Profile {
        /// The document to profile
        path: PathBuf,

        #[command(flatten)]
        profile: ProfileOptions,

        /// Print the profile as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the full pairwise similarity matrix
    Matrix {
        /// Documents to compare (overrides WORDPRINT_DOCUMENTS)
        paths: Vec<PathBuf>,

        /// Also compare every .txt file in this directory
        #[arg(long)]
        dir: Option<PathBuf>,

        #[command(flatten)]
        profile: ProfileOptions,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Structured logging goes to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wordprint=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            paths,
            dir,
            top_pairs,
            profile,
            output,
            no_save,
            json,
        } => {
            let mut config = Config::load()?;
            apply_profile_options(&mut config, &profile)?;
            if let Some(k) = top_pairs {
                config.top_pairs = k;
            }
            if let Some(output) = output {
                config.output_path = output;
            }

            let corpus = build_corpus(&mut config, paths, dir)?;
            let profiler = FrequencyProfiler::new(config.top_words);

            info!(
                documents = corpus.len(),
                stop_words = config.stop_words.len(),
                top_words = config.top_words,
                "Starting comparison"
            );

            // Keep stdout parseable when it carries JSON
            let announce = if json {
                Announce::Stderr
            } else {
                Announce::Stdout
            };
            let analysis =
                pipeline::run_with(&corpus, &profiler, &config.stop_words, announce)?;
            let top = analysis.top(config.top_pairs);

            if json {
                terminal::display_ranking_json(&corpus, top)?;
            } else {
                terminal::display_ranking(&corpus, top, config.top_pairs);
            }

            if !no_save {
                let sink = FileSink::new(&config.output_path);
                let header = report_header(config.top_pairs);
                if save_report(&sink, &header, &report_lines(&corpus, top)) {
                    eprintln!(
                        "\n{}",
                        format!("Results saved to {}", config.output_path.display()).bold()
                    );
                }
            }
        }

        Commands::Profile {
            path,
            profile,
            json,
        } => {
            let mut config = Config::load()?;
            apply_profile_options(&mut config, &profile)?;

            let profiler = FrequencyProfiler::new(config.top_words);
            let result = profiler.extract_file(&path, &config.stop_words)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                terminal::display_profile(&path.display().to_string(), &result);
            }
        }

        Commands::Matrix {
            paths,
            dir,
            profile,
        } => {
            let mut config = Config::load()?;
            apply_profile_options(&mut config, &profile)?;

            let corpus = build_corpus(&mut config, paths, dir)?;
            let profiler = FrequencyProfiler::new(config.top_words);

            let analysis = pipeline::run(&corpus, &profiler, &config.stop_words)?;
            terminal::display_matrix(&corpus, &analysis.matrix());
        }
    }

    Ok(())
}

/// Layer command-line profile options over the loaded config.
fn apply_profile_options(config: &mut Config, options: &ProfileOptions) -> Result<()> {
    if let Some(n) = options.top_words {
        if n == 0 {
            anyhow::bail!("--top-words must be at least 1");
        }
        config.top_words = n;
    }
    if let Some(list) = &options.stop_words {
        config.stop_words = StopWordSet::parse(list);
    }
    Ok(())
}

/// Resolve the documents to compare. Paths or a directory given on the
/// command line replace the configured list.
fn build_corpus(
    config: &mut Config,
    paths: Vec<PathBuf>,
    dir: Option<PathBuf>,
) -> Result<DocumentCorpus> {
    if !paths.is_empty() || dir.is_some() {
        let mut corpus = DocumentCorpus::new(paths);
        if let Some(dir) = dir {
            corpus.extend(DocumentCorpus::discover(&dir)?);
        }
        config.documents = corpus.paths().to_vec();
    }

    config.require_documents()?;
    Ok(config.corpus())
}
