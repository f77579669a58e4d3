// Batch comparison pipeline.

pub mod compare;

pub use compare::{profile_corpus, run, run_with, Analysis, Announce};
