// Wordprint: frequent-word profiles and pairwise document similarity.
//
// This is the library root. Each module corresponds to one stage of the
// comparison pipeline.

pub mod config;
pub mod corpus;
pub mod output;
pub mod pipeline;
pub mod profile;
pub mod ranking;
