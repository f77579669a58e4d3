// Pair ranking — score every unordered document pair and order by similarity.

pub mod pairs;

pub use pairs::{rank, top_pairs, PairScore};
