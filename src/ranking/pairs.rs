// Pairwise similarity ranking.
//
// Every unordered pair (i, j) with i < j is scored exactly once. Results are
// ordered by score descending; equal scores fall back to ascending (i, j) so
// the ranking is identical across runs.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::profile::frequency::FrequencyProfile;
use crate::profile::similarity::similarity;

/// Default number of pairs reported.
pub const DEFAULT_TOP_PAIRS: usize = 10;

/// Similarity score of one unordered document pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairScore {
    /// Index of the first document (always less than `right`)
    pub left: usize,
    /// Index of the second document
    pub right: usize,
    pub score: f64,
}

impl PairScore {
    /// Ranking order: higher score first, then lower index pair first.
    fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| (self.left, self.right).cmp(&(other.left, other.right)))
    }
}

/// Score all unordered pairs of profiles and sort them by similarity.
///
/// Returns n*(n-1)/2 entries for n profiles; an empty list for fewer than two.
pub fn rank(profiles: &[FrequencyProfile]) -> Vec<PairScore> {
    let n = profiles.len();
    let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);

    for left in 0..n {
        for right in (left + 1)..n {
            pairs.push(PairScore {
                left,
                right,
                score: similarity(&profiles[left], &profiles[right]),
            });
        }
    }

    pairs.sort_by(PairScore::rank_cmp);

    debug!(documents = n, pairs = pairs.len(), "Ranked document pairs");

    pairs
}

/// The first `k` entries of a ranking (or all of them if there are fewer).
pub fn top_pairs(ranked: &[PairScore], k: usize) -> &[PairScore] {
    &ranked[..k.min(ranked.len())]
}
