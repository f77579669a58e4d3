// Shared-word similarity between two frequency profiles.
//
// For every word retained in both profiles, add both of its frequencies:
//
//   similarity(a, b) = sum over w in (a ∩ b) of a[w] + b[w]
//
// Words present on only one side contribute nothing. The score is 0.0 for
// disjoint profiles and at most 2.0 (two untruncated profiles over the same
// vocabulary). Shared words are summed in ascending word order, so swapping
// the arguments yields the bit-identical result.

use super::frequency::FrequencyProfile;

/// Compute the similarity index of two profiles.
pub fn similarity(a: &FrequencyProfile, b: &FrequencyProfile) -> f64 {
    let weights_b = b.weights();

    let mut shared: Vec<(&str, f64, f64)> = a
        .words
        .iter()
        .filter_map(|w| {
            weights_b
                .get(w.word.as_str())
                .map(|&fb| (w.word.as_str(), w.frequency, fb))
        })
        .collect();
    shared.sort_by(|x, y| x.0.cmp(y.0));

    shared.iter().fold(0.0, |acc, &(_, fa, fb)| acc + (fa + fb))
}

/// Build the full symmetric similarity matrix for a set of profiles.
///
/// The diagonal is left at 0.0; a document is never ranked against itself.
pub fn similarity_matrix(profiles: &[FrequencyProfile]) -> Vec<Vec<f64>> {
    let n = profiles.len();
    let mut matrix = vec![vec![0.0; n]; n];

    for i in 0..n {
        for j in (i + 1)..n {
            let score = similarity(&profiles[i], &profiles[j]);
            matrix[i][j] = score;
            matrix[j][i] = score;
        }
    }

    matrix
}
