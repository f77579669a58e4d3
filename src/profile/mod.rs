// Word profiling — normalization, stop words, frequency profiles, similarity.

pub mod frequency;
pub mod normalize;
pub mod similarity;
pub mod stopwords;
pub mod traits;
