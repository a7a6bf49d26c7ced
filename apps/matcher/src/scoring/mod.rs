pub mod embedding;
pub mod fit;
pub mod keyword_match;
pub mod ranking;

pub use embedding::EmbeddingProvider;
pub use fit::FitScorer;
pub use keyword_match::KeywordScorer;
pub use ranking::{JobPosting, JobRanker, RankedMatch, RankingFailure, RankingReport};

/// Rounds a score to 4 decimal places.
pub fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}
