// Pair results and their ordering.

use std::path::PathBuf;

use clap::ValueEnum;
use serde::Serialize;

/// The score for one unordered pair of documents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityResult {
    pub path_a: PathBuf,
    pub path_b: PathBuf,
    pub distance: f64,
    /// Token total of both documents combined.
    pub combined_token_count: u64,
}

/// Sort key for the final report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RankKey {
    /// Ascending combined token count (the historical report order)
    #[default]
    Tokens,
    /// Ascending distance, most similar pair first
    Distance,
}

impl std::str::FromStr for RankKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tokens" => Ok(RankKey::Tokens),
            "distance" => Ok(RankKey::Distance),
            other => Err(format!("unknown rank key `{other}` (expected tokens or distance)")),
        }
    }
}

/// Sort results in place. The sort is stable, so ties keep pair order.
pub fn rank(results: &mut [SimilarityResult], key: RankKey) {
    match key {
        RankKey::Tokens => results.sort_by_key(|r| r.combined_token_count),
        RankKey::Distance => results.sort_by(|a, b| a.distance.total_cmp(&b.distance)),
    }
}
