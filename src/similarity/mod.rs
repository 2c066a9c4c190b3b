// Similarity scoring: Jensen-Shannon distance and result ranking.

pub mod jsd;
pub mod ranking;
