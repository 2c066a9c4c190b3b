// Comparison pipeline: corpus orchestration and the end-to-end run.

pub mod compare;
pub mod corpus;
