// wordsim: pairwise Jensen-Shannon distance between text files
//
// This is the library root. Each module corresponds to one stage of the
// comparison pipeline.

pub mod config;
pub mod discovery;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod similarity;
pub mod text;

pub use error::{Error, Result};
