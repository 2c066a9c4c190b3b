// Error taxonomy for the similarity pipeline.
//
// Every variant is fatal: it propagates to `main`, which prints the chain to
// stderr and exits non-zero. There is no skip-and-continue mode.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A resource could not be opened, read, or walked.
    #[error("cannot read {}: {source}", path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("bad filter expression `{pattern}`: {source}")]
    BadFilterExpression {
        pattern: String,
        #[source]
        source: regex_lite::Error,
    },

    #[error("need at least 2 distinct files to compare, found {found}")]
    InsufficientCorpus { found: usize },

    /// Unreachable by construction; raised instead of letting NaN or
    /// infinity reach the report.
    #[error("divergence invariant violated for word `{word}`: {detail}")]
    ArithmeticInvariantViolation { word: String, detail: String },

    #[error("cannot compute divergence of an empty distribution")]
    EmptyDistribution,

    #[error("{} contains no words", path.display())]
    EmptyDocument { path: PathBuf },

    #[error("discovery queue closed while producers were still running")]
    QueueClosed,

    #[error("discovery task failed: {0}")]
    DiscoveryTask(#[from] tokio::task::JoinError),
}

impl Error {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::ResourceUnavailable {
            path: path.into(),
            source,
        }
    }
}
