// End-to-end comparison run: discover -> build distributions -> score pairs
// -> rank.
//
// Each stage runs to completion before the next starts, and the first error
// aborts the whole run.

use tracing::info;

use crate::config::Config;
use crate::discovery::{self, filter::NameFilter};
use crate::error::{Error, Result};
use crate::output::terminal;
use crate::pipeline::corpus::Corpus;
use crate::similarity::ranking::SimilarityResult;

/// Run a comparison and return the ranked results.
pub async fn run(config: &Config) -> Result<Vec<SimilarityResult>> {
    // Compile the filter before touching any file.
    let filter = NameFilter::new(&config.pattern)?;
    info!(
        inputs = config.inputs.len(),
        pattern = filter.pattern(),
        queue_capacity = config.queue_capacity,
        "Discovering files"
    );

    let paths = discovery::discover(config.inputs.clone(), filter, config.queue_capacity).await?;
    if paths.len() < 2 {
        return Err(Error::InsufficientCorpus { found: paths.len() });
    }
    info!(files = paths.len(), "Building word-frequency distributions");

    let mut corpus = Corpus::load(&paths, config.progress)?;
    if config.show_distributions {
        terminal::display_distributions(corpus.documents());
    }

    corpus.score_pairs()?;
    Ok(corpus.into_ranked(config.rank_by))
}
