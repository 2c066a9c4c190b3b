// Corpus orchestration: one distribution per document, every unordered pair
// scored, results ranked.
//
// Documents keep discovery order. Pair (i, j) is scored only for i < j, so a
// corpus of N documents yields exactly N * (N - 1) / 2 results with no
// self-pairs and no duplicates. Everything runs sequentially; distributions
// are read-only once built, so the scoring loop needs no locking.

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::similarity::jsd;
use crate::similarity::ranking::{self, RankKey, SimilarityResult};
use crate::text::frequency::WordFrequencies;

/// A document and its word-frequency distribution.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub frequencies: WordFrequencies,
}

impl Document {
    pub fn from_text(path: impl AsRef<Path>, text: &str) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            frequencies: WordFrequencies::from_text(text),
        }
    }
}

/// Owns the corpus and the results scored over it.
#[derive(Debug)]
pub struct Corpus {
    documents: Vec<Document>,
    results: Vec<SimilarityResult>,
    progress: bool,
}

impl Corpus {
    /// Read and tokenize every path, in order.
    ///
    /// Fails with `InsufficientCorpus` before reading anything if fewer than
    /// two paths are given, with `ResourceUnavailable` on the first unreadable
    /// file, and with `EmptyDocument` on the first file without words.
    pub fn load(paths: &[PathBuf], progress: bool) -> Result<Self> {
        ensure_enough(paths.len())?;

        let pb = progress_bar(paths.len() as u64, "Reading", progress);
        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            let frequencies = WordFrequencies::from_file(path)?;
            debug!(
                path = %path.display(),
                tokens = frequencies.total_tokens(),
                distinct = frequencies.len(),
                "Built word-frequency distribution"
            );
            documents.push(Document {
                path: path.clone(),
                frequencies,
            });
            pb.inc(1);
        }
        pb.finish_and_clear();

        Self::from_documents(documents, progress)
    }

    /// Wrap documents that were built elsewhere.
    pub fn from_documents(documents: Vec<Document>, progress: bool) -> Result<Self> {
        ensure_enough(documents.len())?;
        if let Some(empty) = documents.iter().find(|d| d.frequencies.is_empty()) {
            return Err(Error::EmptyDocument {
                path: empty.path.clone(),
            });
        }

        Ok(Self {
            documents,
            results: Vec::new(),
            progress,
        })
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Number of unordered pairs, N choose 2.
    pub fn pair_count(&self) -> usize {
        let n = self.documents.len();
        n * n.saturating_sub(1) / 2
    }

    /// Score every unordered pair not yet scored.
    ///
    /// Returns the number of results held afterwards. Calling it twice does
    /// not score anything twice.
    pub fn score_pairs(&mut self) -> Result<usize> {
        if !self.results.is_empty() {
            return Ok(self.results.len());
        }

        let pb = progress_bar(self.pair_count() as u64, "Scoring", self.progress);
        let mut results = Vec::with_capacity(self.pair_count());
        for (i, a) in self.documents.iter().enumerate() {
            for b in &self.documents[i + 1..] {
                results.push(score_pair(a, b)?);
                pb.inc(1);
            }
        }
        pb.finish_and_clear();

        info!(
            documents = self.documents.len(),
            pairs = results.len(),
            "Scored all document pairs"
        );
        self.results = results;
        Ok(self.results.len())
    }

    /// Rank the scored results and release the documents.
    pub fn into_ranked(self, key: RankKey) -> Vec<SimilarityResult> {
        let mut results = self.results;
        ranking::rank(&mut results, key);
        results
    }
}

/// Score one pair of documents.
pub fn score_pair(a: &Document, b: &Document) -> Result<SimilarityResult> {
    let distance = jsd::distance(&a.frequencies, &b.frequencies)?;
    Ok(SimilarityResult {
        path_a: a.path.clone(),
        path_b: b.path.clone(),
        distance,
        combined_token_count: a.frequencies.total_tokens() + b.frequencies.total_tokens(),
    })
}

fn ensure_enough(found: usize) -> Result<()> {
    if found < 2 {
        return Err(Error::InsufficientCorpus { found });
    }
    Ok(())
}

fn progress_bar(len: u64, label: &str, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len);
    let template = format!("  {label} [{{bar:30}}] {{pos}}/{{len}} ({{eta}})");
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb
}
