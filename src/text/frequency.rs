// Word-frequency distributions.
//
// A `FrequencyBuilder` accumulates token counts for one document; finalizing
// it divides every count by the document's token total and yields an
// immutable `WordFrequencies`. Lookup is keyed, so the divergence engine never
// depends on entry order. Sorted views exist only for display.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use serde::Serialize;

use super::tokenizer;
use crate::error::{Error, Result};

/// One word's statistics within a document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyEntry {
    pub word: String,
    pub count: u64,
    /// `count / total_tokens`
    pub frequency: f64,
}

/// Accumulates token counts before frequencies are known.
#[derive(Debug, Default)]
pub struct FrequencyBuilder {
    counts: HashMap<String, u64>,
}

impl FrequencyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one token into the running counts.
    pub fn insert(&mut self, word: &str) {
        if let Some(count) = self.counts.get_mut(word) {
            *count += 1;
        } else {
            self.counts.insert(word.to_string(), 1);
        }
    }

    /// Compute `count / total_tokens` for every entry.
    ///
    /// Consumes the builder, so frequencies are computed exactly once.
    pub fn finalize(self, total_tokens: u64) -> WordFrequencies {
        let total = total_tokens as f64;
        let entries = self
            .counts
            .into_iter()
            .map(|(word, count)| {
                let frequency = if total_tokens == 0 {
                    0.0
                } else {
                    count as f64 / total
                };
                let entry = FrequencyEntry {
                    word: word.clone(),
                    count,
                    frequency,
                };
                (word, entry)
            })
            .collect();

        WordFrequencies {
            entries,
            total_tokens,
        }
    }
}

/// Finalized, read-only word-frequency distribution for one document.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencies {
    entries: HashMap<String, FrequencyEntry>,
    total_tokens: u64,
}

impl WordFrequencies {
    /// Build a distribution from an in-memory string.
    pub fn from_text(text: &str) -> Self {
        let mut builder = FrequencyBuilder::new();
        let tokenized = tokenizer::tokenize_str(text);
        for token in &tokenized.tokens {
            builder.insert(token);
        }
        builder.finalize(tokenized.total_tokens)
    }

    /// Build a distribution from a file in a single streaming pass.
    ///
    /// Any open or read failure yields `ResourceUnavailable`; no partial
    /// distribution is returned.
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::unavailable(path, e))?;
        let mut builder = FrequencyBuilder::new();
        let total_tokens =
            tokenizer::scan(file, |word| builder.insert(word)).map_err(|e| Error::unavailable(path, e))?;
        Ok(builder.finalize(total_tokens))
    }

    pub fn get(&self, word: &str) -> Option<&FrequencyEntry> {
        self.entries.get(word)
    }

    /// Frequency of `word`, or 0.0 when absent.
    pub fn frequency(&self, word: &str) -> f64 {
        self.entries.get(word).map_or(0.0, |e| e.frequency)
    }

    /// Entries in unspecified order.
    pub fn entries(&self) -> impl Iterator<Item = &FrequencyEntry> {
        self.entries.values()
    }

    /// Entries in ascending lexicographic order by word.
    pub fn sorted_entries(&self) -> Vec<&FrequencyEntry> {
        let mut sorted: Vec<&FrequencyEntry> = self.entries.values().collect();
        sorted.sort_by(|a, b| a.word.cmp(&b.word));
        sorted
    }

    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
