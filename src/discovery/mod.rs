// Resource discovery: expands command-line inputs into a deduplicated,
// ordered list of text files.
//
// The walker runs on a blocking thread and feeds a bounded queue; a single
// consumer drains it, dropping duplicates while preserving discovery order.

pub mod filter;
pub mod queue;
pub mod walk;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use filter::NameFilter;

/// Ordered set of discovered paths, keyed by canonical form.
///
/// The first spelling seen for a file is the one kept, so `docs/a.txt` and
/// `./docs/a.txt` collapse to whichever arrived first.
#[derive(Debug, Default)]
pub struct UniquePaths {
    seen: HashSet<PathBuf>,
    ordered: Vec<PathBuf>,
}

impl UniquePaths {
    /// Add a path. Returns false if it was already present.
    pub fn insert(&mut self, path: PathBuf) -> Result<bool> {
        let key = canonical(&path)?;
        if !self.seen.insert(key) {
            debug!(path = %path.display(), "Skipping duplicate path");
            return Ok(false);
        }
        self.ordered.push(path);
        Ok(true)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn into_vec(self) -> Vec<PathBuf> {
        self.ordered
    }
}

fn canonical(path: &Path) -> Result<PathBuf> {
    std::fs::canonicalize(path).map_err(|e| Error::unavailable(path, e))
}

/// Expand `inputs` into the unique list of files to compare.
///
/// Inputs are processed in order. Walk and stat failures abort discovery
/// with `ResourceUnavailable`.
pub async fn discover(inputs: Vec<PathBuf>, filter: NameFilter, capacity: usize) -> Result<Vec<PathBuf>> {
    let (producer, mut consumer) = queue::bounded(capacity);

    let walker = tokio::task::spawn_blocking(move || {
        let mut submitted = 0;
        for input in &inputs {
            submitted += walk::enqueue_input(input, &filter, &producer)?;
        }
        Ok::<usize, Error>(submitted)
    });

    let mut unique = UniquePaths::default();
    let mut drained = Ok(());
    while let Some(path) = consumer.pop().await {
        if let Err(e) = unique.insert(path) {
            drained = Err(e);
            break;
        }
    }
    // Dropping the consumer unblocks a walker stuck on a full queue.
    drop(consumer);

    let walked = walker.await?;
    drained?;
    let submitted = walked?;

    info!(submitted, unique = unique.len(), "Discovery complete");
    Ok(unique.into_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn txt_filter() -> NameFilter {
        NameFilter::new(filter::DEFAULT_PATTERN).unwrap()
    }

    #[test]
    fn test_unique_paths_keeps_first_spelling() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, "a").unwrap();
        let alias = dir.path().join(".").join("a.txt");

        let mut unique = UniquePaths::default();
        assert!(unique.insert(file.clone()).unwrap());
        assert!(!unique.insert(alias).unwrap());
        assert_eq!(unique.into_vec(), vec![file]);
    }

    #[tokio::test]
    async fn test_discover_overlapping_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("sub")).unwrap();
        fs::write(root.join("one.txt"), "one").unwrap();
        fs::write(root.join("sub/two.txt"), "two").unwrap();

        let inputs = vec![
            root.join("sub/two.txt"),
            root.to_path_buf(),
            root.join("sub"),
        ];
        let found = discover(inputs, txt_filter(), 1).await.unwrap();

        assert_eq!(found, vec![root.join("sub/two.txt"), root.join("one.txt")]);
    }

    #[tokio::test]
    async fn test_discover_missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover(vec![dir.path().join("missing")], txt_filter(), 4)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ResourceUnavailable { .. }));
    }
}
