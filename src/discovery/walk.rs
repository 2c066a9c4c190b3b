// Argument expansion and recursive directory walk.
//
// Each input is either a file (submitted as-is) or a directory (walked
// recursively, keeping entries that pass the filter). Inside a walked
// directory, hidden entries are pruned and symlinks are not followed.
// Entries are visited in file-name order so reports are reproducible.

use std::fs;
use std::path::Path;

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use super::filter::NameFilter;
use super::queue::PathSink;
use crate::error::{Error, Result};

/// Expand one command-line input into the sink.
///
/// Returns the number of paths submitted.
pub fn enqueue_input(input: &Path, filter: &NameFilter, sink: &dyn PathSink) -> Result<usize> {
    let metadata = fs::metadata(input).map_err(|e| Error::unavailable(input, e))?;

    if !metadata.is_dir() {
        sink.submit(input.to_path_buf())?;
        return Ok(1);
    }

    let mut submitted = 0;
    let walker = WalkDir::new(input)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| input.to_path_buf());
            Error::unavailable(path, e.into())
        })?;

        if entry.file_type().is_file() && filter.matches(entry.path()) {
            sink.submit(entry.into_path())?;
            submitted += 1;
        }
    }

    debug!(root = %input.display(), submitted, "Walked directory");
    Ok(submitted)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct VecSink(RefCell<Vec<PathBuf>>);

    impl PathSink for VecSink {
        fn submit(&self, path: PathBuf) -> Result<()> {
            self.0.borrow_mut().push(path);
            Ok(())
        }
    }

    fn txt_filter() -> NameFilter {
        NameFilter::new(crate::discovery::filter::DEFAULT_PATTERN).unwrap()
    }

    #[test]
    fn test_walk_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("nested")).unwrap();
        fs::create_dir(root.join(".hidden")).unwrap();
        fs::write(root.join("b.txt"), "b").unwrap();
        fs::write(root.join("a.txt"), "a").unwrap();
        fs::write(root.join("notes.md"), "md").unwrap();
        fs::write(root.join(".secret.txt"), "s").unwrap();
        fs::write(root.join("nested/c.txt"), "c").unwrap();
        fs::write(root.join(".hidden/d.txt"), "d").unwrap();

        let sink = VecSink::default();
        let n = enqueue_input(root, &txt_filter(), &sink).unwrap();

        let found = sink.0.into_inner();
        assert_eq!(n, 3);
        assert_eq!(
            found,
            vec![root.join("a.txt"), root.join("b.txt"), root.join("nested/c.txt")]
        );
    }

    #[test]
    fn test_file_input_is_taken_as_is() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("essay.md");
        fs::write(&file, "words").unwrap();

        let sink = VecSink::default();
        enqueue_input(&file, &txt_filter(), &sink).unwrap();
        assert_eq!(sink.0.into_inner(), vec![file]);
    }

    #[test]
    fn test_missing_input_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = enqueue_input(&missing, &txt_filter(), &VecSink::default()).unwrap_err();
        assert!(matches!(err, Error::ResourceUnavailable { ref path, .. } if *path == missing));
    }
}
