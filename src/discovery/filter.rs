// Path filter for directory walks.

use std::path::Path;

use regex_lite::Regex;

use crate::error::{Error, Result};

/// Default expression: a case-sensitive `.txt` suffix with at least one
/// character in front of it.
pub const DEFAULT_PATTERN: &str = r".\.txt$";

/// Compiled filter expression, matched against the full path string.
#[derive(Debug, Clone)]
pub struct NameFilter {
    regex: Regex,
}

impl NameFilter {
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| Error::BadFilterExpression {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    pub fn matches(&self, path: &Path) -> bool {
        self.regex.is_match(&path.to_string_lossy())
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}
