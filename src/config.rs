use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::discovery::filter::DEFAULT_PATTERN;
use crate::discovery::queue::DEFAULT_CAPACITY;
use crate::output::report::OutputFormat;
use crate::similarity::ranking::RankKey;

/// Decimal places printed for each distance by default.
pub const DEFAULT_PRECISION: usize = 6;

/// Largest precision that still carries information for an f64.
pub const MAX_PRECISION: usize = 17;

/// Values given on the command line. `None` falls back to the environment,
/// then to the built-in default.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub inputs: Vec<PathBuf>,
    pub pattern: Option<String>,
    pub queue_capacity: Option<usize>,
    pub precision: Option<usize>,
    pub rank_by: Option<RankKey>,
    pub format: Option<OutputFormat>,
    pub show_distributions: bool,
    pub no_progress: bool,
}

/// Central configuration for a comparison run.
///
/// Settings come from the command line first, then `WORDSIM_*` environment
/// variables (a .env file is loaded automatically at startup via dotenvy),
/// then defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Files and directories to compare, in the order given
    pub inputs: Vec<PathBuf>,
    /// Filter expression applied to paths found while walking directories
    pub pattern: String,
    /// Capacity of the bounded discovery queue
    pub queue_capacity: usize,
    /// Decimal places in the text report
    pub precision: usize,
    /// Sort key for the report (defaults to combined token count)
    pub rank_by: RankKey,
    pub format: OutputFormat,
    /// Dump each document's sorted word table to stderr before scoring
    pub show_distributions: bool,
    /// Draw progress bars on stderr
    pub progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            pattern: DEFAULT_PATTERN.to_string(),
            queue_capacity: DEFAULT_CAPACITY,
            precision: DEFAULT_PRECISION,
            rank_by: RankKey::default(),
            format: OutputFormat::default(),
            show_distributions: false,
            progress: true,
        }
    }
}

impl Config {
    /// Merge command-line overrides with the environment.
    pub fn load(overrides: Overrides) -> Result<Self> {
        let defaults = Self::default();

        let pattern = match overrides.pattern {
            Some(p) => p,
            None => env::var("WORDSIM_PATTERN").unwrap_or(defaults.pattern),
        };
        let queue_capacity = match overrides.queue_capacity {
            Some(n) => n,
            None => env_parse("WORDSIM_QUEUE_CAPACITY")?.unwrap_or(defaults.queue_capacity),
        };
        let precision = match overrides.precision {
            Some(n) => n,
            None => env_parse("WORDSIM_PRECISION")?.unwrap_or(defaults.precision),
        };
        let rank_by = match overrides.rank_by {
            Some(k) => k,
            None => env_parse("WORDSIM_RANK_BY")?.unwrap_or(defaults.rank_by),
        };
        let format = match overrides.format {
            Some(f) => f,
            None => env_parse("WORDSIM_FORMAT")?.unwrap_or(defaults.format),
        };

        let config = Self {
            inputs: overrides.inputs,
            pattern,
            queue_capacity,
            precision,
            rank_by,
            format,
            show_distributions: overrides.show_distributions,
            progress: !overrides.no_progress,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check numeric ranges. The filter expression is compiled later by
    /// discovery, which reports a malformed one on its own.
    pub fn validate(&self) -> Result<()> {
        if self.queue_capacity == 0 {
            anyhow::bail!("Queue capacity must be at least 1 (WORDSIM_QUEUE_CAPACITY / --queue-capacity)");
        }
        if self.precision > MAX_PRECISION {
            anyhow::bail!(
                "Precision {} is out of range; use 0 to {MAX_PRECISION} (WORDSIM_PRECISION / --precision)",
                self.precision
            );
        }
        Ok(())
    }
}

/// Parse an optional environment variable, naming it in the error.
fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => {
            let value = raw
                .trim()
                .parse::<T>()
                .map_err(|e| anyhow::anyhow!("{e}"))
                .with_context(|| format!("Invalid value `{raw}` for {key}"))?;
            Ok(Some(value))
        }
        Err(_) => Ok(None),
    }
}
