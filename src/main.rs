use std::collections::{HashMap, HashSet};
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Command, CommandFactory, Parser};
use tracing::{info, warn};

use wordsim::config::{Config, Overrides};
use wordsim::output::report::{self, OutputFormat};
use wordsim::similarity::ranking::RankKey;

/// wordsim: pairwise Jensen-Shannon distance between text files.
///
/// Builds a word-frequency distribution for every file found under the given
/// paths and prints one `<distance> <file_a> <file_b>` line per pair.
/// Distances run from 0.0 (same word distribution) to 1.0 (no words in common).
#[derive(Parser)]
#[command(name = "wordsim", version, about)]
struct Cli {
    /// Files or directories to compare (directories are searched recursively)
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Filter expression for files found in directories (default: `.\.txt$`)
    #[arg(long)]
    pattern: Option<String>,

    /// Capacity of the discovery queue (default: 1000)
    #[arg(long)]
    queue_capacity: Option<usize>,

    /// Decimal places printed for each distance (default: 6)
    #[arg(long)]
    precision: Option<usize>,

    /// Report order: combined token count (default) or distance
    #[arg(long, value_enum)]
    rank_by: Option<RankKey>,

    /// Report format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Print each file's word table to stderr before scoring
    #[arg(long)]
    show_distributions: bool,

    /// Don't draw progress bars
    #[arg(long)]
    no_progress: bool,
}

impl Cli {
    fn into_overrides(self) -> Overrides {
        Overrides {
            inputs: self.paths,
            pattern: self.pattern,
            queue_capacity: self.queue_capacity,
            precision: self.precision,
            rank_by: self.rank_by,
            format: self.format,
            show_distributions: self.show_distributions,
            no_progress: self.no_progress,
        }
    }
}

/// Separate arguments clap should see from reserved ones.
///
/// Options the command defines are kept wherever they appear, along with the
/// value that follows a value-taking long option. Any other argument starting
/// with `-` is reserved and returned in the second list. Everything after a
/// `--` delimiter is kept as a path.
fn split_reserved<I>(cmd: &Command, args: I) -> (Vec<OsString>, Vec<OsString>)
where
    I: IntoIterator<Item = OsString>,
{
    let mut cmd = cmd.clone();
    cmd.build();

    // Long name -> whether it takes a value.
    let mut longs: HashMap<String, bool> = HashMap::new();
    let mut shorts: HashSet<char> = HashSet::new();
    for arg in cmd.get_arguments() {
        let takes_value = arg.get_action().takes_values();
        if let Some(long) = arg.get_long() {
            longs.insert(long.to_string(), takes_value);
        }
        if let Some(short) = arg.get_short() {
            shorts.insert(short);
        }
    }

    let mut args = args.into_iter();
    let mut kept: Vec<OsString> = args.next().into_iter().collect();
    let mut reserved = Vec::new();
    let mut delimited = false;

    while let Some(arg) = args.next() {
        if delimited {
            kept.push(arg);
            continue;
        }
        let Some(text) = arg.to_str() else {
            kept.push(arg);
            continue;
        };

        if text == "--" {
            delimited = true;
            kept.push(arg);
        } else if let Some(long) = text.strip_prefix("--") {
            let (name, inline) = match long.split_once('=') {
                Some((name, _)) => (name, true),
                None => (long, false),
            };
            match longs.get(name) {
                Some(&takes_value) => {
                    kept.push(arg);
                    if takes_value && !inline {
                        kept.extend(args.next());
                    }
                }
                None => reserved.push(arg),
            }
        } else if let Some(short) = text.strip_prefix('-') {
            let mut chars = short.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if shorts.contains(&c) => kept.push(arg),
                _ => reserved.push(arg),
            }
        } else {
            kept.push(arg);
        }
    }

    (kept, reserved)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Structured logging on stderr; stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wordsim=info")),
        )
        .init();

    let (args, reserved) = split_reserved(&Cli::command(), std::env::args_os());
    for arg in &reserved {
        warn!(argument = %arg.to_string_lossy(), "Ignoring reserved argument");
    }
    let cli = Cli::parse_from(args);
    let config = Config::load(cli.into_overrides())?;

    let results = wordsim::pipeline::compare::run(&config).await?;

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    report::write_report(&mut out, &results, config.format, config.precision)?;
    out.flush()?;

    info!(pairs = results.len(), rank_by = ?config.rank_by, "Report written");
    Ok(())
}
