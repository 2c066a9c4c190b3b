// Report writers. Text is one `<distance> <path_a> <path_b>` line per pair;
// JSON is an array of result objects.

use std::io::Write;

use clap::ValueEnum;

use crate::similarity::ranking::SimilarityResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format `{other}` (expected text or json)")),
        }
    }
}

/// Format one result as a report line (without the newline).
pub fn format_line(result: &SimilarityResult, precision: usize) -> String {
    format!(
        "{:.precision$} {} {}",
        result.distance,
        result.path_a.display(),
        result.path_b.display(),
    )
}

/// Write `results` in the given format, in the order given.
pub fn write_report<W: Write>(
    out: &mut W,
    results: &[SimilarityResult],
    format: OutputFormat,
    precision: usize,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Text => {
            for result in results {
                writeln!(out, "{}", format_line(result, precision))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, results)?;
            writeln!(out)?;
        }
    }
    out.flush()
}
