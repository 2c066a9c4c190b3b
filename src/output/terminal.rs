// Colored terminal output for word-frequency tables.
//
// Everything here goes to stderr so the report on stdout stays clean.

use colored::Colorize;

use crate::pipeline::corpus::Document;
use crate::text::frequency::FrequencyEntry;

/// Show each document's word table, sorted by word.
pub fn display_distributions(documents: &[Document]) {
    for doc in documents {
        display_distribution(doc);
    }
}

/// Show one document's word table.
pub fn display_distribution(doc: &Document) {
    let wf = &doc.frequencies;
    eprintln!(
        "\n{}",
        format!(
            "=== {} ({} words, {} distinct) ===",
            doc.path.display(),
            wf.total_tokens(),
            wf.len()
        )
        .bold()
    );
    eprintln!(
        "  {:<32} {:>8}  {:>10}",
        "Word".dimmed(),
        "Count".dimmed(),
        "Frequency".dimmed(),
    );
    eprintln!("  {}", "-".repeat(54).dimmed());

    for entry in wf.sorted_entries() {
        eprintln!("{}", format_row(entry));
    }
}

/// One table row. Words wider than the column are cut to fit.
fn format_row(entry: &FrequencyEntry) -> String {
    format!(
        "  {:<32.31} {:>8}  {:>10.6}",
        entry.word, entry.count, entry.frequency
    )
}
