// Unit tests for tokenization and word-frequency distributions.
//
// Tests the public text API in isolation: token boundaries, contraction
// handling, stream/file equivalence, and the frequency invariants.

use std::fs;

use wordsim::error::Error;
use wordsim::text::frequency::{FrequencyBuilder, WordFrequencies};
use wordsim::text::tokenizer::{scan, tokenize_file, tokenize_str};

// ============================================================
// Tokenizer
// ============================================================

#[test]
fn tokenize_contraction_and_hyphenated_word() {
    let out = tokenize_str("Don't stop-the-clock!!");
    assert_eq!(out.tokens, vec!["dont", "stop-the-clock"]);
    assert_eq!(out.total_tokens, 2);
}

#[test]
fn tokenize_lowercases_and_keeps_digits() {
    let out = tokenize_str("HTTP/2 Was Released In 2015");
    assert_eq!(out.tokens, vec!["http", "2", "was", "released", "in", "2015"]);
}

#[test]
fn tokenize_leading_delimiters_produce_no_empty_token() {
    let out = tokenize_str("   ,,,first");
    assert_eq!(out.tokens, vec!["first"]);
    assert_eq!(out.total_tokens, 1);
}

#[test]
fn tokenize_apostrophe_between_words_joins_them() {
    // The apostrophe neither flushes nor sets a boundary.
    let out = tokenize_str("rock'n'roll o'clock");
    assert_eq!(out.tokens, vec!["rocknroll", "oclock"]);
}

#[test]
fn tokenize_is_deterministic() {
    let text = "Same words, same order; same words again.";
    assert_eq!(tokenize_str(text), tokenize_str(text));
}

#[test]
fn scan_across_buffer_boundaries() {
    // Longer than BufReader's default buffer so words straddle refills.
    let text = "lorem-ipsum dolor ".repeat(2000);
    let mut count = 0u64;
    let total = scan(text.as_bytes(), |w| {
        assert!(w == "lorem-ipsum" || w == "dolor", "unexpected token {w}");
        count += 1;
    })
    .unwrap();
    assert_eq!(total, 4000);
    assert_eq!(count, 4000);
}

#[test]
fn tokenize_file_matches_in_memory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.txt");
    let text = "It's the end of the world as we know it\nand I feel fine";
    fs::write(&path, text).unwrap();

    assert_eq!(tokenize_file(&path).unwrap(), tokenize_str(text));
}

#[test]
fn tokenize_missing_file_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let err = tokenize_file(&dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, Error::ResourceUnavailable { .. }));
}

// ============================================================
// Frequency distributions
// ============================================================

#[test]
fn frequencies_are_count_over_total() {
    let wf = WordFrequencies::from_text("a a a b b c");
    assert_eq!(wf.total_tokens(), 6);
    assert!((wf.frequency("a") - 0.5).abs() < 1e-12);
    assert!((wf.frequency("b") - 2.0 / 6.0).abs() < 1e-12);
    assert!((wf.frequency("c") - 1.0 / 6.0).abs() < 1e-12);
}

#[test]
fn frequencies_sum_to_one_for_larger_text() {
    let text = "The quick brown fox jumps over the lazy dog. ".repeat(37)
        + "Pack my box with five dozen liquor jugs!";
    let wf = WordFrequencies::from_text(&text);
    let sum: f64 = wf.entries().map(|e| e.frequency).sum();
    assert!((sum - 1.0).abs() < 1e-9, "Frequencies sum to {sum}");
}

#[test]
fn from_file_matches_from_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.txt");
    let text = "one fish two fish red fish blue fish";
    fs::write(&path, text).unwrap();

    let from_file = WordFrequencies::from_file(&path).unwrap();
    let from_text = WordFrequencies::from_text(text);
    assert_eq!(from_file.total_tokens(), from_text.total_tokens());
    assert_eq!(from_file.sorted_entries(), from_text.sorted_entries());
    assert_eq!(from_file.get("fish").unwrap().count, 4);
}

#[test]
fn builder_finalize_divides_by_given_total() {
    let mut builder = FrequencyBuilder::new();
    for word in ["x", "y", "x", "x"] {
        builder.insert(word);
    }
    let wf = builder.finalize(4);
    assert!((wf.frequency("x") - 0.75).abs() < 1e-12);
    assert!((wf.frequency("y") - 0.25).abs() < 1e-12);
}
