// Streaming word tokenizer.
//
// Reads a byte stream once and emits lowercase words made of ASCII
// alphanumerics and hyphens. Apostrophes are dropped without breaking the
// word ("don't" -> "dont"). Any other byte marks a pending word boundary; the
// buffered word is only flushed when the next word character arrives or the
// stream ends, so runs of punctuation never produce empty tokens.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};

/// Tokens of one document, in stream order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenized {
    pub tokens: Vec<String>,
    /// Number of flush events. Always equals `tokens.len()`.
    pub total_tokens: u64,
}

/// Byte-at-a-time tokenizer state.
///
/// Feed bytes with [`Tokenizer::push`] and call [`Tokenizer::finish`] at end
/// of stream. Completed words are handed to the `emit` callback, which lets
/// callers fold tokens straight into a frequency table without buffering the
/// whole document.
#[derive(Debug, Default)]
pub struct Tokenizer {
    word: String,
    at_boundary: bool,
    flushed: u64,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<F: FnMut(&str)>(&mut self, byte: u8, emit: &mut F) {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            if self.at_boundary {
                self.flush(emit);
                self.at_boundary = false;
            }
            self.word.push(char::from(byte.to_ascii_lowercase()));
        } else if byte != b'\'' {
            self.at_boundary = true;
        }
    }

    /// Flush the trailing word and return the total number of tokens emitted.
    pub fn finish<F: FnMut(&str)>(mut self, emit: &mut F) -> u64 {
        self.flush(emit);
        self.flushed
    }

    fn flush<F: FnMut(&str)>(&mut self, emit: &mut F) {
        if self.word.is_empty() {
            return;
        }
        emit(&self.word);
        self.flushed += 1;
        self.word.clear();
    }
}

/// Run the tokenizer over a reader, calling `emit` for every word.
///
/// Returns the total token count. I/O errors are returned untouched so the
/// caller can attach the resource path.
pub fn scan<R: Read, F: FnMut(&str)>(reader: R, mut emit: F) -> std::io::Result<u64> {
    let mut reader = BufReader::new(reader);
    let mut tokenizer = Tokenizer::new();

    loop {
        let chunk = match reader.fill_buf() {
            Ok(chunk) => chunk,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if chunk.is_empty() {
            break;
        }
        for &byte in chunk {
            tokenizer.push(byte, &mut emit);
        }
        let consumed = chunk.len();
        reader.consume(consumed);
    }

    Ok(tokenizer.finish(&mut emit))
}

/// Tokenize an in-memory string.
pub fn tokenize_str(text: &str) -> Tokenized {
    let mut tokens = Vec::new();
    let mut tokenizer = Tokenizer::new();
    let mut emit = |word: &str| tokens.push(word.to_string());
    for &byte in text.as_bytes() {
        tokenizer.push(byte, &mut emit);
    }
    let total_tokens = tokenizer.finish(&mut emit);
    Tokenized {
        tokens,
        total_tokens,
    }
}

/// Tokenize a file on disk.
pub fn tokenize_file(path: &Path) -> Result<Tokenized> {
    let file = File::open(path).map_err(|e| Error::unavailable(path, e))?;
    let mut tokens = Vec::new();
    let total_tokens =
        scan(file, |word| tokens.push(word.to_string())).map_err(|e| Error::unavailable(path, e))?;
    Ok(Tokenized {
        tokens,
        total_tokens,
    })
}
