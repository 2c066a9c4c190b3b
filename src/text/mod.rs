// Text processing: tokenization and word-frequency distributions.

pub mod frequency;
pub mod tokenizer;
