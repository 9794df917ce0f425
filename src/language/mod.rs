//! The Tir'su language model: alphabet, tokenizer, and words.
//!
//! ```text
//! raw text ──→ TirStr (maximal-munch letters) ──→ TirWord (letters + orientation)
//!                                                      │
//!                                                      └──→ angles around the circle
//! ```

pub mod alphabet;
pub mod tir;

use std::collections::BTreeSet;

use miette::Diagnostic;
use thiserror::Error;

pub use alphabet::{ALPHABET, Letter, in_alphabet};
pub use tir::{Orientation, TirStr, TirWord};

/// Errors raised while validating Tir'su text.
#[derive(Debug, Error, Diagnostic)]
pub enum LanguageError {
    #[error("invalid characters found: {}", format_chars(.found))]
    #[diagnostic(
        code(tirsu::language::invalid_characters),
        help(
            "Tir'su text may only contain the Latin letters a-z, the apostrophe \
             and whitespace. Remove or transliterate the listed characters."
        )
    )]
    InvalidCharacters { found: BTreeSet<char> },

    #[error("input must be exactly one word, got {token_count}: \"{input}\"")]
    #[diagnostic(
        code(tirsu::language::invalid_word),
        help("A glyph holds a single word. Split the text on whitespace first.")
    )]
    InvalidWord { input: String, token_count: usize },

    #[error("invalid orientation: \"{value}\"")]
    #[diagnostic(
        code(tirsu::language::invalid_orientation),
        help("Use \"y\" (githyanki, +1) or \"z\" (githzerai, -1).")
    )]
    InvalidOrientation { value: String },

    #[error("no words found in text")]
    #[diagnostic(
        code(tirsu::language::empty_text),
        help("Provide at least one word to write.")
    )]
    EmptyText,
}

/// Result type for language operations.
pub type LanguageResult<T> = std::result::Result<T, LanguageError>;

fn format_chars(found: &BTreeSet<char>) -> String {
    let inner = found
        .iter()
        .map(|c| format!("'{c}'"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{inner}}}")
}
