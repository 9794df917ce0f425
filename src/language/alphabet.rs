//! The Tir'su alphabet: 26 Latin letters, the apostrophe, and 8 digraphs.
//!
//! Every symbol is one or two characters long. Two-character symbols win
//! over a split into two single letters wherever both readings are valid
//! (see [`TirStr`](super::tir::TirStr) for the maximal-munch tokenizer).

use std::fmt;
use std::str::FromStr;

use super::LanguageError;

/// Every letter of the alphabet, in table order.
pub const ALPHABET: [&str; 35] = [
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r",
    "s", "t", "u", "v", "w", "x", "y", "z", "ea", "'", "oa", "oi", "ou", "ch", "sh", "th", "zh",
];

/// Checks whether `s` is a Tir'su letter (case-insensitive).
///
/// Whitespace-only input is accepted: whitespace is never a letter, but it
/// is always legal inside Tir'su text.
pub fn in_alphabet(s: &str) -> bool {
    s.trim().is_empty() || Letter::lookup(s).is_some()
}

/// Checks whether a single character can appear in Tir'su text.
pub fn is_valid_char(c: char) -> bool {
    c.is_whitespace() || c == '\'' || c.is_ascii_alphabetic()
}

/// One symbol of the alphabet.
///
/// Each variant maps to exactly one drawing rule in
/// [`DrawLetter`](crate::draw::letters::DrawLetter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Ea,
    Apostrophe,
    Oa,
    Oi,
    Ou,
    Ch,
    Sh,
    Th,
    Zh,
}

impl Letter {
    /// All letters, in the same order as [`ALPHABET`].
    pub const ALL: [Letter; 35] = [
        Letter::A,
        Letter::B,
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::H,
        Letter::I,
        Letter::J,
        Letter::K,
        Letter::L,
        Letter::M,
        Letter::N,
        Letter::O,
        Letter::P,
        Letter::Q,
        Letter::R,
        Letter::S,
        Letter::T,
        Letter::U,
        Letter::V,
        Letter::W,
        Letter::X,
        Letter::Y,
        Letter::Z,
        Letter::Ea,
        Letter::Apostrophe,
        Letter::Oa,
        Letter::Oi,
        Letter::Ou,
        Letter::Ch,
        Letter::Sh,
        Letter::Th,
        Letter::Zh,
    ];

    /// Look up a letter by its symbol (case-insensitive).
    pub fn lookup(symbol: &str) -> Option<Letter> {
        let lower = symbol.to_lowercase();
        ALPHABET
            .iter()
            .position(|s| *s == lower)
            .map(|i| Self::ALL[i])
    }

    /// The lowercase symbol for this letter.
    pub fn symbol(self) -> &'static str {
        ALPHABET[self as usize]
    }

    /// Whether this letter is written with two characters.
    pub fn is_digraph(self) -> bool {
        self.symbol().len() == 2
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Letter {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Letter::lookup(s).ok_or_else(|| LanguageError::InvalidCharacters {
            found: s.to_lowercase().chars().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_35_letters() {
        assert_eq!(ALPHABET.len(), 35);
        let unique: std::collections::BTreeSet<_> = ALPHABET.iter().collect();
        assert_eq!(unique.len(), 35);
    }

    #[test]
    fn in_alphabet_is_case_insensitive() {
        for s in ["a", "EA", "'", "oA", "ch", "sh", "Th", "zh"] {
            assert!(in_alphabet(s), "{s} should be a letter");
        }
    }

    #[test]
    fn whitespace_is_accepted() {
        assert!(in_alphabet(""));
        assert!(in_alphabet("  "));
        assert!(in_alphabet("\t"));
    }

    #[test]
    fn rejects_non_letters() {
        assert!(!in_alphabet("#"));
        assert!(!in_alphabet("ab"));
        assert!(!in_alphabet("a "));
        assert!(!in_alphabet("é"));
    }

    #[test]
    fn letter_enum_matches_table() {
        for (letter, symbol) in Letter::ALL.iter().zip(ALPHABET) {
            assert_eq!(letter.symbol(), symbol);
            assert_eq!(Letter::lookup(symbol), Some(*letter));
        }
        assert_eq!(Letter::ALL.iter().filter(|l| l.is_digraph()).count(), 8);
    }

    #[test]
    fn parse_unknown_letter_reports_characters() {
        let err = "#".parse::<Letter>().unwrap_err();
        match err {
            LanguageError::InvalidCharacters { found } => {
                assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!['#']);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
