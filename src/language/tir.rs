//! Strings and words in the Tir'su script.
//!
//! [`TirStr`] segments validated text into letters with a maximal-munch
//! rule: each character first tries to extend the previous single-character
//! letter into a digraph (`z` + `h` → `zh`), and only starts a new letter
//! when that fails. [`TirWord`] is a single whitespace-free token plus the
//! winding [`Orientation`] that places its letters around the glyph circle.

use std::collections::BTreeSet;
use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::alphabet::{Letter, is_valid_char};
use super::{LanguageError, LanguageResult};

/// Byte-level source span of a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// A single tokenized letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The surface text, case preserved (one or two characters).
    pub surface: String,
    /// The alphabet symbol this token resolves to.
    pub letter: Letter,
    /// Source position in the trimmed input.
    pub span: Span,
}

/// Validate and tokenize `s` into whitespace-separated words of letters.
///
/// Every non-whitespace character is checked before segmentation starts,
/// so a failure reports the complete set of offending characters.
pub fn tokenize(s: &str) -> LanguageResult<Vec<Vec<Token>>> {
    let invalid: BTreeSet<char> = s
        .chars()
        .filter(|c| !is_valid_char(*c))
        .flat_map(char::to_lowercase)
        .collect();
    if !invalid.is_empty() {
        tracing::debug!(?invalid, "rejecting text with invalid characters");
        return Err(LanguageError::InvalidCharacters { found: invalid });
    }

    let mut words = Vec::new();
    let mut current: Vec<Token> = Vec::new();

    for (start, c) in s.char_indices() {
        let end = start + c.len_utf8();

        if c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        // Maximal munch: a digraph replaces the trailing one-character letter.
        if let Some(last) = current.last_mut() {
            if last.surface.chars().count() == 1 {
                let combined = format!("{}{c}", last.surface);
                if let Some(letter) = Letter::lookup(&combined) {
                    last.surface = combined;
                    last.letter = letter;
                    last.span.end = end;
                    continue;
                }
            }
        }

        let surface = c.to_string();
        let letter = Letter::lookup(&surface).ok_or_else(|| LanguageError::InvalidCharacters {
            found: c.to_lowercase().collect(),
        })?;
        current.push(Token {
            surface,
            letter,
            span: Span { start, end },
        });
    }

    if !current.is_empty() {
        words.push(current);
    }

    Ok(words)
}

/// Text written in the Tir'su alphabet.
///
/// Immutable once constructed: the source is trimmed, validated and
/// segmented eagerly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TirStr {
    data: String,
    words: Vec<Vec<Token>>,
}

impl TirStr {
    /// Validate and tokenize `s`.
    pub fn new(s: &str) -> LanguageResult<Self> {
        let data = s.trim().to_string();
        let words = tokenize(&data)?;
        Ok(Self { data, words })
    }

    /// The trimmed source text.
    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Tokens grouped by word.
    pub fn words(&self) -> &[Vec<Token>] {
        &self.words
    }

    /// All tokens in reading order, ignoring word boundaries.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.words.iter().flatten()
    }

    /// Surface form of every letter, case preserved.
    pub fn letters(&self) -> Vec<&str> {
        self.tokens().map(|t| t.surface.as_str()).collect()
    }

    /// Number of letters (whitespace excluded).
    pub fn len(&self) -> usize {
        self.words.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromStr for TirStr {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TirStr::new(s)
    }
}

impl fmt::Display for TirStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

/// Winding direction of letters around a glyph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// `+1`: starts at the top and runs clockwise.
    #[default]
    Githyanki,
    /// `-1`: mirrored winding, runs counter-clockwise.
    Githzerai,
}

impl Orientation {
    /// The sign of this orientation, `+1.0` or `-1.0`.
    pub fn sign(self) -> f64 {
        match self {
            Orientation::Githyanki => 1.0,
            Orientation::Githzerai => -1.0,
        }
    }

    /// Presentation label for this winding convention.
    pub fn convention(self) -> &'static str {
        match self {
            Orientation::Githyanki => "githyanki",
            Orientation::Githzerai => "githzerai",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.convention())
    }
}

impl FromStr for Orientation {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "y" | "githyanki" | "1" | "+1" => Ok(Orientation::Githyanki),
            "z" | "githzerai" | "-1" => Ok(Orientation::Githzerai),
            _ => Err(LanguageError::InvalidOrientation {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<i8> for Orientation {
    type Error = LanguageError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Orientation::Githyanki),
            -1 => Ok(Orientation::Githzerai),
            other => Err(LanguageError::InvalidOrientation {
                value: other.to_string(),
            }),
        }
    }
}

/// A single Tir'su word, drawn as one circular glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TirWord {
    text: TirStr,
    orientation: Orientation,
}

impl TirWord {
    /// Build a word from text holding exactly one whitespace-free token.
    pub fn new(word: &str, orientation: Orientation) -> LanguageResult<Self> {
        let token_count = word.split_whitespace().count();
        if token_count != 1 {
            return Err(LanguageError::InvalidWord {
                input: word.to_string(),
                token_count,
            });
        }

        Ok(Self {
            text: TirStr::new(word)?,
            orientation,
        })
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// `"githyanki"` or `"githzerai"`.
    pub fn convention(&self) -> &'static str {
        self.orientation.convention()
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    pub fn tokens(&self) -> &[Token] {
        self.text.words().first().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn letters(&self) -> Vec<&str> {
        self.text.letters()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Angle of each letter around the circle, in radians.
    ///
    /// The `n` angles split the circle into equal arcs of `2π/n`. For every
    /// `k`, `exp(i·(π/2 − σ·angle_k))` is the `k`-th `n`-th root of unity,
    /// where `σ` is the orientation sign: githyanki starts at `π/2` and
    /// decreases (clockwise), githzerai is its mirror image `−angle_k`.
    pub fn angles(&self) -> Vec<f64> {
        let n = self.len();
        let sign = self.orientation.sign();
        (0..n)
            .map(|k| TAU * sign * (0.25 - k as f64 / n as f64))
            .collect()
    }
}

impl fmt::Display for TirWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use num_complex::Complex64;

    use super::*;
    use crate::language::alphabet::in_alphabet;

    const PHRASES: [&str; 3] = ["vlaakith", "zhak vo'n'fynh duj", "zhak vo'n'ash duj"];
    const WORDS: [&str; 3] = ["vlaakith", "vo'n'fynh", "vo'n'ash"];

    #[test]
    fn letters_are_valid() {
        for phrase in PHRASES {
            let tir = TirStr::new(phrase).unwrap();
            for letter in tir.letters() {
                assert!(in_alphabet(letter), "{letter} in {phrase}");
                assert!((1..=2).contains(&letter.chars().count()));
            }
        }
    }

    #[test]
    fn letters_reconstruct_source() {
        for phrase in PHRASES {
            let tir = TirStr::new(phrase).unwrap();
            let joined: String = tir.letters().concat();
            let expected: String = phrase.chars().filter(|c| !c.is_whitespace()).collect();
            assert_eq!(joined, expected);
        }
    }

    #[test]
    fn vlaakith_munches_trailing_digraph() {
        let tir = TirStr::new("vlaakith").unwrap();
        assert_eq!(tir.letters(), vec!["v", "l", "a", "a", "k", "i", "th"]);
    }

    #[test]
    fn phrase_splits_into_words() {
        let tir = TirStr::new("zhak vo'n'fynh duj").unwrap();
        assert_eq!(tir.words().len(), 3);

        let first: Vec<_> = tir.words()[0].iter().map(|t| t.letter).collect();
        assert_eq!(first, vec![Letter::Zh, Letter::A, Letter::K]);

        let second: Vec<_> = tir.words()[1].iter().map(|t| t.surface.as_str()).collect();
        assert_eq!(second, vec!["v", "o", "'", "n", "'", "f", "y", "n", "h"]);
    }

    #[test]
    fn munch_preserves_case() {
        let tir = TirStr::new("  ZHak ").unwrap();
        assert_eq!(tir.as_str(), "ZHak");
        assert_eq!(tir.letters(), vec!["ZH", "a", "k"]);
        assert_eq!(tir.tokens().next().unwrap().span, Span { start: 0, end: 2 });
    }

    #[test]
    fn digraph_never_extends_to_three() {
        // "o" + "u" → "ou"; the following "a" starts a new letter.
        let tir = TirStr::new("oua").unwrap();
        assert_eq!(tir.letters(), vec!["ou", "a"]);
    }

    #[test]
    fn whitespace_only_is_empty() {
        let tir = TirStr::new("   ").unwrap();
        assert!(tir.is_empty());
        assert_eq!(tir.len(), 0);
    }

    #[test]
    fn invalid_character_is_reported() {
        let err = TirStr::new("ab#cd").unwrap_err();
        match err {
            LanguageError::InvalidCharacters { found } => {
                assert_eq!(found, BTreeSet::from(['#']));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_characters_are_lowercased_and_deduplicated() {
        let err = TirStr::new("Ä1ä1 ok").unwrap_err();
        match err {
            LanguageError::InvalidCharacters { found } => {
                assert_eq!(found, BTreeSet::from(['1', 'ä']));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn word_rejects_multiple_tokens() {
        let err = TirWord::new("ab cd", Orientation::Githyanki).unwrap_err();
        assert!(matches!(
            err,
            LanguageError::InvalidWord { token_count: 2, .. }
        ));
        assert!(TirWord::new("   ", Orientation::Githyanki).is_err());
    }

    #[test]
    fn angles_are_roots_of_unity() {
        for orientation in [Orientation::Githyanki, Orientation::Githzerai] {
            for word in WORDS {
                let word = TirWord::new(word, orientation).unwrap();
                let n = word.len();
                let sign = orientation.sign();

                for (k, angle) in word.angles().into_iter().enumerate() {
                    let z = Complex64::from_polar(1.0, FRAC_PI_2 - sign * angle);
                    let root = Complex64::from_polar(1.0, TAU * k as f64 / n as f64);

                    assert!((z.powu(n as u32) - 1.0).norm() < 1e-9);
                    assert!((z - root).norm() < 1e-9, "{word} k={k}");
                }
            }
        }
    }

    #[test]
    fn orientations_are_mirror_images() {
        let yanki = TirWord::new("vo'n'fynh", Orientation::Githyanki).unwrap();
        let zerai = TirWord::new("vo'n'fynh", Orientation::Githzerai).unwrap();

        for (a, b) in yanki.angles().iter().zip(zerai.angles()) {
            assert!((a + b).abs() < 1e-12);
        }
        assert!((yanki.angles()[0] - FRAC_PI_2).abs() < 1e-12);
        assert!((yanki.angles()[1] - (FRAC_PI_2 - 2.0 * PI / 9.0)).abs() < 1e-12);
        assert_eq!(yanki.convention(), "githyanki");
        assert_eq!(zerai.convention(), "githzerai");
    }

    #[test]
    fn orientation_parses_dialects() {
        assert_eq!("Y".parse::<Orientation>().unwrap(), Orientation::Githyanki);
        assert_eq!(" z ".parse::<Orientation>().unwrap(), Orientation::Githzerai);
        assert_eq!("-1".parse::<Orientation>().unwrap(), Orientation::Githzerai);
        assert!(matches!(
            "x".parse::<Orientation>(),
            Err(LanguageError::InvalidOrientation { value }) if value == "x"
        ));
        assert_eq!(Orientation::try_from(-1).unwrap(), Orientation::Githzerai);
        assert!(matches!(
            Orientation::try_from(0),
            Err(LanguageError::InvalidOrientation { .. })
        ));
    }
}
