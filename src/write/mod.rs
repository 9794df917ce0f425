//! Text in, glyph document out.
//!
//! ```text
//! raw text ──normalize──→ sentences of TirWord ──→ Grid ──→ SvgCanvas ──→ file
//! ```
//!
//! All validation happens in [`parse_text`], before anything is drawn, and
//! the finished document is written with a single `fs::write`, so a failed
//! run never leaves a partial SVG behind.

pub mod svg;

use std::path::{Path, PathBuf};

use num_complex::Complex64;

use crate::config::{WriterConfig, resolve_output_path};
use crate::draw::{Canvas, DrawLetter, Grid, H_MAX};
use crate::error::TirsuResult;
use crate::language::{LanguageError, LanguageResult, Orientation, TirStr, TirWord};

pub use svg::SvgCanvas;

/// Strip commas, turn `.`, `?` and `!` into sentence breaks, trim and lowercase.
pub fn normalize_text(text: &str) -> String {
    text.replace(',', "")
        .replace(['.', '?', '!'], "\n")
        .trim()
        .to_lowercase()
}

/// Validated text: one row of words per sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    orientation: Orientation,
    sentences: Vec<Vec<TirWord>>,
}

impl Document {
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Non-empty sentences in reading order.
    pub fn sentences(&self) -> &[Vec<TirWord>] {
        &self.sentences
    }

    pub fn words(&self) -> impl Iterator<Item = &TirWord> {
        self.sentences.iter().flatten()
    }

    /// Letter count of the longest word.
    pub fn max_letters(&self) -> usize {
        self.words().map(TirWord::len).max().unwrap_or(0)
    }

    /// Shared circle radius, `max_letters ^ exponent`.
    pub fn radius(&self, exponent: f64) -> f64 {
        (self.max_letters() as f64).powf(exponent)
    }

    /// Room around each circle for the letter strokes.
    pub fn padding(&self, radius: f64) -> f64 {
        radius.max(H_MAX) + H_MAX
    }

    /// Layout with one row per sentence and one column per word slot.
    pub fn grid(&self, exponent: f64) -> Grid {
        let nx = self.sentences.iter().map(Vec::len).max().unwrap_or(0);
        let ny = self.sentences.len();
        let radius = self.radius(exponent);
        Grid::new(nx, ny, radius, Some(self.padding(radius)))
    }
}

/// Normalize and validate `text` for every word before anything is drawn.
pub fn parse_text(text: &str, orientation: Orientation) -> LanguageResult<Document> {
    let normalized = normalize_text(text);

    // Reports every bad character in the text at once.
    TirStr::new(&normalized)?;

    let mut sentences = Vec::new();
    for sentence in normalized.split('\n') {
        let words = sentence
            .split_whitespace()
            .map(|word| TirWord::new(word, orientation))
            .collect::<LanguageResult<Vec<_>>>()?;
        if !words.is_empty() {
            sentences.push(words);
        }
    }

    if sentences.is_empty() {
        return Err(LanguageError::EmptyText);
    }

    let document = Document {
        orientation,
        sentences,
    };
    tracing::debug!(
        sentences = document.sentences.len(),
        words = document.words().count(),
        max_letters = document.max_letters(),
        %orientation,
        "parsed text"
    );
    Ok(document)
}

/// Draw one word: its circle, the start marker, then every letter at its angle.
pub fn write_word<C: Canvas + ?Sized>(
    canvas: &mut C,
    word: &TirWord,
    center: Complex64,
    radius: f64,
    line_width: f64,
) {
    canvas.begin_group(word.as_str());
    {
        let mut draw = DrawLetter::new(&mut *canvas, center, radius, line_width);
        draw.circle();

        let angles = word.angles();
        if let Some(&first) = angles.first() {
            draw.beginning(first);
        }
        for (token, angle) in word.tokens().iter().zip(angles) {
            draw.letter(token.letter, angle);
        }
    }
    canvas.end_group();
}

/// Lay out and draw every word of `document` in memory.
pub fn render_document(document: &Document, config: &WriterConfig) -> SvgCanvas {
    let radius = document.radius(config.radius_exponent);
    let grid = document.grid(config.radius_exponent);
    let mut canvas = SvgCanvas::new(grid.width(), grid.height(), config.scale);

    for (sentence, row) in document.sentences().iter().zip(grid.centers()) {
        for (word, center) in sentence.iter().zip(row) {
            write_word(&mut canvas, word, center, radius, config.line_width);
        }
    }

    tracing::debug!(
        width = grid.width(),
        height = grid.height(),
        radius,
        padding = grid.padding,
        strokes = canvas.elements().len(),
        "rendered document"
    );
    canvas
}

/// Render `text` to an SVG string.
pub fn render_svg(text: &str, config: &WriterConfig) -> TirsuResult<String> {
    config.validate()?;
    let document = parse_text(text, config.orientation)?;
    Ok(render_document(&document, config).finish())
}

/// Render `text` and write it to `path` (extension forced to `.svg`).
///
/// Returns the path actually written.
pub fn write_tirsu(path: &Path, text: &str, config: &WriterConfig) -> TirsuResult<PathBuf> {
    config.validate()?;
    let path = resolve_output_path(path)?;
    let document = parse_text(text, config.orientation)?;
    let canvas = render_document(&document, config);
    canvas.export(&path)?;

    tracing::info!(
        path = %path.display(),
        width = canvas.width() * config.scale,
        height = canvas.height() * config.scale,
        words = document.words().count(),
        scale = config.scale,
        "wrote tir'su document"
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::svg::Segment;
    use super::*;
    use crate::error::TirsuError;

    const TEXT: &str = "Zhak, vo'n'fynh duj! Vlaakith?";

    #[test]
    fn normalization() {
        assert_eq!(normalize_text(TEXT), "zhak vo'n'fynh duj\n vlaakith");
        assert_eq!(normalize_text("  A. b  "), "a\n b");
    }

    #[test]
    fn sentences_become_rows() {
        let doc = parse_text(TEXT, Orientation::Githyanki).unwrap();
        let shape: Vec<usize> = doc.sentences().iter().map(Vec::len).collect();
        assert_eq!(shape, vec![3, 1]);
        assert_eq!(doc.max_letters(), 9);
        assert_eq!(doc.orientation(), Orientation::Githyanki);
        assert!(doc.words().all(|w| w.orientation() == Orientation::Githyanki));
    }

    #[test]
    fn empty_sentences_are_dropped() {
        let doc = parse_text("hi... there", Orientation::Githyanki).unwrap();
        assert_eq!(doc.sentences().len(), 2);
    }

    #[test]
    fn blank_text_is_rejected() {
        for text in ["", "   ", "...", ", ! ?"] {
            assert!(matches!(
                parse_text(text, Orientation::Githyanki),
                Err(LanguageError::EmptyText)
            ));
        }
    }

    #[test]
    fn invalid_characters_are_collected() {
        match parse_text("ab# c2d e#", Orientation::Githyanki) {
            Err(LanguageError::InvalidCharacters { found }) => {
                assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!['#', '2']);
            }
            other => panic!("expected invalid characters, got {other:?}"),
        }
    }

    #[test]
    fn radius_and_padding() {
        let doc = parse_text(TEXT, Orientation::Githyanki).unwrap();
        assert_eq!(doc.radius(1.0), 9.0);
        assert!((doc.radius(1.25) - 9f64.powf(1.25)).abs() < 1e-12);
        assert_eq!(doc.padding(9.0), 2.0 * H_MAX);
        assert_eq!(doc.padding(30.0), 30.0 + H_MAX);

        let grid = doc.grid(1.0);
        assert_eq!((grid.nx, grid.ny), (3, 2));
        assert_eq!(grid.units(), 9.0 + 4.0 * H_MAX);
    }

    #[test]
    fn one_circle_per_word() {
        let config = WriterConfig::default();
        let doc = parse_text(TEXT, config.orientation).unwrap();
        let canvas = render_document(&doc, &config);

        let circles = canvas
            .elements()
            .iter()
            .filter(|e| e.segments.iter().any(|s| matches!(s, Segment::Arc { .. })))
            .count();
        assert_eq!(circles, 4);
        assert_eq!(canvas.depth(), 0);

        let svg = canvas.finish();
        assert_eq!(svg.matches("<g class=\"word\"").count(), 4);
        assert_eq!(svg.matches("</g>").count(), 4);
    }

    #[test]
    fn document_is_sized_to_grid() {
        let config = WriterConfig::new(Orientation::Githyanki, 2.0);
        let doc = parse_text("ab", config.orientation).unwrap();
        let grid = doc.grid(config.radius_exponent);
        let canvas = render_document(&doc, &config);
        assert_eq!(canvas.width(), grid.width());
        assert_eq!(canvas.height(), grid.height());
        assert_eq!(canvas.scale(), 2.0);
    }

    #[test]
    fn orientations_differ() {
        let yanki = render_svg("vlaakith", &WriterConfig::new(Orientation::Githyanki, 1.0)).unwrap();
        let zerai = render_svg("vlaakith", &WriterConfig::new(Orientation::Githzerai, 1.0)).unwrap();
        assert_ne!(yanki, zerai);
    }

    #[test]
    fn rendering_is_deterministic() {
        let config = WriterConfig::default();
        assert_eq!(
            render_svg(TEXT, &config).unwrap(),
            render_svg(TEXT, &config).unwrap()
        );
    }

    #[test]
    fn bad_scale_is_a_config_error() {
        let config = WriterConfig::new(Orientation::Githyanki, 0.0);
        assert!(matches!(
            render_svg("duj", &config),
            Err(TirsuError::Config(_))
        ));
    }

    #[test]
    fn invalid_text_leaves_no_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.svg");
        let result = write_tirsu(&path, "duj 42", &WriterConfig::default());
        assert!(matches!(result, Err(TirsuError::Language(_))));
        assert!(!path.exists());
    }
}
