//! SVG backend for [`Canvas`].
//!
//! Paths are transformed to document space as they are built, exactly like
//! a cairo context does, and every `stroke`/`fill` becomes one `<path>`
//! element. The document is sized to the grid times the output scale; the
//! `viewBox` stays in grid units so the scale never touches the geometry.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::path::Path;

use num_complex::Complex64;

use crate::error::{RenderError, RenderResult};
use crate::draw::Canvas;

/// A 2D affine transform, cairo layout: `x' = a·x + c·y + e`, `y' = b·x + d·y + f`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Affine {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
}

impl Affine {
    const IDENTITY: Affine = Affine {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    fn apply(&self, p: Complex64) -> Complex64 {
        self.apply_vector(p) + Complex64::new(self.e, self.f)
    }

    fn apply_vector(&self, v: Complex64) -> Complex64 {
        Complex64::new(self.a * v.re + self.c * v.im, self.b * v.re + self.d * v.im)
    }

    fn translate(&mut self, tx: f64, ty: f64) {
        self.e += self.a * tx + self.c * ty;
        self.f += self.b * tx + self.d * ty;
    }

    fn rotate(&mut self, angle: f64) {
        let (sin, cos) = angle.sin_cos();
        let (a, b, c, d) = (self.a, self.b, self.c, self.d);
        self.a = a * cos + c * sin;
        self.b = b * cos + d * sin;
        self.c = c * cos - a * sin;
        self.d = d * cos - b * sin;
    }

    /// Angle the x axis is rotated by.
    fn rotation(&self) -> f64 {
        self.b.atan2(self.a)
    }

    /// Uniform length scale (1 for pure rotations and translations).
    fn length_scale(&self) -> f64 {
        (self.a * self.d - self.b * self.c).abs().sqrt()
    }
}

/// One piece of a path, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    MoveTo(Complex64),
    LineTo(Complex64),
    /// Circular arc swept with increasing angle from `start` to `end`.
    Arc {
        center: Complex64,
        radius: f64,
        start: f64,
        end: f64,
    },
}

impl Segment {
    fn end_point(&self) -> Complex64 {
        match *self {
            Segment::MoveTo(p) | Segment::LineTo(p) => p,
            Segment::Arc {
                center,
                radius,
                end,
                ..
            } => center + Complex64::from_polar(radius, end),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 1.0,
    };

    fn css(&self) -> String {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.red),
            channel(self.green),
            channel(self.blue)
        )
    }
}

/// How a path is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Stroke { width: f64 },
    Fill,
}

/// A finished path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathElement {
    pub segments: Vec<Segment>,
    pub paint: Paint,
    pub color: Rgba,
}

impl PathElement {
    /// End point of every segment, in order.
    pub fn points(&self) -> Vec<Complex64> {
        self.segments.iter().map(Segment::end_point).collect()
    }

    fn path_data(&self) -> String {
        let mut d = Vec::new();
        for segment in &self.segments {
            match *segment {
                Segment::MoveTo(p) => d.push(format!("M{} {}", num(p.re), num(p.im))),
                Segment::LineTo(p) => d.push(format!("L{} {}", num(p.re), num(p.im))),
                Segment::Arc {
                    center,
                    radius,
                    start,
                    end,
                } => {
                    // SVG arcs cannot close on themselves; split into quarter turns.
                    let pieces = ((end - start) / FRAC_PI_2).ceil().max(1.0) as usize;
                    let step = (end - start) / pieces as f64;
                    for i in 1..=pieces {
                        let p = center + Complex64::from_polar(radius, start + step * i as f64);
                        let r = num(radius);
                        d.push(format!("A{r} {r} 0 0 1 {} {}", num(p.re), num(p.im)));
                    }
                }
            }
        }
        d.join(" ")
    }

    fn to_svg(&self) -> String {
        let d = self.path_data();
        let color = self.color.css();
        let opacity = if self.color.alpha < 1.0 {
            format!(" opacity=\"{}\"", num(self.color.alpha))
        } else {
            String::new()
        };
        match self.paint {
            Paint::Stroke { width } => format!(
                "<path d=\"{d}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"{}\" \
                 stroke-linecap=\"round\" stroke-linejoin=\"round\"{opacity}/>",
                num(width)
            ),
            Paint::Fill => format!("<path d=\"{d}\" fill=\"{color}\" stroke=\"none\"{opacity}/>"),
        }
    }
}

/// Markup order: elements interleaved with group boundaries.
#[derive(Debug, Clone)]
enum Node {
    Element(usize),
    Open(String),
    Close,
}

#[derive(Debug, Clone, Copy)]
struct State {
    matrix: Affine,
    line_width: f64,
    color: Rgba,
}

impl Default for State {
    fn default() -> Self {
        Self {
            matrix: Affine::IDENTITY,
            line_width: 1.0,
            color: Rgba::BLACK,
        }
    }
}

/// An in-memory SVG document implementing [`Canvas`].
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    width: f64,
    height: f64,
    scale: f64,
    state: State,
    stack: Vec<State>,
    path: Vec<Segment>,
    current: Option<Complex64>,
    elements: Vec<PathElement>,
    nodes: Vec<Node>,
    open_groups: usize,
}

impl SvgCanvas {
    /// A blank document of `width × height` grid units, scaled by `scale`.
    pub fn new(width: f64, height: f64, scale: f64) -> Self {
        Self {
            width,
            height,
            scale,
            state: State::default(),
            stack: Vec::new(),
            path: Vec::new(),
            current: None,
            elements: Vec::new(),
            nodes: Vec::new(),
            open_groups: 0,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Depth of the save/restore stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Every painted path, in drawing order.
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// Render the complete SVG document.
    pub fn finish(&self) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
            num(self.width * self.scale),
            num(self.height * self.scale),
            num(self.width),
            num(self.height),
        ));

        let mut depth = 1;
        for node in &self.nodes {
            match node {
                Node::Element(i) => {
                    out.push_str(&"  ".repeat(depth));
                    out.push_str(&self.elements[*i].to_svg());
                    out.push('\n');
                }
                Node::Open(label) => {
                    out.push_str(&"  ".repeat(depth));
                    out.push_str(&format!("<g class=\"word\" data-word=\"{}\">\n", xml_escape(label)));
                    depth += 1;
                }
                Node::Close => {
                    depth = depth.saturating_sub(1).max(1);
                    out.push_str(&"  ".repeat(depth));
                    out.push_str("</g>\n");
                }
            }
        }
        for _ in 0..self.open_groups {
            depth = depth.saturating_sub(1).max(1);
            out.push_str(&"  ".repeat(depth));
            out.push_str("</g>\n");
        }

        out.push_str("</svg>\n");
        out
    }

    /// Write the document to `path`.
    pub fn export(&self, path: &Path) -> RenderResult<()> {
        std::fs::write(path, self.finish()).map_err(|e| RenderError::Export {
            path: path.display().to_string(),
            source: e,
        })
    }

    fn push_segment(&mut self, segment: Segment) {
        self.current = Some(segment.end_point());
        self.path.push(segment);
    }

    fn line_to_device(&mut self, p: Complex64) {
        match self.current {
            Some(_) => self.push_segment(Segment::LineTo(p)),
            None => self.push_segment(Segment::MoveTo(p)),
        }
    }

    fn paint(&mut self, paint: Paint) {
        let segments = std::mem::take(&mut self.path);
        self.current = None;

        if segments.iter().all(|s| matches!(s, Segment::MoveTo(_))) {
            return;
        }

        self.nodes.push(Node::Element(self.elements.len()));
        self.elements.push(PathElement {
            segments,
            paint,
            color: self.state.color,
        });
    }
}

impl Canvas for SvgCanvas {
    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => tracing::warn!("svg canvas: restore without matching save"),
        }
    }

    fn translate(&mut self, tx: f64, ty: f64) {
        self.state.matrix.translate(tx, ty);
    }

    fn rotate(&mut self, angle: f64) {
        self.state.matrix.rotate(angle);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let p = self.state.matrix.apply(Complex64::new(x, y));
        if matches!(self.path.last(), Some(Segment::MoveTo(_))) {
            self.path.pop();
        }
        self.push_segment(Segment::MoveTo(p));
    }

    fn rel_move_to(&mut self, dx: f64, dy: f64) {
        let Some(current) = self.current else {
            tracing::warn!("svg canvas: relative move without a current point");
            return;
        };
        let p = current + self.state.matrix.apply_vector(Complex64::new(dx, dy));
        if matches!(self.path.last(), Some(Segment::MoveTo(_))) {
            self.path.pop();
        }
        self.push_segment(Segment::MoveTo(p));
    }

    fn rel_line_to(&mut self, dx: f64, dy: f64) {
        let Some(current) = self.current else {
            tracing::warn!("svg canvas: relative line without a current point");
            return;
        };
        let p = current + self.state.matrix.apply_vector(Complex64::new(dx, dy));
        self.push_segment(Segment::LineTo(p));
    }

    fn arc(&mut self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64) {
        let mut end = angle2;
        while end < angle1 {
            end += TAU;
        }

        let matrix = self.state.matrix;
        let center = matrix.apply(Complex64::new(xc, yc));
        let radius = radius * matrix.length_scale();
        let start = angle1 + matrix.rotation();
        let end = end + matrix.rotation();

        let from = center + Complex64::from_polar(radius, start);
        let joined = self.current.is_some_and(|c| (c - from).norm() < 1e-9);
        if !joined {
            self.line_to_device(from);
        }
        self.push_segment(Segment::Arc {
            center,
            radius,
            start,
            end,
        });
    }

    fn stroke(&mut self) {
        let width = self.state.line_width * self.state.matrix.length_scale();
        self.paint(Paint::Stroke { width });
    }

    fn fill(&mut self) {
        self.paint(Paint::Fill);
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn set_source_rgba(&mut self, red: f64, green: f64, blue: f64, alpha: f64) {
        self.state.color = Rgba {
            red,
            green,
            blue,
            alpha,
        };
    }

    fn begin_group(&mut self, label: &str) {
        self.nodes.push(Node::Open(label.to_string()));
        self.open_groups += 1;
    }

    fn end_group(&mut self) {
        if self.open_groups > 0 {
            self.nodes.push(Node::Close);
            self.open_groups -= 1;
        }
    }
}

/// Format a coordinate with at most three decimals.
fn num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".into() } else { s.into() }
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
