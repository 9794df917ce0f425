//! Stroke primitives in the local polar frame of a glyph.
//!
//! Every primitive is anchored at a `radius` along the local x axis of a
//! frame rotated to the axis angle `delta`, and draws a short run of
//! relative segments from there. Shapes are built as lists of complex
//! displacement vectors: `re` runs outward along the axis, `im` runs
//! across it.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use num_complex::Complex64;

use super::canvas::{Canvas, Frame};

/// Default length of a line, an arm, or a bar.
pub const ARM_LENGTH: f64 = 10.0;
/// Default side of a crescent notch.
pub const CRESCENT_SIZE: f64 = 6.0;
/// Sample points along an ellipse arc (one fewer linear segments).
pub const ELLIPSE_SAMPLES: usize = 100;

/// Which way a pair of arms opens along the axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// `+1`: arms run away from the circle centre.
    #[default]
    Outward,
    /// `-1`: arms are reflected back towards the centre.
    Inward,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Direction::Outward => 1.0,
            Direction::Inward => -1.0,
        }
    }
}

/// Parameters of a chevron ([`DrawShape::arms`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmsStyle {
    /// Length of each arm.
    pub length: f64,
    /// Angle of each arm away from the axis.
    pub theta: f64,
    pub direction: Direction,
    /// Draw a spoke of this length leading up to the vertex first.
    pub spoke: Option<f64>,
    /// Draw only the lower arm.
    pub down_only: bool,
}

impl Default for ArmsStyle {
    fn default() -> Self {
        Self {
            length: ARM_LENGTH,
            theta: FRAC_PI_4,
            direction: Direction::Outward,
            spoke: None,
            down_only: false,
        }
    }
}

impl ArmsStyle {
    pub fn inward() -> Self {
        Self {
            direction: Direction::Inward,
            ..Default::default()
        }
    }

    pub fn with_spoke(self, length: f64) -> Self {
        Self {
            spoke: Some(length),
            ..self
        }
    }

    pub fn down_only(self) -> Self {
        Self {
            down_only: true,
            ..self
        }
    }
}

/// An elliptical arc `(a·cos t, b·sin t)` for `t` between `t0` and `t1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub a: f64,
    pub b: f64,
    pub t0: f64,
    pub t1: f64,
}

impl Ellipse {
    /// A closed loop; the sweep runs a little past `2π` so the ends overlap.
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            a,
            b,
            t0: 0.0,
            t1: 2.1 * PI,
        }
    }

    pub fn sweep(self, t0: f64, t1: f64) -> Self {
        Self { t0, t1, ..self }
    }

    /// Sample points, in increasing `t` whichever order the bounds were given.
    pub fn points(&self) -> Vec<Complex64> {
        let (t0, t1) = (self.t0.min(self.t1), self.t0.max(self.t1));
        let step = (t1 - t0) / (ELLIPSE_SAMPLES - 1) as f64;
        (0..ELLIPSE_SAMPLES)
            .map(|i| {
                let t = t0 + step * i as f64;
                Complex64::new(self.a * t.cos(), self.b * t.sin())
            })
            .collect()
    }
}

/// The four vectors of a chevron: out along the upper arm and back, then
/// out along the lower arm and back.
pub fn arm_vectors(length: f64, theta: f64, direction: Direction) -> [Complex64; 4] {
    let mut up = Complex64::from_polar(length, -theta);
    if direction == Direction::Inward {
        up = -up.conj();
    }
    let down = up.conj();
    [up, -up, down, -down]
}

/// Draws primitives around one glyph centre.
pub struct DrawShape<'c, C: Canvas + ?Sized> {
    canvas: &'c mut C,
    origin: Complex64,
}

impl<'c, C: Canvas + ?Sized> DrawShape<'c, C> {
    /// Prepare to draw around `origin` with solid black strokes.
    pub fn new(canvas: &'c mut C, origin: Complex64, line_width: f64) -> Self {
        canvas.set_line_width(line_width);
        canvas.set_source_rgba(0.0, 0.0, 0.0, 1.0);
        Self { canvas, origin }
    }

    /// Walk `vecs` from local point `z0` in the frame rotated to `delta`.
    pub fn draw(&mut self, vecs: &[Complex64], z0: Complex64, delta: f64) {
        let mut frame = Frame::open(&mut *self.canvas, self.origin, z0, delta);
        frame.polyline(vecs);
    }

    /// A full circle of radius `r` around `center` (relative to the origin).
    pub fn circle(&mut self, center: Complex64, r: f64, fill: bool) {
        let mut frame = Frame::open(&mut *self.canvas, self.origin, center, 0.0);
        frame.rel_move_to(r, 0.0);
        frame.arc(center.re, center.im, r, 0.0, TAU);
        if fill {
            frame.fill();
        }
    }

    /// A straight segment of `length` at local angle `theta`.
    pub fn line(&mut self, radius: f64, delta: f64, length: f64, theta: f64) {
        let vec = Complex64::from_polar(length, theta);
        self.draw(&[vec], Complex64::new(radius, 0.0), delta);
    }

    /// A radial segment; a negative `length` runs towards the centre.
    pub fn spoke(&mut self, radius: f64, delta: f64, length: f64) {
        self.line(radius, delta, length, 0.0);
    }

    /// An elliptical arc centred at `radius` on the axis.
    pub fn ellipse(&mut self, radius: f64, delta: f64, ellipse: Ellipse) {
        let points = ellipse.points();
        let vecs: Vec<Complex64> = points.windows(2).map(|w| w[1] - w[0]).collect();
        let start = Complex64::new(radius, 0.0) + points[0];
        self.draw(&vecs, start, delta);
    }

    /// A chevron with its vertex at `radius`.
    pub fn arms(&mut self, radius: f64, delta: f64, style: ArmsStyle) {
        if let Some(h) = style.spoke {
            self.spoke(radius - h, delta, h);
        }

        let vecs = arm_vectors(style.length, style.theta, style.direction);
        let vecs = if style.down_only { &vecs[2..] } else { &vecs[..] };
        self.draw(vecs, Complex64::new(radius, 0.0), delta);
    }

    /// A bar of `length` across the axis, centred at `radius`.
    pub fn vbar(&mut self, radius: f64, delta: f64, length: f64) {
        let style = ArmsStyle {
            length: length / 2.0,
            theta: FRAC_PI_2,
            ..Default::default()
        };
        self.arms(radius, delta, style);
    }

    /// A chevron closed by a bar of `ARM_LENGTH·√2` between the arm tips.
    pub fn triangle(&mut self, radius: f64, delta: f64, direction: Direction) {
        let [up, back, down, _] = arm_vectors(ARM_LENGTH, FRAC_PI_4, direction);
        self.draw(&[up, back, down, up - down, back], Complex64::new(radius, 0.0), delta);
    }

    /// A rectangular notch: half a side across, a full side back, one side
    /// outward, then a full side across again.
    pub fn crescent(&mut self, radius: f64, delta: f64, size: f64) {
        let right = Complex64::new(size, 0.0);
        let up = Complex64::new(0.0, -size);
        let down = Complex64::new(0.0, size);
        self.draw(&[down / 2.0, up, right, down], Complex64::new(radius, 0.0), delta);
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::SQRT_2;

    use super::*;

    fn close(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-9
    }

    #[test]
    fn outward_arms_mirror_about_axis() {
        let [up, back, down, back_down] = arm_vectors(10.0, FRAC_PI_4, Direction::Outward);
        assert!(close(up, Complex64::new(5.0 * SQRT_2, -5.0 * SQRT_2)));
        assert!(close(down, up.conj()));
        assert!(close(back, -up));
        assert!(close(back_down, -down));
    }

    #[test]
    fn inward_arms_point_back() {
        let [up, _, down, _] = arm_vectors(10.0, FRAC_PI_4, Direction::Inward);
        assert!(up.re < 0.0 && down.re < 0.0);
        assert!(close(up, Complex64::new(-5.0 * SQRT_2, -5.0 * SQRT_2)));
    }

    #[test]
    fn vbar_vectors_are_perpendicular() {
        let [up, _, down, _] = arm_vectors(5.0, FRAC_PI_2, Direction::Outward);
        assert!(up.re.abs() < 1e-12);
        assert!(((down - up).norm() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn triangle_closing_edge_has_root_two_length() {
        let [up, _, down, _] = arm_vectors(ARM_LENGTH, FRAC_PI_4, Direction::Outward);
        assert!(((up - down).norm() - ARM_LENGTH * SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn ellipse_samples_are_ordered() {
        let e = Ellipse::new(6.0, 5.0).sweep(-FRAC_PI_2, -3.0 * FRAC_PI_2);
        let points = e.points();
        assert_eq!(points.len(), ELLIPSE_SAMPLES);
        assert!(close(points[0], Complex64::new(0.0, 5.0)));
        assert!(close(points[ELLIPSE_SAMPLES - 1], Complex64::new(0.0, -5.0)));
        assert!(points[ELLIPSE_SAMPLES / 2].re < -5.99);
    }
}
