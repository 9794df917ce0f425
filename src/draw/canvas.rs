//! The 2D drawing context the glyph engine draws against.
//!
//! [`Canvas`] follows the cairo model: a current transformation matrix with
//! a save/restore stack, a current path built in user space, and
//! `stroke`/`fill` which consume that path. The y axis points down, so
//! `rotate(-θ)` turns the local x axis to the mathematical angle `θ` on
//! screen.
//!
//! [`Frame`] is the scoped form of the local polar frame every primitive
//! draws in.

use std::ops::{Deref, DerefMut};

use num_complex::Complex64;

/// A cairo-style vector drawing context.
pub trait Canvas {
    /// Push the current transform and paint state.
    fn save(&mut self);
    /// Pop the state pushed by the matching [`save`](Canvas::save).
    fn restore(&mut self);

    fn translate(&mut self, tx: f64, ty: f64);
    /// Rotate user space by `angle` radians (positive turns x towards y).
    fn rotate(&mut self, angle: f64);

    fn move_to(&mut self, x: f64, y: f64);
    fn rel_move_to(&mut self, dx: f64, dy: f64);
    fn rel_line_to(&mut self, dx: f64, dy: f64);
    /// Circular arc around `(xc, yc)` from `angle1` to `angle2`, increasing.
    fn arc(&mut self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64);

    /// Outline the current path and clear it.
    fn stroke(&mut self);
    /// Fill the current path and clear it.
    fn fill(&mut self);

    fn set_line_width(&mut self, width: f64);
    fn set_source_rgba(&mut self, red: f64, green: f64, blue: f64, alpha: f64);

    /// Start a labelled group of marks. Backends without grouping ignore it.
    fn begin_group(&mut self, _label: &str) {}
    /// Close the innermost group.
    fn end_group(&mut self) {}
}

/// A local polar frame opened on a canvas.
///
/// Opening saves the canvas state, translates to `origin`, rotates the
/// local x axis to `delta` and moves to the local start point `z0`.
/// Dropping strokes the path and restores the state, also on unwind, so
/// a half-drawn mark can never leak its transform into the next one.
pub struct Frame<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
}

impl<'a, C: Canvas + ?Sized> Frame<'a, C> {
    pub fn open(canvas: &'a mut C, origin: Complex64, z0: Complex64, delta: f64) -> Self {
        canvas.save();
        canvas.translate(origin.re, origin.im);
        canvas.rotate(-delta);
        canvas.move_to(z0.re, z0.im);
        Self { canvas }
    }

    /// Draw a sequence of relative segments.
    pub fn polyline(&mut self, vecs: &[Complex64]) {
        for v in vecs {
            self.canvas.rel_line_to(v.re, v.im);
        }
    }
}

impl<C: Canvas + ?Sized> Deref for Frame<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> DerefMut for Frame<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> Drop for Frame<'_, C> {
    fn drop(&mut self) {
        self.canvas.stroke();
        self.canvas.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every call as a short string.
    #[derive(Default)]
    struct Log(Vec<String>);

    impl Canvas for Log {
        fn save(&mut self) {
            self.0.push("save".into());
        }
        fn restore(&mut self) {
            self.0.push("restore".into());
        }
        fn translate(&mut self, tx: f64, ty: f64) {
            self.0.push(format!("translate {tx} {ty}"));
        }
        fn rotate(&mut self, angle: f64) {
            self.0.push(format!("rotate {angle}"));
        }
        fn move_to(&mut self, x: f64, y: f64) {
            self.0.push(format!("move {x} {y}"));
        }
        fn rel_move_to(&mut self, dx: f64, dy: f64) {
            self.0.push(format!("rmove {dx} {dy}"));
        }
        fn rel_line_to(&mut self, dx: f64, dy: f64) {
            self.0.push(format!("rline {dx} {dy}"));
        }
        fn arc(&mut self, _: f64, _: f64, _: f64, _: f64, _: f64) {
            self.0.push("arc".into());
        }
        fn stroke(&mut self) {
            self.0.push("stroke".into());
        }
        fn fill(&mut self) {
            self.0.push("fill".into());
        }
        fn set_line_width(&mut self, _: f64) {}
        fn set_source_rgba(&mut self, _: f64, _: f64, _: f64, _: f64) {}
    }

    #[test]
    fn frame_brackets_emission() {
        let mut log = Log::default();
        {
            let mut frame = Frame::open(
                &mut log,
                Complex64::new(5.0, 6.0),
                Complex64::new(2.0, 0.0),
                0.5,
            );
            frame.polyline(&[Complex64::new(1.0, 0.0)]);
        }
        assert_eq!(
            log.0,
            vec![
                "save",
                "translate 5 6",
                "rotate -0.5",
                "move 2 0",
                "rline 1 0",
                "stroke",
                "restore",
            ]
        );
    }

    #[test]
    fn frame_restores_on_unwind() {
        let mut log = Log::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _frame = Frame::open(&mut log, Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), 0.0);
            panic!("mid-emission failure");
        }));
        assert!(result.is_err());
        assert_eq!(log.0.last().map(String::as_str), Some("restore"));
    }
}
