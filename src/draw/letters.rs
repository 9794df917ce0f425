//! The Tir'su shape grammar: one stroke recipe per letter.
//!
//! A glyph is a circle of radius `r1`. Every letter grows outward from the
//! circle along its axis angle `delta`, within a band `h_max` deep that
//! ends at `r2 = r1 + h_max`. Many letters are a smaller letter plus one
//! stroke (`b = y + bar`, `d = a + bar`, `h = d + bar`, `z = x + bar`).
//!
//! | letter | strokes |
//! |---|---|
//! | `a` | spoke `r1→r2`, inward chevron at `r2` |
//! | `b` | `y`, bar at `r2 − 8` |
//! | `c` | `o`, bar at `r2 − 8` |
//! | `d` | `a`, bar at `r2 − 8` |
//! | `e` | spoke of `h_max`, bar at `r2` |
//! | `f` | `e`, bar at `r2 − 2` |
//! | `g` | `c`, bar at `r2 − 10` |
//! | `h` | `d`, bar at `r2 − 10` |
//! | `i` | spoke of `h_max` |
//! | `j` | spoke `r1→r2`, lower inward arm at `r2` |
//! | `k` | `j`, lower inward arm at `r2 − 3` |
//! | `l` | spoke of `h_max − 5√2`, inward triangle at `r2` |
//! | `m` | `l`, bar at `r2 − 2 − 5√2` |
//! | `n` | `m`, bar at `r2 − 4 − 5√2` |
//! | `o` | spoke of `h_max − 6.5`, 3×5 loop at `r2 − 3` |
//! | `p` | `a`, lower inward arm at `r2 − 3` |
//! | `q` | spoke of `h_max − 5√2`, outward triangle at `r2 − 5√2` |
//! | `r` | `b`, bar at `r2 − 11` |
//! | `s` | `o`, slash of 10 at `r2 − 7.5` |
//! | `t` | `s`, slash of 10 at `r2 − 10.5` |
//! | `u` | spoke of `h_max − 6`, 6×5 half loop at `r2` |
//! | `v` | `u`, bar at `r2 − 7.5` |
//! | `w` | `v`, bar at `r2 − 9.5` |
//! | `x` | spoke of `h_max − 6`, notch at `r2 − 6` |
//! | `y` | spoke `r1→r2 − 7`, outward chevron at `r2 − 7` |
//! | `z` | `x`, bar at `r2 − 7.5` |
//! | `ea` | `e` shifted out by 0.25, then `a` |
//! | `'` | spoke of `h_max − 9`, dot at `r1 − 1.5` |
//! | `oa` | `o`, inward chevron at `r2 − 7.5` |
//! | `oi` | `o` pulled in by `5√2`, outward chevron at `r2 − 5√2 + 0.25` |
//! | `ou` | `u` pulled in by 7, 3×5 loop at `r2 − 3.5` |
//! | `ch` | `c` pulled in by `5√2 − 2`, inward chevron at `r2` |
//! | `sh` | `s` pulled in by `5√2 − 2.5` with a slash of 7, inward chevron at `r2` |
//! | `th` | `sh`, slash of 7 at `r2 − 10.5 − (5√2 − 2.5)` |
//! | `zh` | `z`, bar at `r2 − 9.5` |
//!
//! Every word also gets a `beginning` mark: a spoke from the circle
//! two thirds of the way to the centre, on the first letter's axis.

use std::f64::consts::{FRAC_PI_2, PI, SQRT_2};

use num_complex::Complex64;

use super::canvas::Canvas;
use super::shapes::{ARM_LENGTH, ArmsStyle, CRESCENT_SIZE, Direction, DrawShape, Ellipse};
use crate::language::Letter;

/// Depth of the band every letter is drawn in.
pub const H_MAX: f64 = 22.0;

/// Radial room taken by a 45° triangle of arm length 10.
const TRIANGLE_DEPTH: f64 = 5.0 * SQRT_2;
/// How far `oi` pulls the `o` loop inward.
const OI_SHIFT: f64 = TRIANGLE_DEPTH;
/// How far `ch` pulls its `c` inward.
const CH_SHIFT: f64 = -2.0 + TRIANGLE_DEPTH;
/// How far `sh` and `th` pull their `s` inward.
const SH_SHIFT: f64 = -2.5 + TRIANGLE_DEPTH;
/// How far `ou` pulls its `u` inward.
const OU_SHIFT: f64 = 7.0;

/// Bars default to the standard arm length.
const BAR: f64 = ARM_LENGTH;
/// Slashes run back towards the centre at 135°.
const SLASH: f64 = 3.0 * PI / 4.0;

/// Draws letters around one word circle.
pub struct DrawLetter<'c, C: Canvas + ?Sized> {
    shape: DrawShape<'c, C>,
    r1: f64,
    r2: f64,
}

impl<'c, C: Canvas + ?Sized> DrawLetter<'c, C> {
    /// Prepare to draw a word circle of radius `r1` centred at `origin`.
    pub fn new(canvas: &'c mut C, origin: Complex64, r1: f64, line_width: f64) -> Self {
        Self {
            shape: DrawShape::new(canvas, origin, line_width),
            r1,
            r2: r1 + H_MAX,
        }
    }

    /// The bounding circle of the word.
    pub fn circle(&mut self) {
        self.shape.circle(Complex64::new(0.0, 0.0), self.r1, false);
    }

    /// Mark where the word starts reading.
    pub fn beginning(&mut self, delta: f64) {
        self.shape.spoke(self.r1, delta, -self.r1 / 1.5);
    }

    /// Draw `letter` on the axis at angle `delta`.
    pub fn letter(&mut self, letter: Letter, delta: f64) {
        match letter {
            Letter::A => self.a(delta),
            Letter::B => self.b(delta),
            Letter::C => self.c(delta, 0.0),
            Letter::D => self.d(delta),
            Letter::E => self.e(delta, 0.0),
            Letter::F => self.f(delta, 0.0),
            Letter::G => self.g(delta),
            Letter::H => self.h(delta),
            Letter::I => self.i(delta),
            Letter::J => self.j(delta),
            Letter::K => self.k(delta),
            Letter::L => self.l(delta),
            Letter::M => self.m(delta),
            Letter::N => self.n(delta),
            Letter::O => self.o(delta, 0.0),
            Letter::P => self.p(delta),
            Letter::Q => self.q(delta),
            Letter::R => self.r(delta),
            Letter::S => self.s(delta, 0.0, ARM_LENGTH),
            Letter::T => self.t(delta),
            Letter::U => self.u(delta, 0.0),
            Letter::V => self.v(delta),
            Letter::W => self.w(delta),
            Letter::X => self.x(delta),
            Letter::Y => self.y(delta),
            Letter::Z => self.z(delta),
            Letter::Ea => self.ea(delta),
            Letter::Apostrophe => self.apostrophe(delta),
            Letter::Oa => self.oa(delta),
            Letter::Oi => self.oi(delta),
            Letter::Ou => self.ou(delta),
            Letter::Ch => self.ch(delta),
            Letter::Sh => self.sh(delta),
            Letter::Th => self.th(delta),
            Letter::Zh => self.zh(delta),
        }
    }

    fn a(&mut self, delta: f64) {
        self.shape.arms(self.r2, delta, ArmsStyle::inward().with_spoke(H_MAX));
    }

    fn b(&mut self, delta: f64) {
        self.y(delta);
        self.shape.vbar(self.r2 - 8.0, delta, BAR);
    }

    fn c(&mut self, delta: f64, shift: f64) {
        self.o(delta, shift);
        self.shape.vbar(self.r2 - 8.0 + shift, delta, BAR);
    }

    fn d(&mut self, delta: f64) {
        self.a(delta);
        self.shape.vbar(self.r2 - 8.0, delta, BAR);
    }

    fn e(&mut self, delta: f64, shift: f64) {
        self.shape.spoke(self.r1, delta, H_MAX + shift);
        self.shape.vbar(self.r2 + shift, delta, BAR);
    }

    fn f(&mut self, delta: f64, shift: f64) {
        self.e(delta, shift);
        self.shape.vbar(self.r2 + shift - 2.0, delta, BAR);
    }

    fn g(&mut self, delta: f64) {
        self.c(delta, 0.0);
        self.shape.vbar(self.r2 - 10.0, delta, BAR);
    }

    fn h(&mut self, delta: f64) {
        self.d(delta);
        self.shape.vbar(self.r2 - 10.0, delta, BAR);
    }

    fn i(&mut self, delta: f64) {
        self.shape.spoke(self.r1, delta, H_MAX);
    }

    fn j(&mut self, delta: f64) {
        let style = ArmsStyle::inward().with_spoke(H_MAX).down_only();
        self.shape.arms(self.r2, delta, style);
    }

    fn k(&mut self, delta: f64) {
        self.j(delta);
        self.shape.arms(self.r2 - 3.0, delta, ArmsStyle::inward().down_only());
    }

    fn l(&mut self, delta: f64) {
        self.shape.spoke(self.r1, delta, H_MAX - TRIANGLE_DEPTH);
        self.shape.triangle(self.r2, delta, Direction::Inward);
    }

    fn m(&mut self, delta: f64) {
        self.l(delta);
        self.shape.vbar(self.r2 - 2.0 - TRIANGLE_DEPTH, delta, BAR);
    }

    fn n(&mut self, delta: f64) {
        self.m(delta);
        self.shape.vbar(self.r2 - 4.0 - TRIANGLE_DEPTH, delta, BAR);
    }

    fn o(&mut self, delta: f64, shift: f64) {
        self.shape.spoke(self.r1, delta, H_MAX - 6.5 + shift);
        self.shape.ellipse(self.r2 - 3.0 + shift, delta, Ellipse::new(3.0, 5.0));
    }

    fn p(&mut self, delta: f64) {
        self.a(delta);
        self.shape.arms(self.r2 - 3.0, delta, ArmsStyle::inward().down_only());
    }

    fn q(&mut self, delta: f64) {
        self.shape.spoke(self.r1, delta, H_MAX - TRIANGLE_DEPTH);
        self.shape.triangle(self.r2 - TRIANGLE_DEPTH, delta, Direction::Outward);
    }

    fn r(&mut self, delta: f64) {
        self.b(delta);
        self.shape.vbar(self.r2 - 11.0, delta, BAR);
    }

    fn s(&mut self, delta: f64, shift: f64, length: f64) {
        self.o(delta, shift);
        self.shape.line(self.r2 + shift - 7.5, delta, length, SLASH);
    }

    fn t(&mut self, delta: f64) {
        self.s(delta, 0.0, ARM_LENGTH);
        self.shape.line(self.r2 - 10.5, delta, ARM_LENGTH, SLASH);
    }

    fn u(&mut self, delta: f64, shift: f64) {
        self.shape.spoke(self.r1, delta, H_MAX - 6.0 + shift);
        let half_loop = Ellipse::new(6.0, 5.0).sweep(-3.0 * FRAC_PI_2, -FRAC_PI_2);
        self.shape.ellipse(self.r2 + shift, delta, half_loop);
    }

    fn v(&mut self, delta: f64) {
        self.u(delta, 0.0);
        self.shape.vbar(self.r2 - 7.5, delta, BAR);
    }

    fn w(&mut self, delta: f64) {
        self.v(delta);
        self.shape.vbar(self.r2 - 9.5, delta, BAR);
    }

    fn x(&mut self, delta: f64) {
        self.shape.spoke(self.r1, delta, H_MAX - 6.0);
        self.shape.crescent(self.r2 - 6.0, delta, CRESCENT_SIZE);
    }

    fn y(&mut self, delta: f64) {
        self.shape.arms(
            self.r2 - 7.0,
            delta,
            ArmsStyle::default().with_spoke(H_MAX - 7.0),
        );
    }

    fn z(&mut self, delta: f64) {
        self.x(delta);
        self.shape.vbar(self.r2 - 7.5, delta, BAR);
    }

    fn ea(&mut self, delta: f64) {
        self.e(delta, 0.25);
        self.a(delta);
    }

    fn apostrophe(&mut self, delta: f64) {
        self.shape.spoke(self.r1, delta, H_MAX - 9.0);
        let dot = Ellipse::new(0.2, 0.2).sweep(0.0, 3.0 * PI);
        self.shape.ellipse(self.r1 - 1.5, delta, dot);
    }

    fn oa(&mut self, delta: f64) {
        self.o(delta, 0.0);
        self.shape.arms(self.r2 - 7.5, delta, ArmsStyle::inward());
    }

    fn oi(&mut self, delta: f64) {
        self.shape.spoke(self.r1, delta, H_MAX - 6.5 - OI_SHIFT);
        self.shape.ellipse(self.r2 - 3.0 - OI_SHIFT, delta, Ellipse::new(3.0, 5.0));
        self.shape.arms(self.r2 - OI_SHIFT + 0.25, delta, ArmsStyle::default());
    }

    fn ou(&mut self, delta: f64) {
        self.u(delta, -OU_SHIFT);
        self.shape.ellipse(self.r2 - 3.5, delta, Ellipse::new(3.0, 5.0));
    }

    fn ch(&mut self, delta: f64) {
        self.c(delta, -CH_SHIFT);
        self.shape.arms(self.r2, delta, ArmsStyle::inward());
    }

    fn sh(&mut self, delta: f64) {
        self.s(delta, -SH_SHIFT, 7.0);
        self.shape.arms(self.r2, delta, ArmsStyle::inward());
    }

    fn th(&mut self, delta: f64) {
        self.sh(delta);
        self.shape.line(self.r2 - 10.5 - SH_SHIFT, delta, 7.0, SLASH);
    }

    fn zh(&mut self, delta: f64) {
        self.z(delta);
        self.shape.vbar(self.r2 - 9.5, delta, BAR);
    }
}
