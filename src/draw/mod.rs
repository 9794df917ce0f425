//! Geometry: the drawing context, stroke primitives, the letter grammar,
//! and the page grid.
//!
//! ## Components
//!
//! - [`canvas`]: the [`Canvas`] drawing-context trait and the [`Frame`] scope guard
//! - [`shapes`]: spokes, lines, ellipse arcs, chevrons, bars, triangles, notches
//! - [`letters`]: one stroke recipe per alphabet letter
//! - [`grid`]: lattice of word-circle centres

pub mod canvas;
pub mod grid;
pub mod letters;
pub mod shapes;

pub use canvas::{Canvas, Frame};
pub use grid::Grid;
pub use letters::{DrawLetter, H_MAX};
pub use shapes::{ArmsStyle, Direction, DrawShape, Ellipse};
