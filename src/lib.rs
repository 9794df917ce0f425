// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # tirsu
//!
//! Renders text in Tir'su, a constructed script where every word is a
//! circle and every letter is a small stroke figure standing on that
//! circle at an evenly spaced angle.
//!
//! ## Architecture
//!
//! - **Language** (`language`): the 35-letter alphabet, maximal-munch tokenizer, and word angles
//! - **Drawing** (`draw`): cairo-style canvas trait, stroke primitives, per-letter shape grammar, grid layout
//! - **Writer** (`write`): text normalization, document layout, SVG export
//! - **Config** (`config`): orientation, scale, and layout tuning, loadable from TOML
//!
//! ## Library usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use tirsu::config::WriterConfig;
//! use tirsu::language::Orientation;
//! use tirsu::write::write_tirsu;
//!
//! let config = WriterConfig::new(Orientation::Githzerai, 2.0);
//! let path = write_tirsu(Path::new("greeting.svg"), "Zhak vo'n'fynh duj!", &config).unwrap();
//! println!("wrote {}", path.display());
//! ```

pub mod config;
pub mod draw;
pub mod error;
pub mod language;
pub mod write;
