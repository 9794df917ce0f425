//! Writer configuration: orientation, scale, and layout tuning.
//!
//! Configuration can be persisted as TOML:
//!
//! ```toml
//! orientation = "githzerai"
//! scale = 2.0
//! radius_exponent = 1.25
//! line_width = 1.136
//! ```

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::language::Orientation;

/// Errors from configuration loading and validation.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("invalid scale: {scale}")]
    #[diagnostic(
        code(tirsu::config::invalid_scale),
        help("The image scale must be a finite number greater than zero.")
    )]
    InvalidScale { scale: f64 },

    #[error("invalid output path: {path}")]
    #[diagnostic(
        code(tirsu::config::invalid_path),
        help("The directory that will contain the SVG file must already exist.")
    )]
    InvalidPath { path: String },

    #[error("invalid layout parameter {name} = {value}")]
    #[diagnostic(
        code(tirsu::config::invalid_layout),
        help("Layout parameters must be finite and greater than zero.")
    )]
    InvalidLayout { name: &'static str, value: f64 },

    #[error("failed to read config: {path}")]
    #[diagnostic(
        code(tirsu::config::read),
        help("Ensure the config file exists and is readable.")
    )]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {path}")]
    #[diagnostic(
        code(tirsu::config::parse),
        help("Check the TOML syntax in the config file: {message}")
    )]
    ConfigParse { path: String, message: String },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Settings for turning text into a glyph document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriterConfig {
    /// Winding direction shared by every word in the document.
    #[serde(default)]
    pub orientation: Orientation,
    /// Output scale factor applied to the document size.
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// The shared circle radius is `max_letters ^ radius_exponent`.
    #[serde(default = "default_radius_exponent")]
    pub radius_exponent: f64,
    /// Stroke width in grid units.
    #[serde(default = "default_line_width")]
    pub line_width: f64,
}

fn default_scale() -> f64 {
    1.0
}
fn default_radius_exponent() -> f64 {
    1.25
}
fn default_line_width() -> f64 {
    25.0 / 22.0
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            scale: default_scale(),
            radius_exponent: default_radius_exponent(),
            line_width: default_line_width(),
        }
    }
}

impl WriterConfig {
    /// Config with the given orientation and scale (other fields default).
    pub fn new(orientation: Orientation, scale: f64) -> Self {
        Self {
            orientation,
            scale,
            ..Default::default()
        }
    }

    /// Check every numeric field.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ConfigError::InvalidScale { scale: self.scale });
        }
        for (name, value) in [
            ("radius_exponent", self.radius_exponent),
            ("line_width", self.line_width),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidLayout { name, value });
            }
        }
        Ok(())
    }

    /// Load from a TOML file and validate.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ConfigRead {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ConfigParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize as pretty TOML.
    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ConfigParse {
            path: "<memory>".into(),
            message: e.to_string(),
        })
    }
}

/// Parse a user-entered scale, rejecting non-positive values.
pub fn parse_scale(s: &str) -> ConfigResult<f64> {
    let scale: f64 = s.trim().parse().map_err(|_| ConfigError::InvalidScale {
        scale: f64::NAN,
    })?;
    if !(scale.is_finite() && scale > 0.0) {
        return Err(ConfigError::InvalidScale { scale });
    }
    Ok(scale)
}

/// Force an `.svg` extension and require the parent directory to exist.
pub fn resolve_output_path(path: &Path) -> ConfigResult<PathBuf> {
    if path.as_os_str().is_empty() || path.file_name().is_none() {
        return Err(ConfigError::InvalidPath {
            path: path.display().to_string(),
        });
    }

    let path = path.with_extension("svg");
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    if !parent.is_dir() {
        return Err(ConfigError::InvalidPath {
            path: path.display().to_string(),
        });
    }

    Ok(path)
}
