//! Rich diagnostic error types for the tirsu writer.
//!
//! Language and configuration errors live next to the code that raises
//! them; this module ties them together with the render errors under one
//! top-level type, keeping codes and help text intact for the CLI.

use miette::Diagnostic;
use thiserror::Error;

use crate::config::ConfigError;
use crate::language::LanguageError;

/// Top-level error type for the tirsu writer.
#[derive(Debug, Error, Diagnostic)]
pub enum TirsuError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Language(#[from] LanguageError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Render(#[from] RenderError),
}

// ---------------------------------------------------------------------------
// Render errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum RenderError {
    #[error("failed to write document: {path}")]
    #[diagnostic(
        code(tirsu::render::export),
        help("Check that the output directory is writable and has free space.")
    )]
    Export {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type RenderResult<T> = std::result::Result<T, RenderError>;

/// Convenience alias for functions returning tirsu results.
pub type TirsuResult<T> = std::result::Result<T, TirsuError>;
