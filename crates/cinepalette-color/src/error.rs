//! Error types for cinepalette-color

use thiserror::Error;

/// Errors that can occur during color processing operations
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] cinepalette_core::Error),

    /// Matching was requested against a palette with no colors
    #[error("empty palette: at least one color is required for matching")]
    EmptyPalette,

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
