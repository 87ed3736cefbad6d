//! Error types for cinepalette-core
//!
//! Provides a unified error type for the core data structures. Each
//! variant captures enough context for diagnostics without exposing
//! internal representation details.

use thiserror::Error;

/// CinePalette core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Pixel buffer length inconsistent with the stated dimensions
    #[error("dimension mismatch: {width}x{height} does not match buffer of {len} pixels")]
    DimensionMismatch { width: u32, height: u32, len: usize },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
