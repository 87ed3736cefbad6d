//! CinePalette Core - Basic data structures for palette-based recoloring
//!
//! This crate provides the fundamental types used throughout the
//! CinePalette engine:
//!
//! - [`Rgb`] / [`Rgba`] - 8-bit color values
//! - [`Raster`] - row-major RGBA pixel buffer with fixed dimensions
//! - [`Palette`] - ordered, named list of match-target colors
//! - [`palette::presets`] - the built-in film and calibration palettes
//!
//! Image decode/encode is deliberately absent: callers hand in decoded
//! pixel buffers and receive processed buffers back.

pub mod color;
pub mod error;
pub mod palette;
pub mod raster;

pub use color::{Rgb, Rgba};
pub use error::{Error, Result};
pub use palette::Palette;
pub use raster::Raster;
