//! CinePalette - palette-based cinematic recoloring for Rust
//!
//! CinePalette recolors a decoded raster image to match a fixed or
//! extracted color palette: extract a representative palette from an
//! image, then remap every pixel to its nearest palette color under an
//! RGB, Lab, or HSV metric, with intensity blending, contrast, and
//! grain on top.
//!
//! Image decode/encode and UI concerns stay with the caller: hand in an
//! RGBA buffer, get an RGBA buffer (or a palette) back.
//!
//! # Example
//!
//! ```
//! use cinepalette::color::{apply_filter, ColorSpace, FilterOptions};
//! use cinepalette::palette::presets;
//! use cinepalette::Raster;
//!
//! let raster = Raster::new(320, 200).unwrap();
//! let graded = apply_filter(
//!     &raster,
//!     &presets::portra_400(),
//!     ColorSpace::Lab,
//!     &FilterOptions::default(),
//! )
//! .unwrap();
//! assert_eq!(graded.height(), 200);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use cinepalette_core::*;

// Re-export the processing crate as a module to avoid name conflicts
pub use cinepalette_color as color;
