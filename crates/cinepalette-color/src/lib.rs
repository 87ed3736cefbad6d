//! CinePalette Color - palette extraction and recoloring
//!
//! This crate implements the color pipeline of the CinePalette engine:
//!
//! - **Color space conversion** ([`colorspace`]): RGB <-> HSV, LAB, with
//!   the distance metrics used for matching
//! - **Palette extraction** ([`extract`]): histogram ranking plus
//!   luminance and diversity gates
//! - **Nearest matching** ([`matcher`]): per-pass palette conversion and
//!   linear-scan lookup under a selectable metric
//! - **Post-processing** ([`effects`]): intensity blend, contrast
//!   stretch, noise
//! - **Whole-image pass** ([`pipeline`]): parallel orchestration of the
//!   above over a raster
//!
//! # Example
//!
//! ```
//! use cinepalette_color::{apply_filter, ColorSpace, FilterOptions};
//! use cinepalette_core::{palette::presets, Raster};
//!
//! let raster = Raster::new(64, 48).unwrap();
//! let graded = apply_filter(
//!     &raster,
//!     &presets::teal_and_orange(),
//!     ColorSpace::Lab,
//!     &FilterOptions::default(),
//! )
//! .unwrap();
//! assert_eq!(graded.width(), 64);
//! ```

pub mod colorspace;
pub mod effects;
pub mod error;
pub mod extract;
pub mod matcher;
pub mod pipeline;

// Re-export core types
pub use cinepalette_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export color space types and functions
pub use colorspace::{
    // Types
    Hsv,
    Lab,
    // Conversions
    hsv_to_srgb,
    lab_to_srgb,
    srgb_to_hsv,
    srgb_to_lab,
    // Metrics
    hsv_distance,
    lab_distance,
};

// Re-export extraction
pub use extract::{ExtractOptions, extract_palette};

// Re-export matching
pub use matcher::{ColorSpace, PaletteMatcher};

// Re-export effects
pub use effects::{FilterOptions, adjust_contrast, blend, contrast_factor};

// Re-export the whole-image pass
pub use pipeline::{apply_filter, apply_filter_with_rng};
