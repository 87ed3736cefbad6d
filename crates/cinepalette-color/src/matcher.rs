//! Nearest palette color lookup
//!
//! A [`PaletteMatcher`] is built once per image pass. Construction
//! converts the palette into the chosen comparison space and caches the
//! result, so conversion cost is bounded by the palette size rather than
//! the pixel count; each per-pixel lookup is then a linear scan over the
//! (small) palette.

use crate::colorspace::{self, Hsv, Lab};
use crate::error::{ColorError, ColorResult};
use cinepalette_core::{Palette, Rgb};

/// Comparison space selecting both the representation and the metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorSpace {
    /// Euclidean distance over raw RGB channels
    #[default]
    Rgb,
    /// CIE76 delta E in L*a*b* space
    Lab,
    /// Euclidean distance over raw HSV components (linear hue)
    Hsv,
}

/// Palette entries pre-converted into the comparison space
#[derive(Debug, Clone)]
enum ConvertedPalette {
    Rgb,
    Lab(Vec<Lab>),
    Hsv(Vec<Hsv>),
}

/// Nearest-color matcher over a fixed palette
#[derive(Debug, Clone)]
pub struct PaletteMatcher {
    colors: Vec<Rgb>,
    converted: ConvertedPalette,
}

impl PaletteMatcher {
    /// Build a matcher for one image pass
    ///
    /// Converts the palette into `space` exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::EmptyPalette`] when the palette has no colors.
    pub fn new(palette: &Palette, space: ColorSpace) -> ColorResult<Self> {
        if palette.is_empty() {
            return Err(ColorError::EmptyPalette);
        }
        let colors: Vec<Rgb> = palette.colors().to_vec();
        let converted = match space {
            ColorSpace::Rgb => ConvertedPalette::Rgb,
            ColorSpace::Lab => {
                ConvertedPalette::Lab(colors.iter().map(|&c| colorspace::srgb_to_lab(c)).collect())
            }
            ColorSpace::Hsv => {
                ConvertedPalette::Hsv(colors.iter().map(|&c| colorspace::srgb_to_hsv(c)).collect())
            }
        };
        Ok(Self { colors, converted })
    }

    /// Number of palette entries
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// A matcher is never empty; present for API symmetry
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Index of the nearest palette entry under the matcher's metric
    ///
    /// Ties keep the earliest palette entry (strict improvement only).
    pub fn nearest_index(&self, color: Rgb) -> usize {
        match &self.converted {
            ConvertedPalette::Rgb => {
                argmin(self.colors.iter().map(|&entry| color.distance(entry)))
            }
            ConvertedPalette::Lab(entries) => {
                let probe = colorspace::srgb_to_lab(color);
                argmin(
                    entries
                        .iter()
                        .map(|&entry| colorspace::lab_distance(probe, entry)),
                )
            }
            ConvertedPalette::Hsv(entries) => {
                let probe = colorspace::srgb_to_hsv(color);
                argmin(
                    entries
                        .iter()
                        .map(|&entry| colorspace::hsv_distance(probe, entry)),
                )
            }
        }
    }

    /// The nearest palette color itself
    #[inline]
    pub fn nearest(&self, color: Rgb) -> Rgb {
        self.colors[self.nearest_index(color)]
    }
}

/// Index of the smallest value, first occurrence winning ties
///
/// The iterator is never empty (matcher construction rejects empty
/// palettes), so index 0 is always a valid fallback.
fn argmin(distances: impl Iterator<Item = f32>) -> usize {
    let mut best_index = 0;
    let mut best_distance = f32::INFINITY;
    for (index, distance) in distances.enumerate() {
        if distance < best_distance {
            best_distance = distance;
            best_index = index;
        }
    }
    best_index
}
