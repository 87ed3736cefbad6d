//! Palette extraction
//!
//! Derives a compact, perceptually diverse palette from an image:
//!
//! 1. Build an exact-color frequency histogram over every pixel
//!    (alpha ignored), keyed by packed RGB.
//! 2. Rank colors by descending frequency; ties break by first
//!    appearance in the buffer, so the ranking is reproducible.
//! 3. Walk the ranking through two gates:
//!    - **luminance gate**: reject colors outside the configured
//!      brightness band (drops near-black / near-white background tones)
//!    - **diversity gate**: accept a color only if it sits at least
//!      `min_distance` (RGB Euclidean) from every color accepted so far
//! 4. Stop once `target_count` colors are accepted.
//!
//! The diversity gate is greedy and order-dependent, not globally
//! optimal; for a fixed input it is fully deterministic. Surviving with
//! fewer than `target_count` colors is a normal outcome, not an error.

use crate::error::{ColorError, ColorResult};
use cinepalette_core::{Palette, Raster, Rgb};
use std::collections::HashMap;

/// Options for palette extraction
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Maximum number of colors in the extracted palette, in [10, 20]
    pub target_count: usize,
    /// Lower bound of the luminance gate (Rec. 709, 0-255 scale)
    pub min_luminance: f32,
    /// Upper bound of the luminance gate
    pub max_luminance: f32,
    /// Minimum RGB Euclidean distance between accepted colors
    pub min_distance: f32,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            target_count: 10,
            min_luminance: 30.0,
            max_luminance: 230.0,
            min_distance: 25.0,
        }
    }
}

/// Histogram cell: occurrence count plus the first pixel index seen
#[derive(Debug, Clone, Copy)]
struct HistEntry {
    count: u32,
    first_seen: usize,
}

/// Extract a palette from a raster
///
/// Returns a new palette named `extracted-{target_count}`; the source
/// raster is never modified. The result holds at most
/// `options.target_count` colors and may hold fewer, down to zero when
/// the luminance gate rejects everything.
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameters`] when `target_count` is
/// outside [10, 20] or the gate bounds are inverted.
pub fn extract_palette(raster: &Raster, options: &ExtractOptions) -> ColorResult<Palette> {
    if !(10..=20).contains(&options.target_count) {
        return Err(ColorError::InvalidParameters(format!(
            "target_count must be in [10, 20], got {}",
            options.target_count
        )));
    }
    if options.min_luminance > options.max_luminance {
        return Err(ColorError::InvalidParameters(format!(
            "luminance gate is inverted: [{}, {}]",
            options.min_luminance, options.max_luminance
        )));
    }

    let ranked = ranked_histogram(raster);

    let mut accepted: Vec<Rgb> = Vec::with_capacity(options.target_count);
    for key in ranked {
        if accepted.len() == options.target_count {
            break;
        }
        let color = Rgb::from_packed(key);
        let luminance = color.luminance();
        if luminance < options.min_luminance || luminance > options.max_luminance {
            continue;
        }
        if accepted
            .iter()
            .all(|&chosen| color.distance(chosen) >= options.min_distance)
        {
            accepted.push(color);
        }
    }

    Ok(Palette::from_colors(
        format!("extracted-{}", options.target_count),
        accepted,
    ))
}

/// Exact-color histogram, returned as packed keys ranked by descending
/// count with first-seen order breaking ties
fn ranked_histogram(raster: &Raster) -> Vec<u32> {
    let mut histogram: HashMap<u32, HistEntry> = HashMap::new();
    for (index, pixel) in raster.pixels().iter().enumerate() {
        histogram
            .entry(pixel.rgb().packed())
            .and_modify(|entry| entry.count += 1)
            .or_insert(HistEntry {
                count: 1,
                first_seen: index,
            });
    }

    let mut ranked: Vec<(u32, HistEntry)> = histogram.into_iter().collect();
    ranked.sort_by(|a, b| {
        b.1.count
            .cmp(&a.1.count)
            .then(a.1.first_seen.cmp(&b.1.first_seen))
    });
    ranked.into_iter().map(|(key, _)| key).collect()
}
