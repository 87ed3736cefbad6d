//! Whole-image recoloring pass
//!
//! Orchestrates matching and post-processing over every pixel of a
//! raster. Per-pixel work is independent: each output pixel depends only
//! on its own input value, the palette conversions computed up front,
//! and its own noise draws. [`apply_filter`] exploits that by fanning
//! rows out across the rayon thread pool with disjoint output chunks;
//! [`apply_filter_with_rng`] is the single-threaded variant that feeds
//! every pixel from one caller-supplied random source, which is what
//! tests use to pin down exact output.
//!
//! The one sequential dependency is palette pre-conversion (bounded by
//! the palette size), which completes before any row is dispatched.

use crate::effects::{self, FilterOptions};
use crate::error::ColorResult;
use crate::matcher::{ColorSpace, PaletteMatcher};
use cinepalette_core::{Palette, Raster, Rgba};
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};
use rayon::prelude::*;

/// Recolor a raster against a palette, in parallel
///
/// Validates the options, converts the palette once, then processes
/// every pixel: nearest palette color, intensity blend, contrast, noise,
/// clamp. The alpha channel passes through unmodified. The input raster
/// is untouched; the output has identical dimensions.
///
/// Noise draws come from per-row generators seeded off one fresh base
/// seed, so runs are not reproducible (and are not meant to be) but
/// workers never share state.
///
/// # Errors
///
/// - [`ColorError::InvalidParameters`](crate::ColorError::InvalidParameters)
///   when an option is outside its documented range
/// - [`ColorError::EmptyPalette`](crate::ColorError::EmptyPalette) when
///   the palette has no colors
///
/// Failures surface before any pixel is processed; there is no partial
/// output.
pub fn apply_filter(
    src: &Raster,
    palette: &Palette,
    space: ColorSpace,
    options: &FilterOptions,
) -> ColorResult<Raster> {
    options.validate()?;
    let matcher = PaletteMatcher::new(palette, space)?;

    let width = src.width() as usize;
    let base_seed: u64 = rand::rng().random();

    let mut out = src.clone();
    out.pixels_mut()
        .par_chunks_mut(width)
        .zip(src.pixels().par_chunks(width))
        .enumerate()
        .for_each(|(row, (dst_row, src_row))| {
            let mut rng = row_rng(base_seed, row);
            for (dst, &src_px) in dst_row.iter_mut().zip(src_row) {
                *dst = process_pixel(src_px, &matcher, options, &mut rng);
            }
        });

    Ok(out)
}

/// Recolor a raster sequentially with an injectable random source
///
/// Identical semantics to [`apply_filter`], but every noise draw comes
/// from `rng` in pixel order. With `noise == 0` the output is exactly
/// deterministic, and equal to the parallel path's output.
///
/// # Errors
///
/// Same conditions as [`apply_filter`].
pub fn apply_filter_with_rng<R: Rng + ?Sized>(
    src: &Raster,
    palette: &Palette,
    space: ColorSpace,
    options: &FilterOptions,
    rng: &mut R,
) -> ColorResult<Raster> {
    options.validate()?;
    let matcher = PaletteMatcher::new(palette, space)?;

    let pixels = src
        .pixels()
        .iter()
        .map(|&px| process_pixel(px, &matcher, options, rng))
        .collect();
    // Length is unchanged, so the dimension check cannot fail
    Ok(Raster::from_pixels(pixels, src.width(), src.height())?)
}

/// Match and post-process one pixel, carrying alpha through
#[inline]
fn process_pixel<R: Rng + ?Sized>(
    pixel: Rgba,
    matcher: &PaletteMatcher,
    options: &FilterOptions,
    rng: &mut R,
) -> Rgba {
    let original = pixel.rgb();
    let matched = matcher.nearest(original);
    effects::apply(original, matched, options, rng).with_alpha(pixel.a)
}

/// Independent generator for one row, derived from the pass's base seed
#[inline]
fn row_rng(base_seed: u64, row: usize) -> StdRng {
    // splitmix64 increment keeps neighboring row seeds decorrelated
    StdRng::seed_from_u64(base_seed ^ (row as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ColorError;
    use cinepalette_core::palette::presets;
    use cinepalette_core::{Raster, Rgb};

    fn gradient_raster(width: u32, height: u32) -> Raster {
        let mut raster = Raster::new(width, height).unwrap();
        for y in 0..height {
            for x in 0..width {
                let r = (x * 255 / width.max(1)) as u8;
                let g = (y * 255 / height.max(1)) as u8;
                raster
                    .set(x, y, Rgba::new(r, g, 128, 255))
                    .unwrap();
            }
        }
        raster
    }

    #[test]
    fn test_empty_palette_fails_before_processing() {
        let raster = gradient_raster(4, 4);
        let palette = Palette::new("empty");
        let result = apply_filter(&raster, &palette, ColorSpace::Rgb, &FilterOptions::default());
        assert!(matches!(result, Err(ColorError::EmptyPalette)));
    }

    #[test]
    fn test_invalid_options_fail_before_processing() {
        let raster = gradient_raster(4, 4);
        let options = FilterOptions {
            intensity: 150,
            ..Default::default()
        };
        let result = apply_filter(&raster, &presets::sepia(), ColorSpace::Rgb, &options);
        assert!(matches!(result, Err(ColorError::InvalidParameters(_))));
    }

    #[test]
    fn test_identity_settings_return_input() {
        let raster = gradient_raster(16, 8);
        let options = FilterOptions {
            intensity: 0,
            contrast: 0,
            noise: 0,
        };
        let out = apply_filter(&raster, &presets::sepia(), ColorSpace::Rgb, &options).unwrap();
        assert_eq!(out, raster);
    }

    #[test]
    fn test_full_intensity_snaps_to_palette() {
        let palette = Palette::from_triples("bw", &[[0, 0, 0], [255, 255, 255]]);
        let mut raster = Raster::new(2, 1).unwrap();
        raster.set(0, 0, Rgba::opaque(10, 10, 10)).unwrap();
        raster.set(1, 0, Rgba::opaque(200, 200, 200)).unwrap();

        let out = apply_filter(&raster, &palette, ColorSpace::Rgb, &FilterOptions::default())
            .unwrap();
        assert_eq!(out.get(0, 0).unwrap().rgb(), Rgb::new(0, 0, 0));
        assert_eq!(out.get(1, 0).unwrap().rgb(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_parallel_matches_sequential_when_deterministic() {
        let raster = gradient_raster(33, 7); // odd sizes exercise chunking
        let options = FilterOptions {
            intensity: 60,
            contrast: 40,
            noise: 0,
        };
        for space in [ColorSpace::Rgb, ColorSpace::Lab, ColorSpace::Hsv] {
            let parallel =
                apply_filter(&raster, &presets::teal_and_orange(), space, &options).unwrap();
            let mut rng = StdRng::seed_from_u64(0);
            let sequential = apply_filter_with_rng(
                &raster,
                &presets::teal_and_orange(),
                space,
                &options,
                &mut rng,
            )
            .unwrap();
            assert_eq!(parallel, sequential);
        }
    }

    #[test]
    fn test_alpha_passes_through() {
        let pixels = vec![
            Rgba::new(10, 10, 10, 0),
            Rgba::new(10, 10, 10, 77),
            Rgba::new(200, 200, 200, 255),
        ];
        let raster = Raster::from_pixels(pixels, 3, 1).unwrap();
        let palette = presets::black_and_white();
        let options = FilterOptions {
            noise: 50,
            ..Default::default()
        };
        let out = apply_filter(&raster, &palette, ColorSpace::Rgb, &options).unwrap();
        assert_eq!(out.get(0, 0).unwrap().a, 0);
        assert_eq!(out.get(1, 0).unwrap().a, 77);
        assert_eq!(out.get(2, 0).unwrap().a, 255);
    }

    #[test]
    fn test_output_dimensions_match_input() {
        let raster = gradient_raster(5, 9);
        let out = apply_filter(
            &raster,
            &presets::portra_400(),
            ColorSpace::Lab,
            &FilterOptions::default(),
        )
        .unwrap();
        assert_eq!(out.width(), 5);
        assert_eq!(out.height(), 9);
        assert_eq!(out.len(), raster.len());
    }

    #[test]
    fn test_mid_gray_survives_contrast() {
        // 128 is the contrast fixed point; route it through a palette
        // that contains it so the match leaves it unchanged too
        let palette = Palette::from_triples("gray", &[[128, 128, 128]]);
        let raster = Raster::from_pixels(vec![Rgba::opaque(128, 128, 128); 4], 2, 2).unwrap();
        let options = FilterOptions {
            intensity: 100,
            contrast: 100,
            noise: 0,
        };
        let out = apply_filter(&raster, &palette, ColorSpace::Rgb, &options).unwrap();
        assert!(out
            .pixels()
            .iter()
            .all(|px| px.rgb() == Rgb::gray(128)));
    }
}
