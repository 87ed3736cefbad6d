//! Per-pixel post-processing
//!
//! After a pixel is matched against the palette it passes through three
//! stages, each a pure function except for the noise draw:
//!
//! 1. **Blend** ([`blend`]): linear interpolation between the original
//!    and matched colors by the intensity percentage
//! 2. **Contrast** ([`adjust_contrast`]): the 259/255 contrast stretch
//!    around the 128 midpoint
//! 3. **Noise** ([`add_noise`]): independent uniform jitter per channel
//!
//! Contrast and noise run in floating point; [`store_channels`] rounds
//! to nearest and clamps to [0, 255] at storage time, which is this
//! crate's policy for the out-of-range values those stages can produce.

use crate::error::{ColorError, ColorResult};
use cinepalette_core::Rgb;
use rand::Rng;
use rand::RngExt;

/// Post-processing parameters for one filter pass
#[derive(Debug, Clone)]
pub struct FilterOptions {
    /// Blend ratio between original and matched color, 0-100
    ///
    /// 0 leaves the original untouched; 100 snaps to the palette color.
    pub intensity: u32,
    /// Total contrast, -200..=200
    ///
    /// The sum of the image's baseline contrast (normally 0, reserved
    /// for chained edits) and the user adjustment. 0 is the identity.
    pub contrast: i32,
    /// Noise magnitude, 0-100; each channel draws from [-noise/2, noise/2)
    pub noise: u32,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            intensity: 100,
            contrast: 0,
            noise: 0,
        }
    }
}

impl FilterOptions {
    /// Check every field against its documented range
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidParameters`] naming the offending field.
    pub fn validate(&self) -> ColorResult<()> {
        if self.intensity > 100 {
            return Err(ColorError::InvalidParameters(format!(
                "intensity must be in [0, 100], got {}",
                self.intensity
            )));
        }
        if !(-200..=200).contains(&self.contrast) {
            return Err(ColorError::InvalidParameters(format!(
                "contrast must be in [-200, 200], got {}",
                self.contrast
            )));
        }
        if self.noise > 100 {
            return Err(ColorError::InvalidParameters(format!(
                "noise must be in [0, 100], got {}",
                self.noise
            )));
        }
        Ok(())
    }
}

/// Blend two colors by an intensity percentage
///
/// Each channel is `original*(1-ratio) + matched*ratio` with
/// ratio = intensity/100, rounded to nearest. intensity 0 returns
/// `original` exactly; 100 returns `matched` exactly.
pub fn blend(original: Rgb, matched: Rgb, intensity: u32) -> Rgb {
    let ratio = intensity as f32 / 100.0;
    let mix = |a: u8, b: u8| (a as f32 * (1.0 - ratio) + b as f32 * ratio).round() as u8;
    Rgb::new(
        mix(original.r, matched.r),
        mix(original.g, matched.g),
        mix(original.b, matched.b),
    )
}

/// Contrast-stretch factor for a total contrast value
///
/// `factor = 259*(c + 255) / (255*(259 - c))`; 0 maps to exactly 1.
#[inline]
pub fn contrast_factor(contrast: i32) -> f32 {
    (259 * (contrast + 255)) as f32 / (255 * (259 - contrast)) as f32
}

/// Apply the contrast stretch to floating-point channels
///
/// Each channel moves away from (or toward) the 128 midpoint:
/// `c' = factor*(c - 128) + 128`. The midpoint itself is a fixed point
/// for every factor. Results may leave [0, 255].
pub fn adjust_contrast(channels: [f32; 3], contrast: i32) -> [f32; 3] {
    let factor = contrast_factor(contrast);
    channels.map(|c| factor * (c - 128.0) + 128.0)
}

/// Add uniform noise to floating-point channels
///
/// Each channel independently draws from [-noise/2, +noise/2).
/// A magnitude of 0 is a no-op and draws nothing from the source.
pub fn add_noise<R: Rng + ?Sized>(channels: [f32; 3], noise: u32, rng: &mut R) -> [f32; 3] {
    if noise == 0 {
        return channels;
    }
    let magnitude = noise as f32;
    channels.map(|c| c + rng.random_range(0.0..magnitude) - magnitude / 2.0)
}

/// Round and clamp floating-point channels into an 8-bit color
///
/// This is the storage policy for the out-of-range values contrast and
/// noise can produce: round to nearest, then clamp to [0, 255].
#[inline]
pub fn store_channels(channels: [f32; 3]) -> Rgb {
    let quantize = |c: f32| c.round().clamp(0.0, 255.0) as u8;
    Rgb::new(
        quantize(channels[0]),
        quantize(channels[1]),
        quantize(channels[2]),
    )
}

/// Run the full post-processing chain for one pixel
pub fn apply<R: Rng + ?Sized>(
    original: Rgb,
    matched: Rgb,
    options: &FilterOptions,
    rng: &mut R,
) -> Rgb {
    let blended = blend(original, matched, options.intensity);
    let channels = [blended.r as f32, blended.g as f32, blended.b as f32];
    let channels = adjust_contrast(channels, options.contrast);
    let channels = add_noise(channels, options.noise, rng);
    store_channels(channels)
}
