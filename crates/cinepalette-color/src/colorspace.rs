//! Color space conversion
//!
//! Provides conversion between sRGB and the two spaces used for
//! nearest-color matching:
//! - RGB <-> HSV (Hue, Saturation, Value)
//! - RGB <-> LAB (CIE L*a*b*, D65 illuminant)
//!
//! along with the distance metrics over each space. All functions are
//! pure and total; the only numeric hazard (saturation of a black pixel)
//! is defined away by setting saturation to 0 when value is 0.

use cinepalette_core::Rgb;

/// HSV color representation
///
/// - `h`: Hue in degrees, [0.0, 360.0)
/// - `s`: Saturation as a percentage, [0.0, 100.0]
/// - `v`: Value as a percentage, [0.0, 100.0]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    /// Create a new HSV color
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }
}

/// CIE L*a*b* color representation
///
/// - `l`: Lightness in range [0.0, 100.0]
/// - `a`: Green-Red component, typically [-128, 127]
/// - `b`: Blue-Yellow component, typically [-128, 127]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

impl Lab {
    /// Create a new LAB color
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }
}

// D65 reference white in XYZ, normalized to Y = 1
const XN: f32 = 0.95047;
const YN: f32 = 1.00000;
const ZN: f32 = 1.08883;

/// Convert an sRGB channel in [0, 255] to linear light
#[inline]
fn srgb_to_linear(c: u8) -> f32 {
    let c = c as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a linear-light channel back to an sRGB value in [0, 255]
#[inline]
fn linear_to_srgb(c: f32) -> u8 {
    let c = if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    };
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Forward Lab companding function
#[inline]
fn lab_f(t: f32) -> f32 {
    if t > 0.008856 {
        t.powf(1.0 / 3.0)
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

/// Inverse Lab companding function
#[inline]
fn lab_f_inv(t: f32) -> f32 {
    let t3 = t * t * t;
    if t3 > 0.008856 {
        t3
    } else {
        (t - 16.0 / 116.0) / 7.787
    }
}

/// Convert sRGB to CIE L*a*b*
///
/// Uses the standard sRGB -> linear -> XYZ -> Lab chain under the D65
/// reference white.
pub fn srgb_to_lab(color: Rgb) -> Lab {
    let rl = srgb_to_linear(color.r);
    let gl = srgb_to_linear(color.g);
    let bl = srgb_to_linear(color.b);

    let x = rl * 0.4124564 + gl * 0.3575761 + bl * 0.1804375;
    let y = rl * 0.2126729 + gl * 0.7151522 + bl * 0.0721750;
    let z = rl * 0.0193339 + gl * 0.1191920 + bl * 0.9503041;

    let fx = lab_f(x / XN);
    let fy = lab_f(y / YN);
    let fz = lab_f(z / ZN);

    Lab {
        l: (116.0 * fy - 16.0).max(0.0),
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Convert CIE L*a*b* back to sRGB
///
/// Channels outside the sRGB gamut are clamped to [0, 255].
pub fn lab_to_srgb(lab: Lab) -> Rgb {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = lab.a / 500.0 + fy;
    let fz = fy - lab.b / 200.0;

    let x = lab_f_inv(fx) * XN;
    let y = lab_f_inv(fy) * YN;
    let z = lab_f_inv(fz) * ZN;

    let rl = x * 3.2404542 + y * -1.5371385 + z * -0.4985314;
    let gl = x * -0.9692660 + y * 1.8760108 + z * 0.0415560;
    let bl = x * 0.0556434 + y * -0.2040259 + z * 1.0572252;

    Rgb::new(linear_to_srgb(rl), linear_to_srgb(gl), linear_to_srgb(bl))
}

/// Convert sRGB to HSV
///
/// Hue comes from the six-case max-channel formula, scaled 60 degrees per
/// sector and wrapped into [0, 360). Saturation is defined as 0 when the
/// maximum channel is 0, so black never divides by zero.
pub fn srgb_to_hsv(color: Rgb) -> Hsv {
    let r = color.r as f32 / 255.0;
    let g = color.g as f32 / 255.0;
    let b = color.b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };

    let mut h = 0.0;
    if delta != 0.0 {
        h = if max == r {
            (g - b) / delta
        } else if max == g {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };
        h *= 60.0;
        if h < 0.0 {
            h += 360.0;
        }
    }

    Hsv {
        h,
        s: s * 100.0,
        v: max * 100.0,
    }
}

/// Convert HSV back to sRGB
///
/// Accepts hue in degrees and saturation/value as percentages, matching
/// the output of [`srgb_to_hsv`].
pub fn hsv_to_srgb(hsv: Hsv) -> Rgb {
    let s = hsv.s / 100.0;
    let v = hsv.v / 100.0;

    let h = hsv.h.rem_euclid(360.0) / 60.0;
    let sector = h.floor();
    let frac = h - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * frac);
    let t = v * (1.0 - s * (1.0 - frac));

    let (r, g, b) = match sector as u32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb::new(
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}

/// Euclidean distance in Lab space (CIE76 delta E)
#[inline]
pub fn lab_distance(c1: Lab, c2: Lab) -> f32 {
    let dl = c1.l - c2.l;
    let da = c1.a - c2.a;
    let db = c1.b - c2.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// Euclidean distance over raw HSV components
///
/// Degrees and percentages are mixed without normalization, and hue is
/// compared as a plain number: values adjacent across the 0/360 boundary
/// score as far apart. That bias is part of the metric's contract and is
/// kept as-is.
#[inline]
pub fn hsv_distance(c1: Hsv, c2: Hsv) -> f32 {
    let dh = c1.h - c2.h;
    let ds = c1.s - c2.s;
    let dv = c1.v - c2.v;
    (dh * dh + ds * ds + dv * dv).sqrt()
}
