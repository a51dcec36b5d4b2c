//! WCAG relative luminance, contrast ratio, and the AAA threshold check.
//!
//! The 0.03928 / 12.92 / 1.055 / 2.4 transfer constants and the
//! 0.2126 / 0.7152 / 0.0722 weights are the WCAG 2.x values.

use crate::color::Oklch;
use crate::convert::LinearRgb;

/// AAA minimum for normal-size text.
pub const AAA_NORMAL_TEXT: f64 = 7.0;

/// AAA minimum for large text (18pt, or 14pt bold).
pub const AAA_LARGE_TEXT: f64 = 4.5;

#[inline]
fn channel_luminance(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the WCAG relative luminance of a linear-sRGB triple.
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
pub fn relative_luminance(rgb: LinearRgb) -> f64 {
    0.2126 * channel_luminance(rgb.r)
        + 0.7152 * channel_luminance(rgb.g)
        + 0.0722 * channel_luminance(rgb.b)
}

impl Oklch {
    /// WCAG relative luminance of this color, via [`Oklch::to_linear_srgb`].
    pub fn relative_luminance(&self) -> f64 {
        relative_luminance(self.to_linear_srgb())
    }
}

/// Contrast ratio between two precomputed luminances.
///
/// Lighter and darker are re-derived from the values, so argument order
/// does not matter.
pub fn contrast_ratio_from_luminance(a: f64, b: f64) -> f64 {
    let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Compute the WCAG contrast ratio between two colors, in [1.0, 21.0].
pub fn contrast_ratio(a: &Oklch, b: &Oklch) -> f64 {
    contrast_ratio_from_luminance(a.relative_luminance(), b.relative_luminance())
}

/// The AAA minimum ratio for the given text size.
pub const fn aaa_threshold(large_text: bool) -> f64 {
    if large_text {
        AAA_LARGE_TEXT
    } else {
        AAA_NORMAL_TEXT
    }
}

/// Check whether a ratio meets WCAG AAA.
pub fn check_aaa(ratio: f64, large_text: bool) -> bool {
    ratio >= aaa_threshold(large_text)
}
