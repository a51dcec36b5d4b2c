//! OKLCH → linear sRGB approximation
//!
//! This is the fixed-matrix Oklab shortcut, not a full
//! Oklab → XYZ → sRGB pipeline. Out-of-gamut results are clamped per
//! channel rather than gamut-mapped. The matrices are hard-coded so pass/fail
//! outcomes for borderline palettes stay reproducible.

use crate::color::Oklch;

/// Chroma below this is treated as a true gray.
pub const ACHROMATIC_EPSILON: f64 = 0.001;

/// Oklab (L, a, b) → non-linear LMS. Rows are `[L, a, b]` coefficients.
const OKLAB_TO_LMS: [[f64; 3]; 3] = [
    [1.0, 0.396_337_777_4, 0.215_803_757_3],
    [1.0, -0.105_561_345_8, -0.063_854_172_8],
    [1.0, -0.089_484_177_5, -1.291_485_548_0],
];

/// Linear LMS → linear sRGB.
const LMS_TO_LINEAR_SRGB: [[f64; 3]; 3] = [
    [4.076_741_662_1, -3.307_711_591_3, 0.230_969_929_2],
    [-1.268_438_004_6, 2.609_757_401_1, -0.341_319_396_5],
    [-0.004_196_086_3, -0.703_418_614_7, 1.707_614_701_0],
];

/// A linear-light sRGB triple, each channel clamped to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl LinearRgb {
    /// Build a triple, clamping every channel independently.
    pub fn clamped(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }
}

#[inline]
fn apply(matrix: [[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    matrix.map(|row| row[0] * v[0] + row[1] * v[1] + row[2] * v[2])
}

impl Oklch {
    /// Approximate linear sRGB for this color.
    pub fn to_linear_srgb(&self) -> LinearRgb {
        let l = self.l();
        if self.c() < ACHROMATIC_EPSILON {
            // Hue is meaningless here; grays stay exactly gray.
            return LinearRgb::clamped(l, l, l);
        }

        let h_rad = self.h().to_radians();
        let a = self.c() * h_rad.cos();
        let b = self.c() * h_rad.sin();

        let lms = apply(OKLAB_TO_LMS, [l, a, b]).map(|x| x * x * x);
        let [r, g, b] = apply(LMS_TO_LINEAR_SRGB, lms);

        LinearRgb::clamped(r, g, b)
    }
}
