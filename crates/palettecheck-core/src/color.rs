//! OKLCH color values and literal parsing
//!
//! A color enters the system only through [`Oklch::parse`] (lenient, used
//! while scanning stylesheets) or [`str::parse`] (strict, used when the
//! caller hands us two literals directly). Once built, a color is never
//! mutated.

use std::fmt;
use std::str::FromStr;

use crate::error::PaletteError;

/// Regex patterns for parsing (compiled once)
mod patterns {
    use std::sync::LazyLock;

    /// `oklch(L[%] C H)`, case-insensitive, flexible whitespace.
    pub static OKLCH: LazyLock<regex::Regex> = LazyLock::new(|| {
        regex::Regex::new(r"(?i)oklch\(\s*([0-9.]+)(%?)\s+([0-9.]+)\s+([0-9.]+)\s*\)").unwrap()
    });
}

/// An OKLCH color: lightness in `[0, 1]`, chroma `>= 0`, hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    l: f64,
    c: f64,
    h: f64,
}

impl Oklch {
    #[cfg(test)]
    pub(crate) const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Parse `oklch(L% C H)` or `oklch(L C H)`.
    ///
    /// A percentage lightness is divided by 100; a bare lightness is taken
    /// as a fraction. Returns `None` when the text holds no well-formed
    /// literal, or when a component overflows to a non-finite value.
    pub fn parse(value: &str) -> Option<Self> {
        let caps = patterns::OKLCH.captures(value.trim())?;

        let mut l: f64 = caps.get(1)?.as_str().parse().ok()?;
        if caps.get(2).is_some_and(|m| m.as_str() == "%") {
            l /= 100.0;
        }
        let c: f64 = caps.get(3)?.as_str().parse().ok()?;
        let h: f64 = caps.get(4)?.as_str().parse().ok()?;

        if ![l, c, h].iter().all(|v| v.is_finite()) {
            return None;
        }

        Some(Self { l, c, h })
    }

    /// Lightness, normalized to `[0, 1]`
    pub const fn l(&self) -> f64 {
        self.l
    }

    /// Chroma
    pub const fn c(&self) -> f64 {
        self.c
    }

    /// Hue in degrees
    pub const fn h(&self) -> f64 {
        self.h
    }
}

impl FromStr for Oklch {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| PaletteError::Parse {
            literal: s.to_string(),
        })
    }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oklch({} {} {})", self.l, self.c, self.h)
    }
}
