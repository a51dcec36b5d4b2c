//! Batch validation of semantic color pairs

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::color::Oklch;
use crate::contrast::{aaa_threshold, check_aaa, contrast_ratio};
use crate::error::PaletteError;
use crate::theme::Theme;

/// A background role and the foreground role drawn on top of it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemanticPair {
    pub background: &'static str,
    pub foreground: &'static str,
}

const fn pair(background: &'static str, foreground: &'static str) -> SemanticPair {
    SemanticPair {
        background,
        foreground,
    }
}

/// The pairs every theme is checked against, in report order.
pub const SEMANTIC_PAIRS: [SemanticPair; 11] = [
    pair("base-100", "base-content"),
    pair("base-200", "base-content"),
    pair("base-300", "base-content"),
    pair("primary", "primary-content"),
    pair("secondary", "secondary-content"),
    pair("accent", "accent-content"),
    pair("neutral", "neutral-content"),
    pair("info", "info-content"),
    pair("success", "success-content"),
    pair("warning", "warning-content"),
    pair("error", "error-content"),
];

/// Validation options
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationConfig {
    /// Use the large-text AAA threshold (4.5) instead of 7.0
    pub large_text: bool,
}

/// Outcome for a single pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Background role name
    pub background: String,
    /// Foreground role name
    pub foreground: String,
    /// WCAG contrast ratio, in [1.0, 21.0]
    pub ratio: f64,
    /// Whether the ratio meets AAA
    pub passed: bool,
}

/// Ordered results for one theme
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    /// One entry per pair whose roles are both defined, in pair order
    pub results: Vec<ValidationResult>,
    /// Whether the large-text threshold was used
    pub large_text: bool,
}

impl Report {
    /// True when no result failed. An empty report passes.
    pub fn passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    /// The AAA threshold results were checked against
    pub fn threshold(&self) -> f64 {
        aaa_threshold(self.large_text)
    }

    /// Number of pairs meeting the threshold
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    /// Number of pairs below the threshold
    pub fn failed_count(&self) -> usize {
        self.results.len() - self.passed_count()
    }

    /// Whether no pair had both roles defined
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Reject a report with no results.
    pub fn require_results(self) -> Result<Self, PaletteError> {
        if self.is_empty() {
            Err(PaletteError::EmptyResult)
        } else {
            Ok(self)
        }
    }
}

/// Validate a theme against the AAA normal-text threshold
pub fn validate_theme(theme: &Theme) -> Report {
    validate_theme_with_config(theme, &ValidationConfig::default())
}

/// Validate a theme with explicit options
pub fn validate_theme_with_config(theme: &Theme, config: &ValidationConfig) -> Report {
    let mut report = Report {
        results: Vec::new(),
        large_text: config.large_text,
    };

    for pair in &SEMANTIC_PAIRS {
        let (Some(bg), Some(fg)) = (theme.get(pair.background), theme.get(pair.foreground)) else {
            trace!(
                background = pair.background,
                foreground = pair.foreground,
                "pair not defined in theme"
            );
            continue;
        };

        let ratio = contrast_ratio(bg, fg);
        let passed = check_aaa(ratio, config.large_text);
        trace!(
            background = pair.background,
            foreground = pair.foreground,
            ratio,
            passed,
            "checked pair"
        );

        report.results.push(ValidationResult {
            background: pair.background.to_string(),
            foreground: pair.foreground.to_string(),
            ratio,
            passed,
        });
    }

    report
}

/// Extract a theme from stylesheet text and validate it
pub fn validate_css(text: &str, config: &ValidationConfig) -> Report {
    validate_theme_with_config(&Theme::from_css(text), config)
}

/// Read a stylesheet from disk and validate it
pub fn validate_file(path: &Path, config: &ValidationConfig) -> Result<Report, PaletteError> {
    let content = fs::read_to_string(path).map_err(|source| PaletteError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(validate_css(&content, config))
}

/// Result of comparing two literal colors directly
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    /// WCAG contrast ratio, in [1.0, 21.0]
    pub ratio: f64,
    /// AAA threshold the ratio was checked against
    pub threshold: f64,
    /// Whether the ratio meets the threshold
    pub passed: bool,
}

/// Compare two OKLCH literals. Either literal failing to parse is an error.
pub fn compare(a: &str, b: &str, config: &ValidationConfig) -> Result<Comparison, PaletteError> {
    let a: Oklch = a.parse()?;
    let b: Oklch = b.parse()?;
    let ratio = contrast_ratio(&a, &b);
    Ok(Comparison {
        ratio,
        threshold: aaa_threshold(config.large_text),
        passed: check_aaa(ratio, config.large_text),
    })
}
