//! palettecheck-core: WCAG AAA contrast validation for OKLCH palettes
//!
//! Pipeline: stylesheet text → [`Theme`] → [`validate_theme`] → [`Report`].
//! Each step is a pure function of its input.

/// Core error types for palettecheck operations
pub mod error;

/// Configuration handling
pub mod config;

/// OKLCH color values and parsing
pub mod color;

/// OKLCH → linear sRGB approximation
pub mod convert;

/// Relative luminance and contrast ratio
pub mod contrast;

/// Color declaration scanning
pub mod theme;

/// Semantic pair validation
pub mod validator;

// Re-exports for convenience
pub use color::Oklch;
pub use config::{CONFIG_FILE_NAME, Config};
pub use contrast::{aaa_threshold, check_aaa, contrast_ratio, relative_luminance};
pub use convert::LinearRgb;
pub use error::PaletteError;
pub use theme::{Declaration, Theme, extract_theme, scan_declarations};
pub use validator::{
    Comparison, Report, SEMANTIC_PAIRS, SemanticPair, ValidationConfig, ValidationResult, compare,
    validate_css, validate_file, validate_theme, validate_theme_with_config,
};
