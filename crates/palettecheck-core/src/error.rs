//! Error types for palettecheck operations

use std::path::PathBuf;

use thiserror::Error;

/// Core error type for palettecheck operations
#[derive(Error, Debug)]
pub enum PaletteError {
    /// P001: An OKLCH literal does not match `oklch(L[%] C H)`
    #[error("P001: could not parse OKLCH color: {literal}")]
    Parse { literal: String },

    /// P002: The input stylesheet does not exist or cannot be read
    #[error("P002: file not found or unreadable: {}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// P003: No semantic color pair could be validated
    #[error("P003: no color pairs found")]
    EmptyResult,

    /// P004: Configuration file missing or malformed
    #[error("P004: configuration error: {0}")]
    Config(String),
}

impl PaletteError {
    /// Get the error code (e.g., "P001")
    pub fn code(&self) -> &'static str {
        match self {
            PaletteError::Parse { .. } => "P001",
            PaletteError::SourceUnavailable { .. } => "P002",
            PaletteError::EmptyResult => "P003",
            PaletteError::Config(_) => "P004",
        }
    }

    /// Human-readable message without the code prefix
    pub fn message(&self) -> String {
        let full = self.to_string();
        match full.split_once(": ") {
            Some((code, rest)) if code == self.code() => rest.to_string(),
            _ => full,
        }
    }
}
