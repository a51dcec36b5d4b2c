//! JSON output formatting

use palettecheck_core::{PaletteError, ValidationResult};
use serde::{Deserialize, Serialize};

const SCHEMA_VERSION: &str = "1";

/// JSON response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse<T> {
    /// Schema version for forward compatibility
    pub schema_version: String,
    /// Command that generated this response
    pub command: String,
    /// Status: "ok" or "error"
    pub status: String,
    /// Command-specific payload
    pub data: T,
    /// Errors that prevented a full result
    pub issues: Vec<JsonIssue>,
}

impl<T: Serialize> JsonResponse<T> {
    /// Create a successful response
    pub fn ok(command: &str, data: T) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            command: command.to_string(),
            status: "ok".to_string(),
            data,
            issues: vec![],
        }
    }

    /// Create an error response
    pub fn error(command: &str, data: T, issues: Vec<JsonIssue>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            command: command.to_string(),
            status: "error".to_string(),
            data,
            issues,
        }
    }

    /// Print as pretty JSON on stdout
    pub fn print(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("error: failed to serialize JSON output: {}", e),
        }
    }
}

/// Issue object structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonIssue {
    /// Error code (e.g., "P001")
    pub code: String,
    /// Severity level
    pub severity: String,
    /// Human-readable message
    pub message: String,
    /// Input file, when the issue concerns one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl From<&PaletteError> for JsonIssue {
    fn from(err: &PaletteError) -> Self {
        Self {
            code: err.code().to_string(),
            severity: "error".to_string(),
            message: err.message(),
            file: None,
        }
    }
}

impl JsonIssue {
    /// Set the file path
    pub fn with_file(mut self, file: &str) -> Self {
        self.file = Some(file.to_string());
        self
    }
}

/// Data payload for file mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeData {
    /// Validated file
    pub file: String,
    /// AAA threshold applied
    pub threshold: f64,
    /// Per-pair results, in pair order
    pub results: Vec<ValidationResult>,
    /// Aggregate verdict
    pub passed: bool,
}

/// Data payload for check mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckData {
    /// First color as given
    pub color_a: String,
    /// Second color as given
    pub color_b: String,
    /// Contrast ratio, absent when a color failed to parse
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio: Option<f64>,
    /// AAA threshold applied
    pub threshold: f64,
    /// Whether the pair meets AAA
    pub passed: bool,
}

/// Pass/fail label used in text reports
pub fn status_label(passed: bool) -> &'static str {
    if passed { "✅ Pass" } else { "❌ Fail" }
}

/// Render a ratio as `X.XX:1`
pub fn format_ratio(ratio: f64) -> String {
    format!("{:.2}:1", ratio)
}
