//! Semantic color styles for terminal output
//!
//! - `pass` => green, pairs meeting AAA and the overall success line
//! - `fail` => red, pairs below AAA and the overall failure line
//! - `header` => blue, report banner
//! - `muted` => dimmed, separators and hints

use std::io::IsTerminal;

use owo_colors::{OwoColorize, Style};

/// Semantic color definitions for terminal output
pub struct SemanticColors {
    pub pass: Style,
    pub fail: Style,
    pub header: Style,
    pub muted: Style,
}

impl SemanticColors {
    /// Styles that render as real colors
    pub fn colored() -> Self {
        Self {
            pass: Style::new().green(),
            fail: Style::new().red(),
            header: Style::new().blue().bold(),
            muted: Style::new().dimmed(),
        }
    }

    /// Styles that render as plain text
    pub fn plain() -> Self {
        Self {
            pass: Style::new(),
            fail: Style::new(),
            header: Style::new(),
            muted: Style::new(),
        }
    }

    /// Colored when enabled and stdout is a terminal, plain otherwise
    pub fn for_stdout(enabled: bool) -> Self {
        if enabled && std::io::stdout().is_terminal() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Apply the pass or fail style to `text`
    pub fn verdict(&self, passed: bool, text: &str) -> String {
        let style = if passed { self.pass } else { self.fail };
        text.style(style).to_string()
    }
}
