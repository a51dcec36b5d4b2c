//! CLI argument parsing with clap derive

use std::path::PathBuf;

use clap::Parser;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Palettecheck - WCAG AAA contrast checker for OKLCH design tokens
#[derive(Parser)]
#[command(name = "palettecheck")]
#[command(version = VERSION)]
#[command(about = "Validate WCAG AAA contrast for OKLCH theme color pairs")]
#[command(long_about = "Validate WCAG AAA contrast for OKLCH theme color pairs.\n\nFile mode scans a stylesheet for `--color-<role>: oklch(...)` declarations and checks each semantic background/foreground pair (base-100/base-content, primary/primary-content, ... error/error-content).\n\nCheck mode compares two OKLCH literals directly.\n\nExamples:\n  palettecheck src/styles/theme.css\n  palettecheck --check \"oklch(98% 0.01 240)\" \"oklch(18% 0.02 240)\"")]
pub struct Cli {
    /// Stylesheet to validate
    #[arg(required_unless_present = "check", conflicts_with = "check")]
    pub file: Option<PathBuf>,

    /// Compare two OKLCH colors directly instead of reading a file
    #[arg(long, num_args = 2, value_names = ["COLOR_A", "COLOR_B"])]
    pub check: Option<Vec<String>>,

    /// Use the large-text AAA threshold (4.5:1 instead of 7:1)
    #[arg(long)]
    pub large_text: bool,

    /// Configuration file (default: ./palettecheck.toml if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Which input the user asked us to check
#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    File(PathBuf),
    Check { color_a: String, color_b: String },
}

impl Cli {
    /// Resolve the invocation mode. Clap guarantees exactly one is present.
    pub fn mode(&self) -> Option<Mode> {
        match (&self.file, &self.check) {
            (_, Some(colors)) => match colors.as_slice() {
                [a, b] => Some(Mode::Check {
                    color_a: a.clone(),
                    color_b: b.clone(),
                }),
                _ => None,
            },
            (Some(file), None) => Some(Mode::File(file.clone())),
            (None, None) => None,
        }
    }
}

/// Get the command args for use in the application
pub fn parse() -> Cli {
    Cli::parse()
}
