//! palettecheck CLI - WCAG AAA contrast checker for OKLCH design tokens

mod cli;
mod colors;
mod commands;
mod output;

use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use palettecheck_core::Config;
use tracing_subscriber::EnvFilter;

use cli::Mode;

fn main() -> ExitCode {
    let cli = cli::parse();
    init_logging(cli.verbose);

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {:#}", e);
            return ExitCode::from(1);
        }
    };

    let mut validation = config.validation();
    validation.large_text |= cli.large_text;

    let result = match cli.mode() {
        Some(Mode::File(file)) => commands::run_theme(
            &file,
            &validation,
            config.output.color,
            cli.json,
            cli.quiet,
        ),
        Some(Mode::Check { color_a, color_b }) => commands::run_check(
            &color_a,
            &color_b,
            &validation,
            config.output.color,
            cli.json,
            cli.quiet,
        ),
        None => Err("expected a stylesheet path or --check <COLOR_A> <COLOR_B>".to_string()),
    };

    match result {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Route tracing output to stderr; `RUST_LOG` overrides the verbosity flag
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

/// Load an explicit config file, or `palettecheck.toml` from the working directory
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => {
            let cwd = std::env::current_dir().context("failed to determine working directory")?;
            Config::load_from_dir(&cwd).context("failed to load palettecheck.toml")
        }
    }
}
