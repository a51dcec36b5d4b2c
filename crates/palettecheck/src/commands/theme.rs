//! File mode: validate every semantic pair in a stylesheet

use std::path::Path;

use palettecheck_core::{PaletteError, Report, ValidationConfig, aaa_threshold, validate_file};
use tracing::info;

use crate::colors::SemanticColors;
use crate::output::{JsonIssue, JsonResponse, ThemeData, format_ratio, status_label};

const RULE_WIDTH: usize = 50;

/// Run file-mode validation
pub fn run_theme(
    file: &Path,
    config: &ValidationConfig,
    color: bool,
    json_output: bool,
    quiet: bool,
) -> Result<i32, String> {
    let file_label = file.display().to_string();
    info!(file = %file_label, large_text = config.large_text, "validating theme");

    let report = match validate_file(file, config).and_then(Report::require_results) {
        Ok(report) => report,
        Err(err) => {
            report_error(&err, &file_label, config, json_output);
            return Ok(1);
        }
    };

    let passed = report.passed();
    info!(
        pairs = report.results.len(),
        failed = report.failed_count(),
        "theme validated"
    );

    if json_output {
        let data = ThemeData {
            file: file_label,
            threshold: report.threshold(),
            passed,
            results: report.results,
        };
        JsonResponse::ok("theme", data).print();
    } else if !quiet {
        output_text(&file_label, &report, &SemanticColors::for_stdout(color));
    }

    Ok(if passed { 0 } else { 1 })
}

fn report_error(err: &PaletteError, file: &str, config: &ValidationConfig, json_output: bool) {
    if json_output {
        let data = ThemeData {
            file: file.to_string(),
            threshold: aaa_threshold(config.large_text),
            results: vec![],
            passed: false,
        };
        let issues = vec![JsonIssue::from(err).with_file(file)];
        JsonResponse::error("theme", data, issues).print();
    } else if matches!(err, PaletteError::EmptyResult) {
        eprintln!("No color pairs found in {}.", file);
    } else {
        eprintln!("error: {}", err.message());
    }
}

/// Print the human-readable report
fn output_text(file: &str, report: &Report, colors: &SemanticColors) {
    let rule = "=".repeat(RULE_WIDTH);

    println!();
    println!("{}", colors.header.style("Theme Contrast Report"));
    println!("{}", colors.muted.style(&rule));
    println!("File: {}", file);
    println!("{}", colors.muted.style(&rule));
    println!();

    for result in &report.results {
        println!(
            "{:15} / {:20} → {:>7}  {}",
            result.background,
            result.foreground,
            format_ratio(result.ratio),
            colors.verdict(result.passed, status_label(result.passed)),
        );
    }

    println!();
    println!("{}", colors.muted.style(&rule));
    if report.passed() {
        println!(
            "{}",
            colors.verdict(true, "✅ All color pairs meet WCAG AAA requirements")
        );
    } else {
        println!(
            "{}",
            colors.verdict(false, "❌ Some color pairs fail WCAG AAA requirements")
        );
        println!(
            "{}",
            colors.muted.style(format!(
                "   Adjust lightness values to achieve {}:1 minimum contrast",
                report.threshold()
            ))
        );
    }
}
