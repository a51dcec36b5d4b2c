//! Check mode: compare two OKLCH literals directly

use palettecheck_core::{ValidationConfig, aaa_threshold, compare};
use tracing::debug;

use crate::colors::SemanticColors;
use crate::output::{CheckData, JsonIssue, JsonResponse, format_ratio, status_label};

/// Run a direct comparison between two colors
pub fn run_check(
    color_a: &str,
    color_b: &str,
    config: &ValidationConfig,
    color: bool,
    json_output: bool,
    quiet: bool,
) -> Result<i32, String> {
    let comparison = match compare(color_a, color_b, config) {
        Ok(c) => c,
        Err(err) => {
            if json_output {
                let data = CheckData {
                    color_a: color_a.to_string(),
                    color_b: color_b.to_string(),
                    ratio: None,
                    threshold: aaa_threshold(config.large_text),
                    passed: false,
                };
                JsonResponse::error("check", data, vec![JsonIssue::from(&err)]).print();
            } else {
                eprintln!("error: {}", err.message());
            }
            return Ok(1);
        }
    };

    debug!(
        ratio = comparison.ratio,
        threshold = comparison.threshold,
        "compared colors"
    );

    if json_output {
        let data = CheckData {
            color_a: color_a.to_string(),
            color_b: color_b.to_string(),
            ratio: Some(comparison.ratio),
            threshold: comparison.threshold,
            passed: comparison.passed,
        };
        JsonResponse::ok("check", data).print();
    } else if !quiet {
        let colors = SemanticColors::for_stdout(color);
        println!(
            "Contrast ratio: {} {}",
            format_ratio(comparison.ratio),
            colors.verdict(comparison.passed, status_label(comparison.passed))
        );
    }

    Ok(if comparison.passed { 0 } else { 1 })
}
