//! CLI integration tests for palettecheck

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../tests/fixtures");

fn fixture(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

/// Run palettecheck from `dir` so no stray palettecheck.toml is picked up
fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_palettecheck"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run palettecheck")
}

fn run(args: &[&str]) -> Output {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    run_in(temp.path(), args)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

// ── File mode ───────────────────────────────────────────────────────

#[test]
fn test_file_mode_passing_theme() {
    let path = fixture("daisyui-light.css");
    let output = run(&[path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Theme Contrast Report"));
    assert!(out.contains("daisyui-light.css"));
    assert!(out.contains("base-100        / base-content"));
    assert!(out.contains("19.47:1"));
    assert!(out.contains("error           / error-content"));
    assert!(out.contains("All color pairs meet WCAG AAA requirements"));
    assert!(!out.contains("Fail"));
    assert!(!out.contains('\u{1b}'), "no ANSI escapes when piped");
}

#[test]
fn test_file_mode_failing_theme() {
    let path = fixture("failing.css");
    let output = run(&[path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains(" 5.47:1  ❌ Fail"), "stdout: {}", out);
    assert!(out.contains("13.60:1  ✅ Pass"), "stdout: {}", out);
    assert!(out.contains("Some color pairs fail WCAG AAA requirements"));
    assert!(out.contains("Adjust lightness values to achieve 7:1 minimum contrast"));
}

#[test]
fn test_file_mode_report_follows_pair_order() {
    let path = fixture("failing.css");
    let output = run(&[path.to_str().unwrap()]);
    let out = stdout(&output);

    let base = out.find("base-100").unwrap();
    let primary = out.find("primary ").unwrap();
    let warning = out.find("warning ").unwrap();
    assert!(base < primary && primary < warning);
}

#[test]
fn test_file_mode_missing_file() {
    let output = run(&["does-not-exist.css"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("file not found or unreadable: does-not-exist.css"));
}

#[test]
fn test_file_mode_no_pairs_is_failure() {
    let path = fixture("no-colors.css");
    let output = run(&[path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("No color pairs found"));
}

#[test]
fn test_file_mode_malformed_declarations_are_skipped() {
    let path = fixture("malformed.css");
    let output = run(&[path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("primary"));
    assert!(!out.contains("base-100"));
    assert!(!out.contains("secondary"));
}

#[test]
fn test_file_mode_verbose_logs_skipped_declarations() {
    let path = fixture("malformed.css");
    let output = run(&["--verbose", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    let err = stderr(&output);
    assert!(err.contains("skipping unparsable color declaration"), "stderr: {}", err);
    assert!(err.contains("validating theme"), "stderr: {}", err);
    assert!(err.contains("malformed.css"), "stderr: {}", err);
    assert!(!stdout(&output).contains("skipping"));
}

#[test]
fn test_file_mode_quiet() {
    let passing = fixture("daisyui-light.css");
    let output = run(&["--quiet", passing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).is_empty());

    let failing = fixture("failing.css");
    let output = run(&["-q", failing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_file_mode_quiet_json_still_prints_envelope() {
    let path = fixture("failing.css");
    let output = run(&["--quiet", "--json", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    assert_eq!(json["command"], "theme");
    assert_eq!(json["data"]["passed"], false);
}

#[test]
fn test_file_mode_json() {
    let path = fixture("failing.css");
    let output = run(&["--json", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    assert_eq!(json["schema_version"], "1");
    assert_eq!(json["command"], "theme");
    assert_eq!(json["status"], "ok");
    assert_eq!(json["data"]["passed"], false);
    assert_eq!(json["data"]["threshold"], 7.0);

    let results = json["data"]["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["background"], "base-100");
    assert_eq!(results[0]["foreground"], "base-content");
    assert_eq!(results[0]["passed"], true);
    assert_eq!(results[1]["passed"], false);
}

#[test]
fn test_file_mode_json_missing_file() {
    let output = run(&["--json", "missing.css"]);

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    assert_eq!(json["status"], "error");
    assert_eq!(json["issues"][0]["code"], "P002");
    assert_eq!(json["issues"][0]["file"], "missing.css");
}

#[test]
fn test_file_mode_json_no_pairs() {
    let path = fixture("no-colors.css");
    let output = run(&["--json", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    assert_eq!(json["status"], "error");
    assert_eq!(json["issues"][0]["code"], "P003");
}

// ── Check mode ──────────────────────────────────────────────────────

#[test]
fn test_check_mode_pass() {
    let output = run(&["--check", "oklch(98% 0.01 240)", "oklch(18% 0.02 240)"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output).trim(), "Contrast ratio: 18.35:1 ✅ Pass");
}

#[test]
fn test_check_mode_fail() {
    let output = run(&["--check", "oklch(60% 0 0)", "oklch(100% 0 0)"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output).trim(), "Contrast ratio: 2.85:1 ❌ Fail");
}

#[test]
fn test_check_mode_is_order_independent() {
    let ab = run(&["--check", "oklch(65% 0.2 250)", "oklch(98% 0.01 250)"]);
    let ba = run(&["--check", "oklch(98% 0.01 250)", "oklch(65% 0.2 250)"]);
    assert_eq!(stdout(&ab), stdout(&ba));
    assert!(stdout(&ab).contains("5.47:1"));
}

#[test]
fn test_check_mode_malformed_color() {
    let output = run(&["--check", "oklch(bad)", "oklch(18% 0.02 240)"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty(), "no ratio should be printed");
    assert!(stderr(&output).contains("could not parse OKLCH color: oklch(bad)"));
}

#[test]
fn test_check_mode_overflowing_hue_is_parse_error() {
    let huge = format!("oklch(50% 0.1 1{})", "0".repeat(400));
    let output = run(&["--check", huge.as_str(), "oklch(18% 0.02 240)"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty(), "no ratio should be printed");
    assert!(stderr(&output).contains("could not parse OKLCH color"));

    let output = run(&["--json", "--check", huge.as_str(), "oklch(18% 0.02 240)"]);
    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    assert_eq!(json["status"], "error");
    assert_eq!(json["issues"][0]["code"], "P001");
}

#[test]
fn test_check_mode_quiet_json_still_prints_envelope() {
    let output = run(&["-q", "--json", "--check", "oklch(100% 0 0)", "oklch(0% 0 0)"]);

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    assert_eq!(json["command"], "check");
    assert_eq!(json["data"]["passed"], true);
}

#[test]
fn test_check_mode_json() {
    let output = run(&["--json", "--check", "oklch(100% 0 0)", "oklch(0% 0 0)"]);

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    assert_eq!(json["command"], "check");
    assert_eq!(json["data"]["passed"], true);
    let ratio = json["data"]["ratio"].as_f64().unwrap();
    assert!((ratio - 21.0).abs() < 1e-9);
}

#[test]
fn test_check_mode_json_malformed() {
    let output = run(&["--json", "--check", "oklch(bad)", "oklch(18% 0.02 240)"]);

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    assert_eq!(json["status"], "error");
    assert!(json["data"].get("ratio").is_none());
    assert_eq!(json["issues"][0]["code"], "P001");
}

#[test]
fn test_check_mode_large_text() {
    // ~4.76:1: below 7 but above 4.5
    let normal = run(&["--check", "oklch(45% 0 0)", "oklch(100% 0 0)"]);
    assert_eq!(normal.status.code(), Some(1));

    let large = run(&["--large-text", "--check", "oklch(45% 0 0)", "oklch(100% 0 0)"]);
    assert_eq!(large.status.code(), Some(0));
    assert!(stdout(&large).contains("4.76:1"));
}

// ── Configuration ───────────────────────────────────────────────────

#[test]
fn test_config_file_in_working_directory() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    fs::write(
        temp.path().join("palettecheck.toml"),
        "[check]\nlarge_text = true\n",
    )
    .unwrap();

    let output = run_in(temp.path(), &["--check", "oklch(45% 0 0)", "oklch(100% 0 0)"]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
}

#[test]
fn test_config_large_text_changes_hint() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    fs::write(
        temp.path().join("palettecheck.toml"),
        "[check]\nlarge_text = true\n",
    )
    .unwrap();

    let path = fixture("failing.css");
    let output = run_in(temp.path(), &[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("achieve 4.5:1 minimum contrast"));
}

#[test]
fn test_config_explicit_path_missing() {
    let output = run(&["--config", "nope.toml", "--check", "oklch(1 0 0)", "oklch(0 0 0)"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("failed to load configuration from nope.toml"));
}

#[test]
fn test_config_invalid_toml() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    fs::write(temp.path().join("palettecheck.toml"), "[check\n").unwrap();

    let output = run_in(temp.path(), &["--check", "oklch(1 0 0)", "oklch(0 0 0)"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("configuration error"));
}

// ── Usage ───────────────────────────────────────────────────────────

#[test]
fn test_no_arguments_is_usage_error() {
    let output = run(&[]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Usage"));
}

#[test]
fn test_version_flag() {
    let output = run(&["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}
