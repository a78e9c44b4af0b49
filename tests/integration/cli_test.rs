//! Integration tests for the CLI surface.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use stepscope::trace::TraceFile;

use crate::helpers::run_stepscope;

fn stepscope() -> Command {
    Command::cargo_bin("stepscope").unwrap()
}

// ============================================================================
// Catalog Tests
// ============================================================================

#[test]
fn list_names_every_algorithm() {
    let (stdout, _stderr, exit_code) = run_stepscope(&["list"]);

    assert_eq!(exit_code, 0);
    for id in [
        "binary-search",
        "bubble-sort",
        "merge-sorted",
        "two-sum",
        "lru-cache",
        "quickselect",
    ] {
        assert!(stdout.contains(id), "list output is missing {id}:\n{stdout}");
    }
}

#[test]
fn cases_lists_builtin_names_and_inputs() {
    let (stdout, _stderr, exit_code) = run_stepscope(&["cases", "lru-cache"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("eviction-then-miss"));
    assert!(stdout.contains("new(2)"));
}

#[test]
fn unknown_algorithm_error_lists_the_catalog() {
    let (_stdout, stderr, exit_code) = run_stepscope(&["cases", "quicksort"]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("unknown algorithm"));
    assert!(
        stderr.contains("binary-search"),
        "error should name the valid ids:\n{stderr}"
    );
}

// ============================================================================
// Trace Output Tests
// ============================================================================

#[test]
fn trace_json_output_parses_as_a_trace_file() {
    let (stdout, _stderr, exit_code) = run_stepscope(&["trace", "binary-search", "--json"]);

    assert_eq!(exit_code, 0);
    let file = TraceFile::parse_str(&stdout).expect("stdout should be a valid trace file");
    assert_eq!(file.header.algorithm, "binary-search");
    assert_eq!(file.header.case.as_deref(), Some("found-middle"));
    assert!(file.trace.len() >= 3);
}

#[test]
fn trace_text_output_narrates_the_run() {
    let (stdout, _stderr, exit_code) = run_stepscope(&["trace", "bubble-sort"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("compare neighbors"));
    assert!(stdout.contains("[pass]"));
}

#[test]
fn trace_out_writes_a_file_validate_accepts() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("run.jsonl");

    let (stdout, _stderr, exit_code) =
        run_stepscope(&["trace", "two-sum", "--out", path.to_str().unwrap()]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Wrote"));

    let (stdout, _stderr, exit_code) = run_stepscope(&["validate", path.to_str().unwrap()]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("OK"));
    assert!(stdout.contains("two-sum"));
}

#[test]
fn trace_with_a_pinned_seed_is_reproducible() {
    let args = ["trace", "quickselect", "--seed", "7", "--json"];
    let (first, _, _) = run_stepscope(&args);
    let (second, _, _) = run_stepscope(&args);

    // The header timestamp differs between runs; the steps must not.
    let steps = |s: &str| s.lines().skip(1).map(String::from).collect::<Vec<_>>();
    assert_eq!(steps(&first), steps(&second));
}

#[test]
fn trace_accepts_inline_input() {
    let (stdout, _stderr, exit_code) = run_stepscope(&[
        "trace",
        "binary-search",
        "--input",
        r#"{"array": [1, 2], "target": 5}"#,
        "--json",
    ]);

    assert_eq!(exit_code, 0);
    let file = TraceFile::parse_str(&stdout).unwrap();
    assert_eq!(file.header.case.as_deref(), Some("ad-hoc"));
}

// ============================================================================
// Validate Tests
// ============================================================================

#[test]
fn validate_rejects_a_zero_line_number() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.jsonl");
    std::fs::write(
        &path,
        "{\"version\":1,\"algorithm\":\"binary-search\"}\n{\"line_number\":0,\"description\":\"bad\"}\n",
    )
    .unwrap();

    stepscope()
        .args(["validate", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid trace file"))
        .stderr(predicate::str::contains("line number"));
}

#[test]
fn validate_rejects_a_future_format_version() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("future.jsonl");
    std::fs::write(
        &path,
        "{\"version\":9,\"algorithm\":\"binary-search\"}\n{\"line_number\":1,\"description\":\"x\"}\n",
    )
    .unwrap();

    stepscope()
        .args(["validate", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("got version 9"));
}

#[test]
fn validate_rejects_plain_text() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "just some notes\n").unwrap();

    stepscope()
        .args(["validate", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid trace file"));
}

// ============================================================================
// Play Guard Tests
// ============================================================================

#[test]
fn play_without_a_tty_fails_with_a_clear_message() {
    stepscope()
        .args(["play", "binary-search"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}

// ============================================================================
// Config and Completions Tests
// ============================================================================

#[test]
fn config_path_prints_the_toml_location() {
    let (stdout, _stderr, exit_code) = run_stepscope(&["config", "path"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.trim().ends_with("config.toml"));
    assert!(stdout.contains("stepscope"));
}

#[test]
fn config_show_prints_defaults_when_no_file_exists() {
    let home = TempDir::new().unwrap();

    stepscope()
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("speed_ms = 600"))
        .stdout(predicate::str::contains("show_insights = true"));
}

#[test]
fn completions_bash_mentions_every_subcommand() {
    let (stdout, _stderr, exit_code) = run_stepscope(&["completions", "bash"]);

    assert_eq!(exit_code, 0);
    for sub in ["list", "cases", "trace", "play", "validate", "config"] {
        assert!(stdout.contains(sub), "bash completions missing {sub}");
    }
}

#[test]
fn version_flag_reports_the_package_version() {
    let (stdout, _stderr, exit_code) = run_stepscope(&["--version"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
