//! Shared helpers for integration tests.

use std::process::Command;

/// Run the stepscope CLI and capture output.
pub fn run_stepscope(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_stepscope"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute stepscope");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// A well-formed trace file, as an external producer would write it.
pub fn sample_trace_file() -> &'static str {
    concat!(
        r#"{"version":1,"algorithm":"binary-search","case":"found-middle"}"#,
        "\n",
        r#"{"line_number":2,"description":"start with the full range","phase":"init","variables":{"hi":5,"lo":0}}"#,
        "\n",
        r#"{"line_number":4,"description":"probe index 2","phase":"compare","variables":{"mid":2},"highlights":[2]}"#,
        "\n",
        r#"{"line_number":6,"description":"target found","phase":"done","variables":{"result":2}}"#,
        "\n",
    )
}
