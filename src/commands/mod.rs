//! Subcommand handlers for the stepscope binary.

use anyhow::{Context, Result};

use stepscope::recorder::AlgorithmId;
use stepscope::testcase::{CaseInput, TestCase};
use stepscope::Recorder;

pub mod cases;
pub mod completions;
pub mod config;
pub mod list;
pub mod play;
pub mod render;
pub mod trace;
pub mod validate;

/// Builds the test case a recording subcommand asked for.
///
/// `--input` builds an ad-hoc case, `--case` picks a built-in one by name,
/// otherwise the algorithm's default case is used. `--seed` overrides the
/// case seed on all three paths.
pub fn resolve_case(
    id: AlgorithmId,
    case: Option<&str>,
    input: Option<&str>,
    seed: Option<u64>,
) -> Result<TestCase> {
    let mut resolved = match (case, input) {
        (_, Some(raw)) => {
            let input: CaseInput = serde_json::from_str(raw)
                .context("Failed to parse --input as a JSON object or operation list")?;
            TestCase {
                name: "ad-hoc".to_string(),
                input,
                seed: None,
            }
        }
        (Some(name), None) => Recorder::find_case(id, name)?,
        (None, None) => Recorder::default_case(id),
    };
    if let Some(seed) = seed {
        resolved.seed = Some(seed);
    }
    Ok(resolved)
}
