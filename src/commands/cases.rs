//! `stepscope cases` subcommand handler.

use anyhow::Result;
use serde_json::Value;

use stepscope::recorder::{self, AlgorithmId};
use stepscope::testcase::{CaseInput, Operation};

/// Print the built-in cases for one algorithm.
pub fn handle(algorithm: &str) -> Result<()> {
    let id: AlgorithmId = algorithm.parse()?;
    let algorithm = recorder::algorithm(id);
    println!("{} ({})", algorithm.name(), id.as_str());
    for case in algorithm.cases() {
        let input = describe_input(&case.input)?;
        match case.seed {
            Some(seed) => println!("  {:<26} {input}  [seed {seed}]", case.name),
            None => println!("  {:<26} {input}", case.name),
        }
    }
    Ok(())
}

/// One-line rendering of a case input.
fn describe_input(input: &CaseInput) -> Result<String> {
    match input {
        CaseInput::Args(args) => Ok(serde_json::to_string(args)?),
        CaseInput::Ops(ops) => Ok(ops.iter().map(render_op).collect::<Vec<_>>().join(" ")),
    }
}

fn render_op(op: &Operation) -> String {
    let args = op
        .args
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!("{}({})", op.name, args)
}
