//! `stepscope trace` subcommand handler.

use anyhow::Result;

use stepscope::cli::TraceArgs;
use stepscope::recorder::AlgorithmId;
use stepscope::trace::{TraceFile, TraceHeader};
use stepscope::Recorder;

use super::render;

/// Record a trace and print it, or write it to a file.
pub fn handle(args: TraceArgs) -> Result<()> {
    let id: AlgorithmId = args.algorithm.parse()?;
    let case = super::resolve_case(id, args.case.as_deref(), args.input.as_deref(), args.seed)?;
    let trace = Recorder::record(id, &case)?;

    let header = TraceHeader::new(id.as_str())
        .with_case(&case.name)
        .stamped();
    let file = TraceFile::new(header, trace);

    if let Some(path) = &args.out {
        file.write(path)?;
        println!("Wrote {} steps to {}", file.trace.len(), path.display());
        return Ok(());
    }

    if args.json {
        print!("{}", file.to_string()?);
        return Ok(());
    }

    print_text(&file);
    Ok(())
}

fn print_text(file: &TraceFile) {
    let total = file.trace.len();
    for (index, step) in file.trace.steps().iter().enumerate() {
        println!("{}", render::step_line(index, total, step));
        if let Some(insight) = render::insight_line(step) {
            println!("         {insight}");
        }
        if let Some(vars) = render::variables_line(step) {
            println!("         {vars}");
        }
    }
}
