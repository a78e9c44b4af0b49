//! `stepscope validate` subcommand handler.

use std::path::Path;

use anyhow::{Context, Result};

use stepscope::trace::TraceFile;

/// Parse and schema-validate a trace file, reporting what it holds.
pub fn handle(path: &Path) -> Result<()> {
    let file = TraceFile::parse(path)
        .with_context(|| format!("{} is not a valid trace file", path.display()))?;
    println!(
        "{}: OK ({}, {} steps)",
        path.display(),
        match &file.header.case {
            Some(case) => format!("{}/{case}", file.header.algorithm),
            None => file.header.algorithm.clone(),
        },
        file.trace.len()
    );
    Ok(())
}
