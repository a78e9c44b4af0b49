//! `stepscope list` subcommand handler.

use anyhow::Result;

use stepscope::recorder::{self, AlgorithmId};

/// Print one catalog line per built-in algorithm.
pub fn handle() -> Result<()> {
    for id in AlgorithmId::ALL {
        let algorithm = recorder::algorithm(id);
        println!(
            "{:<14} {:<22} {:>2} cases  {}",
            id.as_str(),
            algorithm.name(),
            algorithm.cases().len(),
            algorithm.summary()
        );
    }
    Ok(())
}
