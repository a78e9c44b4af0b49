//! `stepscope completions` subcommand handler.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;

use stepscope::cli::Cli;

/// Write completions for `shell` to stdout.
pub fn handle(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    clap_complete::generate(shell, &mut command, "stepscope", &mut std::io::stdout());
    Ok(())
}
