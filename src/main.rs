//! stepscope binary entry point.

use anyhow::Result;
use clap::Parser;

use stepscope::cli::{Cli, Commands};

mod commands;

fn main() -> Result<()> {
    // Logs go to stderr so trace output on stdout stays machine-readable.
    // Off by default; RUST_LOG=stepscope=debug opts in.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::List => commands::list::handle(),
        Commands::Cases { algorithm } => commands::cases::handle(&algorithm),
        Commands::Trace(args) => commands::trace::handle(args),
        Commands::Play(args) => commands::play::handle(args),
        Commands::Validate { file } => commands::validate::handle(&file),
        Commands::Config { action } => commands::config::handle(action),
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
