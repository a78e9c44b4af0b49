//! Repository tasks: man page and shell completion generation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use stepscope::cli::Cli as StepscopeCli;

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Repository tasks for stepscope")]
struct XtaskCli {
    #[command(subcommand)]
    command: Task,
}

#[derive(Debug, Subcommand)]
enum Task {
    /// Generate man pages for stepscope and every subcommand.
    Man {
        /// Output directory.
        #[arg(long, default_value = "target/dist/man")]
        out: PathBuf,
    },
    /// Generate completion scripts for all supported shells.
    Completions {
        /// Output directory.
        #[arg(long, default_value = "target/dist/completions")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    match XtaskCli::parse().command {
        Task::Man { out } => generate_man(&out),
        Task::Completions { out } => generate_completions(&out),
    }
}

fn generate_man(out: &Path) -> Result<()> {
    fs::create_dir_all(out).with_context(|| format!("Failed to create {}", out.display()))?;

    let command = StepscopeCli::command();
    render_page(out, command.clone())?;
    for sub in command.get_subcommands() {
        render_page(out, sub.clone().name(format!("stepscope-{}", sub.get_name())))?;
    }

    println!("Man pages written to {}", out.display());
    Ok(())
}

fn render_page(out: &Path, command: clap::Command) -> Result<()> {
    let name = command.get_name().to_string();
    let man = clap_mangen::Man::new(command);
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    let path = out.join(format!("{name}.1"));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn generate_completions(out: &Path) -> Result<()> {
    fs::create_dir_all(out).with_context(|| format!("Failed to create {}", out.display()))?;

    for shell in [
        Shell::Bash,
        Shell::Elvish,
        Shell::Fish,
        Shell::PowerShell,
        Shell::Zsh,
    ] {
        let mut command = StepscopeCli::command();
        let path = clap_complete::generate_to(shell, &mut command, "stepscope", out)?;
        println!("{}", path.display());
    }
    Ok(())
}
