//! Command-line interface definitions.
//!
//! These live in the library so `xtask` can build man pages and shell
//! completions from the same definitions the binary parses.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "stepscope",
    about = "Record deterministic algorithm traces and step through them",
    version = crate::version_string()
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the built-in algorithms.
    List,

    /// List the built-in test cases for an algorithm.
    Cases {
        /// Algorithm id, for example `binary-search`.
        algorithm: String,
    },

    /// Record a trace and print it, or write it to a file.
    Trace(TraceArgs),

    /// Step through a trace interactively in the terminal.
    Play(PlayArgs),

    /// Check that a trace file parses and passes schema validation.
    Validate {
        /// Path of the trace file.
        file: PathBuf,
    },

    /// Inspect the configuration.
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Arguments shared by `trace`.
#[derive(Debug, Args)]
pub struct TraceArgs {
    /// Algorithm id, for example `bubble-sort`.
    pub algorithm: String,

    /// Built-in case name (defaults to the algorithm's first case).
    #[arg(long)]
    pub case: Option<String>,

    /// Ad-hoc input as a JSON object or operation list, instead of a built-in case.
    #[arg(long, value_name = "JSON", conflicts_with = "case")]
    pub input: Option<String>,

    /// Seed for algorithms that draw random numbers.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the trace in the JSON-lines file format instead of text.
    #[arg(long)]
    pub json: bool,

    /// Write the trace file to this path instead of printing.
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

/// Arguments for `play`.
#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Algorithm id (omit when playing a recorded file with --file).
    pub algorithm: Option<String>,

    /// Built-in case name (defaults to the algorithm's first case).
    #[arg(long)]
    pub case: Option<String>,

    /// Ad-hoc input as a JSON object or operation list, instead of a built-in case.
    #[arg(long, value_name = "JSON", conflicts_with = "case")]
    pub input: Option<String>,

    /// Seed for algorithms that draw random numbers.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Autoplay interval in milliseconds.
    #[arg(long, value_name = "MS")]
    pub speed: Option<u64>,

    /// Play a previously recorded trace file.
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = ["algorithm", "case", "input", "seed"]
    )]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration as TOML.
    Show,
    /// Print the path of the config file.
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn trace_parses_case_and_json_flags() {
        let cli = Cli::try_parse_from(["stepscope", "trace", "bubble-sort", "--case", "small", "--json"])
            .unwrap();
        match cli.command {
            Commands::Trace(args) => {
                assert_eq!(args.algorithm, "bubble-sort");
                assert_eq!(args.case.as_deref(), Some("small"));
                assert!(args.json);
                assert!(args.out.is_none());
            }
            other => panic!("parsed wrong command: {other:?}"),
        }
    }

    #[test]
    fn trace_input_conflicts_with_case() {
        let err = Cli::try_parse_from([
            "stepscope",
            "trace",
            "two-sum",
            "--case",
            "pair-found",
            "--input",
            "{}",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn play_file_conflicts_with_algorithm() {
        let err = Cli::try_parse_from([
            "stepscope",
            "play",
            "binary-search",
            "--file",
            "trace.jsonl",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn play_accepts_a_bare_file() {
        let cli = Cli::try_parse_from(["stepscope", "play", "--file", "trace.jsonl"]).unwrap();
        match cli.command {
            Commands::Play(args) => {
                assert!(args.algorithm.is_none());
                assert_eq!(args.file.as_deref(), Some(std::path::Path::new("trace.jsonl")));
            }
            other => panic!("parsed wrong command: {other:?}"),
        }
    }

    #[test]
    fn config_defaults_to_no_action() {
        let cli = Cli::try_parse_from(["stepscope", "config"]).unwrap();
        assert!(matches!(cli.command, Commands::Config { action: None }));
    }
}
