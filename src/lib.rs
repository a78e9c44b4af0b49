//! stepscope - deterministic algorithm traces you can step through.
//!
//! The library is a small pipeline:
//!
//! - [`recorder`] runs a built-in algorithm against a test case and captures
//!   every meaningful moment as a step with full variable snapshots
//! - [`trace`] defines the step schema and the JSON-lines trace file format
//! - [`player`] turns a trace into a navigable session with manual stepping,
//!   phase jumps, and clock-driven autoplay
//! - [`config`] holds user preferences loaded from a TOML file
//!
//! The `stepscope` binary wires these together behind a clap CLI.

pub mod cli;
pub mod config;
pub mod player;
pub mod recorder;
pub mod testcase;
pub mod trace;

pub use config::{Config, ConfigError};
pub use player::{Player, PlayerAction, PlayerState, TickFire, TickToken};
pub use recorder::{Algorithm, AlgorithmId, RecordError, Recorder};
pub use testcase::{CaseInput, Operation, TestCase};
pub use trace::{Step, Trace, TraceError, TraceFile, TraceHeader};

/// Version string for `--version`, with the git commit in dev builds.
///
/// Official builds (the `release` feature) omit the commit hash. The build
/// date comes from the build script in both cases.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let build_date = env!("STEPSCOPE_BUILD_DATE");
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => format!("{version} ({sha} {build_date})"),
        None => format!("{version} ({build_date})"),
    }
}
