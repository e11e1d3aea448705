//! Command-line arguments for the harness front end.
//!
//! Uses the `clap` crate with its "derive" feature so a host binary gets
//! parsing, `--help`, and `--version` for free.

use clap::Parser;
use std::path::PathBuf;

/// Conformance-run arguments.
///
/// The flag surface is shared verbatim across every port of the harness, so
/// it stays drop-in compatible even where a flag is currently inert.
#[derive(Debug, Parser)]
#[command(
    name = "gauntlet",
    version,
    about = "Runs a fixture corpus of parser conformance tests."
)]
pub struct HarnessArgs {
    /// Root directory to scan for `.tests` fixtures; defaults to `tests`,
    /// then `../tests`.
    pub test_dir: Option<PathBuf>,

    /// Reserved; accepted for compatibility with the other runners.
    #[arg(short, long)]
    pub verbose: bool,

    /// Only run tests whose name or fixture path contains PATTERN.
    #[arg(short, long, value_name = "PATTERN")]
    pub filter: Option<String>,
}
