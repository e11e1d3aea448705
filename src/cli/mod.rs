//! The harness command-line front end.
//!
//! A host crate supplies its parser implementation and delegates its whole
//! `main` here:
//!
//! ```text
//! fn main() -> std::process::ExitCode {
//!     gauntlet::cli::run(MyParser)
//! }
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use termcolor::WriteColor;

use crate::errors::{report_fatal, HarnessError};
use crate::report::Reporter;
use crate::runner::{RunSummary, Runner};
use crate::subject::ParserUnderTest;

pub mod args;

pub use args::HarnessArgs;

/// Parses the real command line, runs the suite, and maps the outcome to an
/// exit status: success only when the fixture root was found and every
/// executed test passed.
pub fn run<P: ParserUnderTest>(parser: P) -> ExitCode {
    let args = HarnessArgs::parse();
    let mut reporter = Reporter::stdout();
    match try_run(&args, parser, &mut reporter) {
        Ok(summary) if summary.has_failures() => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            report_fatal(error);
            ExitCode::FAILURE
        }
    }
}

/// The testable core of [`run`]: resolves the fixture root, drives the
/// runner, and prints the digest and summary through the given reporter.
pub fn try_run<P: ParserUnderTest, W: WriteColor>(
    args: &HarnessArgs,
    parser: P,
    reporter: &mut Reporter<W>,
) -> Result<RunSummary, HarnessError> {
    let test_root = resolve_test_root(args.test_dir.as_deref())?;
    let runner = Runner::new(parser);
    let outcome = runner.run(&test_root, args.filter.as_deref(), reporter)?;
    reporter.failure_digest(&outcome.failures);
    reporter.summary(&outcome.summary);
    Ok(outcome.summary)
}

/// Resolves the fixture root. An explicit directory must exist as given;
/// without one the defaults `tests` and `../tests` are tried in order.
fn resolve_test_root(requested: Option<&Path>) -> Result<PathBuf, HarnessError> {
    if let Some(dir) = requested {
        if dir.is_dir() {
            return Ok(dir.to_path_buf());
        }
        return Err(HarnessError::DirectoryNotFound);
    }
    for candidate in ["tests", "../tests"] {
        let candidate = Path::new(candidate);
        if candidate.is_dir() {
            return Ok(candidate.to_path_buf());
        }
    }
    Err(HarnessError::DirectoryNotFound)
}
