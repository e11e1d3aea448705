//! Fatal error taxonomy for the harness.
//!
//! Only environment failures abort a run. Everything a single test can do
//! wrong (truncated fixture blocks, parser crashes, timeouts) is contained
//! per test and reported as an ordinary failure, never as a `HarnessError`.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    /// Neither the requested directory nor a default root exists; no tests
    /// were executed.
    #[error("Could not find tests directory")]
    #[diagnostic(
        code(gauntlet::discovery::missing_root),
        help("pass the fixture directory as an argument, or run from a checkout containing `tests/`")
    )]
    DirectoryNotFound,
}

/// Prints a fatal error to stderr with full miette diagnostics.
pub fn report_fatal(error: HarnessError) {
    let report = miette::Report::new(error);
    eprintln!("{report:?}");
}
