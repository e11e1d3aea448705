//! Gauntlet runs a shared corpus of parser conformance fixtures against a
//! parser under test: same fixture format, same pass/fail semantics, same
//! normalization, and same report shape as every other port of the harness.
//!
//! The parser is an external collaborator wired in through
//! [`ParserUnderTest`]; a host binary is three lines:
//!
//! ```no_run
//! use gauntlet::{ParserUnderTest, ToSexp};
//!
//! struct Word(String);
//!
//! impl ToSexp for Word {
//!     fn to_sexp(&self) -> String {
//!         format!("(word {})", self.0)
//!     }
//! }
//!
//! struct WordParser;
//!
//! impl ParserUnderTest for WordParser {
//!     type Node = Word;
//!     type Error = String;
//!
//!     fn parse(&self, input: &str, _extglob: bool) -> Result<Vec<Word>, String> {
//!         Ok(input.split_whitespace().map(|w| Word(w.to_string())).collect())
//!     }
//! }
//!
//! fn main() -> std::process::ExitCode {
//!     gauntlet::cli::run(WordParser)
//! }
//! ```

pub use crate::discovery::discover_fixture_files;
pub use crate::errors::HarnessError;
pub use crate::executor::{
    run_case, Verdict, ERROR_SENTINEL, EXCEPTION_MARKER, INFINITE_SENTINEL, TIMEOUT_MARKER,
};
pub use crate::fixture::{parse_fixture, TestCase};
pub use crate::normalize::normalize;
pub use crate::report::{Reporter, MAX_REPORTED_FAILURES};
pub use crate::runner::{FailureRecord, RunOutcome, RunSummary, Runner};
pub use crate::subject::{ParserUnderTest, ToSexp};

pub mod cli;
pub mod discovery;
pub mod errors;
pub mod executor;
pub mod fixture;
pub mod normalize;
pub mod report;
pub mod runner;
pub mod subject;
