//! The seam between the harness and the parser under test.

use std::fmt;

/// Canonical textual rendering for one parsed node.
///
/// Renderings are joined with single spaces to form the actual output that
/// is compared, after normalization, against a fixture's expected block.
pub trait ToSexp {
    fn to_sexp(&self) -> String;
}

/// The parser under test.
///
/// Invalid input is signaled through `Err`; the diagnostic's `Display` text
/// is what failure reports show.
///
/// Implementations must not mutate shared state: a call that exceeds the
/// execution deadline is abandoned on its worker thread, not cancelled, and
/// may still be running while later tests execute.
pub trait ParserUnderTest: Send + Sync + 'static {
    type Node: ToSexp;
    type Error: fmt::Display;

    fn parse(&self, input: &str, extglob: bool) -> Result<Vec<Self::Node>, Self::Error>;
}
