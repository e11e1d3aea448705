//! Whitespace canonicalization applied before every output comparison.
//!
//! Fixture authors format expected s-expressions with arbitrary indentation
//! and line breaks for readability; only token content may affect pass/fail.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Collapses every maximal run of whitespace (vertical whitespace included)
/// into a single ASCII space and trims the ends.
///
/// Idempotent: normalizing already-normalized text is a no-op.
pub fn normalize(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}
