//! Parser for the line-oriented fixture mini-format.
//!
//! A fixture file holds one or more cases:
//!
//! ```text
//! # comment lines and blank lines are ignored outside a case
//! === <test name>
//! <input lines>
//! ---
//! <expected lines>
//! ---
//! ```
//!
//! The closing `---` is optional; an expected block also ends at the next
//! `=== ` header or at end of file. Malformed fixtures never fail the whole
//! file; the scan simply consumes to end of file for the current block.

const HEADER_MARKER: &str = "=== ";
const SEPARATOR: &str = "---";

/// One test case extracted from a fixture file.
///
/// `source_line` is the 1-based line number of the `=== name` header, which
/// keeps failure reporting stable no matter where the body ends. Duplicate
/// names are permitted; identity is `(file, source_line)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub name: String,
    pub input: String,
    pub expected: String,
    pub source_line: usize,
}

/// Extracts all test cases from fixture text, preserving file order.
pub fn parse_fixture(text: &str) -> Vec<TestCase> {
    let lines: Vec<&str> = text.lines().collect();
    let mut cases = Vec::new();
    let mut cursor = 0;

    while cursor < lines.len() {
        let line = lines[cursor];
        if line.starts_with('#') || line.trim().is_empty() {
            cursor += 1;
            continue;
        }
        let Some(header) = line.strip_prefix(HEADER_MARKER) else {
            cursor += 1;
            continue;
        };
        let source_line = cursor + 1;
        let (input, after_input) = take_input_block(&lines, cursor + 1);
        let (expected, after_expected) = take_expected_block(&lines, after_input);
        cases.push(TestCase {
            name: header.trim().to_string(),
            input,
            expected,
            source_line,
        });
        cursor = after_expected;
    }
    cases
}

/// Collects the input block: every line up to the `---` separator, which is
/// consumed. Blank lines and `#` lines inside the block are kept verbatim.
fn take_input_block(lines: &[&str], mut cursor: usize) -> (String, usize) {
    let start = cursor;
    while cursor < lines.len() && lines[cursor] != SEPARATOR {
        cursor += 1;
    }
    let block = lines[start..cursor].join("\n");
    if cursor < lines.len() {
        cursor += 1;
    }
    (block, cursor)
}

/// Collects the expected block: every line up to a closing `---`, the next
/// `=== ` header, or end of file. A closing `---` is consumed. Trailing
/// blank lines are stripped so fixtures may end with decorative blanks.
fn take_expected_block(lines: &[&str], mut cursor: usize) -> (String, usize) {
    let start = cursor;
    while cursor < lines.len()
        && lines[cursor] != SEPARATOR
        && !lines[cursor].starts_with(HEADER_MARKER)
    {
        cursor += 1;
    }
    let mut block: Vec<&str> = lines[start..cursor].to_vec();
    if cursor < lines.len() && lines[cursor] == SEPARATOR {
        cursor += 1;
    }
    while block.last().is_some_and(|line| line.trim().is_empty()) {
        block.pop();
    }
    (block.join("\n"), cursor)
}
