//! Executes one test case against the parser under test.
//!
//! Each invocation runs on its own worker thread so the coordinator can
//! enforce a wall-clock deadline. A worker that misses the deadline is
//! abandoned, never joined; the harness process is short-lived per run, so
//! stragglers die with it.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use crate::normalize::normalize;
use crate::subject::{ParserUnderTest, ToSexp};

/// Expected-value sentinel: the input must fail to parse.
pub const ERROR_SENTINEL: &str = "<error>";
/// Expected-value sentinel: a known non-terminating reference case, treated
/// identically to `<error>` by the run coordinator.
pub const INFINITE_SENTINEL: &str = "<infinite>";
/// Actual-value marker for a test that missed the deadline.
pub const TIMEOUT_MARKER: &str = "<timeout>";
/// Actual-value marker for an unexpected parser failure.
pub const EXCEPTION_MARKER: &str = "<exception>";

/// Input-block prefix that enables extended-glob mode for one case.
const EXTGLOB_DIRECTIVE: &str = "# @extglob\n";

const PARSE_DEADLINE: Duration = Duration::from_secs(5);
const TIMEOUT_DIAGNOSTIC: &str = "Test timed out after 5 seconds";

/// Outcome of one test case: pass/fail, the rendered actual output, and a
/// diagnostic (empty when none applies).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub passed: bool,
    pub actual: String,
    pub error: String,
}

/// Runs one `(input, expected)` pair under the 5-second deadline.
pub fn run_case<P: ParserUnderTest>(parser: &Arc<P>, input: &str, expected: &str) -> Verdict {
    run_case_with_deadline(parser, input, expected, PARSE_DEADLINE)
}

fn run_case_with_deadline<P: ParserUnderTest>(
    parser: &Arc<P>,
    input: &str,
    expected: &str,
    deadline: Duration,
) -> Verdict {
    let (input, extglob) = strip_extglob_directive(input);
    let input = input.to_string();
    let parser = Arc::clone(parser);
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            parse_and_render(parser.as_ref(), &input, extglob)
        }));
        let signal = match outcome {
            Ok(signal) => signal,
            Err(payload) => Err(panic_text(payload)),
        };
        let _ = tx.send(signal);
    });
    match rx.recv_timeout(deadline) {
        Ok(signal) => judge(signal, expected),
        Err(_) => Verdict {
            passed: false,
            actual: TIMEOUT_MARKER.to_string(),
            error: TIMEOUT_DIAGNOSTIC.to_string(),
        },
    }
}

/// Strips a leading `# @extglob` directive line, reporting whether it was
/// present. The directive only counts when immediately followed by a newline.
fn strip_extglob_directive(input: &str) -> (&str, bool) {
    match input.strip_prefix(EXTGLOB_DIRECTIVE) {
        Some(rest) => (rest, true),
        None => (input, false),
    }
}

fn parse_and_render<P: ParserUnderTest>(
    parser: &P,
    input: &str,
    extglob: bool,
) -> Result<String, String> {
    match parser.parse(input, extglob) {
        Ok(nodes) => Ok(nodes
            .iter()
            .map(ToSexp::to_sexp)
            .collect::<Vec<_>>()
            .join(" ")),
        Err(diagnostic) => Err(diagnostic.to_string()),
    }
}

/// Turns the worker's signal into a verdict. A failure signal (parser error
/// or worker panic) satisfies an `<error>` expectation; a successful parse
/// never does.
fn judge(signal: Result<String, String>, expected: &str) -> Verdict {
    let wants_error = normalize(expected) == ERROR_SENTINEL;
    match signal {
        Ok(actual) => {
            if wants_error {
                return Verdict {
                    passed: false,
                    actual,
                    error: "Expected parse error but got successful parse".to_string(),
                };
            }
            let passed = normalize(&actual) == normalize(expected);
            Verdict {
                passed,
                actual,
                error: String::new(),
            }
        }
        Err(diagnostic) => {
            if wants_error {
                Verdict {
                    passed: true,
                    actual: ERROR_SENTINEL.to_string(),
                    error: String::new(),
                }
            } else {
                Verdict {
                    passed: false,
                    actual: EXCEPTION_MARKER.to_string(),
                    error: diagnostic,
                }
            }
        }
    }
}

fn panic_text(payload: Box<dyn Any + Send>) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "Unknown panic".to_string()
    }
}
