//! Run coordination: walks fixtures in sorted order, executes every case
//! that survives the filter, and accumulates the outcome for one run.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use termcolor::WriteColor;

use crate::discovery::discover_fixture_files;
use crate::errors::HarnessError;
use crate::executor::{run_case, ERROR_SENTINEL, INFINITE_SENTINEL};
use crate::fixture::parse_fixture;
use crate::normalize::normalize;
use crate::report::Reporter;
use crate::subject::ParserUnderTest;

/// Pass/fail counts and wall-clock time for one run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Everything recorded about one failed test case.
///
/// `expected` keeps the fixture's original text even when the coordinator
/// rewrote an `<infinite>` expectation before execution.
#[derive(Debug, Clone)]
pub struct FailureRecord {
    pub rel_path: String,
    pub source_line: usize,
    pub name: String,
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub error: String,
}

/// Summary plus the full failure list for one run invocation.
#[derive(Debug)]
pub struct RunOutcome {
    pub summary: RunSummary,
    pub failures: Vec<FailureRecord>,
}

/// Drives a full conformance run against one parser.
pub struct Runner<P: ParserUnderTest> {
    parser: Arc<P>,
}

impl<P: ParserUnderTest> Runner<P> {
    pub fn new(parser: P) -> Self {
        Self {
            parser: Arc::new(parser),
        }
    }

    /// Executes every fixture under `test_root`, streaming progress through
    /// the reporter. Results arrive in strict fixture-then-line order; a
    /// fixture file that cannot be read is warned about and skipped.
    pub fn run<W: WriteColor>(
        &self,
        test_root: &Path,
        filter: Option<&str>,
        reporter: &mut Reporter<W>,
    ) -> Result<RunOutcome, HarnessError> {
        let started = Instant::now();
        let files = discover_fixture_files(test_root)?;
        let base = display_base(test_root);

        let mut passed = 0;
        let mut failures = Vec::new();

        for file in &files {
            let rel_path = relative_label(file, &base);
            let text = match fs::read_to_string(file) {
                Ok(text) => text,
                Err(e) => {
                    eprintln!("Failed to read {}: {}", file.display(), e);
                    continue;
                }
            };
            for case in parse_fixture(&text) {
                if let Some(pattern) = filter {
                    if !case.name.contains(pattern) && !rel_path.contains(pattern) {
                        continue;
                    }
                }
                // A known non-terminating reference case is required to be a
                // parse error rather than exercised for real.
                let effective_expected = if normalize(&case.expected) == INFINITE_SENTINEL {
                    ERROR_SENTINEL.to_string()
                } else {
                    case.expected.clone()
                };
                reporter.case_started(&rel_path, case.source_line, &case.name);
                let verdict = run_case(&self.parser, &case.input, &effective_expected);
                reporter.case_finished(verdict.passed);
                if verdict.passed {
                    passed += 1;
                } else {
                    failures.push(FailureRecord {
                        rel_path: rel_path.clone(),
                        source_line: case.source_line,
                        name: case.name,
                        input: case.input,
                        expected: case.expected,
                        actual: verdict.actual,
                        error: verdict.error,
                    });
                }
            }
        }

        Ok(RunOutcome {
            summary: RunSummary {
                passed,
                failed: failures.len(),
                elapsed: started.elapsed(),
            },
            failures,
        })
    }
}

/// Directory that display paths are made relative to: the parent of the
/// canonicalized test root, so labels read `tests/sub/file.tests`.
fn display_base(test_root: &Path) -> PathBuf {
    let absolute = test_root
        .canonicalize()
        .unwrap_or_else(|_| test_root.to_path_buf());
    match absolute.parent() {
        Some(parent) => parent.to_path_buf(),
        None => absolute,
    }
}

fn relative_label(file: &Path, base: &Path) -> String {
    let absolute = file.canonicalize().unwrap_or_else(|_| file.to_path_buf());
    absolute
        .strip_prefix(base)
        .unwrap_or(&absolute)
        .display()
        .to_string()
}
