//! Console reporting: streamed per-test progress, the capped failure
//! digest, and the closing summary line.

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::runner::{FailureRecord, RunSummary};

/// Failure records shown in full before the digest is capped.
pub const MAX_REPORTED_FAILURES: usize = 20;

const BANNER_WIDTH: usize = 60;

/// Writes run output to any color-capable sink.
///
/// The CLI uses [`Reporter::stdout`]; tests capture output through
/// `termcolor::NoColor<Vec<u8>>`. Sink errors are swallowed because a broken
/// console must not change test verdicts.
pub struct Reporter<W: WriteColor> {
    sink: W,
}

impl Reporter<StandardStream> {
    /// Reporter for the process stdout, colored only when attached to a tty.
    pub fn stdout() -> Self {
        let choice = if atty::is(atty::Stream::Stdout) {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> Reporter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Prints the progress label and flushes so it is visible while the test
    /// runs; the verdict suffix follows in [`Reporter::case_finished`].
    pub fn case_started(&mut self, rel_path: &str, source_line: usize, name: &str) {
        let _ = write!(self.sink, "{}:{} {} ... ", rel_path, source_line, name);
        let _ = self.sink.flush();
    }

    pub fn case_finished(&mut self, passed: bool) {
        if passed {
            let _ = self
                .sink
                .set_color(ColorSpec::new().set_fg(Some(Color::Green)));
            let _ = writeln!(self.sink, "ok");
        } else {
            let _ = self
                .sink
                .set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
            let _ = writeln!(self.sink, "FAIL");
        }
        let _ = self.sink.reset();
    }

    /// Prints the delimited FAILURES section: the first
    /// [`MAX_REPORTED_FAILURES`] records in encounter order, then a count of
    /// the remainder. Prints nothing when the run was clean.
    pub fn failure_digest(&mut self, failures: &[FailureRecord]) {
        if failures.is_empty() {
            return;
        }
        let bar = "=".repeat(BANNER_WIDTH);
        let _ = writeln!(self.sink, "{}", bar);
        let _ = writeln!(self.sink, "FAILURES");
        let _ = writeln!(self.sink, "{}", bar);
        for failure in failures.iter().take(MAX_REPORTED_FAILURES) {
            let _ = writeln!(self.sink);
            let _ = writeln!(
                self.sink,
                "{}:{} {}",
                failure.rel_path, failure.source_line, failure.name
            );
            let _ = writeln!(
                self.sink,
                "  Input:    {}",
                failure.input.replace('\n', "\\n")
            );
            let _ = writeln!(self.sink, "  Expected: {}", failure.expected);
            let _ = writeln!(self.sink, "  Actual:   {}", failure.actual);
            if !failure.error.is_empty() {
                let _ = writeln!(self.sink, "  Error:    {}", failure.error);
            }
        }
        if failures.len() > MAX_REPORTED_FAILURES {
            let _ = writeln!(
                self.sink,
                "\n... and {} more failures",
                failures.len() - MAX_REPORTED_FAILURES
            );
        }
    }

    /// Prints the closing `N passed, M failed in T.TTs` line.
    pub fn summary(&mut self, summary: &RunSummary) {
        let _ = writeln!(
            self.sink,
            "{} passed, {} failed in {:.2}s",
            summary.passed,
            summary.failed,
            summary.elapsed.as_secs_f64()
        );
    }
}
