use core::fmt::Write;

use crate::{TestFailure, TestFn};

/// Identity of the test currently being run, used to attribute its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestContext {
    pub file: &'static str,
    pub tag: &'static str,
    pub line: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportStats {
    pub tests: u32,
    pub failures: u32,
    pub ignored: u32,
}

impl ReportStats {
    pub fn passed(&self) -> bool {
        self.failures == 0
    }
}

/// Result bookkeeping around a batch of test runs.
///
/// A runner opens one session with [`Report::begin`], runs any number of
/// tests through [`Report::run_default`] and closes it with [`Report::end`].
pub trait Report {
    fn begin(&mut self, out: &mut dyn Write);
    fn end(&mut self, out: &mut dyn Write);

    /// Set before every [`Report::run_default`].
    fn set_context(&mut self, ctx: TestContext);
    fn context(&self) -> &TestContext;

    /// Run one test body and record its outcome.
    fn run_default(&mut self, out: &mut dyn Write, test_fn: TestFn, name: &'static str, line: u32);

    /// Counters of the current (or last closed) session.
    fn stats(&self) -> ReportStats;
}

/// Prints one line per test and a summary on `end`.
#[derive(Debug, Default)]
pub struct ConsoleReport {
    ctx: TestContext,
    stats: ReportStats,
}

impl ConsoleReport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Report for ConsoleReport {
    fn begin(&mut self, _out: &mut dyn Write) {
        self.stats = ReportStats::default();
    }

    fn end(&mut self, out: &mut dyn Write) {
        let s = self.stats;
        let _ = write!(
            out,
            "\n-----------------------\n{} Tests {} Failures {} Ignored\n{}\n",
            s.tests,
            s.failures,
            s.ignored,
            if s.passed() { "OK" } else { "FAIL" }
        );
    }

    fn set_context(&mut self, ctx: TestContext) {
        self.ctx = ctx;
    }

    fn context(&self) -> &TestContext {
        &self.ctx
    }

    fn run_default(&mut self, out: &mut dyn Write, test_fn: TestFn, name: &'static str, line: u32) {
        self.stats.tests += 1;
        let file = self.ctx.file;
        let _ = match test_fn() {
            Ok(()) => writeln!(out, "{file}:{line}:{name}:PASS"),
            Err(failure) => {
                let at = failure.line();
                match failure {
                    TestFailure::Failed { message, .. } => {
                        self.stats.failures += 1;
                        writeln!(out, "{file}:{at}:{name}:FAIL: {message}")
                    }
                    TestFailure::Ignored { .. } => {
                        self.stats.ignored += 1;
                        writeln!(out, "{file}:{at}:{name}:IGNORE")
                    }
                }
            }
        };
    }

    fn stats(&self) -> ReportStats {
        self.stats
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{TestFailure, TestResult};

    fn pass() -> TestResult {
        Ok(())
    }

    fn fail() -> TestResult {
        Err(TestFailure::failed("report.rs", 77, "expected 1, got 2"))
    }

    fn skip() -> TestResult {
        Err(TestFailure::ignored("report.rs", 80))
    }

    #[test]
    fn test_console_lines() {
        let mut out = String::new();
        let mut report = ConsoleReport::new();
        report.begin(&mut out);
        report.set_context(TestContext {
            file: "suite.rs",
            tag: "[x]",
            line: 10,
        });
        report.run_default(&mut out, pass, "ok_case", 10);
        report.run_default(&mut out, fail, "bad_case", 12);
        report.run_default(&mut out, skip, "skip_case", 14);
        report.end(&mut out);

        assert!(out.contains("suite.rs:10:ok_case:PASS\n"));
        assert!(out.contains("suite.rs:77:bad_case:FAIL: expected 1, got 2\n"));
        assert!(out.contains("suite.rs:80:skip_case:IGNORE\n"));
        assert!(out.contains("3 Tests 1 Failures 1 Ignored\nFAIL\n"));
        assert_eq!(
            report.stats(),
            ReportStats {
                tests: 3,
                failures: 1,
                ignored: 1
            }
        );
    }

    #[test]
    fn test_begin_resets() {
        let mut out = String::new();
        let mut report = ConsoleReport::new();
        report.begin(&mut out);
        report.run_default(&mut out, fail, "bad_case", 1);
        report.end(&mut out);
        assert!(!report.stats().passed());

        out.clear();
        report.begin(&mut out);
        report.end(&mut out);
        assert_eq!(report.stats(), ReportStats::default());
        assert!(out.ends_with("0 Tests 0 Failures 0 Ignored\nOK\n"));
    }
}
