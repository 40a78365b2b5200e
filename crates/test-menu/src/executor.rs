use core::fmt::Write;

use crate::{Report, TestContext, TestDescriptor};

/// Run one test case through the reporter.
///
/// The reporter's context is pointed at `case` first and left that way
/// afterwards; the next call overwrites it.
pub fn run_single<R: Report + ?Sized>(report: &mut R, out: &mut dyn Write, case: &TestDescriptor) {
    report.set_context(TestContext {
        file: case.file,
        tag: case.desc,
        line: case.line,
    });
    report.run_default(out, case.test_fn, case.name, case.line);
}
