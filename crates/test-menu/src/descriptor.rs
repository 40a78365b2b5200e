use alloc::string::String;
use core::fmt;

/// Outcome of one test body.
pub type TestResult = Result<(), TestFailure>;

/// Entry point of a test case.
pub type TestFn = fn() -> TestResult;

/// Why a test did not pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TestFailure {
    #[error("{file}:{line}: {message}")]
    Failed {
        file: &'static str,
        line: u32,
        message: String,
    },
    #[error("{file}:{line}: ignored")]
    Ignored { file: &'static str, line: u32 },
}

impl TestFailure {
    pub fn failed(file: &'static str, line: u32, message: impl Into<String>) -> Self {
        Self::Failed {
            file,
            line,
            message: message.into(),
        }
    }

    pub fn ignored(file: &'static str, line: u32) -> Self {
        Self::Ignored { file, line }
    }

    /// Source line the failure was raised from.
    pub fn line(&self) -> u32 {
        match self {
            Self::Failed { line, .. } | Self::Ignored { line, .. } => *line,
        }
    }
}

/// A registered test case.
///
/// Built once, usually by `#[test_case]`, and never changed afterwards.
/// `desc` is free text; by convention it carries bracketed tags such as
/// `[net][slow]` that the menu can filter on.
#[derive(Clone, Copy)]
pub struct TestDescriptor {
    pub name: &'static str,
    pub desc: &'static str,
    pub file: &'static str,
    pub line: u32,
    pub test_fn: TestFn,
}

impl TestDescriptor {
    pub const fn new(
        name: &'static str,
        desc: &'static str,
        file: &'static str,
        line: u32,
        test_fn: TestFn,
    ) -> Self {
        Self {
            name,
            desc,
            file,
            line,
            test_fn,
        }
    }

    /// Whether both descriptors were declared at the same place.
    pub fn same_site(&self, other: &TestDescriptor) -> bool {
        self.name == other.name && self.file == other.file && self.line == other.line
    }
}

impl fmt::Debug for TestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestDescriptor")
            .field("name", &self.name)
            .field("desc", &self.desc)
            .field("file", &self.file)
            .field("line", &self.line)
            .finish_non_exhaustive()
    }
}
