//! Assertions for test bodies returning [`TestResult`](crate::TestResult).
//!
//! Each macro returns early with a [`TestFailure`](crate::TestFailure) that
//! records where it was raised.

/// Fail the test unless `cond` holds.
#[macro_export]
macro_rules! test_assert {
    ($cond:expr $(,)?) => {
        $crate::test_assert!($cond, "assertion failed: {}", stringify!($cond))
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::TestFailure::failed(
                file!(),
                line!(),
                $crate::__export::format!($($arg)+),
            ));
        }
    };
}

/// Fail the test unless both sides compare equal.
#[macro_export]
macro_rules! test_assert_eq {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                if !(*left == *right) {
                    return Err($crate::TestFailure::failed(
                        file!(),
                        line!(),
                        $crate::__export::format!("Expected {:?} Was {:?}", right, left),
                    ));
                }
            }
        }
    };
}

/// Stop the test here and count it as ignored.
#[macro_export]
macro_rules! test_ignore {
    () => {
        return Err($crate::TestFailure::ignored(file!(), line!()))
    };
}

#[cfg(test)]
mod test {
    use crate::{TestFailure, TestResult};

    fn checks(x: u32) -> TestResult {
        test_assert!(x > 0);
        test_assert!(x < 10, "{x} too big");
        test_assert_eq!(x % 2, 0);
        Ok(())
    }

    fn skipped() -> TestResult {
        test_ignore!();
    }

    #[test]
    fn test_pass() {
        assert_eq!(checks(4), Ok(()));
    }

    #[test]
    fn test_messages() {
        match checks(0) {
            Err(TestFailure::Failed { message, .. }) => {
                assert_eq!(message, "assertion failed: x > 0")
            }
            other => panic!("unexpected {other:?}"),
        }
        match checks(12) {
            Err(TestFailure::Failed { message, .. }) => assert_eq!(message, "12 too big"),
            other => panic!("unexpected {other:?}"),
        }
        match checks(3) {
            Err(TestFailure::Failed { message, file, .. }) => {
                assert_eq!(message, "Expected 0 Was 1");
                assert!(file.ends_with("assert.rs"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_ignored() {
        assert!(matches!(skipped(), Err(TestFailure::Ignored { .. })));
    }
}
