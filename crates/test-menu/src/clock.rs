use core::time::Duration;

/// Monotonic time source used to time single test runs.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Any `fn() -> Duration`, such as a platform's `since_boot`.
impl<F: Fn() -> Duration> Clock for F {
    fn now(&self) -> Duration {
        self()
    }
}
