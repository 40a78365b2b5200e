//! Test case registry and interactive test menu for bare metal.
//!
//! Test cases are collected into a [`Registry`] before anything runs. A
//! [`MenuRunner`] then lists them over a [`LineChannel`] and runs whatever
//! the user picks:
//!
//! | input      | runs                                          |
//! |------------|-----------------------------------------------|
//! | `*`        | every test                                    |
//! | `[tag]`    | tests whose description contains `[tag]`      |
//! | `"name"`   | tests whose name contains `name`              |
//! | `3`        | the third test in the menu, with its run time |
//! | empty line | nothing, the menu is printed again            |
//!
//! ```ignore
//! use test_menu::{test_assert_eq, test_case, ConsoleReport, MenuRunner, Registry, TestResult};
//!
//! #[test_case(desc = "[math]")]
//! fn add() -> TestResult {
//!     test_assert_eq!(1 + 1, 2);
//!     Ok(())
//! }
//!
//! let mut builder = Registry::builder();
//! builder.register(ADD_CASE);
//! MenuRunner::new(builder.build(), uart, ConsoleReport::new(), since_boot).run_menu();
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod assert;
pub mod channel;
mod clock;
pub mod command;
mod descriptor;
pub mod executor;
mod registry;
pub mod report;
pub mod runner;
pub mod select;

pub use test_menu_macros::test_case;

pub use channel::{ChannelWriter, LineChannel, SerialChannel};
pub use clock::Clock;
pub use command::Command;
pub use descriptor::{TestDescriptor, TestFailure, TestFn, TestResult};
pub use registry::{Iter, Registry, RegistryBuilder};
pub use report::{ConsoleReport, Report, ReportStats, TestContext};
pub use runner::{Dispatch, MenuRunner, RunnerConfig};

#[doc(hidden)]
pub mod __export {
    pub use alloc::format;
}
