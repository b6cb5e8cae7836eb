//! Panic handling.
//!
//! A panic handler executes a test body and decides the resulting
//! [`TestStatus`]. The runners decide when and where a test runs, the panic
//! handler is the piece that actually calls it.
//!
//! Implement [`TestPanicHandler`] to define how panics turn into statuses.

use crate::{outcome::TestStatus, test::TestResult};

mod no;
pub use no::*;

mod default;
pub use default::*;

/// A strategy for executing a test function and translating panics into a [`TestStatus`].
///
/// Handlers are called by shared reference, possibly from worker threads of a
/// concurrent group.
pub trait TestPanicHandler {
    /// Execute `f`, the test named `name`, and return its status.
    fn handle<F: FnOnce() -> TestResult>(&self, f: F, name: &str) -> TestStatus;
}
