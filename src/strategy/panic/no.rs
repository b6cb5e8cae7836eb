use crate::{
    outcome::TestStatus,
    panic::TestPanicHandler,
    test::TestResult,
};

/// A [`TestPanicHandler`] that does not catch panics.
///
/// The test function is executed and its return value converted into a
/// [`TestStatus`]. Panics unwind through the harness.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NoPanicHandler;

impl TestPanicHandler for NoPanicHandler {
    fn handle<F: FnOnce() -> TestResult>(&self, f: F, _: &str) -> TestStatus {
        f().into()
    }
}
