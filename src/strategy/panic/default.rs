use std::{
    any::Any,
    panic::{AssertUnwindSafe, catch_unwind},
};

use crate::{
    outcome::{TestFailure, TestStatus},
    panic::TestPanicHandler,
    test::TestResult,
};

/// The [`TestPanicHandler`] used by the default harness.
///
/// A test passes when it returns `Ok(())` or `()` without panicking. It fails
/// with [`TestFailure::Error`] when it returns an error and with
/// [`TestFailure::Panicked`] when it panics.
#[derive(Debug, Default, Clone)]
pub struct DefaultPanicHandler;

impl DefaultPanicHandler {
    /// Convert a panic payload into a string.
    ///
    /// This matches the common payload types produced by `panic!` (`&'static str` and `String`).
    /// Other payload types are formatted as a generic placeholder.
    pub fn payload_as_string(err: Box<dyn Any + Send + 'static>) -> String {
        err.downcast::<&'static str>()
            .map(|s| s.to_string())
            .or_else(|err| err.downcast::<String>().map(|s| *s))
            .unwrap_or_else(|_| String::from("Box<dyn Any>"))
    }
}

impl TestPanicHandler for DefaultPanicHandler {
    fn handle<F: FnOnce() -> TestResult>(&self, f: F, name: &str) -> TestStatus {
        // Nothing observes `f` after it panicked.
        match catch_unwind(AssertUnwindSafe(f)) {
            Ok(result) => result.into(),
            Err(err) => {
                let msg = Self::payload_as_string(err);
                tracing::warn!(test = name, %msg, "test panicked");
                TestStatus::Failed(TestFailure::Panicked(msg))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{category::Category, test_support::*};

    #[test]
    fn handling_panics_works() {
        let tests = &[
            declare_test! {
                name: "ok",
                func: || ()
            },
            declare_test! {
                name: "panic",
                category: Category::Integration,
                func: || if true { panic!("boom") }
            },
            declare_test! {
                name: "error",
                func: || Err::<(), _>("nope")
            },
        ];

        let report = harness(tests)
            .with_panic_handler(DefaultPanicHandler)
            .run()
            .unwrap();
        let outcomes = report.outcomes;

        assert!(outcomes[0].1.passed());
        assert_eq!(
            outcomes[1].1.status,
            TestStatus::Failed(TestFailure::Panicked("boom".into()))
        );
        assert_eq!(
            outcomes[2].1.status,
            TestStatus::Failed(TestFailure::Error("\"nope\"".into()))
        );
    }

    #[test]
    fn formatted_panic_payloads() {
        let status = DefaultPanicHandler.handle(|| panic!("code {}", 7), "formatted");
        assert_eq!(
            status,
            TestStatus::Failed(TestFailure::Panicked("code 7".into()))
        );
    }
}
