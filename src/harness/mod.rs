pub use test::{ListedTest, TestHarness};

use crate::{
    ignore::DefaultIgnore, panic::DefaultPanicHandler, runner::ConcurrentRunner, test::Test,
};

/// Create a harness for `tests` with the default strategies.
///
/// - tests are skipped per category through `-Dkey[=value]` arguments of the
///   current process and, below those, environment variables
/// - panics are caught and reported as failures
/// - concurrent groups use one worker per available core
pub fn harness(tests: &[Test]) -> TestHarness<'_, DefaultIgnore, DefaultPanicHandler, ConcurrentRunner> {
    TestHarness {
        tests,
        ignore: DefaultIgnore::default(),
        panic_handler: DefaultPanicHandler,
        runner: ConcurrentRunner::default(),
    }
}
