use crate::{ignore::TestIgnore, skip::SkipDecision, test::TestMeta};

/// A [`TestIgnore`] implementation that never skips tests.
///
/// All tests run, regardless of their category and of any skip flag.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NoIgnore;

impl TestIgnore for NoIgnore {
    fn ignore(&self, _: &TestMeta) -> SkipDecision {
        SkipDecision::Run
    }
}
