//! Deciding whether a test runs.
//!
//! The harness asks the ignore strategy right before every invocation, not
//! once up front. For parameterized tests and groups it asks once before the
//! cases are produced and again before each produced test runs, so a flag
//! that changes in between is respected.
//!
//! [`DefaultIgnore`] is the category skip condition bound to a
//! [`ConfigLookup`](crate::config::ConfigLookup). Implement [`TestIgnore`] to
//! decide differently, or pass a closure.

use crate::{skip::SkipDecision, test::TestMeta};

mod no;
pub use no::*;

mod default;
pub use default::*;

/// A strategy for deciding whether a declared test runs.
///
/// Implementations may be called from worker threads while a concurrent group
/// runs, so the harness requires them to be [`Sync`].
pub trait TestIgnore {
    fn ignore(&self, meta: &TestMeta) -> SkipDecision;
}

impl<F> TestIgnore for F
where
    F: Fn(&TestMeta) -> SkipDecision,
{
    fn ignore(&self, meta: &TestMeta) -> SkipDecision {
        self(meta)
    }
}
