//! Test scheduling.
//!
//! A runner executes a batch of test jobs and turns their statuses into
//! [`TestOutcome`]s, measuring how long each job took. The harness hands the
//! produced tests of a group to a runner:
//! - groups declared [`Sequential`](crate::declaration::ExecutionMode::Sequential)
//!   always go through [`SequentialRunner`]
//! - groups declared [`Concurrent`](crate::declaration::ExecutionMode::Concurrent)
//!   go through the configurable runner of the harness, [`ConcurrentRunner`]
//!   by default
//!
//! Implement [`TestRunner`] to schedule differently.

use std::num::NonZeroUsize;

use crate::{TestOutcomes, outcome::TestStatus};

mod sequential;
pub use sequential::*;

mod concurrent;
pub use concurrent::*;

/// A unit of work for a runner.
///
/// `run` already contains the skip check and the panic handler, so runners only
/// schedule and time it.
pub struct TestJob<'j> {
    pub name: String,
    pub run: Box<dyn FnOnce() -> TestStatus + Send + 'j>,
}

impl<'j> TestJob<'j> {
    pub fn new<F>(name: impl Into<String>, run: F) -> Self
    where
        F: FnOnce() -> TestStatus + Send + 'j,
    {
        Self {
            name: name.into(),
            run: Box::new(run),
        }
    }
}

impl std::fmt::Debug for TestJob<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestJob")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A strategy for running test jobs.
///
/// The returned outcomes do not have to keep the order of `jobs`.
pub trait TestRunner {
    fn run<'j>(&self, jobs: Vec<TestJob<'j>>) -> TestOutcomes;

    /// The number of workers this runner would use for `job_count` jobs.
    fn worker_count(&self, job_count: usize) -> NonZeroUsize;
}
