use std::{num::NonZeroUsize, time::Instant};

use crate::{
    TestOutcomes,
    outcome::TestOutcome,
    runner::{TestJob, TestRunner},
};

/// Runs jobs one after another on the calling thread, in order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SequentialRunner;

impl TestRunner for SequentialRunner {
    fn run<'j>(&self, jobs: Vec<TestJob<'j>>) -> TestOutcomes {
        jobs.into_iter()
            .map(|TestJob { name, run }| {
                let now = Instant::now();
                let status = run();
                let duration = now.elapsed();
                (name, TestOutcome { status, duration })
            })
            .collect()
    }

    fn worker_count(&self, _: usize) -> NonZeroUsize {
        NonZeroUsize::MIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::TestStatus;

    #[test]
    fn run_linear() {
        let jobs: Vec<_> = ["first", "second", "third"]
            .map(|name| TestJob::new(name, || TestStatus::Passed))
            .into();

        let outcomes = SequentialRunner.run(jobs);
        let names: Vec<_> = outcomes.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
        assert!(outcomes.iter().all(|(_, outcome)| outcome.passed()));
    }
}
