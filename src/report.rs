use std::{
    process::{ExitCode, Termination},
    time::Duration,
};

use crate::outcome::TestOutcome;

pub type TestOutcomes = Vec<(String, TestOutcome)>;

/// The result of a harness run.
///
/// Outcomes are listed in the order they finished. Tests of a concurrent
/// group may therefore appear in a different order than they were produced.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct TestReport {
    pub outcomes: TestOutcomes,
    pub duration: Duration,
}

impl TestReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.passed()).count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.skipped()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.failed()).count()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// The first outcome reported under `name`.
    ///
    /// Case and child names are unique within their test, but a top-level test
    /// named like the child of another test (`group::child`) is not detected.
    pub fn outcome(&self, name: &str) -> Option<&TestOutcome> {
        self.outcomes
            .iter()
            .find_map(|(n, outcome)| (n == name).then_some(outcome))
    }
}

impl Termination for TestReport {
    fn report(self) -> ExitCode {
        match self.is_success() {
            true => ExitCode::SUCCESS,
            false => ExitCode::FAILURE,
        }
    }
}
