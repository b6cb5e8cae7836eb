use std::time::Duration;

use crate::{skip::SkipCause, test::TestResult};

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct TestOutcome {
    pub status: TestStatus,
    pub duration: Duration,
}

impl TestOutcome {
    pub fn passed(&self) -> bool {
        self.status.passed()
    }

    pub fn skipped(&self) -> bool {
        self.status.skipped()
    }

    pub fn failed(&self) -> bool {
        self.status.failed()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TestStatus {
    Passed,
    Skipped(SkipCause),
    Failed(TestFailure),
}

impl TestStatus {
    pub fn passed(&self) -> bool {
        matches!(self, TestStatus::Passed)
    }

    pub fn skipped(&self) -> bool {
        matches!(self, TestStatus::Skipped(_))
    }

    pub fn failed(&self) -> bool {
        matches!(self, TestStatus::Failed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TestFailure {
    /// The test returned an error, formatted with `{:#?}`.
    Error(String),
    Panicked(String),
}

impl From<TestResult> for TestStatus {
    fn from(value: TestResult) -> Self {
        match value.0 {
            Ok(_) => TestStatus::Passed,
            Err(err) => TestStatus::Failed(TestFailure::Error(err)),
        }
    }
}
