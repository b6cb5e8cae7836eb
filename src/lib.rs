//! Category based test skipping.
//!
//! Every [`Test`](test::Test) belongs to a [`Category`](category::Category).
//! Right before a test runs, the harness looks up `skipTests` and the skip key
//! of the category (`skipUnitTests`, `skipIntegrationTests`, `skipE2ETests`)
//! and skips the test if either is asserted, that is set to `""` or `"true"`.

pub mod category;
pub mod config;
pub mod declaration;
pub mod outcome;
pub mod skip;

mod strategy;
pub use strategy::*;

mod harness;
pub use harness::*;

mod report;
pub use report::*;

#[cfg(test)]
mod test_support;
