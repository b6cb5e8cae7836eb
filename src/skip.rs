//! The skip condition.
//!
//! A test of category `C` is skipped if either [`SKIP_ALL_KEY`] or the key of
//! `C` ([`Category::skip_key`]) is asserted in the given [`ConfigLookup`].
//! Combinations fall out of that rule: asserting `skipIntegrationTests` and
//! `skipE2ETests` runs only unit tests.
//!
//! The evaluation is pure. It reads the lookup, it never caches and it never
//! fails, so it can be repeated right before every single test invocation.

use std::fmt::Display;

use crate::{
    category::{Category, SKIP_ALL_KEY},
    config::ConfigLookup,
};

/// The key that caused a test to be skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipCause {
    /// [`SKIP_ALL_KEY`] was asserted.
    All,

    /// The key of this category was asserted.
    Category(Category),
}

impl SkipCause {
    /// The configuration key behind this cause.
    pub const fn key(self) -> &'static str {
        match self {
            SkipCause::All => SKIP_ALL_KEY,
            SkipCause::Category(category) => category.skip_key(),
        }
    }
}

impl Display for SkipCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} is asserted", self.key())
    }
}

/// Whether a test should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SkipDecision {
    #[default]
    Run,
    Skip(SkipCause),
}

impl SkipDecision {
    pub fn skip(&self) -> bool {
        matches!(self, SkipDecision::Skip(_))
    }

    pub fn cause(&self) -> Option<SkipCause> {
        match self {
            SkipDecision::Run => None,
            SkipDecision::Skip(cause) => Some(*cause),
        }
    }
}

/// Decide whether tests of `category` are skipped for the current `lookup`.
///
/// The global key is checked first, so if both keys are asserted the cause is
/// [`SkipCause::All`].
pub fn evaluate<L>(category: Category, lookup: &L) -> SkipDecision
where
    L: ConfigLookup + ?Sized,
{
    let decision = if lookup.is_asserted(SKIP_ALL_KEY) {
        SkipDecision::Skip(SkipCause::All)
    } else if lookup.is_asserted(category.skip_key()) {
        SkipDecision::Skip(SkipCause::Category(category))
    } else {
        SkipDecision::Run
    };

    tracing::trace!(%category, ?decision, "evaluated skip condition");
    decision
}
