//! Test categories and the configuration keys that gate them.
//!
//! Every declared test belongs to exactly one [`Category`]. The category name
//! is used twice: as the label a runner can group or select by, and as the
//! infix of the key that skips the category (`skip<Name>Tests`).
//!
//! On top of the per-category keys there is one global key,
//! [`SKIP_ALL_KEY`], which skips every category at once.

use std::{fmt::Display, str::FromStr};

/// Key that skips every test, regardless of its category.
pub const SKIP_ALL_KEY: &str = "skipTests";

/// The kind of a test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Small, isolated tests of a single unit.
    Unit,

    /// Tests that exercise several components together.
    Integration,

    /// End-to-end tests that go through the actual system border.
    ///
    /// These are the usual candidates for skipping, since they tend to be slow
    /// or need an environment that is not always available.
    E2E,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 3] = [Category::Unit, Category::Integration, Category::E2E];

    /// The short label of this category.
    pub const fn name(self) -> &'static str {
        match self {
            Category::Unit => "Unit",
            Category::Integration => "Integration",
            Category::E2E => "E2E",
        }
    }

    /// The key that skips only this category.
    ///
    /// Always `"skip" + name + "Tests"`.
    pub const fn skip_key(self) -> &'static str {
        match self {
            Category::Unit => "skipUnitTests",
            Category::Integration => "skipIntegrationTests",
            Category::E2E => "skipE2ETests",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string is not the label of any [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown test category {0:?}, expected one of Unit, Integration or E2E")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}
