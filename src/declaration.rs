//! Binding tests to categories.
//!
//! A [`Declaration`] is what a test carries to tell a runner what it is: its
//! [`Category`], its [`TestShape`] and, for test groups, an [`ExecutionMode`].
//! There is one binding for every combination of category and shape, so
//! instead of one marker per combination we have a single value built by
//! [`Declaration::single`], [`Declaration::parameterized`] or
//! [`Declaration::group`].
//!
//! Declaring does not evaluate anything. The skip condition for a declaration
//! is computed by [`Declaration::evaluate`] whenever the runner is about to
//! invoke the test.
//!
//! Runners that keep tests under an identifier of their own can use the
//! [`Registry`] to store declarations and answer label, mode and skip queries.

use std::{borrow::Cow, collections::BTreeMap, fmt::Display};

use crate::{
    category::Category,
    config::ConfigLookup,
    skip::{self, SkipDecision},
};

/// The shape of a declared test unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestShape {
    /// A single test function.
    Single,

    /// One test function invoked once per externally generated input.
    Parameterized,

    /// A factory that produces test units at run time.
    Group,
}

impl Display for TestShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TestShape::Single => "test",
            TestShape::Parameterized => "parameterized test",
            TestShape::Group => "test group",
        })
    }
}

/// How the test units produced by a group may be scheduled.
///
/// This is only a hint. It tells the runner the produced units do not depend on
/// each other's order, it does not schedule anything by itself and it has no
/// influence on whether the group is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExecutionMode {
    #[default]
    Sequential,
    Concurrent,
}

impl Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ExecutionMode::Sequential => "Sequential",
            ExecutionMode::Concurrent => "Concurrent",
        })
    }
}

/// The category, shape and execution mode of a test.
///
/// Only groups carry a mode other than [`ExecutionMode::Sequential`]; the
/// constructors make sure of that, and a declaration cannot be changed once
/// it exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Declaration {
    category: Category,
    shape: TestShape,
    mode: ExecutionMode,
}

impl Declaration {
    pub const fn single(category: Category) -> Self {
        Self {
            category,
            shape: TestShape::Single,
            mode: ExecutionMode::Sequential,
        }
    }

    pub const fn parameterized(category: Category) -> Self {
        Self {
            category,
            shape: TestShape::Parameterized,
            mode: ExecutionMode::Sequential,
        }
    }

    pub const fn group(category: Category, mode: ExecutionMode) -> Self {
        Self {
            category,
            shape: TestShape::Group,
            mode,
        }
    }

    pub const fn category(&self) -> Category {
        self.category
    }

    pub const fn shape(&self) -> TestShape {
        self.shape
    }

    pub const fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// The label a runner may group or select by.
    pub const fn label(&self) -> &'static str {
        self.category.name()
    }

    /// Evaluate the skip condition of the bound category.
    pub fn evaluate<L: ConfigLookup + ?Sized>(&self, lookup: &L) -> SkipDecision {
        skip::evaluate(self.category, lookup)
    }
}

impl Display for Declaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.category, self.shape)?;
        if let TestShape::Group = self.shape {
            write!(f, " ({})", self.mode)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeclarationError {
    #[error("{id:?} is already declared as {existing}")]
    AlreadyDeclared { id: String, existing: Declaration },
}

/// Declarations keyed by test identifier.
///
/// Once an identifier is declared its declaration is fixed; declaring it again
/// fails with [`DeclarationError::AlreadyDeclared`]. Queries for identifiers
/// that were never declared return `None`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Registry {
    declarations: BTreeMap<Cow<'static, str>, Declaration>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(
        &mut self,
        id: impl Into<Cow<'static, str>>,
        declaration: Declaration,
    ) -> Result<(), DeclarationError> {
        let id = id.into();
        if let Some(existing) = self.declarations.get(&id) {
            return Err(DeclarationError::AlreadyDeclared {
                id: id.into_owned(),
                existing: *existing,
            });
        }

        tracing::trace!(%id, %declaration, "declared");
        self.declarations.insert(id, declaration);
        Ok(())
    }

    pub fn declaration(&self, id: &str) -> Option<&Declaration> {
        self.declarations.get(id)
    }

    pub fn label(&self, id: &str) -> Option<&'static str> {
        self.declaration(id).map(Declaration::label)
    }

    pub fn mode(&self, id: &str) -> Option<ExecutionMode> {
        self.declaration(id).map(Declaration::mode)
    }

    /// Evaluate the skip condition for `id` against `lookup`.
    pub fn evaluate<L: ConfigLookup + ?Sized>(&self, id: &str, lookup: &L) -> Option<SkipDecision> {
        self.declaration(id)
            .map(|declaration| declaration.evaluate(lookup))
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Declaration)> {
        self.declarations
            .iter()
            .map(|(id, declaration)| (id.as_ref(), declaration))
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}
