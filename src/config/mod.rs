//! Read-only configuration sources for skip flags.
//!
//! The skip evaluator never reads process state by itself. Instead it gets a
//! [`ConfigLookup`], a plain `key -> Option<value>` capability. This keeps the
//! evaluation pure and lets us decide per run (or per test) where flags come
//! from:
//! - [`EnvLookup`] reads environment variables
//! - [`PropertyArgs`] reads `-Dkey` and `-Dkey=value` command line arguments
//! - maps, [`from_fn`] closures and [`NoConfig`] are handy in tests
//!
//! Sources can be stacked with [`ConfigLookup::or`].

use std::{
    borrow::{Borrow, Cow},
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
    sync::Arc,
};

mod env;
pub use env::*;

mod args;
pub use args::*;

/// The value that asserts a key, besides the empty string.
pub const TRUE_TOKEN: &str = "true";

/// Whether a present configuration value asserts its key.
///
/// A value asserts if it is exactly [`TRUE_TOKEN`] or empty. The empty string
/// is what presence-only flags like `-DskipE2ETests` resolve to. Every other
/// value, including `"false"`, `"TRUE"` or `"1"`, does not assert.
pub fn is_asserted_value(value: &str) -> bool {
    value.is_empty() || value == TRUE_TOKEN
}

/// A read-only `key -> value` source.
///
/// Implementations are only ever accessed through `&self`, so a lookup that is
/// [`Sync`] can be shared by any number of threads without synchronization.
pub trait ConfigLookup {
    /// Return the value for `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Option<Cow<'_, str>>;

    /// Whether `key` is present and its value asserts it.
    ///
    /// See [`is_asserted_value`] for the exact rule. An absent key is never
    /// asserted.
    fn is_asserted(&self, key: &str) -> bool {
        self.get(key)
            .is_some_and(|value| is_asserted_value(value.as_ref()))
    }

    /// Stack `fallback` below this lookup.
    ///
    /// The returned lookup answers from `self` if it has the key, otherwise from
    /// `fallback`. A present value shadows the fallback even if it does not
    /// assert the key.
    fn or<Fallback: ConfigLookup>(self, fallback: Fallback) -> Layered<Self, Fallback>
    where
        Self: Sized,
    {
        Layered {
            first: self,
            fallback,
        }
    }
}

/// Two lookups, where the first one wins. Created by [`ConfigLookup::or`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Layered<First, Fallback> {
    pub first: First,
    pub fallback: Fallback,
}

impl<First: ConfigLookup, Fallback: ConfigLookup> ConfigLookup for Layered<First, Fallback> {
    fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        self.first.get(key).or_else(|| self.fallback.get(key))
    }
}

/// A lookup without any keys.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoConfig;

impl ConfigLookup for NoConfig {
    fn get(&self, _: &str) -> Option<Cow<'_, str>> {
        None
    }
}

/// A lookup backed by a closure. Created by [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F>(F);

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FromFn(...)")
    }
}

/// Create a [`ConfigLookup`] from a closure.
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(&str) -> Option<String>,
{
    FromFn(f)
}

impl<F> ConfigLookup for FromFn<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        (self.0)(key).map(Cow::Owned)
    }
}

impl<K, V, S> ConfigLookup for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        HashMap::get(self, key).map(|value| Cow::Borrowed(value.as_ref()))
    }
}

impl<K, V> ConfigLookup for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        BTreeMap::get(self, key).map(|value| Cow::Borrowed(value.as_ref()))
    }
}

impl<L: ConfigLookup + ?Sized> ConfigLookup for &L {
    fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        (**self).get(key)
    }
}

impl<L: ConfigLookup + ?Sized> ConfigLookup for Box<L> {
    fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        (**self).get(key)
    }
}

impl<L: ConfigLookup + ?Sized> ConfigLookup for Arc<L> {
    fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        (**self).get(key)
    }
}
