use std::{borrow::Cow, collections::BTreeMap, env};

use crate::config::ConfigLookup;

/// Properties passed as `-Dkey` or `-Dkey=value` command line arguments.
///
/// This is what makes `cargo test -- -DskipE2ETests` work, analogous to the
/// `-DskipTests` switch of other build tools. A bare `-Dkey` has the empty
/// string as value, which asserts the key. If a key is given more than once,
/// the last occurrence wins. Arguments that do not start with `-D` are
/// ignored, so the full argument list of a test binary can be passed in.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PropertyArgs {
    properties: BTreeMap<String, String>,
}

impl PropertyArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the arguments of the current process, skipping the binary name.
    pub fn from_env_args() -> Self {
        Self::parse(
            env::args_os()
                .skip(1)
                .map(|arg| arg.to_string_lossy().into_owned()),
        )
    }

    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut properties = Self::new();
        for arg in args {
            let Some(property) = arg.as_ref().strip_prefix("-D") else {
                continue;
            };

            let (key, value) = property.split_once('=').unwrap_or((property, ""));
            if key.is_empty() {
                tracing::trace!(arg = arg.as_ref(), "ignoring property without key");
                continue;
            }

            properties.insert(key, value);
        }
        properties
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let (key, value) = (key.into(), value.into());
        tracing::trace!(%key, %value, "property set");
        self.properties.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl ConfigLookup for PropertyArgs {
    fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        self.properties.get(key).map(|value| Cow::Borrowed(value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presence_only_flag_asserts() {
        let args = PropertyArgs::parse(["-DskipE2ETests"]);
        assert_eq!(args.get("skipE2ETests").as_deref(), Some(""));
        assert!(args.is_asserted("skipE2ETests"));
    }

    #[test]
    fn explicit_values() {
        let args = PropertyArgs::parse(["-DskipUnitTests=true", "-DskipE2ETests=false"]);
        assert!(args.is_asserted("skipUnitTests"));
        assert!(!args.is_asserted("skipE2ETests"));
        assert_eq!(args.len(), 2);
    }

    #[test]
    fn value_may_contain_equals() {
        let args = PropertyArgs::parse(["-Dsome.key=a=b"]);
        assert_eq!(args.get("some.key").as_deref(), Some("a=b"));
    }

    #[test]
    fn last_occurrence_wins() {
        let args = PropertyArgs::parse(["-DskipTests", "-DskipTests=false"]);
        assert!(!args.is_asserted("skipTests"));
    }

    #[test]
    fn unrelated_arguments_are_ignored() {
        let args = PropertyArgs::parse(["--nocapture", "my_filter", "-D", "-D=true", "-X"]);
        assert!(args.is_empty());
    }
}
