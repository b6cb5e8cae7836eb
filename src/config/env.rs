use std::{borrow::Cow, env};

use crate::config::ConfigLookup;

/// A [`ConfigLookup`] reading environment variables.
///
/// Every call to [`get`](ConfigLookup::get) reads the environment again, so a
/// value changed between two tests is picked up by the second one. Values that
/// are not valid UTF-8 are converted lossily, which means they never assert a
/// key.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EnvLookup;

impl ConfigLookup for EnvLookup {
    fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        // No variable can have such a name.
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }

        env::var_os(key).map(|value| Cow::Owned(value.to_string_lossy().into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_current_environment() {
        const KEY: &str = "KITAG_ENV_LOOKUP_READS_CURRENT_ENVIRONMENT";

        assert_eq!(EnvLookup.get(KEY), None);

        // SAFETY: the key is unique to this test, nothing else reads or writes it.
        unsafe { env::set_var(KEY, "") };
        assert!(EnvLookup.is_asserted(KEY));

        // SAFETY: see above.
        unsafe { env::set_var(KEY, "false") };
        assert!(!EnvLookup.is_asserted(KEY));

        // SAFETY: see above.
        unsafe { env::remove_var(KEY) };
        assert!(!EnvLookup.is_asserted(KEY));
    }

    #[test]
    fn unrepresentable_keys_are_absent() {
        assert_eq!(EnvLookup.get(""), None);
        assert_eq!(EnvLookup.get("skip=Tests"), None);
        assert_eq!(EnvLookup.get("skip\0Tests"), None);
    }
}
