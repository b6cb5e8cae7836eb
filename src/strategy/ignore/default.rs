use crate::{
    config::{ConfigLookup, EnvLookup, Layered, PropertyArgs},
    ignore::TestIgnore,
    skip::SkipDecision,
    test::TestMeta,
};

/// The lookup used by [`DefaultIgnore::default`]: `-D` properties first, then
/// environment variables.
pub type DefaultLookup = Layered<PropertyArgs, EnvLookup>;

/// Skips tests whose category is switched off in a [`ConfigLookup`].
///
/// The lookup is consulted on every call, nothing is cached.
#[derive(Debug, Clone)]
pub struct DefaultIgnore<L = DefaultLookup> {
    lookup: L,
}

impl Default for DefaultIgnore {
    fn default() -> Self {
        Self::new(PropertyArgs::from_env_args().or(EnvLookup))
    }
}

impl<L: ConfigLookup> DefaultIgnore<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }
}

impl<L: ConfigLookup> TestIgnore for DefaultIgnore<L> {
    fn ignore(&self, meta: &TestMeta) -> SkipDecision {
        meta.declaration.evaluate(&self.lookup)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::{category::Category, outcome::TestStatus, skip::SkipCause, test_support::*};

    #[test]
    fn skipping_works() {
        let tests = &[
            declare_test! {name: "unit", category: Category::Unit},
            declare_test! {name: "integration", category: Category::Integration},
            declare_test! {name: "e2e", category: Category::E2E},
        ];

        let report = harness(tests)
            .with_ignore(DefaultIgnore::new(BTreeMap::from([("skipE2ETests", "")])))
            .run()
            .unwrap();

        assert_eq!(report.outcomes.len(), 3);
        assert!(report.outcomes[0].1.passed());
        assert!(report.outcomes[1].1.passed());
        assert_eq!(
            report.outcomes[2].1.status,
            TestStatus::Skipped(SkipCause::Category(Category::E2E))
        );
    }

    #[test]
    fn skip_all_works() {
        let tests = &[
            declare_test! {category: Category::Unit},
            declare_test! {category: Category::Integration},
            declare_test! {category: Category::E2E},
        ];

        let report = harness(tests)
            .with_ignore(DefaultIgnore::new(BTreeMap::from([("skipTests", "true")])))
            .run()
            .unwrap();

        assert!(report.outcomes.iter().all(|(_, outcome)| {
            outcome.status == TestStatus::Skipped(SkipCause::All)
        }));
    }

    #[test]
    fn lookup_is_read_on_every_call() {
        use std::sync::{
            Arc,
            atomic::{AtomicBool, Ordering},
        };

        let switch = Arc::new(AtomicBool::new(false));
        let lookup = {
            let switch = Arc::clone(&switch);
            crate::config::from_fn(move |key| {
                (key == "skipUnitTests" && switch.load(Ordering::SeqCst)).then(String::new)
            })
        };
        let ignore = DefaultIgnore::new(lookup);
        let test = declare_test! {category: Category::Unit};

        assert_eq!(ignore.ignore(&test), SkipDecision::Run);
        switch.store(true, Ordering::SeqCst);
        assert!(ignore.ignore(&test).skip());
    }
}
