use std::borrow::Cow;

use crate::{
    TestHarness,
    category::Category,
    ignore::NoIgnore,
    panic::NoPanicHandler,
    runner::SequentialRunner,
    test::{Test, TestFn, TestFnHandle},
};

pub struct BuildTest {
    pub func: TestFnHandle,
    pub name: Cow<'static, str>,
    pub category: Category,
}

impl Default for BuildTest {
    fn default() -> Self {
        Self {
            func: TestFnHandle::Static(&|| ()),
            name: Default::default(),
            category: Category::Unit,
        }
    }
}

impl From<BuildTest> for Test {
    fn from(value: BuildTest) -> Self {
        Test::single("", value.category, value.func).with_name(value.name)
    }
}

impl<F> From<F> for TestFnHandle
where
    F: TestFn + Send + Sync + 'static,
{
    fn from(value: F) -> Self {
        TestFnHandle::Owned(Box::new(value))
    }
}

macro_rules! declare_test {
    {$($field:ident: $value:expr),* $(,)?} => {
        $crate::test::Test::from($crate::test_support::BuildTest {
            $($field: From::from($value),)*
            ..($crate::test_support::BuildTest {
                name: concat!(module_path!(), "::", file!(), ":", line!(), ":", column!()).into(),
                ..Default::default()
            })
        })
    };
}

pub(crate) use declare_test;

pub fn harness(tests: &[Test]) -> TestHarness<'_, NoIgnore, NoPanicHandler, SequentialRunner> {
    TestHarness {
        tests,
        ignore: NoIgnore,
        panic_handler: NoPanicHandler,
        runner: SequentialRunner,
    }
}
