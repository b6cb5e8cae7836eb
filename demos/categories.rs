//! Run with `cargo run --example categories -- -DskipE2ETests` to skip the
//! end-to-end tests, or pass `--list` to only print what would run.

use std::{env, thread, time::Duration};

use kitag::{
    TestReport,
    category::Category,
    declaration::{DeclarationError, ExecutionMode},
    skip::SkipDecision,
    test::{DynamicTest, Test, TestFnHandle},
};
use tracing_subscriber::EnvFilter;

#[linkme::distributed_slice]
pub static TESTS: [Test];

fn parse_numbers() {
    let numbers: Vec<u32> = "1,2,3".split(',').map(|n| n.parse().unwrap()).collect();
    assert_eq!(numbers, [1, 2, 3]);
}

#[linkme::distributed_slice(TESTS)]
static PARSE_NUMBERS: Test = Test::single(
    "parse_numbers",
    Category::Unit,
    TestFnHandle::from_static_obj(&|| parse_numbers()),
);

fn word_lengths() -> Vec<DynamicTest> {
    ["kit", "tag", "category"]
        .into_iter()
        .map(|word| {
            DynamicTest::new(word, move || match word.chars().count() == word.len() {
                true => Ok(()),
                false => Err(format!("{word} is not ascii")),
            })
        })
        .collect()
}

#[linkme::distributed_slice(TESTS)]
static WORD_LENGTHS: Test = Test::parameterized("word_lengths", Category::Unit, word_lengths);

fn temp_dir_roundtrip() {
    let path = env::temp_dir().join("kitag-demo.txt");
    std::fs::write(&path, "kitag").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "kitag");
    std::fs::remove_file(path).unwrap();
}

#[linkme::distributed_slice(TESTS)]
static TEMP_DIR_ROUNDTRIP: Test = Test::single(
    "temp_dir_roundtrip",
    Category::Integration,
    TestFnHandle::from_static_obj(&|| temp_dir_roundtrip()),
);

fn slow_endpoints() -> Vec<DynamicTest> {
    ["login", "search", "checkout", "logout"]
        .into_iter()
        .map(|endpoint| {
            DynamicTest::new(endpoint, || thread::sleep(Duration::from_millis(200)))
        })
        .collect()
}

#[linkme::distributed_slice(TESTS)]
static ENDPOINTS: Test = Test::group(
    "endpoints",
    Category::E2E,
    ExecutionMode::Concurrent,
    slow_endpoints,
);

fn main() -> Result<TestReport, DeclarationError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if env::args().any(|arg| arg == "--list") {
        for listed in kitag::harness(&TESTS).list()? {
            let decision = match listed.decision {
                SkipDecision::Run => String::from("run"),
                SkipDecision::Skip(cause) => format!("skip ({cause})"),
            };
            println!("{}: {} [{decision}]", listed.name, listed.declaration);
        }
        return Ok(TestReport::default());
    }

    kitag::harness(&TESTS).run()
}
