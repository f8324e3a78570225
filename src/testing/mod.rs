//! Startup self-test
//!
//! The firmware runs these checks once at boot and prints the results on the
//! console, so a misconfigured adapter is spotted before the host sees it.

use crate::config::{AdapterConfig, ConfigError, Profile, ProfileGuard};
use ufmt::{uWrite, uwrite};

pub trait TestCase {
    fn run(&self) -> TestResult;
    fn name(&self) -> &'static str;
}

#[derive(Debug, PartialEq)]
pub enum TestResult {
    Pass,
    Fail(TestError),
}

#[derive(Debug, PartialEq)]
pub enum TestError {
    AssertionFailed(&'static str),
    Config(ConfigError),
}

impl TestError {
    fn describe(&self) -> &'static str {
        match self {
            TestError::AssertionFailed(what) => *what,
            TestError::Config(ConfigError::DefinitionConflict { .. }) => "definition conflict",
            TestError::Config(ConfigError::InvalidGroupStart(_)) => "invalid hardware group start",
            TestError::Config(ConfigError::InvalidGroupEnd(_)) => "invalid hardware group end",
            TestError::Config(ConfigError::PartialGroup { .. }) => "only one hardware group bound set",
            TestError::Config(ConfigError::GroupLocked) => "hardware group locked",
            TestError::Config(ConfigError::AmbiguousForce) => "both IF1 and QL forced",
        }
    }
}

macro_rules! check_eq {
    ($left:expr, $right:expr) => {
        if $left != $right {
            return TestResult::Fail(TestError::AssertionFailed(concat!(
                "`",
                stringify!($left),
                " == ",
                stringify!($right),
                "`"
            )));
        }
    };
}

pub struct TestRunner<W> {
    console: W,
    total_tests: u8,
    passed_tests: u8,
}

impl<W: uWrite> TestRunner<W> {
    pub fn new(console: W) -> Self {
        Self {
            console,
            total_tests: 0,
            passed_tests: 0,
        }
    }

    pub fn run_suite(&mut self, name: &str, tests: &[&dyn TestCase]) -> Result<(), W::Error> {
        uwrite!(self.console, "=== Self test: {} ===\r\n", name)?;

        for test in tests {
            self.total_tests += 1;
            uwrite!(self.console, "{}: ", test.name())?;

            match test.run() {
                TestResult::Pass => {
                    self.passed_tests += 1;
                    uwrite!(self.console, "PASS\r\n")?;
                }
                TestResult::Fail(err) => {
                    uwrite!(self.console, "FAIL - {}\r\n", err.describe())?;
                }
            }
        }

        uwrite!(
            self.console,
            "Passed: {}/{}\r\n",
            self.passed_tests,
            self.total_tests
        )
    }

    pub fn all_passed(&self) -> bool {
        self.passed_tests == self.total_tests
    }

    pub fn free(self) -> W {
        self.console
    }
}

/// Option combinations of the profile make sense
pub struct ProfileCheck(pub AdapterConfig);

impl TestCase for ProfileCheck {
    fn name(&self) -> &'static str {
        "Profile options"
    }

    fn run(&self) -> TestResult {
        match self.0.check() {
            Ok(()) => TestResult::Pass,
            Err(err) => TestResult::Fail(TestError::Config(err)),
        }
    }
}

/// Profile binds once, again without change, and refuses a second source
pub struct GuardCheck(pub Profile);

impl TestCase for GuardCheck {
    fn name(&self) -> &'static str {
        "Profile guard"
    }

    fn run(&self) -> TestResult {
        let other = match self.0 {
            Profile::Example => Profile::Builtin,
            Profile::Builtin => Profile::Example,
        };

        let mut guard = ProfileGuard::new();
        let first = match guard.bind(self.0) {
            Ok(config) => config,
            Err(err) => return TestResult::Fail(TestError::Config(err)),
        };
        check_eq!(guard.bind(self.0), Ok(first));
        check_eq!(
            guard.bind(other),
            Err(ConfigError::DefinitionConflict {
                bound: self.0,
                requested: other,
            })
        );
        check_eq!(guard.config(), Some(self.0.config()));

        TestResult::Pass
    }
}
