use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

// ============================================================================
// JUnit target tree
// ============================================================================

/// Rollup counters attached to `<testsuites>` and every `<testsuite>`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Counts {
    pub tests: u64,
    pub failures: u64,
    pub errors: u64,
    pub disabled: u64,
}

impl Add for Counts {
    type Output = Counts;

    fn add(self, rhs: Counts) -> Counts {
        Counts {
            tests: self.tests + rhs.tests,
            failures: self.failures + rhs.failures,
            errors: self.errors + rhs.errors,
            disabled: self.disabled + rhs.disabled,
        }
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, rhs: Counts) {
        *self = *self + rhs;
    }
}

impl Sum for Counts {
    fn sum<I: Iterator<Item = Counts>>(iter: I) -> Counts {
        iter.fold(Counts::default(), Add::add)
    }
}

/// Which levels track the `errors` and `disabled` counters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CounterScope {
    /// Every counter at both root and suite level
    #[default]
    Symmetric,

    /// `errors` and `disabled` only at root level; suites report 0 for both
    RootOnly,
}

impl CounterScope {
    /// The counters a suite reports, given everything its cases counted.
    pub fn suite_view(self, totals: Counts) -> Counts {
        match self {
            CounterScope::Symmetric => totals,
            CounterScope::RootOnly => Counts {
                errors: 0,
                disabled: 0,
                ..totals
            },
        }
    }
}

/// `<testsuites>` root element.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestSuites {
    pub name: String,
    pub counts: Counts,
    pub suites: Vec<TestSuite>,
}

/// `<testsuite>` element.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestSuite {
    pub name: String,
    pub counts: Counts,
    pub cases: Vec<TestCase>,
}

/// `<testcase>` element.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestCase {
    pub name: String,
    pub outcome: CaseOutcome,
}

/// What a `<testcase>` carries beyond its name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaseOutcome {
    /// `status="passed"`, plus `assertions` when a result was present
    Passed { assertions: Option<u64> },

    /// `status="skipped"`
    Skipped,

    /// Child `<failure/>` marker
    Failed,

    /// No status-specific attributes
    Unclassified,
}
