use std::fmt;

use serde::{Deserialize, Serialize};

/// A non-fatal inconsistency found while translating a report.
///
/// Serialized as one JSON object per line by `DiagnosticLogger`, tagged by
/// `kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A passed case whose `Results.Name` differs from the case name
    NameMismatch {
        suite: String,
        case: String,
        result_name: String,
    },

    /// Status outside `passed` / `skipped` / `failed`
    UnknownStatus {
        suite: String,
        case: String,
        status: String,
    },

    /// A passed case with no `Results` record
    MissingResult { suite: String, case: String },

    /// A passed case whose `Results` record is incomplete or mistyped
    InvalidResult {
        suite: String,
        case: String,
        reason: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NameMismatch {
                suite,
                case,
                result_name,
            } => write!(
                f,
                "{}/{}: result name '{}' does not match test case name",
                suite, case, result_name
            ),
            Diagnostic::UnknownStatus { suite, case, status } => {
                write!(f, "{}/{}: unknown status '{}'", suite, case, status)
            }
            Diagnostic::MissingResult { suite, case } => {
                write!(f, "{}/{}: passed test case has no results", suite, case)
            }
            Diagnostic::InvalidResult { suite, case, reason } => {
                write!(f, "{}/{}: malformed results ({})", suite, case, reason)
            }
        }
    }
}
