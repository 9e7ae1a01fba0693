use serde::Deserialize;
use serde_yaml::Value;

// ============================================================================
// Wire model — the YAML report exactly as it arrives
// ============================================================================

/// Top-level YAML report document.
///
/// Every field is optional so that a missing key surfaces as a
/// `MissingField` from the validation pass instead of an opaque serde error.
/// Keys we do not use (timings, build info, ...) are ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct RawReport {
    pub build: Option<RawBuild>,
    pub test_suites: Option<Vec<RawSuite>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct RawBuild {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct RawSuite {
    pub name: Option<String>,
    pub test_cases: Option<Vec<RawCase>>,
}

/// A case as written. `Status` and `Results` stay untyped here: a bad value
/// in either one is a per-case problem, not a reason to reject the report.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct RawCase {
    pub name: Option<String>,
    pub status: Option<Value>,
    pub results: Option<Value>,
}

/// Typed view of a `Results` mapping, decoded from `RawCase::results`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct RawResults {
    pub name: Option<String>,
    pub affirm_count: Option<u64>,
}

// ============================================================================
// Checked model — produced by `validate_report`
// ============================================================================

/// A validated report: a build name and its suites, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub name: String,
    pub suites: Vec<Suite>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suite {
    pub name: String,
    pub cases: Vec<Case>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub name: String,
    pub status: Status,

    /// Result record; only meaningful for passed cases
    pub result: ResultRecord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseResult {
    pub name: String,
    pub affirm_count: u64,
}

/// What the `Results` key of a case held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultRecord {
    /// No `Results` key, or `Results: null`
    Missing,

    /// `Name` and a non-negative `AffirmCount`
    Present(CaseResult),

    /// Present but unusable; carries the reason
    Malformed(String),
}

/// Terminal status of a case.
///
/// Matching is exact and case-sensitive; anything else is kept verbatim in
/// `Other` so it can be reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Passed,
    Skipped,
    Failed,
    Other(String),
}

impl Status {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "passed" => Status::Passed,
            "skipped" => Status::Skipped,
            "failed" => Status::Failed,
            other => Status::Other(other.to_string()),
        }
    }

    /// Classify any YAML value. Non-string values (`123`, `[x]`, ...) are
    /// rendered as compact JSON into `Other`.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(raw) => Status::parse(raw),
            other => Status::Other(
                serde_json::to_string(other).unwrap_or_else(|_| format!("{:?}", other)),
            ),
        }
    }
}

/// Parse YAML text into the wire model.
pub fn parse_report(yaml: &str) -> Result<RawReport, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}
