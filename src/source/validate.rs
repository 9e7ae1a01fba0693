use serde_yaml::Value;

use crate::error::ConvertError;
use crate::source::source_model::{
    Case, CaseResult, RawCase, RawReport, RawResults, RawSuite, Report, ResultRecord, Status,
    Suite,
};

// ============================================================================
// Pre-validation pass — wire model to checked model
// ============================================================================

/// Check every required field and build the checked `Report`.
///
/// Fails on the first missing (or null) required key, reporting its path,
/// e.g. `TestSuites[1].TestCases[0].Status`. A malformed `Results` record is
/// kept as `ResultRecord::Malformed` for the translator to report.
pub fn validate_report(raw: RawReport) -> Result<Report, ConvertError> {
    let build = raw.build.ok_or_else(|| missing("Build"))?;
    let name = build.name.ok_or_else(|| missing("Build.Name"))?;
    let raw_suites = raw.test_suites.ok_or_else(|| missing("TestSuites"))?;

    let suites = raw_suites
        .into_iter()
        .enumerate()
        .map(|(index, suite)| validate_suite(suite, &format!("TestSuites[{}]", index)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Report { name, suites })
}

fn validate_suite(raw: RawSuite, path: &str) -> Result<Suite, ConvertError> {
    let name = raw.name.ok_or_else(|| missing(format!("{}.Name", path)))?;
    let raw_cases = raw
        .test_cases
        .ok_or_else(|| missing(format!("{}.TestCases", path)))?;

    let cases = raw_cases
        .into_iter()
        .enumerate()
        .map(|(index, case)| validate_case(case, &format!("{}.TestCases[{}]", path, index)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Suite { name, cases })
}

fn validate_case(raw: RawCase, path: &str) -> Result<Case, ConvertError> {
    let name = raw.name.ok_or_else(|| missing(format!("{}.Name", path)))?;
    let status = raw
        .status
        .as_ref()
        .map(Status::from_value)
        .ok_or_else(|| missing(format!("{}.Status", path)))?;

    // Results only matter for passed cases and never fail the report
    let result = match (&status, raw.results) {
        (Status::Passed, Some(results)) => decode_results(results),
        _ => ResultRecord::Missing,
    };

    Ok(Case {
        name,
        status,
        result,
    })
}

fn decode_results(value: Value) -> ResultRecord {
    let raw: RawResults = match serde_yaml::from_value(value) {
        Ok(raw) => raw,
        Err(e) => return ResultRecord::Malformed(e.to_string()),
    };

    match (raw.name, raw.affirm_count) {
        (Some(name), Some(affirm_count)) => ResultRecord::Present(CaseResult { name, affirm_count }),
        (None, _) => ResultRecord::Malformed("missing `Name`".to_string()),
        (_, None) => ResultRecord::Malformed("missing `AffirmCount`".to_string()),
    }
}

fn missing(path: impl Into<String>) -> ConvertError {
    ConvertError::MissingField { path: path.into() }
}
