use crate::diagnostic::diagnostic::Diagnostic;
use crate::report::junit_model::{
    CaseOutcome, CounterScope, Counts, TestCase, TestSuite, TestSuites,
};
use crate::source::source_model::{Case, Report, ResultRecord, Status, Suite};

// ============================================================================
// Report translation — YAML report tree to JUnit tree
// ============================================================================

/// Result of translating a whole report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub document: TestSuites,

    /// Non-fatal findings, in the order the cases were visited
    pub diagnostics: Vec<Diagnostic>,
}

/// Result of translating one suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteTranslation {
    pub suite: TestSuite,

    /// Everything the suite's cases counted, before `CounterScope` is applied.
    /// This is what the root folds into its own totals.
    pub totals: Counts,

    pub diagnostics: Vec<Diagnostic>,
}

/// Result of translating one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseTranslation {
    pub case: TestCase,
    pub counts: Counts,
    pub diagnostic: Option<Diagnostic>,
}

/// Translate a validated report.
///
/// Each suite is translated independently and its totals folded into the
/// root counters, so the root always equals the sum over all cases.
pub fn translate_report(report: &Report, scope: CounterScope) -> Translation {
    let translated: Vec<SuiteTranslation> = report
        .suites
        .iter()
        .map(|source_suite| translate_suite(source_suite, scope))
        .collect();

    let counts = translated.iter().map(|t| t.totals).sum();
    let mut suites = Vec::with_capacity(translated.len());
    let mut diagnostics = Vec::new();
    for suite_translation in translated {
        diagnostics.extend(suite_translation.diagnostics);
        suites.push(suite_translation.suite);
    }

    Translation {
        document: TestSuites {
            name: report.name.clone(),
            counts,
            suites,
        },
        diagnostics,
    }
}

/// Translate one suite. Counters start from zero for every suite.
pub fn translate_suite(suite: &Suite, scope: CounterScope) -> SuiteTranslation {
    let mut totals = Counts::default();
    let mut cases = Vec::with_capacity(suite.cases.len());
    let mut diagnostics = Vec::new();

    for source_case in &suite.cases {
        let translated = translate_case(&suite.name, source_case);
        totals += translated.counts;
        diagnostics.extend(translated.diagnostic);
        cases.push(translated.case);
    }

    SuiteTranslation {
        suite: TestSuite {
            name: suite.name.clone(),
            counts: scope.suite_view(totals),
            cases,
        },
        totals,
        diagnostics,
    }
}

/// Classify one case by status.
///
/// `suite_name` is only used to locate diagnostics.
pub fn translate_case(suite_name: &str, case: &Case) -> CaseTranslation {
    let mut counts = Counts {
        tests: 1,
        ..Counts::default()
    };
    let mut diagnostic = None;

    let outcome = match &case.status {
        Status::Passed => {
            let mut assertions = None;
            match &case.result {
                ResultRecord::Present(result) => {
                    assertions = Some(result.affirm_count);
                    if result.name != case.name {
                        diagnostic = Some(Diagnostic::NameMismatch {
                            suite: suite_name.to_string(),
                            case: case.name.clone(),
                            result_name: result.name.clone(),
                        });
                    }
                }
                ResultRecord::Missing => {
                    diagnostic = Some(Diagnostic::MissingResult {
                        suite: suite_name.to_string(),
                        case: case.name.clone(),
                    });
                }
                ResultRecord::Malformed(reason) => {
                    diagnostic = Some(Diagnostic::InvalidResult {
                        suite: suite_name.to_string(),
                        case: case.name.clone(),
                        reason: reason.clone(),
                    });
                }
            }
            CaseOutcome::Passed { assertions }
        }
        Status::Skipped => {
            counts.disabled += 1;
            CaseOutcome::Skipped
        }
        Status::Failed => {
            counts.errors += 1;
            CaseOutcome::Failed
        }
        Status::Other(raw) => {
            diagnostic = Some(Diagnostic::UnknownStatus {
                suite: suite_name.to_string(),
                case: case.name.clone(),
                status: raw.clone(),
            });
            CaseOutcome::Unclassified
        }
    };

    CaseTranslation {
        case: TestCase {
            name: case.name.clone(),
            outcome,
        },
        counts,
        diagnostic,
    }
}
