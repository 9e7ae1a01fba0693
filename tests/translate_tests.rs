use junit_report::diagnostic::diagnostic::Diagnostic;
use junit_report::report::junit_model::{CaseOutcome, CounterScope, Counts};
use junit_report::source::source_model::{Case, CaseResult, Report, ResultRecord, Status, Suite};
use junit_report::translate::translator::{translate_case, translate_report, translate_suite};
use junit_report::translate_yaml;

// =========================================================================
// Helper builders
// =========================================================================

fn passed(name: &str, affirm_count: u64) -> Case {
    Case {
        name: name.to_string(),
        status: Status::Passed,
        result: ResultRecord::Present(CaseResult {
            name: name.to_string(),
            affirm_count,
        }),
    }
}

fn skipped(name: &str) -> Case {
    Case {
        name: name.to_string(),
        status: Status::Skipped,
        result: ResultRecord::Missing,
    }
}

fn failed(name: &str) -> Case {
    Case {
        name: name.to_string(),
        status: Status::Failed,
        result: ResultRecord::Missing,
    }
}

fn with_status(name: &str, status: &str) -> Case {
    Case {
        name: name.to_string(),
        status: Status::parse(status),
        result: ResultRecord::Missing,
    }
}

fn suite(name: &str, cases: Vec<Case>) -> Suite {
    Suite {
        name: name.to_string(),
        cases,
    }
}

fn report(suites: Vec<Suite>) -> Report {
    Report {
        name: "build".to_string(),
        suites,
    }
}

fn counts(tests: u64, errors: u64, disabled: u64) -> Counts {
    Counts {
        tests,
        failures: 0,
        errors,
        disabled,
    }
}

/// Two suites of two mixed cases each.
fn mixed_report() -> Report {
    report(vec![
        suite("first", vec![passed("a", 2), failed("b")]),
        suite("second", vec![skipped("c"), failed("d")]),
    ])
}

// =========================================================================
// Scenario A — single passed case
// =========================================================================

#[test]
fn passed_case_counts_and_assertions() {
    let translation = translate_report(
        &report(vec![suite("s", vec![passed("c", 3)])]),
        CounterScope::Symmetric,
    );
    let document = &translation.document;

    assert_eq!(document.counts, counts(1, 0, 0));
    assert_eq!(document.suites[0].counts, counts(1, 0, 0));
    assert_eq!(
        document.suites[0].cases[0].outcome,
        CaseOutcome::Passed {
            assertions: Some(3)
        }
    );
    assert!(translation.diagnostics.is_empty());
}

// =========================================================================
// Scenario B — single skipped case
// =========================================================================

#[test]
fn skipped_case_counts_as_disabled() {
    let translation = translate_report(
        &report(vec![suite("s", vec![skipped("c")])]),
        CounterScope::Symmetric,
    );
    let document = &translation.document;

    assert_eq!(document.counts, counts(1, 0, 1));
    assert_eq!(document.suites[0].counts, counts(1, 0, 1));
    assert_eq!(document.suites[0].cases[0].outcome, CaseOutcome::Skipped);
}

// =========================================================================
// Scenario C — single failed case
// =========================================================================

#[test]
fn failed_case_counts_as_error_at_both_levels() {
    let translation = translate_report(
        &report(vec![suite("s", vec![failed("c")])]),
        CounterScope::Symmetric,
    );
    let document = &translation.document;

    assert_eq!(document.suites[0].cases[0].outcome, CaseOutcome::Failed);
    assert_eq!(document.suites[0].counts.errors, 1);
    assert_eq!(document.counts.errors, 1);
    assert_eq!(document.counts.failures, 0);
}

// =========================================================================
// Scenario D — per-suite counters do not leak
// =========================================================================

#[test]
fn suite_counters_are_scoped_and_root_is_the_sum() {
    let translation = translate_report(&mixed_report(), CounterScope::Symmetric);
    let document = &translation.document;

    assert_eq!(document.suites[0].counts, counts(2, 1, 0));
    assert_eq!(document.suites[1].counts, counts(2, 1, 1));
    assert_eq!(document.counts, counts(4, 2, 1));

    let suite_sum: Counts = document.suites.iter().map(|s| s.counts).sum();
    assert_eq!(suite_sum, document.counts);
}

#[test]
fn root_only_scope_keeps_errors_and_disabled_off_suites() {
    let translation = translate_report(&mixed_report(), CounterScope::RootOnly);
    let document = &translation.document;

    assert_eq!(document.suites[0].counts, counts(2, 0, 0));
    assert_eq!(document.suites[1].counts, counts(2, 0, 0));
    assert_eq!(document.counts, counts(4, 2, 1));
}

// =========================================================================
// Scenario E — result name mismatch
// =========================================================================

#[test]
fn name_mismatch_is_a_diagnostic_not_an_error() {
    let mut case = passed("real_name", 5);
    case.result = ResultRecord::Present(CaseResult {
        name: "other_name".into(),
        affirm_count: 5,
    });

    let translation = translate_report(&report(vec![suite("s", vec![case])]), CounterScope::Symmetric);
    let translated = &translation.document.suites[0].cases[0];

    assert_eq!(translated.name, "real_name");
    assert_eq!(
        translated.outcome,
        CaseOutcome::Passed {
            assertions: Some(5)
        }
    );
    assert_eq!(
        translation.diagnostics,
        vec![Diagnostic::NameMismatch {
            suite: "s".into(),
            case: "real_name".into(),
            result_name: "other_name".into(),
        }]
    );
}

// =========================================================================
// Unknown status and missing result
// =========================================================================

#[test]
fn unknown_status_is_unclassified_and_still_counted() {
    let translated = translate_case("s", &with_status("c", "flaky"));

    assert_eq!(translated.case.outcome, CaseOutcome::Unclassified);
    assert_eq!(translated.counts, counts(1, 0, 0));
    assert_eq!(
        translated.diagnostic,
        Some(Diagnostic::UnknownStatus {
            suite: "s".into(),
            case: "c".into(),
            status: "flaky".into(),
        })
    );
}

#[test]
fn passed_without_result_has_no_assertions() {
    let case = Case {
        name: "c".into(),
        status: Status::Passed,
        result: ResultRecord::Missing,
    };
    let translated = translate_case("s", &case);

    assert_eq!(
        translated.case.outcome,
        CaseOutcome::Passed { assertions: None }
    );
    assert_eq!(
        translated.diagnostic,
        Some(Diagnostic::MissingResult {
            suite: "s".into(),
            case: "c".into(),
        })
    );
}

#[test]
fn passed_with_malformed_result_is_a_diagnostic() {
    let case = Case {
        name: "c".into(),
        status: Status::Passed,
        result: ResultRecord::Malformed("missing `AffirmCount`".into()),
    };
    let translated = translate_case("s", &case);

    assert_eq!(
        translated.case.outcome,
        CaseOutcome::Passed { assertions: None }
    );
    assert_eq!(translated.counts, counts(1, 0, 0));
    assert_eq!(
        translated.diagnostic,
        Some(Diagnostic::InvalidResult {
            suite: "s".into(),
            case: "c".into(),
            reason: "missing `AffirmCount`".into(),
        })
    );
}

#[test]
fn result_on_failed_case_is_ignored() {
    let mut case = passed("c", 9);
    case.status = Status::Failed;
    let translated = translate_case("s", &case);

    assert_eq!(translated.case.outcome, CaseOutcome::Failed);
    assert_eq!(translated.diagnostic, None);
}

// =========================================================================
// Structure
// =========================================================================

#[test]
fn every_case_is_translated_in_order() {
    let translation = translate_report(&mixed_report(), CounterScope::Symmetric);
    let names: Vec<&str> = translation
        .document
        .suites
        .iter()
        .flat_map(|s| s.cases.iter())
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["a", "b", "c", "d"]);

    let suite_names: Vec<&str> = translation
        .document
        .suites
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(suite_names, vec!["first", "second"]);
}

#[test]
fn empty_report_has_zero_counts() {
    let translation = translate_report(&report(vec![]), CounterScope::Symmetric);
    assert_eq!(translation.document.name, "build");
    assert_eq!(translation.document.counts, Counts::default());
    assert!(translation.document.suites.is_empty());
}

#[test]
fn translate_suite_totals_ignore_scope() {
    let translated = translate_suite(
        &suite("s", vec![skipped("a"), failed("b"), passed("c", 1)]),
        CounterScope::RootOnly,
    );
    assert_eq!(translated.totals, counts(3, 1, 1));
    assert_eq!(translated.suite.counts, counts(3, 0, 0));
}

#[test]
fn diagnostics_follow_case_order_across_suites() {
    let translation = translate_report(
        &report(vec![
            suite("one", vec![with_status("x", "weird")]),
            suite("two", vec![with_status("y", "odd")]),
        ]),
        CounterScope::Symmetric,
    );
    assert_eq!(
        translation.diagnostics,
        vec![
            Diagnostic::UnknownStatus {
                suite: "one".into(),
                case: "x".into(),
                status: "weird".into(),
            },
            Diagnostic::UnknownStatus {
                suite: "two".into(),
                case: "y".into(),
                status: "odd".into(),
            },
        ]
    );
}

// =========================================================================
// End-to-end from YAML
// =========================================================================

#[test]
fn translate_yaml_fixture() {
    let translation = translate_yaml(
        include_str!("fixtures/nightly.yaml"),
        "nightly.yaml",
        CounterScope::Symmetric,
    )
    .unwrap();

    assert_eq!(translation.document.counts, counts(5, 1, 1));
    assert_eq!(translation.diagnostics.len(), 1);
    assert!(matches!(
        translation.diagnostics[0],
        Diagnostic::UnknownStatus { .. }
    ));
}

#[test]
fn translate_yaml_is_deterministic() {
    let yaml = include_str!("fixtures/nightly.yaml");
    let first = translate_yaml(yaml, "a", CounterScope::Symmetric).unwrap();
    let second = translate_yaml(yaml, "a", CounterScope::Symmetric).unwrap();
    assert_eq!(first, second);
}

#[test]
fn translate_yaml_parse_error_names_origin() {
    let err = translate_yaml("Build: [", "broken.yaml", CounterScope::Symmetric).unwrap_err();
    assert!(err.to_string().contains("broken.yaml"));
}

#[test]
fn translate_yaml_keeps_going_past_bad_records() {
    let yaml = r#"
Build:
  Name: b
TestSuites:
  - Name: s
    TestCases:
      - Name: broken_fail
        Status: failed
        Results:
          Name: broken_fail
      - Name: broken_skip
        Status: skipped
        Results:
          AffirmCount: -1
      - Name: odd_status
        Status: [x]
      - Name: broken_pass
        Status: passed
        Results:
          Name: broken_pass
          AffirmCount: lots
"#;
    let translation = translate_yaml(yaml, "bad-records.yaml", CounterScope::Symmetric).unwrap();
    let cases = &translation.document.suites[0].cases;

    assert_eq!(translation.document.counts, counts(4, 1, 1));
    assert_eq!(cases[0].outcome, CaseOutcome::Failed);
    assert_eq!(cases[1].outcome, CaseOutcome::Skipped);
    assert_eq!(cases[2].outcome, CaseOutcome::Unclassified);
    assert_eq!(cases[3].outcome, CaseOutcome::Passed { assertions: None });

    assert_eq!(translation.diagnostics.len(), 2);
    assert_eq!(
        translation.diagnostics[0],
        Diagnostic::UnknownStatus {
            suite: "s".into(),
            case: "odd_status".into(),
            status: "[\"x\"]".into(),
        }
    );
    assert!(matches!(
        translation.diagnostics[1],
        Diagnostic::InvalidResult { .. }
    ));
}
