use crate::diagnostic::diagnostic::Diagnostic;
use crate::report::junit_model::{CaseOutcome, Counts, TestSuites};

// ============================================================================
// Console reporter — run summary for the terminal
// ============================================================================

/// Format a translated report as a short terminal summary.
///
/// Produces output like:
/// ```text
/// === Report: nightly ===
///
/// uart: 3 tests, 0 failures, 1 errors, 1 disabled
///     ✗ parity
///
/// 1 diagnostic(s):
///     [WARN] uart/crc: unknown status 'flaky'
///
/// === Totals: 3 tests, 0 failures, 1 errors, 1 disabled ===
/// ```
pub fn format_summary(document: &TestSuites, diagnostics: &[Diagnostic]) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Report: {} ===\n\n", document.name));

    for suite in &document.suites {
        out.push_str(&format!("{}: {}\n", suite.name, format_counts(&suite.counts)));

        // Only failed cases are listed
        for case in &suite.cases {
            if matches!(case.outcome, CaseOutcome::Failed) {
                out.push_str(&format!("    \u{2717} {}\n", case.name));
            }
        }
    }

    if !diagnostics.is_empty() {
        out.push_str(&format!("\n{} diagnostic(s):\n", diagnostics.len()));
        for diagnostic in diagnostics {
            out.push_str(&format!("    [WARN] {}\n", diagnostic));
        }
    }

    out.push_str(&format!(
        "\n=== Totals: {} ===\n",
        format_counts(&document.counts)
    ));

    out
}

fn format_counts(counts: &Counts) -> String {
    format!(
        "{} tests, {} failures, {} errors, {} disabled",
        counts.tests, counts.failures, counts.errors, counts.disabled
    )
}
