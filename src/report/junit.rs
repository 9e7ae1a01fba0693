use std::fmt::Write;

use crate::report::junit_model::{CaseOutcome, Counts, TestCase, TestSuite, TestSuites};

// ============================================================================
// JUnit XML reporter — standard CI integration format
// ============================================================================

const INDENT: &str = "  ";

/// Render the JUnit tree as XML for CI systems (Jenkins, GitHub Actions, GitLab CI).
///
/// Produces:
/// ```xml
/// <?xml version="1.0" encoding="utf-8"?>
/// <testsuites name="nightly" tests="3" failures="0" errors="1" disabled="1">
///   <testsuite name="uart" tests="3" failures="0" errors="1" disabled="1">
///     <testcase name="tx" status="passed" assertions="12"/>
///     <testcase name="rx" status="skipped"/>
///     <testcase name="parity">
///       <failure/>
///     </testcase>
///   </testsuite>
/// </testsuites>
/// ```
///
/// Output depends only on the tree, so rendering the same tree twice gives
/// identical bytes.
pub fn render_junit_xml(document: &TestSuites) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");

    let root_attrs = counted_attrs(&document.name, &document.counts);
    if document.suites.is_empty() {
        push_line(&mut out, 0, &format!("<testsuites{}/>", root_attrs));
        return out;
    }

    push_line(&mut out, 0, &format!("<testsuites{}>", root_attrs));
    for suite in &document.suites {
        render_suite(&mut out, suite);
    }
    push_line(&mut out, 0, "</testsuites>");

    out
}

fn render_suite(out: &mut String, suite: &TestSuite) {
    let attrs = counted_attrs(&suite.name, &suite.counts);
    if suite.cases.is_empty() {
        push_line(out, 1, &format!("<testsuite{}/>", attrs));
        return;
    }

    push_line(out, 1, &format!("<testsuite{}>", attrs));
    for case in &suite.cases {
        render_case(out, case);
    }
    push_line(out, 1, "</testsuite>");
}

fn render_case(out: &mut String, case: &TestCase) {
    let name = escape_xml(&case.name);
    match &case.outcome {
        CaseOutcome::Passed { assertions } => {
            let assertions_attr = assertions
                .map(|n| format!(" assertions=\"{}\"", n))
                .unwrap_or_default();
            push_line(
                out,
                2,
                &format!("<testcase name=\"{}\" status=\"passed\"{}/>", name, assertions_attr),
            );
        }
        CaseOutcome::Skipped => {
            push_line(out, 2, &format!("<testcase name=\"{}\" status=\"skipped\"/>", name));
        }
        CaseOutcome::Failed => {
            push_line(out, 2, &format!("<testcase name=\"{}\">", name));
            push_line(out, 3, "<failure/>");
            push_line(out, 2, "</testcase>");
        }
        CaseOutcome::Unclassified => {
            push_line(out, 2, &format!("<testcase name=\"{}\"/>", name));
        }
    }
}

/// ` name="..." tests="N" failures="N" errors="N" disabled="N"`
fn counted_attrs(name: &str, counts: &Counts) -> String {
    format!(
        " name=\"{}\" tests=\"{}\" failures=\"{}\" errors=\"{}\" disabled=\"{}\"",
        escape_xml(name),
        counts.tests,
        counts.failures,
        counts.errors,
        counts.disabled
    )
}

fn push_line(out: &mut String, depth: usize, line: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", line);
}

/// Escape XML special characters for use inside an attribute value.
///
/// Line breaks and tabs become character references so attribute-value
/// normalization does not turn them into spaces.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
        .replace('\n', "&#10;")
        .replace('\r', "&#13;")
        .replace('\t', "&#9;")
}
