//! Comparator tests: template matching, wildcards, duplicate policies,
//! the legacy count check, and expectation files.

#![allow(deprecated)]

mod common;

use diagcheck_core::{BaselineStatus, DiagnosticCategory, DuplicatePolicy, ErrorCode, FileId};
use diagcheck_harness::comparator::{compare, compare_category, ProjectedDiagnostic};
use diagcheck_harness::{
    classify, validate_result_counts, validate_results, validate_results_with, ExpectedCounts,
    ExpectedResult, ExpectedResults, FileAnalysisResult, HarnessError, Match,
};

use common::{diag, mixed_diagnostics, undefined_x, UNDEFINED_X};

fn undefined_name_results() -> Vec<FileAnalysisResult> {
    vec![classify(FileId::new("undefined_name.py"), None, vec![undefined_x()])]
}

fn mixed_results() -> Vec<FileAnalysisResult> {
    vec![classify(FileId::new("mixed.py"), None, mixed_diagnostics())]
}

fn mixed_expected() -> ExpectedResults {
    ExpectedResults::new()
        .errors([ExpectedResult::at_line(7).rule("reportAssignmentType")])
        .warnings([ExpectedResult::at_line(1)
            .message("Import \"sys\" is not accessed")
            .baseline_status(BaselineStatus::BaselinedWithHint)])
        .infos([ExpectedResult::at_line(7)])
        .unused_codes([ExpectedResult::at_line(0).rule("reportUnusedImport")])
        .unreachable_codes([ExpectedResult::at_line(5).message("Code is unreachable")])
}

// ---- Scenarios ----

#[test]
fn legacy_counts_pass_for_single_error() {
    validate_result_counts(&undefined_name_results(), &ExpectedCounts::errors(1).warnings(0))
        .unwrap();
}

#[test]
fn line_only_template_matches() {
    let expected = ExpectedResults::new().errors([ExpectedResult::at_line(3)]);
    validate_results(&undefined_name_results(), &expected).unwrap();
}

#[test]
fn wrong_message_reports_both_sides() {
    let expected = ExpectedResults::new().errors([ExpectedResult::at_line(3).message("wrong text")]);
    let err = validate_results(&undefined_name_results(), &expected).unwrap_err();
    assert_eq!(err.error_code(), "RESULTS_MISMATCH");

    let report = err.report().unwrap();
    assert_eq!(report.mismatches.len(), 1);
    let mismatch = report.mismatch(DiagnosticCategory::Error).unwrap();
    assert_eq!(mismatch.unmatched_actual.len(), 1);
    assert_eq!(mismatch.unmatched_actual[0].message, UNDEFINED_X);
    assert_eq!(mismatch.unmatched_expected, vec![ExpectedResult::at_line(3).message("wrong text")]);
}

#[test]
fn clean_file_passes_against_empty_expectations() {
    let results = vec![classify::<()>(FileId::new("clean.py"), None, vec![])];
    validate_results(&results, &ExpectedResults::new()).unwrap();
}

// ---- Field matching ----

#[test]
fn every_specified_field_must_match() {
    let full = ExpectedResult::at_line(3)
        .message(UNDEFINED_X)
        .rule("reportUndefinedVariable");
    validate_results(&undefined_name_results(), &ExpectedResults::new().errors([full])).unwrap();

    let wrong_rule = ExpectedResult::at_line(3).rule("reportAttributeAccessIssue");
    assert!(validate_results(&undefined_name_results(), &ExpectedResults::new().errors([wrong_rule])).is_err());

    let wrong_line = ExpectedResult::at_line(4);
    assert!(validate_results(&undefined_name_results(), &ExpectedResults::new().errors([wrong_line])).is_err());
}

#[test]
fn required_baseline_status_rejects_unbaselined_diagnostic() {
    let expected = ExpectedResults::new()
        .errors([ExpectedResult::at_line(3).baseline_status(BaselineStatus::Baselined)]);
    assert!(validate_results(&undefined_name_results(), &expected).is_err());
}

#[test]
fn all_six_categories_are_checked() {
    validate_results(&mixed_results(), &mixed_expected()).unwrap();
}

#[test]
fn omitted_category_expects_nothing() {
    let expected = mixed_expected().infos([]);
    let err = validate_results(&mixed_results(), &expected).unwrap_err();
    let report = err.report().unwrap();
    assert_eq!(report.mismatches.len(), 1);
    assert_eq!(report.mismatches[0].category, DiagnosticCategory::Information);
    assert_eq!(report.unmatched_actual_count(), 1);
    assert_eq!(report.unmatched_expected_count(), 0);
}

#[test]
fn category_is_not_part_of_the_match() {
    // Right line and message, wrong bucket.
    let expected = ExpectedResults::new().warnings([ExpectedResult::at_line(3)]);
    let err = validate_results(&undefined_name_results(), &expected).unwrap_err();
    let report = err.report().unwrap();
    assert!(report.mismatch(DiagnosticCategory::Error).is_some());
    assert!(report.mismatch(DiagnosticCategory::Warning).is_some());
}

#[test]
fn template_order_does_not_matter() {
    let diagnostics = vec![
        diag(DiagnosticCategory::Error, "a", 1),
        diag(DiagnosticCategory::Error, "b", 2),
        diag(DiagnosticCategory::Error, "c", 3),
    ];
    let results = vec![classify::<()>(FileId::new("abc.py"), None, diagnostics)];
    let forward = [
        ExpectedResult::at_line(1).message("a"),
        ExpectedResult::at_line(2),
        ExpectedResult::at_line(3).message("c"),
    ];
    let mut backward = forward.clone();
    backward.reverse();

    validate_results(&results, &ExpectedResults::new().errors(forward)).unwrap();
    validate_results(&results, &ExpectedResults::new().errors(backward)).unwrap();
}

fn two_errors_on_line_four() -> Vec<FileAnalysisResult> {
    let diagnostics = vec![
        diag(DiagnosticCategory::Error, "first", 4),
        diag(DiagnosticCategory::Error, "second", 4),
    ];
    vec![classify(FileId::new("line4.py"), None, diagnostics)]
}

#[test]
fn one_wildcard_template_does_not_cover_two_distinct_diagnostics() {
    let err = validate_results(
        &two_errors_on_line_four(),
        &ExpectedResults::new().errors([ExpectedResult::at_line(4)]),
    )
    .unwrap_err();

    let mismatch = err.report().unwrap().mismatch(DiagnosticCategory::Error).unwrap();
    assert_eq!(mismatch.unmatched_actual.len(), 1);
    assert!(mismatch.unmatched_expected.is_empty());
}

#[test]
fn repeated_wildcards_collapse_and_still_fall_short() {
    let expected = ExpectedResults::new().errors([
        ExpectedResult::at_line(4),
        ExpectedResult::at_line(4),
        ExpectedResult::at_line(4),
    ]);
    assert!(validate_results(&two_errors_on_line_four(), &expected).is_err());
}

#[test]
fn surplus_distinct_templates_are_reported_as_missing() {
    let expected = ExpectedResults::new().errors([
        ExpectedResult::at_line(4),
        ExpectedResult::at_line(4).message("first"),
        ExpectedResult::at_line(4).message("second"),
    ]);
    let err = validate_results(&two_errors_on_line_four(), &expected).unwrap_err();

    let mismatch = err.report().unwrap().mismatch(DiagnosticCategory::Error).unwrap();
    assert!(mismatch.unmatched_actual.is_empty());
    assert_eq!(mismatch.unmatched_expected.len(), 1);
}

#[test]
fn one_template_per_distinct_diagnostic_passes() {
    let expected = ExpectedResults::new().errors([
        ExpectedResult::at_line(4).message("first"),
        ExpectedResult::at_line(4),
    ]);
    validate_results(&two_errors_on_line_four(), &expected).unwrap();
}

// ---- Duplicates ----

fn duplicated_results() -> Vec<FileAnalysisResult> {
    vec![classify(
        FileId::new("dup.py"),
        None,
        vec![undefined_x(), undefined_x()],
    )]
}

#[test]
fn set_policy_collapses_identical_diagnostics() {
    let expected = ExpectedResults::new().errors([ExpectedResult::at_line(3)]);
    validate_results(&duplicated_results(), &expected).unwrap();

    let doubled = ExpectedResults::new().errors([ExpectedResult::at_line(3), ExpectedResult::at_line(3)]);
    validate_results(&duplicated_results(), &doubled).unwrap();
}

#[test]
fn multiset_policy_counts_occurrences() {
    let single = ExpectedResults::new().errors([ExpectedResult::at_line(3)]);
    let err = validate_results_with(&duplicated_results(), &single, DuplicatePolicy::Multiset).unwrap_err();
    let mismatch = err.report().unwrap().mismatch(DiagnosticCategory::Error).unwrap().clone();
    assert_eq!(mismatch.unmatched_actual.len(), 1);
    assert!(mismatch.unmatched_expected.is_empty());

    let doubled = ExpectedResults::new().errors([ExpectedResult::at_line(3), ExpectedResult::at_line(3)]);
    validate_results_with(&duplicated_results(), &doubled, DuplicatePolicy::Multiset).unwrap();
}

#[test]
fn multiset_policy_finds_a_pairing_when_greedy_would_fail() {
    let actual = vec![
        diag(DiagnosticCategory::Error, "specific", 2),
        diag(DiagnosticCategory::Error, "other", 2),
    ];
    // The wildcard could take "specific", leaving the exact template without a partner.
    let expected = vec![
        ExpectedResult::at_line(2),
        ExpectedResult::at_line(2).message("specific"),
    ];
    assert!(compare_category(DiagnosticCategory::Error, &actual, &expected, DuplicatePolicy::Multiset).is_none());
}

#[test]
fn extra_template_is_unmatched_under_multiset() {
    let expected = ExpectedResults::new().errors([
        ExpectedResult::at_line(3),
        ExpectedResult::at_line(3),
        ExpectedResult::at_line(3),
    ]);
    let report = compare(&duplicated_results()[0], &expected, DuplicatePolicy::Multiset);
    assert_eq!(report.unmatched_expected_count(), 1);
    assert_eq!(report.unmatched_actual_count(), 0);
}

// ---- Single-file contract ----

#[test]
fn zero_results_are_rejected() {
    let results: Vec<FileAnalysisResult> = vec![];
    let err = validate_results(&results, &ExpectedResults::new()).unwrap_err();
    assert!(matches!(err, HarnessError::ExpectedSingleFile { actual: 0 }));

    let err = validate_result_counts(&results, &ExpectedCounts::default()).unwrap_err();
    assert!(matches!(err, HarnessError::ExpectedSingleFile { actual: 0 }));
}

#[test]
fn two_results_are_rejected_before_matching() {
    let mut results = undefined_name_results();
    results.extend(mixed_results());
    // These expectations would mismatch; the contract check must win.
    let expected = ExpectedResults::new().errors([ExpectedResult::at_line(99)]);
    let err = validate_results(&results, &expected).unwrap_err();
    assert!(matches!(err, HarnessError::ExpectedSingleFile { actual: 2 }));
    assert_eq!(err.error_code(), "EXPECTED_SINGLE_FILE");
}

// ---- Legacy counts ----

#[test]
fn legacy_counts_report_first_differing_bucket() {
    let err = validate_result_counts(&mixed_results(), &ExpectedCounts::errors(1).warnings(2)).unwrap_err();
    match err {
        HarnessError::CountMismatch { category, expected, actual } => {
            assert_eq!(category, DiagnosticCategory::Warning);
            assert_eq!(expected, 2);
            assert_eq!(actual, 1);
        }
        other => panic!("expected CountMismatch, got {other:?}"),
    }
}

#[test]
fn legacy_counts_skip_unspecified_buckets() {
    // mixed.py has one info, one unused, one unreachable; none are checked here.
    validate_result_counts(&mixed_results(), &ExpectedCounts::errors(1).warnings(1)).unwrap();

    let err = validate_result_counts(
        &mixed_results(),
        &ExpectedCounts::errors(1).warnings(1).unreachable_codes(0),
    )
    .unwrap_err();
    assert_eq!(err.error_code(), "COUNT_MISMATCH");
}

#[test]
fn legacy_counts_ignore_content() {
    let all = ExpectedCounts::errors(1)
        .warnings(1)
        .infos(1)
        .unused_codes(1)
        .unreachable_codes(1)
        .deprecateds(0);
    validate_result_counts(&mixed_results(), &all).unwrap();
}

// ---- Reporting ----

#[test]
fn report_display_names_both_sides() {
    let expected = ExpectedResults::new().errors([ExpectedResult::at_line(3).message("wrong text")]);
    let err = validate_results(&undefined_name_results(), &expected).unwrap_err();
    let text = err.to_string();
    assert!(text.contains("undefined_name.py"));
    assert!(text.contains("errors:"));
    assert!(text.contains("unexpected line 3: \"undefined name 'x'\" (reportUndefinedVariable)"));
    assert!(text.contains("missing    line 3: \"wrong text\""));
}

#[test]
fn projection_keeps_only_compared_fields() {
    let projected = ProjectedDiagnostic::from(&undefined_x());
    assert_eq!(projected.line, 3);
    assert_eq!(projected.message, UNDEFINED_X);
    assert_eq!(projected.rule.as_ref().map(|r| r.as_str()), Some("reportUndefinedVariable"));
    assert_eq!(projected.baseline_status, None);
}

// ---- Expectation files ----

#[test]
fn expectations_load_from_toml() {
    let expected = ExpectedResults::from_toml(
        r#"
        errors = [{ line = 3, code = "reportUndefinedVariable" }]
        warnings = [{ line = 1, message = "Import \"sys\" is not accessed", baseline_status = "baselined_with_hint" }]
        "#,
    )
    .unwrap();

    assert_eq!(expected.errors, vec![ExpectedResult::at_line(3).rule("reportUndefinedVariable")]);
    assert_eq!(expected.warnings[0].baseline_status, Match::Exactly(BaselineStatus::BaselinedWithHint));
    assert!(expected.infos.is_empty());
    validate_results(&undefined_name_results(), &ExpectedResults { warnings: vec![], ..expected }).unwrap();
}

#[test]
fn expectations_load_from_json() {
    let expected = ExpectedResults::from_json(r#"{ "errors": [{ "line": 3 }] }"#).unwrap();
    assert_eq!(expected.errors[0].message, Match::Any);
    validate_results(&undefined_name_results(), &expected).unwrap();
}

#[test]
fn unknown_bucket_in_expectations_is_rejected() {
    let err = ExpectedResults::from_toml("hints = [{ line = 1 }]").unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn expectations_file_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("undefined_name.expected.json");
    let expected = ExpectedResults::new().errors([ExpectedResult::at_line(3).message(UNDEFINED_X)]);
    std::fs::write(&path, serde_json::to_string(&expected).unwrap()).unwrap();

    assert_eq!(ExpectedResults::load(&path).unwrap(), expected);
}
