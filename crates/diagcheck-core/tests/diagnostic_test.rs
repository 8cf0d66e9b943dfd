//! Diagnostic model: names, serde shapes, display.

use diagcheck_core::{BaselineStatus, Diagnostic, DiagnosticCategory, FileId, Range, RuleId};

#[test]
fn categories_have_stable_bucket_names() {
    let buckets: Vec<&str> = DiagnosticCategory::ALL.iter().map(|c| c.bucket_name()).collect();
    assert_eq!(
        buckets,
        vec!["errors", "warnings", "infos", "unused_codes", "unreachable_codes", "deprecateds"]
    );
}

#[test]
fn category_serializes_in_snake_case() {
    let json = serde_json::to_string(&DiagnosticCategory::UnreachableCode).unwrap();
    assert_eq!(json, "\"unreachable_code\"");
    assert_eq!(DiagnosticCategory::UnusedCode.to_string(), "unused_code");
}

#[test]
fn diagnostic_json_omits_absent_fields() {
    let diagnostic = Diagnostic::warning("unused variable", Range::on_line(4, 2, 5));
    let value = serde_json::to_value(&diagnostic).unwrap();

    assert_eq!(value["category"], "warning");
    assert_eq!(value["range"]["start"]["line"], 4);
    assert!(value.get("rule").is_none());
    assert!(value.get("baseline_status").is_none());
}

#[test]
fn diagnostic_reads_back_from_engine_json() {
    let diagnostic: Diagnostic = serde_json::from_str(
        r#"{
            "category": "deprecated",
            "message": "old api",
            "range": { "start": { "line": 9, "column": 0 }, "end": { "line": 9, "column": 3 } },
            "rule": "reportDeprecated",
            "baseline_status": "baselined"
        }"#,
    )
    .unwrap();

    assert_eq!(diagnostic.category, DiagnosticCategory::Deprecated);
    assert_eq!(diagnostic.line(), 9);
    assert_eq!(diagnostic.rule, Some(RuleId::new("reportDeprecated")));
    assert_eq!(diagnostic.baseline_status, Some(BaselineStatus::Baselined));
}

#[test]
fn display_shows_position_category_and_rule() {
    let diagnostic =
        Diagnostic::error("undefined name 'x'", Range::on_line(3, 6, 7)).with_rule("reportUndefinedVariable");
    assert_eq!(
        diagnostic.to_string(),
        "3:6 error: undefined name 'x' (reportUndefinedVariable)"
    );
}

#[test]
fn file_id_exposes_its_file_name() {
    let file = FileId::new("/samples/semantic_highlighting/keywords.py");
    assert_eq!(file.file_name(), "keywords.py");
    assert_eq!(file.to_string(), "/samples/semantic_highlighting/keywords.py");
}
