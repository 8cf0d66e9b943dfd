//! Shared fixtures for harness tests.

#![allow(dead_code)]

use diagcheck_core::{BaselineStatus, Diagnostic, DiagnosticCategory, Range};
use diagcheck_harness::engine::scripted::{EngineProbe, EngineScript, ScriptedFactory};
use diagcheck_harness::Harness;

pub const UNDEFINED_X: &str = "undefined name 'x'";

/// The single error reported for `undefined_name.py`.
pub fn undefined_x() -> Diagnostic {
    Diagnostic::error(UNDEFINED_X, Range::on_line(3, 6, 7)).with_rule("reportUndefinedVariable")
}

pub fn diag(category: DiagnosticCategory, message: &str, line: u32) -> Diagnostic {
    Diagnostic::new(category, message, Range::on_line(line, 0, 1))
}

/// The diagnostics scripted for `mixed.py`, in emission order.
pub fn mixed_diagnostics() -> Vec<Diagnostic> {
    vec![
        diag(DiagnosticCategory::UnusedCode, "\"os\" is not accessed", 0)
            .with_rule("reportUnusedImport"),
        diag(DiagnosticCategory::Warning, "Import \"sys\" is not accessed", 1)
            .with_rule("reportUnusedImport")
            .with_baseline_status(BaselineStatus::BaselinedWithHint),
        diag(DiagnosticCategory::UnreachableCode, "Code is unreachable", 5),
        diag(
            DiagnosticCategory::Error,
            "Type \"Literal['text']\" is not assignable to declared type \"int\"",
            7,
        )
        .with_rule("reportAssignmentType"),
        diag(DiagnosticCategory::Information, "Variable \"y\" shadows a builtin", 7),
    ]
}

/// The script used by most tests: one error in `undefined_name.py`,
/// nothing in `clean.py`, five categories in `mixed.py`.
pub fn default_script() -> EngineScript {
    EngineScript::new()
        .file("undefined_name.py", vec![undefined_x()])
        .file("clean.py", vec![])
        .file("mixed.py", mixed_diagnostics())
}

pub fn harness_for(script: EngineScript) -> (Harness<ScriptedFactory>, EngineProbe) {
    diagcheck_core::tracing::init_tracing();
    let probe = EngineProbe::new();
    let harness = Harness::new(script.factory(probe.clone()));
    (harness, probe)
}
