//! Diagnostics as emitted by the analysis engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The six diagnostic categories. Every diagnostic carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticCategory {
    Error,
    Warning,
    Information,
    UnusedCode,
    UnreachableCode,
    Deprecated,
}

impl DiagnosticCategory {
    /// All categories, in bucket order.
    pub const ALL: [DiagnosticCategory; 6] = [
        DiagnosticCategory::Error,
        DiagnosticCategory::Warning,
        DiagnosticCategory::Information,
        DiagnosticCategory::UnusedCode,
        DiagnosticCategory::UnreachableCode,
        DiagnosticCategory::Deprecated,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Information => "information",
            Self::UnusedCode => "unused_code",
            Self::UnreachableCode => "unreachable_code",
            Self::Deprecated => "deprecated",
        }
    }

    /// Name of the result bucket holding this category (`errors`, `infos`, ...).
    pub fn bucket_name(&self) -> &'static str {
        match self {
            Self::Error => "errors",
            Self::Warning => "warnings",
            Self::Information => "infos",
            Self::UnusedCode => "unused_codes",
            Self::UnreachableCode => "unreachable_codes",
            Self::Deprecated => "deprecateds",
        }
    }
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A line/column position as reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// A range covering `[start_column, end_column)` on a single line.
    pub fn on_line(line: u32, start_column: u32, end_column: u32) -> Self {
        Self {
            start: Position::new(line, start_column),
            end: Position::new(line, end_column),
        }
    }
}

/// Identifier of the rule that produced a diagnostic, e.g. `reportUndefinedVariable`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(String);

impl RuleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RuleId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RuleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Suppression marker from a persisted baseline file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaselineStatus {
    /// Matched an entry in the baseline and is suppressed.
    Baselined,
    /// Matched an entry in the baseline but is still surfaced as a hint.
    BaselinedWithHint,
}

impl fmt::Display for BaselineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Baselined => f.write_str("baselined"),
            Self::BaselinedWithHint => f.write_str("baselined with hint"),
        }
    }
}

/// One finding reported by the engine for a source file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub message: String,
    pub range: Range,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<RuleId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_status: Option<BaselineStatus>,
}

impl Diagnostic {
    pub fn new(category: DiagnosticCategory, message: impl Into<String>, range: Range) -> Self {
        Self {
            category,
            message: message.into(),
            range,
            rule: None,
            baseline_status: None,
        }
    }

    pub fn error(message: impl Into<String>, range: Range) -> Self {
        Self::new(DiagnosticCategory::Error, message, range)
    }

    pub fn warning(message: impl Into<String>, range: Range) -> Self {
        Self::new(DiagnosticCategory::Warning, message, range)
    }

    pub fn with_rule(mut self, rule: impl Into<RuleId>) -> Self {
        self.rule = Some(rule.into());
        self
    }

    pub fn with_baseline_status(mut self, status: BaselineStatus) -> Self {
        self.baseline_status = Some(status);
        self
    }

    /// Start line of the diagnostic's range.
    pub fn line(&self) -> u32 {
        self.range.start.line
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {}: {}",
            self.range.start.line, self.range.start.column, self.category, self.message
        )?;
        if let Some(rule) = &self.rule {
            write!(f, " ({rule})")?;
        }
        Ok(())
    }
}
