//! Reduction of a diagnostic to the fields the comparator looks at.

use std::fmt;

use diagcheck_core::{BaselineStatus, Diagnostic, RuleId};

/// `(message, start line, rule, baseline status)` of an actual diagnostic.
/// Column, end position, and category are not compared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectedDiagnostic {
    pub message: String,
    pub line: u32,
    pub rule: Option<RuleId>,
    pub baseline_status: Option<BaselineStatus>,
}

impl From<&Diagnostic> for ProjectedDiagnostic {
    fn from(diagnostic: &Diagnostic) -> Self {
        Self {
            message: diagnostic.message.clone(),
            line: diagnostic.range.start.line,
            rule: diagnostic.rule.clone(),
            baseline_status: diagnostic.baseline_status,
        }
    }
}

impl fmt::Display for ProjectedDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {:?}", self.line, self.message)?;
        if let Some(rule) = &self.rule {
            write!(f, " ({rule})")?;
        }
        if let Some(status) = &self.baseline_status {
            write!(f, " [{status}]")?;
        }
        Ok(())
    }
}
