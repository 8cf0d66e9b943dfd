//! Structured comparison failures.

use std::fmt;

use diagcheck_core::{DiagnosticCategory, FileId};

use super::expectation::ExpectedResult;
use super::projection::ProjectedDiagnostic;

/// Disagreement between actual and expected diagnostics in one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMismatch {
    pub category: DiagnosticCategory,
    /// Actual diagnostics no template accounted for.
    pub unmatched_actual: Vec<ProjectedDiagnostic>,
    /// Templates that matched no actual diagnostic.
    pub unmatched_expected: Vec<ExpectedResult>,
}

impl fmt::Display for CategoryMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  {}:", self.category.bucket_name())?;
        for actual in &self.unmatched_actual {
            writeln!(f, "    + unexpected {actual}")?;
        }
        for expected in &self.unmatched_expected {
            writeln!(f, "    - missing    {expected}")?;
        }
        Ok(())
    }
}

/// Every mismatching category of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonReport {
    pub file: FileId,
    pub mismatches: Vec<CategoryMismatch>,
}

impl ComparisonReport {
    pub fn is_match(&self) -> bool {
        self.mismatches.is_empty()
    }

    pub fn mismatch(&self, category: DiagnosticCategory) -> Option<&CategoryMismatch> {
        self.mismatches.iter().find(|m| m.category == category)
    }

    pub fn unmatched_actual_count(&self) -> usize {
        self.mismatches.iter().map(|m| m.unmatched_actual.len()).sum()
    }

    pub fn unmatched_expected_count(&self) -> usize {
        self.mismatches.iter().map(|m| m.unmatched_expected.len()).sum()
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.file)?;
        for mismatch in &self.mismatches {
            write!(f, "{mismatch}")?;
        }
        Ok(())
    }
}
