//! Count-only comparison, kept for older sample tests.

use diagcheck_core::DiagnosticCategory;

use super::single_result;
use crate::classifier::FileAnalysisResult;
use crate::error::{HarnessError, HarnessResult};

/// Expected number of diagnostics per bucket. `None` skips the bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpectedCounts {
    pub errors: usize,
    pub warnings: usize,
    pub infos: Option<usize>,
    pub unused_codes: Option<usize>,
    pub unreachable_codes: Option<usize>,
    pub deprecateds: Option<usize>,
}

impl ExpectedCounts {
    pub fn errors(errors: usize) -> Self {
        Self {
            errors,
            ..Self::default()
        }
    }

    pub fn warnings(mut self, warnings: usize) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn infos(mut self, infos: usize) -> Self {
        self.infos = Some(infos);
        self
    }

    pub fn unused_codes(mut self, count: usize) -> Self {
        self.unused_codes = Some(count);
        self
    }

    pub fn unreachable_codes(mut self, count: usize) -> Self {
        self.unreachable_codes = Some(count);
        self
    }

    pub fn deprecateds(mut self, count: usize) -> Self {
        self.deprecateds = Some(count);
        self
    }

    fn expected_for(&self, category: DiagnosticCategory) -> Option<usize> {
        match category {
            DiagnosticCategory::Error => Some(self.errors),
            DiagnosticCategory::Warning => Some(self.warnings),
            DiagnosticCategory::Information => self.infos,
            DiagnosticCategory::UnusedCode => self.unused_codes,
            DiagnosticCategory::UnreachableCode => self.unreachable_codes,
            DiagnosticCategory::Deprecated => self.deprecateds,
        }
    }
}

/// Check bucket sizes only. Reports the first bucket whose size differs.
#[deprecated(note = "use `validate_results`, which also checks messages, lines, and rules")]
pub fn validate_result_counts<P>(
    results: &[FileAnalysisResult<P>],
    counts: &ExpectedCounts,
) -> HarnessResult<()> {
    let result = single_result(results)?;

    for category in DiagnosticCategory::ALL {
        let Some(expected) = counts.expected_for(category) else {
            continue;
        };
        let actual = result.diagnostics(category).len();
        if actual != expected {
            return Err(HarnessError::CountMismatch {
                category,
                expected,
                actual,
            });
        }
    }
    Ok(())
}
