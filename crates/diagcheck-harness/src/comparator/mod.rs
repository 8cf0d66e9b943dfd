//! Comparison of classified results against expectations.
//!
//! Two entry points: [`validate_results`] matches diagnostic content against
//! expectation templates, and the deprecated [`validate_result_counts`] only
//! checks bucket sizes. Both accept results for exactly one file.

pub mod expectation;
pub mod legacy;
pub mod matching;
pub mod projection;
pub mod report;

use crate::classifier::FileAnalysisResult;
use crate::error::{HarnessError, HarnessResult};

pub use expectation::{ExpectedResult, ExpectedResults, Match};
#[allow(deprecated)]
pub use legacy::{validate_result_counts, ExpectedCounts};
pub use matching::{compare, compare_category, validate_results, validate_results_with};
pub use projection::ProjectedDiagnostic;
pub use report::{CategoryMismatch, ComparisonReport};

/// The only result in `results`, or a contract violation.
fn single_result<P>(results: &[FileAnalysisResult<P>]) -> HarnessResult<&FileAnalysisResult<P>> {
    match results {
        [result] => Ok(result),
        _ => Err(HarnessError::ExpectedSingleFile {
            actual: results.len(),
        }),
    }
}
