//! Content comparison of actual diagnostics against expectation templates.
//!
//! Each category is compared on its own. Actual diagnostics are projected to
//! `(message, line, rule, baseline status)` and matched against templates
//! whose unspecified fields accept anything. A category passes when every
//! actual diagnostic is matched by some template, every template matches
//! some actual diagnostic, and both sides hold the same number of distinct
//! entries.

use diagcheck_core::{Diagnostic, DiagnosticCategory, DuplicatePolicy};
use rustc_hash::FxHashSet;
use tracing::debug;

use super::expectation::{ExpectedResult, ExpectedResults};
use super::projection::ProjectedDiagnostic;
use super::report::{CategoryMismatch, ComparisonReport};
use super::single_result;
use crate::classifier::FileAnalysisResult;
use crate::error::{HarnessError, HarnessResult};

/// Compare one file's results against `expected`, collapsing duplicates.
pub fn validate_results<P>(
    results: &[FileAnalysisResult<P>],
    expected: &ExpectedResults,
) -> HarnessResult<()> {
    validate_results_with(results, expected, DuplicatePolicy::Set)
}

/// Compare one file's results against `expected` under `policy`.
pub fn validate_results_with<P>(
    results: &[FileAnalysisResult<P>],
    expected: &ExpectedResults,
    policy: DuplicatePolicy,
) -> HarnessResult<()> {
    let result = single_result(results)?;
    let report = compare(result, expected, policy);
    if report.is_match() {
        Ok(())
    } else {
        Err(HarnessError::ResultsMismatch(report))
    }
}

/// Compare every category of `result`. Never fails; an empty report is a pass.
pub fn compare<P>(
    result: &FileAnalysisResult<P>,
    expected: &ExpectedResults,
    policy: DuplicatePolicy,
) -> ComparisonReport {
    let mismatches = DiagnosticCategory::ALL
        .into_iter()
        .filter_map(|category| {
            compare_category(
                category,
                result.diagnostics(category),
                expected.for_category(category),
                policy,
            )
        })
        .collect();

    ComparisonReport {
        file: result.file.clone(),
        mismatches,
    }
}

/// Compare one category. `None` when it matches.
pub fn compare_category(
    category: DiagnosticCategory,
    actual: &[Diagnostic],
    expected: &[ExpectedResult],
    policy: DuplicatePolicy,
) -> Option<CategoryMismatch> {
    let projected: Vec<ProjectedDiagnostic> = actual.iter().map(ProjectedDiagnostic::from).collect();

    let (unmatched_actual, unmatched_expected) = match policy {
        DuplicatePolicy::Set => match_as_sets(projected, expected),
        DuplicatePolicy::Multiset => match_as_multisets(projected, expected),
    };

    if unmatched_actual.is_empty() && unmatched_expected.is_empty() {
        return None;
    }

    debug!(
        %category,
        unmatched_actual = unmatched_actual.len(),
        unmatched_expected = unmatched_expected.len(),
        "category mismatch"
    );
    Some(CategoryMismatch {
        category,
        unmatched_actual,
        unmatched_expected,
    })
}

/// Keep the first occurrence of each distinct item.
fn dedup_in_order<T: Clone + Eq + std::hash::Hash>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut seen = FxHashSet::default();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

fn match_as_sets(
    actual: Vec<ProjectedDiagnostic>,
    expected: &[ExpectedResult],
) -> (Vec<ProjectedDiagnostic>, Vec<ExpectedResult>) {
    let actual = dedup_in_order(actual);
    let expected = dedup_in_order(expected.iter().cloned());

    let unmatched_actual: Vec<ProjectedDiagnostic> = actual
        .iter()
        .filter(|a| !expected.iter().any(|e| e.matches(a)))
        .cloned()
        .collect();
    let unmatched_expected: Vec<ExpectedResult> = expected
        .iter()
        .filter(|e| !actual.iter().any(|a| e.matches(a)))
        .cloned()
        .collect();

    if !unmatched_actual.is_empty()
        || !unmatched_expected.is_empty()
        || actual.len() == expected.len()
    {
        return (unmatched_actual, unmatched_expected);
    }

    // Both sides are covered but the distinct counts differ: report what is
    // left over after pairing one to one.
    match_as_multisets(actual, &expected)
}

fn match_as_multisets(
    actual: Vec<ProjectedDiagnostic>,
    expected: &[ExpectedResult],
) -> (Vec<ProjectedDiagnostic>, Vec<ExpectedResult>) {
    let candidates: Vec<Vec<usize>> = actual
        .iter()
        .map(|a| {
            expected
                .iter()
                .enumerate()
                .filter(|(_, e)| e.matches(a))
                .map(|(j, _)| j)
                .collect()
        })
        .collect();

    let owner = maximum_matching(&candidates, expected.len());

    let mut actual_paired = vec![false; actual.len()];
    for left in owner.iter().flatten() {
        actual_paired[*left] = true;
    }

    let unmatched_actual = actual
        .into_iter()
        .zip(actual_paired)
        .filter(|(_, paired)| !paired)
        .map(|(a, _)| a)
        .collect();
    let unmatched_expected = expected
        .iter()
        .zip(&owner)
        .filter(|(_, owner)| owner.is_none())
        .map(|(e, _)| e.clone())
        .collect();

    (unmatched_actual, unmatched_expected)
}

/// Maximum bipartite matching by augmenting paths.
/// `candidates[left]` lists the right vertices `left` may pair with.
/// Returns, for each right vertex, the left vertex it is paired with.
fn maximum_matching(candidates: &[Vec<usize>], right_len: usize) -> Vec<Option<usize>> {
    let mut owner = vec![None; right_len];
    for left in 0..candidates.len() {
        let mut visited = vec![false; right_len];
        augment(left, candidates, &mut owner, &mut visited);
    }
    owner
}

fn augment(
    left: usize,
    candidates: &[Vec<usize>],
    owner: &mut [Option<usize>],
    visited: &mut [bool],
) -> bool {
    for &right in &candidates[left] {
        if visited[right] {
            continue;
        }
        visited[right] = true;
        let free = match owner[right] {
            None => true,
            Some(previous) => augment(previous, candidates, owner, visited),
        };
        if free {
            owner[right] = Some(left);
            return true;
        }
    }
    false
}
