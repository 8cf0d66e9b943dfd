//! Partition of a file's diagnostics into the six category buckets.

use diagcheck_core::{Diagnostic, DiagnosticCategory, FileId};

/// Classified diagnostics of one analyzed file.
///
/// Each bucket keeps the engine's emission order. Built once after the
/// engine reaches its fixpoint and not modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FileAnalysisResult<P = ()> {
    pub file: FileId,
    pub parse_results: Option<P>,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
    pub infos: Vec<Diagnostic>,
    pub unused_codes: Vec<Diagnostic>,
    pub unreachable_codes: Vec<Diagnostic>,
    pub deprecateds: Vec<Diagnostic>,
}

impl<P> FileAnalysisResult<P> {
    /// A result with every bucket empty.
    pub fn empty(file: FileId) -> Self {
        Self {
            file,
            parse_results: None,
            errors: Vec::new(),
            warnings: Vec::new(),
            infos: Vec::new(),
            unused_codes: Vec::new(),
            unreachable_codes: Vec::new(),
            deprecateds: Vec::new(),
        }
    }

    /// The bucket holding `category`.
    pub fn diagnostics(&self, category: DiagnosticCategory) -> &[Diagnostic] {
        match category {
            DiagnosticCategory::Error => &self.errors,
            DiagnosticCategory::Warning => &self.warnings,
            DiagnosticCategory::Information => &self.infos,
            DiagnosticCategory::UnusedCode => &self.unused_codes,
            DiagnosticCategory::UnreachableCode => &self.unreachable_codes,
            DiagnosticCategory::Deprecated => &self.deprecateds,
        }
    }

    fn bucket_mut(&mut self, category: DiagnosticCategory) -> &mut Vec<Diagnostic> {
        match category {
            DiagnosticCategory::Error => &mut self.errors,
            DiagnosticCategory::Warning => &mut self.warnings,
            DiagnosticCategory::Information => &mut self.infos,
            DiagnosticCategory::UnusedCode => &mut self.unused_codes,
            DiagnosticCategory::UnreachableCode => &mut self.unreachable_codes,
            DiagnosticCategory::Deprecated => &mut self.deprecateds,
        }
    }

    /// Every bucket with its category, in canonical order.
    pub fn buckets(&self) -> impl Iterator<Item = (DiagnosticCategory, &[Diagnostic])> + '_ {
        DiagnosticCategory::ALL
            .into_iter()
            .map(move |category| (category, self.diagnostics(category)))
    }

    pub fn total(&self) -> usize {
        self.buckets().map(|(_, diags)| diags.len()).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }

    /// One-line count summary, e.g. `foo.py: 1 errors, 0 warnings, ...`.
    pub fn summary(&self) -> String {
        let counts: Vec<String> = self
            .buckets()
            .map(|(category, diags)| format!("{} {}", diags.len(), category.bucket_name()))
            .collect();
        format!("{}: {}", self.file, counts.join(", "))
    }
}

/// Partition `diagnostics` by category. Total: nothing is dropped or duplicated.
pub fn classify<P>(
    file: FileId,
    parse_results: Option<P>,
    diagnostics: Vec<Diagnostic>,
) -> FileAnalysisResult<P> {
    let mut result = FileAnalysisResult::empty(file);
    result.parse_results = parse_results;
    for diagnostic in diagnostics {
        result.bucket_mut(diagnostic.category).push(diagnostic);
    }
    result
}
