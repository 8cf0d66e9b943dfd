//! Human-readable dumps of analysis results.

use std::io::{self, Write};

use tracing::warn;

use crate::classifier::FileAnalysisResult;

/// Write the errors and warnings of `result`, one message per line.
pub fn write_diagnostics<W: Write, P>(out: &mut W, result: &FileAnalysisResult<P>) -> io::Result<()> {
    if !result.errors.is_empty() {
        writeln!(out, "Errors in {}:", result.file)?;
        for diag in &result.errors {
            writeln!(out, "  {}", diag.message)?;
        }
    }

    if !result.warnings.is_empty() {
        writeln!(out, "Warnings in {}:", result.file)?;
        for diag in &result.warnings {
            writeln!(out, "  {}", diag.message)?;
        }
    }

    Ok(())
}

/// [`write_diagnostics`] to stderr, for eyeballing a failing sample test.
pub fn print_diagnostics<P>(result: &FileAnalysisResult<P>) {
    dump_diagnostics(&mut io::stderr().lock(), result);
}

/// Best-effort dump; a failed write is logged, not returned.
fn dump_diagnostics<W: Write, P>(out: &mut W, result: &FileAnalysisResult<P>) -> bool {
    match write_diagnostics(out, result) {
        Ok(()) => true,
        Err(e) => {
            warn!(file = %result.file, error = %e, "could not write diagnostics dump");
            false
        }
    }
}
