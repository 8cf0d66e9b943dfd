//! The seam between the harness and the analysis engine.
//!
//! The engine is opaque: the harness only tracks files, advances analysis,
//! and reads diagnostics back. Everything else (parsing, type evaluation,
//! import resolution) stays behind [`AnalysisEngine`].

#[cfg(any(test, feature = "test-support"))]
pub mod scripted;
pub mod session;

use std::path::Path;

use diagcheck_core::{Diagnostic, EngineConfig, FileId};

use crate::error::HarnessResult;

pub use session::EngineSession;

/// Incremental analysis engine driven by the harness.
pub trait AnalysisEngine {
    /// Parser output the engine can hand back for a file.
    type ParseOutput;

    /// Replace the set of files the engine analyzes.
    fn set_tracked_files(&mut self, files: &[FileId]);

    /// Parse `file` as a type stub. Called before the file is tracked.
    fn mark_stub_file(&mut self, _file: &FileId) {}

    /// Perform one unit of analysis work. Returns `true` while work remains.
    fn analyze(&mut self) -> bool;

    /// Diagnostics for `file`, or `None` if the engine has no such source file.
    fn diagnostics(&self, file: &FileId, config: &EngineConfig) -> Option<Vec<Diagnostic>>;

    /// Retained parse output for `file`, if the engine kept it.
    fn parse_output(&self, file: &FileId) -> Option<Self::ParseOutput>;

    /// Release caches and handles. Called exactly once by [`EngineSession`].
    fn dispose(&mut self);
}

/// What an engine gets to work with when it is constructed.
#[derive(Debug, Clone, Copy)]
pub struct EngineContext<'a> {
    pub config: &'a EngineConfig,
    /// Per-session scratch directory, removed when the session ends.
    pub scratch_dir: &'a Path,
}

/// Builds a fresh engine for every harness call.
pub trait EngineFactory {
    type Engine: AnalysisEngine;

    fn create(&self, ctx: &EngineContext<'_>) -> HarnessResult<Self::Engine>;
}

impl<E, F> EngineFactory for F
where
    E: AnalysisEngine,
    F: Fn(&EngineContext<'_>) -> HarnessResult<E>,
{
    type Engine = E;

    fn create(&self, ctx: &EngineContext<'_>) -> HarnessResult<E> {
        self(ctx)
    }
}

/// Parse output type produced by a factory's engine.
pub type ParseOutputOf<F> = <<F as EngineFactory>::Engine as AnalysisEngine>::ParseOutput;
