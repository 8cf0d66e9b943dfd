//! A scripted engine for exercising the harness without a real type checker.
//!
//! Diagnostics are scripted per file name. The script also controls how many
//! `analyze()` calls report pending work, which files the engine "loses",
//! and whether the fixpoint is stable. An [`EngineProbe`] observes what the
//! harness did to the engine after the session has ended.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use diagcheck_core::{Diagnostic, EngineConfig, FileId};
use rustc_hash::{FxHashMap, FxHashSet};

use super::{AnalysisEngine, EngineContext, EngineFactory};
use crate::error::HarnessResult;

/// Scripted behavior shared by every engine a [`ScriptedFactory`] builds.
#[derive(Debug, Clone, Default)]
pub struct EngineScript {
    diagnostics: FxHashMap<String, Vec<Diagnostic>>,
    missing: FxHashSet<String>,
    pending_passes: u32,
    never_converges: bool,
    reopens_after_fixpoint: bool,
}

impl EngineScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics reported for the tracked file named `file_name`.
    pub fn file(mut self, file_name: impl Into<String>, diagnostics: Vec<Diagnostic>) -> Self {
        self.diagnostics.insert(file_name.into(), diagnostics);
        self
    }

    /// Pretend `file_name` does not exist once analysis is done.
    pub fn missing(mut self, file_name: impl Into<String>) -> Self {
        self.missing.insert(file_name.into());
        self
    }

    /// Number of `analyze()` calls that report pending work before converging.
    pub fn pending_passes(mut self, passes: u32) -> Self {
        self.pending_passes = passes;
        self
    }

    pub fn never_converges(mut self) -> Self {
        self.never_converges = true;
        self
    }

    /// Report new work on the first `analyze()` after the fixpoint.
    pub fn reopens_after_fixpoint(mut self) -> Self {
        self.reopens_after_fixpoint = true;
        self
    }

    pub fn factory(self, probe: EngineProbe) -> ScriptedFactory {
        ScriptedFactory {
            script: self,
            probe,
        }
    }
}

/// What happened to the engines built by one factory.
#[derive(Debug, Clone, Default)]
pub struct ProbeState {
    pub engines_created: usize,
    pub analyze_calls: u32,
    pub disposed: usize,
    pub tracked: Vec<FileId>,
    pub stub_files: Vec<FileId>,
    pub config: Option<EngineConfig>,
    pub scratch_dir: Option<PathBuf>,
}

/// Shared handle onto [`ProbeState`].
#[derive(Debug, Clone, Default)]
pub struct EngineProbe(Rc<RefCell<ProbeState>>);

impl EngineProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> ProbeState {
        self.0.borrow().clone()
    }

    fn update(&self, f: impl FnOnce(&mut ProbeState)) {
        f(&mut self.0.borrow_mut());
    }
}

#[derive(Debug, Clone)]
pub struct ScriptedFactory {
    script: EngineScript,
    probe: EngineProbe,
}

impl EngineFactory for ScriptedFactory {
    type Engine = ScriptedEngine;

    fn create(&self, ctx: &EngineContext<'_>) -> HarnessResult<ScriptedEngine> {
        self.probe.update(|state| {
            state.engines_created += 1;
            state.config = Some(ctx.config.clone());
            state.scratch_dir = Some(ctx.scratch_dir.to_path_buf());
        });
        Ok(ScriptedEngine {
            script: self.script.clone(),
            probe: self.probe.clone(),
            tracked: Vec::new(),
            pending: self.script.pending_passes,
            converged: false,
            reopened: false,
        })
    }
}

pub struct ScriptedEngine {
    script: EngineScript,
    probe: EngineProbe,
    tracked: Vec<FileId>,
    pending: u32,
    converged: bool,
    reopened: bool,
}

impl ScriptedEngine {
    fn is_tracked(&self, file: &FileId) -> bool {
        self.tracked.contains(file)
    }
}

impl AnalysisEngine for ScriptedEngine {
    /// The source text, read when asked for.
    type ParseOutput = String;

    fn set_tracked_files(&mut self, files: &[FileId]) {
        self.tracked = files.to_vec();
        self.probe.update(|state| state.tracked = files.to_vec());
    }

    fn mark_stub_file(&mut self, file: &FileId) {
        self.probe.update(|state| state.stub_files.push(file.clone()));
    }

    fn analyze(&mut self) -> bool {
        self.probe.update(|state| state.analyze_calls += 1);

        if self.script.never_converges {
            return true;
        }
        if self.converged && self.script.reopens_after_fixpoint && !self.reopened {
            self.reopened = true;
            return true;
        }
        if self.pending > 0 {
            self.pending -= 1;
            return true;
        }
        self.converged = true;
        false
    }

    fn diagnostics(&self, file: &FileId, _config: &EngineConfig) -> Option<Vec<Diagnostic>> {
        let name = file.file_name();
        if !self.is_tracked(file) || self.script.missing.contains(&name) {
            return None;
        }
        Some(self.script.diagnostics.get(&name).cloned().unwrap_or_default())
    }

    fn parse_output(&self, file: &FileId) -> Option<String> {
        if !self.is_tracked(file) {
            return None;
        }
        std::fs::read_to_string(file.path()).ok()
    }

    fn dispose(&mut self) {
        self.probe.update(|state| state.disposed += 1);
    }
}
