//! Analysis driver: advances the engine to its fixpoint and collects results.

use diagcheck_core::{EngineConfig, FileId, HarnessConfig};
use tracing::{debug, info, warn};

use crate::classifier::{classify, FileAnalysisResult};
use crate::engine::AnalysisEngine;
use crate::error::{HarnessError, HarnessResult};

/// Drives an engine to its fixpoint. The only component that advances the engine.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisDriver {
    max_passes: u32,
    verify_fixpoint: bool,
}

impl AnalysisDriver {
    pub fn new(max_passes: u32, verify_fixpoint: bool) -> Self {
        Self {
            max_passes: max_passes.max(1),
            verify_fixpoint,
        }
    }

    pub fn from_config(config: &HarnessConfig) -> Self {
        Self::new(
            config.effective_max_analysis_passes(),
            config.effective_verify_fixpoint(),
        )
    }

    pub fn max_passes(&self) -> u32 {
        self.max_passes
    }

    /// Call `analyze()` until it reports no pending work.
    /// Returns the number of calls it took, including the final idle one.
    pub fn run_to_fixpoint<E: AnalysisEngine>(&self, engine: &mut E) -> HarnessResult<u32> {
        let mut passes = 0;
        loop {
            if passes == self.max_passes {
                warn!(passes, "analysis still has pending work, giving up");
                return Err(HarnessError::AnalysisDidNotConverge { passes });
            }
            passes += 1;
            if !engine.analyze() {
                break;
            }
            debug!(pass = passes, "analysis pass left pending work");
        }

        if self.verify_fixpoint && engine.analyze() {
            warn!(passes, "analysis reported new work after its fixpoint");
            return Err(HarnessError::UnstableFixpoint { passes });
        }

        info!(passes, "analysis reached fixpoint");
        Ok(passes)
    }

    /// Run to fixpoint, then classify the diagnostics of every file in `files`.
    ///
    /// A file the engine does not know after convergence is a broken fixture
    /// and aborts the whole call.
    pub fn analyze<E: AnalysisEngine>(
        &self,
        engine: &mut E,
        files: &[FileId],
        config: &EngineConfig,
    ) -> HarnessResult<Vec<FileAnalysisResult<E::ParseOutput>>> {
        self.run_to_fixpoint(engine)?;

        files
            .iter()
            .map(|file| {
                let diagnostics = engine
                    .diagnostics(file, config)
                    .ok_or_else(|| HarnessError::SourceFileNotFound { file: file.clone() })?;
                debug!(file = %file, count = diagnostics.len(), "collected diagnostics");
                Ok(classify(file.clone(), engine.parse_output(file), diagnostics))
            })
            .collect()
    }
}

impl Default for AnalysisDriver {
    fn default() -> Self {
        Self::from_config(&HarnessConfig::default())
    }
}
