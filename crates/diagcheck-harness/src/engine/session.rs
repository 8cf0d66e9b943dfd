//! Scoped engine ownership for one harness call.

use std::path::Path;

use diagcheck_core::EngineConfig;
use tempfile::TempDir;
use tracing::info;

use super::{AnalysisEngine, EngineContext, EngineFactory};
use crate::error::{HarnessError, HarnessResult};

const SCRATCH_PREFIX: &str = "diagcheck-";

/// A freshly built engine plus the scratch directory it was built with.
///
/// Dropping the session disposes the engine and then removes the scratch
/// directory, on every exit path including early returns and panics.
pub struct EngineSession<E: AnalysisEngine> {
    // Field order matters: the engine must be gone before its scratch dir.
    engine: E,
    config: EngineConfig,
    scratch: TempDir,
}

impl<E: AnalysisEngine> EngineSession<E> {
    /// Build a new engine through `factory`. Test mode is always switched on.
    pub fn open<F>(factory: &F, config: &EngineConfig) -> HarnessResult<Self>
    where
        F: EngineFactory<Engine = E>,
    {
        let scratch = tempfile::Builder::new()
            .prefix(SCRATCH_PREFIX)
            .tempdir()
            .map_err(HarnessError::ScratchDir)?;
        let config = config.for_tests();
        let engine = factory.create(&EngineContext {
            config: &config,
            scratch_dir: scratch.path(),
        })?;
        info!(scratch = %scratch.path().display(), "engine session opened");

        Ok(Self {
            engine,
            config,
            scratch,
        })
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// The effective engine config (test mode on).
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn scratch_dir(&self) -> &Path {
        self.scratch.path()
    }

    /// Split borrow for callers that drive the engine while reading the config.
    pub fn parts_mut(&mut self) -> (&mut E, &EngineConfig) {
        (&mut self.engine, &self.config)
    }
}

impl<E: AnalysisEngine> Drop for EngineSession<E> {
    fn drop(&mut self) {
        self.engine.dispose();
        info!(scratch = %self.scratch.path().display(), "engine session closed");
    }
}
