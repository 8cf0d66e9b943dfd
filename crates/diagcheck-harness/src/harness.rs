//! Entry points used by sample tests.

use std::path::{Path, PathBuf};

use diagcheck_core::{FileId, HarnessConfig};
use tracing::{debug, info};

use crate::classifier::FileAnalysisResult;
use crate::comparator::{validate_results_with, ExpectedResults};
use crate::driver::AnalysisDriver;
use crate::engine::{AnalysisEngine, EngineFactory, EngineSession, ParseOutputOf};
use crate::error::HarnessResult;
use crate::samples::SampleFile;

/// Runs sample files through a fresh engine per call.
pub struct Harness<F: EngineFactory> {
    factory: F,
    config: HarnessConfig,
    samples_dir: PathBuf,
    driver: AnalysisDriver,
}

impl<F: EngineFactory> Harness<F> {
    /// Harness with default config; samples resolve under this crate's `tests/samples`.
    pub fn new(factory: F) -> Self {
        Self::with_config(factory, HarnessConfig::default())
    }

    pub fn with_config(factory: F, config: HarnessConfig) -> Self {
        let samples_dir = config.effective_samples_dir(Path::new(env!("CARGO_MANIFEST_DIR")));
        let driver = AnalysisDriver::from_config(&config);
        Self {
            factory,
            config,
            samples_dir,
            driver,
        }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn samples_dir(&self) -> &Path {
        &self.samples_dir
    }

    pub fn sample(&self, file_name: &str) -> SampleFile {
        SampleFile::resolve(&self.samples_dir, file_name)
    }

    /// Track `file_names`, analyze to fixpoint, and classify each file's diagnostics.
    /// Results come back in the order the names were given.
    pub fn analyze_sample_files(
        &self,
        file_names: &[&str],
    ) -> HarnessResult<Vec<FileAnalysisResult<ParseOutputOf<F>>>> {
        let samples: Vec<SampleFile> = file_names.iter().map(|name| self.sample(name)).collect();
        let files: Vec<FileId> = samples.iter().map(SampleFile::file_id).collect();

        let mut session = EngineSession::open(&self.factory, &self.config.engine)?;
        let (engine, engine_config) = session.parts_mut();
        track_samples(engine, &samples);
        let results = self.driver.analyze(engine, &files, engine_config)?;

        info!(files = files.len(), "analyzed sample files");
        Ok(results)
    }

    pub fn analyze_sample_file(
        &self,
        file_name: &str,
    ) -> HarnessResult<Vec<FileAnalysisResult<ParseOutputOf<F>>>> {
        self.analyze_sample_files(&[file_name])
    }

    /// Analyze one sample and compare it against `expected`.
    /// Returns the results so callers can make further assertions.
    pub fn check_sample_file(
        &self,
        file_name: &str,
        expected: &ExpectedResults,
    ) -> HarnessResult<Vec<FileAnalysisResult<ParseOutputOf<F>>>> {
        let results = self.analyze_sample_file(file_name)?;
        validate_results_with(&results, expected, self.config.effective_duplicate_policy())?;
        Ok(results)
    }

    /// Track the sample `subdir/file_name` in a fresh engine and hand both to `inspect`.
    ///
    /// No analysis is run; this is for walkers over parse output such as
    /// semantic-token or inlay-hint collection.
    pub fn inspect_sample<R>(
        &self,
        subdir: &str,
        file_name: &str,
        inspect: impl FnOnce(&mut F::Engine, &FileId) -> R,
    ) -> HarnessResult<R> {
        let sample = SampleFile::resolve(&self.samples_dir.join(subdir), file_name);
        let file = sample.file_id();

        let mut session = EngineSession::open(&self.factory, &self.config.engine)?;
        let engine = session.engine_mut();
        track_samples(engine, std::slice::from_ref(&sample));
        Ok(inspect(engine, &file))
    }
}

/// Mark stub samples, then track every sample in order.
fn track_samples<E: AnalysisEngine>(engine: &mut E, samples: &[SampleFile]) {
    for sample in samples.iter().filter(|s| s.is_stub()) {
        debug!(file = sample.name(), "tracking as type stub");
        engine.mark_stub_file(&sample.file_id());
    }
    let files: Vec<FileId> = samples.iter().map(SampleFile::file_id).collect();
    engine.set_tracked_files(&files);
}
