//! Harness configuration.

pub mod engine_config;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use engine_config::EngineConfig;

/// Default cap on `analyze()` calls before the driver gives up.
pub const DEFAULT_MAX_ANALYSIS_PASSES: u32 = 1000;

/// Samples directory of the harness crate itself.
pub const DEFAULT_SAMPLES_DIR: &str = "tests/samples";

/// How duplicate diagnostics are treated by the comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Identical projected diagnostics collapse into one before matching.
    #[default]
    Set,
    /// Every occurrence must be paired with its own expectation.
    Multiset,
}

/// Top-level harness configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HarnessConfig {
    /// Root directory sample names are resolved against.
    pub samples_dir: Option<PathBuf>,
    /// Maximum number of `analyze()` calls. Default: 1000.
    pub max_analysis_passes: Option<u32>,
    /// Re-run `analyze()` once after convergence and require it to stay idle. Default: true.
    pub verify_fixpoint: Option<bool>,
    /// Duplicate handling for the full comparator. Default: set.
    pub duplicate_policy: Option<DuplicatePolicy>,
    /// Options passed through to the engine.
    pub engine: EngineConfig,
}

impl HarnessConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text)?;
        tracing::debug!(path = %path.display(), "loaded harness config");
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_analysis_passes == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "max_analysis_passes",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the samples root, defaulting to `tests/samples` under `crate_dir`.
    pub fn effective_samples_dir(&self, crate_dir: &Path) -> PathBuf {
        match &self.samples_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => crate_dir.join(dir),
            None => crate_dir.join(DEFAULT_SAMPLES_DIR),
        }
    }

    /// Returns the pass cap, defaulting to 1000.
    pub fn effective_max_analysis_passes(&self) -> u32 {
        self.max_analysis_passes
            .unwrap_or(DEFAULT_MAX_ANALYSIS_PASSES)
            .max(1)
    }

    /// Returns whether the fixpoint is re-checked, defaulting to true.
    pub fn effective_verify_fixpoint(&self) -> bool {
        self.verify_fixpoint.unwrap_or(true)
    }

    pub fn effective_duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicate_policy.unwrap_or_default()
    }
}
