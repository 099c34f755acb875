//! Settings controlling how configured values are produced.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// How a comma-separated list of alternatives is turned into one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SamplingMode {
    /// Always take the first alternative, so repeated runs produce identical output.
    #[default]
    Deterministic,
    /// Pick an alternative uniformly at random.
    Random,
}

/// Export settings.
///
/// Serialized to TOML. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Location of the field-values TSV. `None` uses the built-in location.
    pub field_values: Option<PathBuf>,

    /// Distribution sampling behavior.
    pub sampling: SamplingMode,

    /// Seed for random sampling. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ModelError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn with_sampling(mut self, sampling: SamplingMode) -> Self {
        self.sampling = sampling;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_field_values(mut self, path: Option<PathBuf>) -> Self {
        self.field_values = path;
        self
    }

    pub fn is_deterministic(&self) -> bool {
        self.sampling == SamplingMode::Deterministic
    }
}
