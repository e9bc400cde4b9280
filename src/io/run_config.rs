//! Run files for the command-line solver.
//!
//! ```toml
//! data = "data/krod100.tsp"
//! reference = "data/ans/krod100.opt.tour"   # optional
//!
//! [solver]
//! min_temperature = 0.0
//! max_temperature = 100.0
//! replicas = 16
//! period = 32
//! max_iterations = 100
//! seed = 42                                 # optional
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::reference::default_reference_path;
use crate::error::ConfigError;
use crate::pt::PtConfig;

/// A complete run: input location plus solver parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// City coordinate file.
    pub data: PathBuf,

    /// Reference tour file. Defaults to [`default_reference_path`] of `data`.
    #[serde(default)]
    pub reference: Option<PathBuf>,

    pub solver: PtConfig,
}

impl RunConfig {
    /// Loads and validates a run file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates a run file from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.solver.validate()?;
        Ok(config)
    }

    /// Reference tour path, explicit or conventional.
    pub fn reference_path(&self) -> PathBuf {
        self.reference
            .clone()
            .unwrap_or_else(|| default_reference_path(&self.data))
    }

    /// Display name of the data set (the data file name).
    pub fn data_name(&self) -> String {
        self.data
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.data.display().to_string())
    }
}
