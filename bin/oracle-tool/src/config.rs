//! Configuration for the oracle tool, loaded from a TOML file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use strata_checkpoint_oracle::OracleParams;

use crate::errors::InitError;

/// File name of the oracle snapshot inside the datadir.
const SNAPSHOT_FILE_NAME: &str = "oracle.bin";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Config {
    /// Parameters a fresh oracle is initialized with, and that a stored one must match.
    pub(crate) oracle: OracleParams,

    #[serde(default)]
    pub(crate) logging: LoggingConfig,

    pub(crate) storage: StorageConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct LoggingConfig {
    /// Emit JSON instead of compact text.
    #[serde(default)]
    pub(crate) json_format: bool,

    /// Also write rolling log files to this directory.
    pub(crate) log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct StorageConfig {
    pub(crate) datadir: PathBuf,
}

impl Config {
    /// Loads configuration from a TOML file.
    pub(crate) fn from_file(path: &Path) -> Result<Self, InitError> {
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    pub(crate) fn snapshot_path(&self) -> PathBuf {
        self.storage.datadir.join(SNAPSHOT_FILE_NAME)
    }
}
