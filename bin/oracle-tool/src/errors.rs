//! Error types for initialization and replay.

use std::io;

use strata_checkpoint_oracle::{OracleError, OracleParams};
use strata_common::logging::LoggingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum InitError {
    #[error("io: {0}")]
    Io(#[from] io::Error),

    #[error("unparsable config file: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("unparsable replay script: {0}")]
    ScriptParse(#[from] serde_json::Error),

    #[error("logging: {0}")]
    Logging(#[from] LoggingError),

    #[error("oracle: {0}")]
    Oracle(#[from] OracleError),

    #[error("stored oracle params {stored:?} do not match configured {configured:?}")]
    ParamsMismatch {
        configured: OracleParams,
        stored: OracleParams,
    },

    #[error("script moves host chain backwards from {tip} to {requested}")]
    HostWentBackwards { tip: u64, requested: u64 },
}
