use std::io;

use strata_oracle_types::{Address, Buf32};
use thiserror::Error;

use crate::ring::MAX_CAPACITY;

pub type OracleResult<T> = Result<T, OracleError>;

/// Rejections of an oracle operation.
///
/// Every error aborts the whole operation; the oracle state is left exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OracleError {
    #[error("oracle not initialized")]
    NotInitialized,

    #[error("oracle already initialized")]
    AlreadyInitialized,

    #[error("oracle capacity must be at least 1")]
    ZeroCapacity,

    #[error("oracle capacity {0} exceeds the maximum of {max}", max = MAX_CAPACITY)]
    CapacityTooLarge(u64),

    #[error("caller {0} is not the registered proposer")]
    Unauthorized(Address),

    #[error("proposed height {proposed} does not exceed latest height {latest}")]
    NonMonotonic { proposed: u64, latest: u64 },

    #[error("checkpoint commitment is empty")]
    EmptyCommitment,

    /// `found` is `None` when the host block is outside the lookup window.
    #[error("host block {height} anchor mismatch (expected {expected}, found {found:?})")]
    AnchorMismatch {
        height: u64,
        expected: Buf32,
        found: Option<Buf32>,
    },

    #[error("height {height} not yet proposed (latest {latest})")]
    NotYetProposed { height: u64, latest: u64 },

    #[error("no checkpoints stored")]
    Empty,

    #[error("slot {index} out of range ({count} slots written)")]
    OutOfRange { index: u64, count: u64 },

    #[error("corrupt snapshot: {0}")]
    CorruptSnapshot(String),

    #[error("IO Error: {0}")]
    IoError(String),
}

impl From<io::Error> for OracleError {
    fn from(value: io::Error) -> Self {
        Self::IoError(value.to_string())
    }
}
