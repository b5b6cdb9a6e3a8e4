use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::Buf32;

/// A commitment to the state of the external chain as of `height`, accepted by the oracle at
/// host time `submitted_at`.
///
/// Records are immutable once stored. The only way a slot changes is being overwritten by a
/// newer record after the ring has wrapped.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Arbitrary,
    BorshSerialize,
    BorshDeserialize,
    Deserialize,
    Serialize,
)]
pub struct CheckpointRecord {
    /// Commitment to the external chain state. Never zero for a stored record.
    commitment: Buf32,

    /// External chain block number this commitment covers.
    height: u64,

    /// Host chain timestamp at which the record was accepted.
    submitted_at: u64,
}

impl CheckpointRecord {
    pub fn new(commitment: Buf32, height: u64, submitted_at: u64) -> Self {
        Self {
            commitment,
            height,
            submitted_at,
        }
    }

    pub fn commitment(&self) -> &Buf32 {
        &self.commitment
    }

    pub fn height(&self) -> u64 {
        self.height
    }

    pub fn submitted_at(&self) -> u64 {
        self.submitted_at
    }
}
