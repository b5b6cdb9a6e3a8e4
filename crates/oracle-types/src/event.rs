use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::{Buf32, CheckpointRecord};

/// Notification produced for external observers whenever a checkpoint is accepted.
///
/// Observers index it by `commitment`, `index` and `height`.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize, Deserialize, Serialize,
)]
pub struct CheckpointProposed {
    pub commitment: Buf32,
    /// Physical slot the record was written to.
    pub index: u64,
    pub height: u64,
    pub accepted_at: u64,
}

impl CheckpointProposed {
    pub fn new(index: u64, record: &CheckpointRecord) -> Self {
        Self {
            commitment: *record.commitment(),
            index,
            height: record.height(),
            accepted_at: record.submitted_at(),
        }
    }
}
