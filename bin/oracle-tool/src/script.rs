//! Replay script format.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use strata_oracle_types::{Address, Buf32, CheckpointProposal, HostAnchor};

use crate::errors::InitError;

/// A sequence of host blocks and checkpoint proposals to apply in order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct ReplayScript {
    /// Host blocks in the order they are observed.  A later entry at an already-seen height
    /// replaces the earlier one, which models a reorg.
    #[serde(default)]
    pub(crate) host_blocks: Vec<HostBlockEntry>,

    #[serde(default)]
    pub(crate) proposals: Vec<ProposalEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct HostBlockEntry {
    pub(crate) height: u64,
    pub(crate) hash: Buf32,
    pub(crate) timestamp: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ProposalEntry {
    pub(crate) caller: Address,
    pub(crate) commitment: Buf32,
    pub(crate) height: u64,

    /// Host block the proposal is included in.
    pub(crate) host_height: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) anchor: Option<HostAnchor>,
}

impl ProposalEntry {
    /// An anchor with a zero hash is treated as absent.
    pub(crate) fn to_proposal(&self) -> CheckpointProposal {
        let proposal = CheckpointProposal::new(self.commitment, self.height);
        match self
            .anchor
            .and_then(|a| HostAnchor::from_raw(*a.blkid(), a.height()))
        {
            Some(anchor) => proposal.with_anchor(anchor),
            None => proposal,
        }
    }
}

impl ReplayScript {
    pub(crate) fn from_file(path: &Path) -> Result<Self, InitError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
