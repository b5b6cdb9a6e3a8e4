use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::Buf32;

/// Assertion that host chain block `height` currently has hash `blkid`.
///
/// Pins a proposal to a specific point of the host chain's history, so the proposal stops
/// being valid if the host chain reorganizes before it is included.
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
pub struct HostAnchor {
    height: u64,
    blkid: Buf32,
}

impl HostAnchor {
    pub fn new(height: u64, blkid: Buf32) -> Self {
        Self { height, blkid }
    }

    /// Builds an anchor from its raw wire form, where a zero hash means "no anchor".
    pub fn from_raw(blkid: Buf32, height: u64) -> Option<Self> {
        if blkid.is_zero() {
            None
        } else {
            Some(Self::new(height, blkid))
        }
    }

    pub fn height(&self) -> u64 {
        self.height
    }

    pub fn blkid(&self) -> &Buf32 {
        &self.blkid
    }
}

/// A request to record `commitment` as the checkpoint for external height `height`.
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
pub struct CheckpointProposal {
    commitment: Buf32,
    height: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    anchor: Option<HostAnchor>,
}

impl CheckpointProposal {
    /// Creates an unanchored proposal.
    pub fn new(commitment: Buf32, height: u64) -> Self {
        Self {
            commitment,
            height,
            anchor: None,
        }
    }

    /// Creates a proposal from its raw wire form.  A zero `anchor_hash` omits the anchor, in
    /// which case `anchor_height` is ignored.
    pub fn from_raw_parts(
        commitment: Buf32,
        height: u64,
        anchor_hash: Buf32,
        anchor_height: u64,
    ) -> Self {
        Self {
            commitment,
            height,
            anchor: HostAnchor::from_raw(anchor_hash, anchor_height),
        }
    }

    pub fn with_anchor(mut self, anchor: HostAnchor) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn commitment(&self) -> &Buf32 {
        &self.commitment
    }

    pub fn height(&self) -> u64 {
        self.height
    }

    pub fn anchor(&self) -> Option<&HostAnchor> {
        self.anchor.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_anchor_hash_is_omitted() {
        let proposal =
            CheckpointProposal::from_raw_parts(Buf32::new([1; 32]), 10, Buf32::zero(), 99);
        assert!(proposal.anchor().is_none());
    }

    #[test]
    fn test_nonzero_anchor_hash_is_kept() {
        let blkid = Buf32::new([2; 32]);
        let proposal = CheckpointProposal::from_raw_parts(Buf32::new([1; 32]), 10, blkid, 99);
        let anchor = proposal.anchor().expect("anchor present");
        assert_eq!(anchor.height(), 99);
        assert_eq!(anchor.blkid(), &blkid);
    }

    #[test]
    fn test_anchor_omitted_from_json_when_absent() {
        let proposal = CheckpointProposal::new(Buf32::new([1; 32]), 10);
        let json = serde_json::to_value(proposal).unwrap();
        assert!(json.get("anchor").is_none());

        let decoded: CheckpointProposal = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, proposal);
    }
}
