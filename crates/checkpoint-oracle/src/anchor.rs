//! Anti-reorg anchor check against the host chain.

use std::collections::BTreeMap;

use strata_oracle_types::{Buf32, HostAnchor};
use tracing::trace;

use crate::errors::{OracleError, OracleResult};

/// Number of recent host blocks whose hashes remain queryable.
pub const HOST_BLOCKHASH_WINDOW: u64 = 256;

/// View of the host chain the oracle runs on, as of the block currently being built.
pub trait HostChain {
    /// Hash of host block `height`, or `None` if it is not available.  Only blocks within the
    /// recent lookup window are available; the current block and future blocks never are.
    fn block_hash(&self, height: u64) -> Option<Buf32>;

    /// Timestamp of the block currently being built.
    fn timestamp(&self) -> u64;
}

impl<T: HostChain + ?Sized> HostChain for &T {
    fn block_hash(&self, height: u64) -> Option<Buf32> {
        (**self).block_hash(height)
    }

    fn timestamp(&self) -> u64 {
        (**self).timestamp()
    }
}

/// Checks that the host block the anchor names still has the anchored hash.
pub fn check_anchor(host: &impl HostChain, anchor: &HostAnchor) -> OracleResult<()> {
    let found = host.block_hash(anchor.height());
    trace!(height = anchor.height(), expected = %anchor.blkid(), ?found, "checking host anchor");

    if found.as_ref() != Some(anchor.blkid()) {
        return Err(OracleError::AnchorMismatch {
            height: anchor.height(),
            expected: *anchor.blkid(),
            found,
        });
    }

    Ok(())
}

/// In-memory host chain view that only serves hashes within [`HOST_BLOCKHASH_WINDOW`] blocks
/// below the current tip.
#[derive(Clone, Debug, Default)]
pub struct WindowedHostChain {
    tip_height: u64,
    timestamp: u64,
    hashes: BTreeMap<u64, Buf32>,
}

impl WindowedHostChain {
    /// Creates a view positioned at block `tip_height` being built at `timestamp`.
    pub fn new(tip_height: u64, timestamp: u64) -> Self {
        Self {
            tip_height,
            timestamp,
            hashes: BTreeMap::new(),
        }
    }

    pub fn tip_height(&self) -> u64 {
        self.tip_height
    }

    /// Records the hash of a host block.  Replaces any previous hash at that height, which is
    /// how a reorg shows up.
    pub fn insert_block(&mut self, height: u64, blkid: Buf32) {
        self.hashes.insert(height, blkid);
    }

    /// Moves the view to a new tip and drops hashes that fell out of the window.
    pub fn advance_to(&mut self, tip_height: u64, timestamp: u64) {
        self.tip_height = tip_height;
        self.timestamp = timestamp;

        let window_start = tip_height.saturating_sub(HOST_BLOCKHASH_WINDOW);
        self.hashes = self.hashes.split_off(&window_start);
    }

    fn in_window(&self, height: u64) -> bool {
        height < self.tip_height && self.tip_height - height <= HOST_BLOCKHASH_WINDOW
    }
}

impl HostChain for WindowedHostChain {
    fn block_hash(&self, height: u64) -> Option<Buf32> {
        if !self.in_window(height) {
            return None;
        }
        self.hashes.get(&height).copied()
    }

    fn timestamp(&self) -> u64 {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blkid(n: u8) -> Buf32 {
        Buf32::new([n; 32])
    }

    fn host_with_blocks(tip: u64, blocks: impl IntoIterator<Item = u64>) -> WindowedHostChain {
        let mut host = WindowedHostChain::new(0, 0);
        for h in blocks {
            host.insert_block(h, blkid(h as u8));
        }
        host.advance_to(tip, 1_000);
        host
    }

    #[test]
    fn test_window_bounds() {
        let host = host_with_blocks(300, 0..300);

        assert_eq!(host.block_hash(299), Some(blkid(299u64 as u8)));
        assert_eq!(host.block_hash(44), Some(blkid(44)));
        // 300 - 43 = 257 blocks back, out of the window.
        assert_eq!(host.block_hash(43), None);
        // Current and future blocks are never available.
        assert_eq!(host.block_hash(300), None);
        assert_eq!(host.block_hash(301), None);
    }

    #[test]
    fn test_advance_prunes_old_hashes() {
        let mut host = host_with_blocks(10, 0..10);
        host.advance_to(1_000, 2_000);
        assert!(host.hashes.is_empty());
        assert_eq!(host.timestamp(), 2_000);
    }

    #[test]
    fn test_anchor_match() {
        let host = host_with_blocks(20, 0..20);
        let anchor = HostAnchor::new(15, blkid(15));
        assert!(check_anchor(&host, &anchor).is_ok());
    }

    #[test]
    fn test_anchor_mismatch_after_reorg() {
        let mut host = host_with_blocks(20, 0..20);
        let anchor = HostAnchor::new(15, blkid(15));

        host.insert_block(15, blkid(0xee));
        assert_eq!(
            check_anchor(&host, &anchor),
            Err(OracleError::AnchorMismatch {
                height: 15,
                expected: blkid(15),
                found: Some(blkid(0xee)),
            })
        );
    }

    #[test]
    fn test_anchor_aged_out() {
        let mut host = host_with_blocks(20, 0..20);
        let anchor = HostAnchor::new(15, blkid(15));
        host.advance_to(15 + HOST_BLOCKHASH_WINDOW + 1, 5_000);

        assert_eq!(
            check_anchor(&host, &anchor),
            Err(OracleError::AnchorMismatch {
                height: 15,
                expected: blkid(15),
                found: None,
            })
        );
    }
}
