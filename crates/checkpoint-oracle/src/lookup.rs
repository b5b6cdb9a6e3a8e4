//! Height lookup over the checkpoint ring.
//!
//! Heights are strictly increasing in logical order, so the search runs over logical
//! positions `0..count` and maps each one to its physical slot through the ring offset.
//! Physical slot 0 is the logical start only until the ring wraps.

use strata_oracle_types::CheckpointRecord;

use crate::{
    errors::{OracleError, OracleResult},
    ring::CheckpointRing,
};

impl CheckpointRing {
    /// Returns the physical slot of the first record, in logical order, whose height is at
    /// least `height`.
    ///
    /// Heights older than the oldest retained record resolve to the oldest retained record,
    /// whether they were evicted or never proposed.
    pub fn index_after(&self, height: u64) -> OracleResult<u64> {
        let Some(latest) = self.latest() else {
            return Err(OracleError::Empty);
        };

        if height > latest.height() {
            return Err(OracleError::NotYetProposed {
                height,
                latest: latest.height(),
            });
        }

        // The answer always lies in `lo..=hi`; position `count - 1` (the latest record)
        // satisfies the predicate by the check above.
        let mut lo = 0;
        let mut hi = self.count() - 1;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.at_position(mid).height() < height {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        Ok(self.physical_index(lo))
    }

    /// Returns the record covering `height`, see [`Self::index_after`].
    pub fn record_after(&self, height: u64) -> OracleResult<&CheckpointRecord> {
        let idx = self.index_after(height)?;
        self.get(idx)
    }
}
