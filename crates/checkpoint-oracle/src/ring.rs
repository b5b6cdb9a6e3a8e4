use borsh::{BorshDeserialize, BorshSerialize};
use strata_oracle_types::CheckpointRecord;

use crate::errors::{OracleError, OracleResult};

/// Largest supported capacity.  Keeps every slot index addressable as a `usize` on 32-bit
/// targets.
pub const MAX_CAPACITY: u64 = u32::MAX as u64;

/// Checks that `max_count` is a usable capacity.
pub(crate) fn check_capacity(max_count: u64) -> OracleResult<()> {
    if max_count == 0 {
        return Err(OracleError::ZeroCapacity);
    }
    if max_count > MAX_CAPACITY {
        return Err(OracleError::CapacityTooLarge(max_count));
    }
    Ok(())
}

/// A ring buffer holding at most `max_count` checkpoint records.
///
/// Slots are filled in order `0..max_count`, after which the slot after `latest_index` (the
/// logically oldest record) is overwritten on every append. Heights are strictly increasing
/// in logical order, which is not physical order once the ring has wrapped.
///
/// `latest_index` starts at `max_count - 1`, so the first append lands in slot 0.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct CheckpointRing {
    max_count: u64,
    latest_index: u64,
    slots: Vec<CheckpointRecord>,
}

impl CheckpointRing {
    /// Creates an empty ring with room for `max_count` records.
    pub fn new(max_count: u64) -> OracleResult<Self> {
        check_capacity(max_count)?;

        Ok(Self {
            max_count,
            latest_index: max_count - 1,
            slots: Vec::new(),
        })
    }

    pub fn max_count(&self) -> u64 {
        self.max_count
    }

    /// Number of slots ever written, saturating at `max_count`.
    pub fn count(&self) -> u64 {
        self.slots.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.count() == self.max_count
    }

    /// Physical slot of the most recent record, or the `max_count - 1` sentinel while empty.
    pub fn latest_index(&self) -> u64 {
        self.latest_index
    }

    /// Physical slot the next append writes to.
    pub fn next_index(&self) -> u64 {
        (self.latest_index + 1) % self.max_count
    }

    /// Physical slot of the logically oldest retained record.
    ///
    /// While the ring has never wrapped this is slot 0, afterwards it is the slot right after
    /// `latest_index`.
    pub fn oldest_index(&self) -> u64 {
        if self.is_empty() {
            return 0;
        }
        (self.latest_index + 1) % self.count()
    }

    /// Maps a logical position (0 = oldest retained) to its physical slot.
    ///
    /// Only meaningful for `pos < count()`.
    pub fn physical_index(&self, pos: u64) -> u64 {
        (pos + self.oldest_index()) % self.count()
    }

    /// Writes `record` to the next slot and returns the physical index it landed in.
    ///
    /// Does not check ordering; that is the guard's job.
    pub fn append(&mut self, record: CheckpointRecord) -> u64 {
        let idx = self.next_index();
        if self.count() < self.max_count {
            debug_assert_eq!(idx, self.count(), "ring: unfilled append must extend");
            self.slots.push(record);
        } else {
            self.slots[idx as usize] = record;
        }
        self.latest_index = idx;
        idx
    }

    /// Returns the record at physical slot `index`.
    pub fn get(&self, index: u64) -> OracleResult<&CheckpointRecord> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.slots.get(i))
            .ok_or(OracleError::OutOfRange {
                index,
                count: self.count(),
            })
    }

    /// Returns the most recently appended record, if any.
    pub fn latest(&self) -> Option<&CheckpointRecord> {
        if self.is_empty() {
            return None;
        }
        self.get(self.latest_index).ok()
    }

    /// Height of the most recent record, or 0 if nothing has been stored yet.
    pub fn latest_height(&self) -> u64 {
        self.latest().map(|rec| rec.height()).unwrap_or(0)
    }

    /// Record at logical position `pos`.
    pub(crate) fn at_position(&self, pos: u64) -> &CheckpointRecord {
        &self.slots[self.physical_index(pos) as usize]
    }

    /// Iterates retained records in logical order, oldest first.
    pub fn iter_logical(&self) -> impl Iterator<Item = &CheckpointRecord> + '_ {
        (0..self.count()).map(|pos| self.at_position(pos))
    }

    /// Checks the structural invariants, for rings restored from outside sources.
    pub fn validate(&self) -> OracleResult<()> {
        let corrupt = |msg: &str| Err(OracleError::CorruptSnapshot(msg.to_owned()));

        if check_capacity(self.max_count).is_err() {
            return corrupt("capacity out of range");
        }

        if self.count() > self.max_count {
            return corrupt("more slots than capacity");
        }

        if self.is_empty() {
            if self.latest_index != self.max_count - 1 {
                return corrupt("empty ring with moved latest index");
            }
            return Ok(());
        }

        if self.latest_index >= self.count() {
            return corrupt("latest index past written slots");
        }

        if !self.is_full() && self.latest_index != self.count() - 1 {
            return corrupt("unfilled ring with latest index not at end");
        }

        if self.slots.iter().any(|rec| rec.commitment().is_zero()) {
            return corrupt("zero commitment stored");
        }

        let mut prev = None;
        for rec in self.iter_logical() {
            if prev.is_some_and(|h| rec.height() <= h) {
                return corrupt("heights not strictly increasing");
            }
            prev = Some(rec.height());
        }

        Ok(())
    }
}
