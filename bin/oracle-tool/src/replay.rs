//! Applies a replay script to an oracle.

use strata_checkpoint_oracle::{CheckpointOracle, HostChain, WindowedHostChain};
use strata_oracle_types::CheckpointProposed;
use tracing::*;

use crate::{
    errors::InitError,
    script::{HostBlockEntry, ReplayScript},
};

/// Outcome of a replay.
#[derive(Debug, Default)]
pub(crate) struct ReplaySummary {
    pub(crate) accepted: Vec<CheckpointProposed>,
    pub(crate) rejected: usize,
}

/// Feeds host blocks to a [`WindowedHostChain`] as the script's proposals move the tip.
struct HostFeed<'s> {
    host: WindowedHostChain,
    blocks: &'s [HostBlockEntry],
    cursor: usize,
}

impl<'s> HostFeed<'s> {
    fn new(blocks: &'s [HostBlockEntry]) -> Self {
        Self {
            host: WindowedHostChain::default(),
            blocks,
            cursor: 0,
        }
    }

    /// Moves the tip to `height`, first recording every queued block below it.  The tip
    /// timestamp comes from the block queued at `height`, if there is one.
    fn advance_to(&mut self, height: u64) -> Result<&WindowedHostChain, InitError> {
        let tip = self.host.tip_height();
        if height < tip {
            return Err(InitError::HostWentBackwards {
                tip,
                requested: height,
            });
        }

        while let Some(block) = self.blocks.get(self.cursor) {
            if block.height >= height {
                break;
            }
            trace!(height = block.height, hash = %block.hash, "host block");
            self.host.insert_block(block.height, block.hash);
            self.cursor += 1;
        }

        let timestamp = match self.blocks.get(self.cursor) {
            Some(block) if block.height == height => block.timestamp,
            _ => self.host.timestamp(),
        };
        self.host.advance_to(height, timestamp);
        Ok(&self.host)
    }
}

/// Applies every proposal in order.  Rejections are logged and counted; only a malformed
/// script aborts the replay.
pub(crate) fn replay(
    oracle: &mut CheckpointOracle,
    script: &ReplayScript,
) -> Result<ReplaySummary, InitError> {
    let mut feed = HostFeed::new(&script.host_blocks);
    let mut summary = ReplaySummary::default();

    for (i, entry) in script.proposals.iter().enumerate() {
        let host = feed.advance_to(entry.host_height)?;
        let proposal = entry.to_proposal();

        match oracle.propose_checkpoint(&entry.caller, &proposal, host) {
            Ok(ev) => {
                info!(
                    step = i,
                    index = ev.index,
                    height = ev.height,
                    commitment = %ev.commitment,
                    "CheckpointProposed"
                );
                summary.accepted.push(ev);
            }
            Err(err) => {
                warn!(step = i, height = entry.height, %err, "proposal rejected");
                summary.rejected += 1;
            }
        }
    }

    Ok(summary)
}
