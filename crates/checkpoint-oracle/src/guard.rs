//! Validation of checkpoint proposals before they reach storage.

use strata_oracle_types::{Address, CheckpointProposal};

use crate::{
    anchor::{HostChain, check_anchor},
    auth::ProposerAuth,
    errors::{OracleError, OracleResult},
    ring::CheckpointRing,
};

/// Checks a proposal against the caller's identity, the ordering invariant and, if the
/// proposal is anchored, the host chain.
///
/// Checks run in a fixed order and the first failure wins:
///
/// 1. the caller must be authorized for `authority`
/// 2. the height must exceed the latest stored height
/// 3. the commitment must be non-zero
/// 4. an anchor, if present and non-zero, must match the host chain
pub fn check_proposal(
    auth: &impl ProposerAuth,
    authority: &Address,
    ring: &CheckpointRing,
    caller: &Address,
    proposal: &CheckpointProposal,
    host: &impl HostChain,
) -> OracleResult<()> {
    if !auth.is_authorized(authority, caller) {
        return Err(OracleError::Unauthorized(*caller));
    }

    let latest = ring.latest_height();
    if proposal.height() <= latest {
        return Err(OracleError::NonMonotonic {
            proposed: proposal.height(),
            latest,
        });
    }

    if proposal.commitment().is_zero() {
        return Err(OracleError::EmptyCommitment);
    }

    if let Some(anchor) = proposal.anchor().filter(|a| !a.blkid().is_zero()) {
        check_anchor(host, anchor)?;
    }

    Ok(())
}
