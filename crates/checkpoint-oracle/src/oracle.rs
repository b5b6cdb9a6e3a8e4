use borsh::{BorshDeserialize, BorshSerialize};
use strata_oracle_types::{Address, CheckpointProposal, CheckpointProposed, CheckpointRecord};
use tracing::{debug, info, instrument};

use crate::{
    anchor::HostChain,
    auth::{ProposerAuth, StaticAuthority},
    errors::{OracleError, OracleResult},
    guard::check_proposal,
    params::OracleParams,
    ring::CheckpointRing,
};

/// Persisted oracle state.
///
/// Field order is the persisted layout: authority, then the ring (`max_count`,
/// `latest_index`, slots).
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct OracleState {
    authority: Address,
    ring: CheckpointRing,
}

impl OracleState {
    pub fn new(authority: Address, max_count: u64) -> OracleResult<Self> {
        Ok(Self {
            authority,
            ring: CheckpointRing::new(max_count)?,
        })
    }

    pub fn authority(&self) -> &Address {
        &self.authority
    }

    pub fn ring(&self) -> &CheckpointRing {
        &self.ring
    }

    pub fn validate(&self) -> OracleResult<()> {
        self.ring.validate()
    }
}

/// The checkpoint oracle: a bounded store of checkpoints that only the registered authority
/// may extend, in strictly increasing height order.
///
/// An oracle starts uninitialized and must be set up with [`init`](Self::init) exactly once
/// before use. Writes validate completely before touching storage, so a rejected write
/// leaves the oracle untouched.
#[derive(Clone, Debug)]
pub struct CheckpointOracle<A = StaticAuthority> {
    auth: A,
    state: Option<OracleState>,
}

impl CheckpointOracle<StaticAuthority> {
    /// Creates an uninitialized oracle that accepts exactly the registered authority.
    pub fn new() -> Self {
        Self::with_auth(StaticAuthority)
    }
}

impl Default for CheckpointOracle<StaticAuthority> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ProposerAuth> CheckpointOracle<A> {
    /// Creates an uninitialized oracle using `auth` to authorize proposers.
    pub fn with_auth(auth: A) -> Self {
        Self { auth, state: None }
    }

    /// Restores an initialized oracle from previously persisted state.
    pub fn from_state(auth: A, state: OracleState) -> OracleResult<Self> {
        state.validate()?;
        Ok(Self {
            auth,
            state: Some(state),
        })
    }

    /// Initializes the oracle.  Can only succeed once per instance.
    #[instrument(skip(self, authority), fields(%authority))]
    pub fn init(&mut self, authority: Address, max_count: u64) -> OracleResult<()> {
        if self.state.is_some() {
            return Err(OracleError::AlreadyInitialized);
        }

        self.state = Some(OracleState::new(authority, max_count)?);
        info!(%authority, %max_count, "initialized checkpoint oracle");
        Ok(())
    }

    /// Initializes the oracle from params.
    pub fn init_with_params(&mut self, params: &OracleParams) -> OracleResult<()> {
        params.check_well_formed()?;
        self.init(params.authority, params.max_count)
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<&OracleState> {
        self.state.as_ref()
    }

    fn ring(&self) -> OracleResult<&CheckpointRing> {
        self.state
            .as_ref()
            .map(|s| &s.ring)
            .ok_or(OracleError::NotInitialized)
    }

    pub fn authority(&self) -> OracleResult<&Address> {
        self.state
            .as_ref()
            .map(|s| &s.authority)
            .ok_or(OracleError::NotInitialized)
    }

    /// Validates and records a checkpoint proposal from `caller`, returning the notification
    /// for external observers.
    #[instrument(
        skip(self, caller, proposal, host),
        fields(
            %caller,
            height = proposal.height(),
            commitment = %proposal.commitment(),
        )
    )]
    pub fn propose_checkpoint(
        &mut self,
        caller: &Address,
        proposal: &CheckpointProposal,
        host: &impl HostChain,
    ) -> OracleResult<CheckpointProposed> {
        let state = self.state.as_mut().ok_or(OracleError::NotInitialized)?;

        if let Err(err) = check_proposal(
            &self.auth,
            &state.authority,
            &state.ring,
            caller,
            proposal,
            host,
        ) {
            debug!(%err, "rejected checkpoint proposal");
            return Err(err);
        }

        let record = CheckpointRecord::new(
            *proposal.commitment(),
            proposal.height(),
            host.timestamp(),
        );
        let index = state.ring.append(record);
        let event = CheckpointProposed::new(index, &record);

        info!(
            %index,
            height = event.height,
            accepted_at = event.accepted_at,
            "accepted checkpoint"
        );
        Ok(event)
    }

    /// Returns the record at physical slot `index`.
    pub fn record(&self, index: u64) -> OracleResult<CheckpointRecord> {
        self.ring()?.get(index).copied()
    }

    /// Returns the physical slot of the first checkpoint at or above `height`.
    pub fn index_after(&self, height: u64) -> OracleResult<u64> {
        self.ring()?.index_after(height)
    }

    /// Returns the first checkpoint at or above `height`.
    pub fn record_after(&self, height: u64) -> OracleResult<CheckpointRecord> {
        self.ring()?.record_after(height).copied()
    }

    /// Returns the most recent checkpoint, if any.
    pub fn latest_record(&self) -> OracleResult<Option<CheckpointRecord>> {
        Ok(self.ring()?.latest().copied())
    }

    /// Physical slot the next accepted checkpoint is written to.
    pub fn next_write_index(&self) -> OracleResult<u64> {
        Ok(self.ring()?.next_index())
    }

    /// Physical slot holding the most recent checkpoint.
    pub fn latest_index(&self) -> OracleResult<u64> {
        Ok(self.ring()?.latest_index())
    }

    /// Height of the most recent checkpoint, 0 if none has been accepted (or the oracle is
    /// uninitialized).
    pub fn latest_height(&self) -> u64 {
        self.ring().map(|r| r.latest_height()).unwrap_or(0)
    }

    /// Number of checkpoints currently retained.
    pub fn count(&self) -> u64 {
        self.ring().map(|r| r.count()).unwrap_or(0)
    }

    /// Retained checkpoints in acceptance order, oldest first.
    pub fn checkpoints(&self) -> OracleResult<Vec<CheckpointRecord>> {
        Ok(self.ring()?.iter_logical().copied().collect())
    }

    /// Kept for older consumers; always 0.
    pub fn starting_block_number(&self) -> u64 {
        0
    }

    /// Kept for older consumers; always 0.
    pub fn starting_timestamp(&self) -> u64 {
        0
    }
}
