use serde::{Deserialize, Serialize};
use strata_oracle_types::Address;

use crate::{errors::OracleResult, ring::check_capacity};

/// Parameters an oracle instance is initialized with.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct OracleParams {
    /// Identity allowed to propose checkpoints.
    pub authority: Address,

    /// Number of checkpoints retained before the oldest is overwritten.
    pub max_count: u64,
}

impl OracleParams {
    pub fn new(authority: Address, max_count: u64) -> Self {
        Self {
            authority,
            max_count,
        }
    }

    pub fn check_well_formed(&self) -> OracleResult<()> {
        check_capacity(self.max_count)
    }
}
