//! Checkpoint oracle.
//!
//! Keeps a bounded, strictly height-ordered record of commitments proposed by a single
//! authority, and answers "which checkpoint covers height H" with the first checkpoint at or
//! above H.  Proposals may optionally pin themselves to a recent host block so that a host
//! reorg invalidates them.

mod anchor;
mod auth;
mod errors;
mod guard;
mod lookup;
mod oracle;
mod params;
mod ring;
mod snapshot;

pub use anchor::{HOST_BLOCKHASH_WINDOW, HostChain, WindowedHostChain, check_anchor};
pub use auth::{ProposerAuth, StaticAuthority};
pub use errors::{OracleError, OracleResult};
pub use guard::check_proposal;
pub use oracle::{CheckpointOracle, OracleState};
pub use params::OracleParams;
pub use ring::{CheckpointRing, MAX_CAPACITY};
pub use snapshot::{load_snapshot, save_snapshot};
