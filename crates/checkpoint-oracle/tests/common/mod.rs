//! Shared fixtures for the oracle integration tests.

#![allow(unreachable_pub, reason = "test utilities")]
#![allow(dead_code, reason = "utilities used by different test files")]

use strata_checkpoint_oracle::{CheckpointOracle, WindowedHostChain};
use strata_oracle_types::{Address, Buf32, CheckpointProposal};

pub const AUTHORITY: Address = Address::new([0xaa; 20]);
pub const OUTSIDER: Address = Address::new([0xbb; 20]);

/// Commitment whose bytes are all `n`.
pub fn root(n: u8) -> Buf32 {
    Buf32::new([n; 32])
}

/// Oracle initialized with [`AUTHORITY`] and the given capacity.
pub fn new_oracle(max_count: u64) -> CheckpointOracle {
    let mut oracle = CheckpointOracle::new();
    oracle
        .init(AUTHORITY, max_count)
        .expect("test: init oracle");
    oracle
}

/// Host view at block 1000 with hashes for every block in the lookup window.
pub fn host() -> WindowedHostChain {
    let mut host = WindowedHostChain::new(0, 0);
    for h in 700..1000 {
        host.insert_block(h, host_blkid(h));
    }
    host.advance_to(1000, 1_700_000_000);
    host
}

/// Deterministic hash for host block `height`.
pub fn host_blkid(height: u64) -> Buf32 {
    let mut buf = [0x5a; 32];
    buf[..8].copy_from_slice(&height.to_be_bytes());
    Buf32::new(buf)
}

/// Proposes an unanchored checkpoint from [`AUTHORITY`], panicking on rejection.
pub fn accept(oracle: &mut CheckpointOracle, host: &WindowedHostChain, n: u8, height: u64) -> u64 {
    oracle
        .propose_checkpoint(&AUTHORITY, &CheckpointProposal::new(root(n), height), host)
        .expect("test: proposal accepted")
        .index
}
