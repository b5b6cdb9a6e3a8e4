//! Utilities shared by the oracle binaries.

pub mod logging;
