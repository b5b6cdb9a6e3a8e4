//! Value types for the checkpoint oracle: byte buffers, checkpoint records, proposals and
//! the notification emitted on acceptance.

#[macro_use]
mod macros;

mod buf;
mod event;
mod proposal;
mod record;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use buf::{Address, Buf32, BufParseError};
pub use event::CheckpointProposed;
pub use proposal::{CheckpointProposal, HostAnchor};
pub use record::CheckpointRecord;
