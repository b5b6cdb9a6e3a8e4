//! Proposer authorization.

use strata_oracle_types::Address;

/// Decides whether `caller` may propose on behalf of the registered `authority`.
///
/// The guard only consumes this decision. How a caller proves its identity (signatures,
/// attestations, ...) is up to the implementation.
pub trait ProposerAuth {
    fn is_authorized(&self, authority: &Address, caller: &Address) -> bool;
}

/// Accepts exactly the registered authority identity.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticAuthority;

impl ProposerAuth for StaticAuthority {
    fn is_authorized(&self, authority: &Address, caller: &Address) -> bool {
        authority == caller
    }
}

impl<T: ProposerAuth + ?Sized> ProposerAuth for &T {
    fn is_authorized(&self, authority: &Address, caller: &Address) -> bool {
        (**self).is_authorized(authority, caller)
    }
}
