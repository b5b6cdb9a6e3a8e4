//! Proptest strategies for oracle value types.

use std::ops::Range;

use proptest::{collection::vec, prelude::*};

use crate::{Address, Buf32};

/// Strategy for generating random [`Buf32`] values.
pub fn buf32_strategy() -> impl Strategy<Value = Buf32> {
    any::<[u8; 32]>().prop_map(Buf32::from)
}

/// Strategy for generating [`Buf32`] values that are never zero, as required for commitments.
pub fn commitment_strategy() -> impl Strategy<Value = Buf32> {
    buf32_strategy().prop_filter("commitment must be non-zero", |b| !b.is_zero())
}

/// Strategy for generating random [`Address`] values.
pub fn address_strategy() -> impl Strategy<Value = Address> {
    any::<[u8; 20]>().prop_map(Address::from)
}

/// Strategy for a strictly increasing sequence of non-zero heights, of length in `len`.
pub fn increasing_heights_strategy(len: Range<usize>) -> impl Strategy<Value = Vec<u64>> {
    vec(1u64..1_000, len).prop_map(|gaps| {
        let mut height = 0;
        gaps.into_iter()
            .map(|gap| {
                height += gap;
                height
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn test_heights_strictly_increase(heights in increasing_heights_strategy(0..64)) {
            prop_assert!(heights.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(heights.iter().all(|h| *h > 0));
        }

        #[test]
        fn test_commitments_nonzero(c in commitment_strategy()) {
            prop_assert!(!c.is_zero());
        }
    }
}
