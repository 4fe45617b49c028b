//! Property-based tests for view composition.
//!
//! ## Laws
//!
//! 1. **Bounds**: any chain of `nest` and `reversed` calls only ever reaches
//!    elements of the backing collection, and presents exactly the elements a
//!    slice-based model predicts.
//! 2. **Reversal involution**: `v.reversed().reversed()` equals `v`.
//! 3. **Rejection**: a `nest` that does not fit its parent fails and leaves
//!    nothing behind.

use proptest::prelude::*;
use sublist::view::{AsSublist, View};

fn nest_operations() -> impl Strategy<Value = Vec<(bool, usize, usize)>> {
    prop::collection::vec((any::<bool>(), 0..64_usize, 0..64_usize), 0..12)
}

proptest! {
    #[test]
    fn prop_nest_and_reverse_match_slice_model(
        length in 0..48_usize,
        operations in nest_operations(),
    ) {
        let backing: Vec<usize> = (0..length).collect();
        let mut view = backing.sublist();
        let mut flipped = false;
        let mut model = backing.clone();

        for (reverse, offset_seed, count_seed) in operations {
            if reverse {
                flipped = !flipped;
                model.reverse();
            } else {
                let available = model.len();
                let offset = offset_seed % (available + 1);
                let count = count_seed % (available - offset + 1);
                view = if flipped {
                    view.reversed().nest(offset, count).unwrap().reversed()
                } else {
                    view.nest(offset, count).unwrap()
                };
                model = model[offset..offset + count].to_vec();
            }

            let observed = if flipped {
                view.reversed().to_vec()
            } else {
                view.to_vec()
            };
            prop_assert!(observed.iter().all(|&physical| physical < length));
            prop_assert_eq!(observed, model.clone());
        }
    }

    #[test]
    fn prop_reversal_is_an_involution(
        values in prop::collection::vec(any::<i16>(), 0..32),
        offset_seed in any::<usize>(),
        count_seed in any::<usize>(),
    ) {
        let offset = offset_seed % (values.len() + 1);
        let count = count_seed % (values.len() - offset + 1);
        let view = values.sublist_range(offset, count).unwrap();
        prop_assert_eq!(view.reversed().reversed().to_vec(), view.to_vec());
        prop_assert_eq!(view.reversed().iter().rev().copied().collect::<Vec<_>>(), view.to_vec());
    }

    #[test]
    fn prop_oversized_nest_is_rejected(
        values in prop::collection::vec(any::<u8>(), 0..16),
        offset in 0..24_usize,
        count in 0..24_usize,
    ) {
        let fits = offset + count <= values.len();
        prop_assert_eq!(values.sublist().nest(offset, count).is_ok(), fits);
        prop_assert_eq!(values.sublist_range(offset, count).is_ok(), fits);
    }
}
