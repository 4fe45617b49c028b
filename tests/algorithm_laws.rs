#![cfg(feature = "algorithm")]
//! Property-based tests for the reordering and searching algorithms.
//!
//! ## Laws
//!
//! 1. **Sorting**: every sort yields the ascending permutation of its input,
//!    and sorting is idempotent.
//! 2. **Partition boundary**: elements before the boundary satisfy the
//!    predicate and elements after it do not; the stable variant keeps the
//!    original relative order inside each group.
//! 3. **Search agreement**: bounds and binary search agree with
//!    [`slice::partition_point`].
//! 4. **Heap**: `make_heap` establishes the heap property and repeated
//!    `heap_remove` yields a sorted view.
//! 5. **Permutation round trip**: `previous_permutation` undoes
//!    `next_permutation`.

use proptest::prelude::*;
use sublist::algorithm::*;
use sublist::view::AsSublist;

fn small_values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50..50_i32, 0..64)
}

fn sorted_copy(values: &[i32]) -> Vec<i32> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted
}

proptest! {
    #[test]
    fn prop_quick_sort_sorts(values in small_values()) {
        let mut sorted = values.clone();
        quick_sort(&mut sorted.sublist_mut());
        prop_assert_eq!(sorted, sorted_copy(&values));
    }

    #[test]
    fn prop_heap_sort_sorts(values in small_values()) {
        let mut sorted = values.clone();
        heap_sort(&mut sorted.sublist_mut());
        prop_assert_eq!(sorted, sorted_copy(&values));
    }

    #[test]
    fn prop_shell_sort_sorts(values in small_values()) {
        let mut sorted = values.clone();
        shell_sort(&mut sorted.sublist_mut());
        prop_assert_eq!(sorted, sorted_copy(&values));
    }

    #[test]
    fn prop_quadratic_sorts_sort(values in prop::collection::vec(-10..10_i32, 0..24)) {
        let expected = sorted_copy(&values);
        let mut sorted = values.clone();
        insertion_sort(&mut sorted.sublist_mut());
        prop_assert_eq!(&sorted, &expected);
        let mut sorted = values.clone();
        selection_sort(&mut sorted.sublist_mut());
        prop_assert_eq!(&sorted, &expected);
        let mut sorted = values.clone();
        bubble_sort(&mut sorted.sublist_mut());
        prop_assert_eq!(&sorted, &expected);
    }

    #[test]
    fn prop_sort_is_idempotent(values in small_values()) {
        let mut once = values.clone();
        sort(&mut once.sublist_mut());
        let mut twice = once.clone();
        sort(&mut twice.sublist_mut());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_partial_sort_prefix(values in small_values(), k_seed in any::<usize>()) {
        let k = k_seed % (values.len() + 1);
        let mut partially = values.clone();
        partial_sort(&mut partially.sublist_mut(), k).unwrap();
        let expected = sorted_copy(&values);
        prop_assert_eq!(&partially[..k], &expected[..k]);
        prop_assert_eq!(sorted_copy(&partially), expected);
    }

    #[test]
    fn prop_partition_boundary(values in small_values(), divisor in 2..5_i32) {
        let holds = |value: &i32| value.rem_euclid(divisor) == 0;
        let mut partitioned = values.clone();
        let boundary = partition(&mut partitioned.sublist_mut(), holds);
        prop_assert!(partitioned[..boundary].iter().all(holds));
        prop_assert!(!partitioned[boundary..].iter().any(holds));
        prop_assert_eq!(sorted_copy(&partitioned), sorted_copy(&values));
        prop_assert_eq!(partition_point(&partitioned.sublist(), holds), boundary);
    }

    #[test]
    fn prop_stable_partition_keeps_group_order(values in small_values(), divisor in 2..5_i32) {
        let holds = |value: &i32| value.rem_euclid(divisor) == 0;
        let mut partitioned = values.clone();
        let boundary = stable_partition(&mut partitioned.sublist_mut(), holds);
        let expected: Vec<i32> = values
            .iter()
            .copied()
            .filter(holds)
            .chain(values.iter().copied().filter(|value| !holds(value)))
            .collect();
        prop_assert_eq!(boundary, values.iter().filter(|value| holds(value)).count());
        prop_assert_eq!(partitioned, expected);
    }

    #[test]
    fn prop_bounds_agree_with_partition_point(values in small_values(), target in -60..60_i32) {
        let sorted = sorted_copy(&values);
        let view = sorted.sublist();
        let lower = sorted.partition_point(|element| *element < target);
        let upper = sorted.partition_point(|element| *element <= target);
        prop_assert_eq!(lower_bound(&view, &target), lower);
        prop_assert_eq!(upper_bound(&view, &target), upper);
        let result = binary_search(&view, &target);
        prop_assert_eq!(result.index, lower);
        prop_assert_eq!(result.exists, lower < upper);
    }

    #[test]
    fn prop_heap_drains_in_order(values in small_values()) {
        let mut heap = values.clone();
        make_heap(&mut heap.sublist_mut());
        prop_assert_eq!(is_heap(&heap.sublist()).index, heap.len());

        let mut remaining = heap.len();
        while remaining > 0 {
            remaining = heap_remove(&mut heap.sublist_range_mut(0, remaining).unwrap());
        }
        prop_assert_eq!(heap, sorted_copy(&values));
    }

    #[test]
    fn prop_permutation_round_trip(values in prop::collection::vec(0..4_i32, 0..8)) {
        let mut stepped = values.clone();
        next_permutation(&mut stepped.sublist_mut());
        previous_permutation(&mut stepped.sublist_mut());
        prop_assert_eq!(stepped, values);
    }

    #[test]
    fn prop_rotate_matches_slice_rotate(values in small_values(), middle_seed in any::<usize>()) {
        let middle = middle_seed % (values.len() + 1);
        let mut rotated = values.clone();
        rotate(&mut rotated.sublist_mut(), middle).unwrap();
        let mut expected = values.clone();
        expected.rotate_left(middle);
        prop_assert_eq!(rotated, expected);
    }
}
