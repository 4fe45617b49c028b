#![cfg(feature = "algorithm")]
//! Integration tests for merging and set algebra.

use rstest::rstest;
use sublist::algorithm::{
    difference, intersection, is_disjoint, is_subset, make_set, make_set_with, merge, overlaps,
    symmetric_difference, union, union_by, union_with,
};
use sublist::compare::{ByKey, NaturalOrder, Reverse};
use sublist::output::MergeResult;
use sublist::view::{AsSublist, View};

// =============================================================================
// Multiset semantics
// =============================================================================

#[rstest]
fn test_merge_keeps_everything() {
    let first = vec![1, 1, 2, 4];
    let second = vec![1, 2, 3];
    assert_eq!(
        merge(first.sublist(), second.sublist()).to_vec(),
        vec![1, 1, 1, 2, 2, 3, 4]
    );
}

#[rstest]
fn test_operations_count_repeated_elements() {
    let first = vec![1, 1, 1, 2, 4];
    let second = vec![1, 2, 2, 3];
    let (left, right) = (first.sublist(), second.sublist());

    assert_eq!(union(left, right).to_vec(), vec![1, 1, 1, 2, 2, 3, 4]);
    assert_eq!(intersection(left, right).to_vec(), vec![1, 2]);
    assert_eq!(difference(left, right).to_vec(), vec![1, 1, 4]);
    assert_eq!(
        symmetric_difference(left, right).to_vec(),
        vec![1, 1, 2, 3, 4]
    );
}

#[rstest]
#[case(vec![], vec![], vec![])]
#[case(vec![1, 2], vec![], vec![1, 2])]
#[case(vec![], vec![3], vec![3])]
fn test_union_with_empty_inputs(
    #[case] first: Vec<i32>,
    #[case] second: Vec<i32>,
    #[case] expected: Vec<i32>,
) {
    assert_eq!(union(first.sublist(), second.sublist()).to_vec(), expected);
}

#[rstest]
fn test_equal_elements_come_from_the_first_input() {
    let first = vec![(1, "first"), (3, "first")];
    let second = vec![(1, "second"), (2, "second")];
    let by_number = ByKey::new(|pair: &(i32, &str)| pair.0);
    let combined = union_with(first.sublist(), second.sublist(), &by_number).to_vec();
    assert_eq!(combined, vec![(1, "first"), (2, "second"), (3, "first")]);
}

// =============================================================================
// Destinations
// =============================================================================

#[rstest]
fn test_copy_to_reports_progress_in_both_inputs() {
    let first = vec![1, 4, 6];
    let second = vec![2, 4, 5];
    let mut destination = [0; 3];
    let result =
        union(first.sublist(), second.sublist()).copy_to(&mut destination.sublist_mut());
    assert_eq!(destination, [1, 2, 4]);
    assert_eq!(
        result,
        MergeResult {
            first_source_offset: 2,
            second_source_offset: 2,
            destination_offset: 3,
        }
    );
}

#[rstest]
fn test_add_to_appends_into_a_window() {
    let first = vec![1, 3];
    let second = vec![2, 3];
    let mut destination = vec![10, 20, 30];
    let grown = union(first.sublist(), second.sublist())
        .add_to(destination.sublist_range_mut(1, 1).unwrap());
    assert_eq!(grown.to_vec(), vec![20, 1, 2, 3]);
    assert_eq!(destination, vec![10, 20, 1, 2, 3, 30]);
}

#[rstest]
fn test_union_of_descending_views() {
    let first = vec![9, 5, 1];
    let second = vec![8, 5, 2];
    let descending = union_by(first.sublist(), second.sublist(), |left: &i32, right: &i32| {
        right.cmp(left)
    })
    .to_vec();
    assert_eq!(descending, vec![9, 8, 5, 2, 1]);

    let through_reversed = union_with(
        first.sublist().reversed(),
        second.sublist().reversed(),
        NaturalOrder,
    )
    .to_vec();
    assert_eq!(through_reversed, vec![1, 2, 5, 8, 9]);
}

// =============================================================================
// Predicates and make_set
// =============================================================================

#[rstest]
#[case(vec![2, 4], vec![1, 2, 3, 4], true)]
#[case(vec![], vec![1], true)]
#[case(vec![2, 2], vec![1, 2, 3], false)]
#[case(vec![5], vec![1, 2, 3], false)]
fn test_is_subset(#[case] subset: Vec<i32>, #[case] superset: Vec<i32>, #[case] expected: bool) {
    assert_eq!(is_subset(&subset.sublist(), &superset.sublist()), expected);
}

#[rstest]
#[case(vec![1, 3], vec![2, 4], true, true)]
#[case(vec![1, 3], vec![3, 4], false, true)]
#[case(vec![1, 2], vec![5, 6], true, false)]
#[case(vec![], vec![1], true, false)]
fn test_disjoint_and_overlap(
    #[case] first: Vec<i32>,
    #[case] second: Vec<i32>,
    #[case] disjoint: bool,
    #[case] overlapping: bool,
) {
    assert_eq!(is_disjoint(&first.sublist(), &second.sublist()), disjoint);
    assert_eq!(overlaps(&first.sublist(), &second.sublist()), overlapping);
}

#[rstest]
fn test_make_set_on_reversed_window() {
    let mut values = vec![0, 3, 1, 3, 2, 1, 0];
    let boundary = make_set(&mut values.sublist_range_mut(1, 5).unwrap().reversed());
    assert_eq!(boundary, 3);
    assert_eq!(&values[3..6], &[3, 2, 1]);
    assert_eq!((values[0], values[6]), (0, 0));
}

#[rstest]
fn test_make_set_with_descending_comparer() {
    let mut values = vec![2, 5, 2, 9];
    let boundary = make_set_with(&mut values.sublist_mut(), &Reverse(NaturalOrder));
    assert_eq!(&values[..boundary], &[9, 5, 2]);
}
