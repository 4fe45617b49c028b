//! Integration tests for views over the supported backing collections.

use std::collections::VecDeque;

use rstest::rstest;
use sublist::error::SublistError;
use sublist::view::{AsSublist, Sublist, View, ViewMut};

// =============================================================================
// Bounds
// =============================================================================

#[rstest]
#[case(0, 0)]
#[case(0, 6)]
#[case(6, 0)]
#[case(2, 3)]
fn test_valid_ranges_are_accepted(#[case] offset: usize, #[case] count: usize) {
    let backing = [1, 2, 3, 4, 5, 6];
    let view = backing.sublist_range(offset, count).unwrap();
    assert_eq!(view.len(), count);
    assert_eq!(view.to_vec(), backing[offset..offset + count].to_vec());
}

#[rstest]
#[case(7, 0)]
#[case(0, 7)]
#[case(4, 3)]
fn test_ranges_past_the_end_are_rejected(#[case] offset: usize, #[case] count: usize) {
    let backing = [1, 2, 3, 4, 5, 6];
    let result = backing.sublist_range(offset, count);
    assert!(matches!(result, Err(SublistError::ArgumentOutOfRange(_))));
}

#[rstest]
fn test_element_at_reports_logical_index() {
    let backing = vec![10, 20, 30, 40];
    let view = backing.sublist_range(1, 2).unwrap();
    assert_eq!(view.element_at(1), Ok(&30));
    assert_eq!(
        view.element_at(2),
        Err(SublistError::index_out_of_range(2, 2))
    );
}

#[rstest]
fn test_writes_outside_the_view_are_rejected() {
    let mut backing = vec![1, 2, 3, 4];
    let mut view = backing.sublist_range_mut(1, 2).unwrap();
    assert_eq!(
        view.set(2, 99),
        Err(SublistError::index_out_of_range(2, 2))
    );
    assert_eq!(view.set(1, 30), Ok(()));
    assert_eq!(backing, vec![1, 2, 30, 4]);
}

// =============================================================================
// Composition
// =============================================================================

#[rstest]
fn test_nested_views_accumulate_offsets() {
    let backing: Vec<i32> = (0..10).collect();
    let view = backing
        .sublist()
        .nest(2, 7)
        .and_then(|view| view.nest(1, 4))
        .and_then(|view| view.nest_from(2))
        .unwrap();
    assert_eq!(view.to_vec(), vec![5, 6]);
    assert_eq!(view.offset(), 5);
}

#[rstest]
fn test_nest_is_checked_against_the_parent_view() {
    let backing: Vec<i32> = (0..10).collect();
    let parent = backing.sublist_range(0, 3).unwrap();
    assert!(parent.nest(2, 2).is_err());
}

#[rstest]
fn test_reversal_composes_with_nesting() {
    let backing = vec!['a', 'b', 'c', 'd', 'e', 'f'];
    let reversed = backing.sublist().reversed();
    assert_eq!(reversed.to_vec(), vec!['f', 'e', 'd', 'c', 'b', 'a']);

    let inner = reversed.nest(1, 3).unwrap();
    assert_eq!(inner.to_vec(), vec!['e', 'd', 'c']);

    let restored: Sublist<'_, Vec<char>> = reversed.reversed();
    assert_eq!(restored.to_vec(), backing);
}

#[rstest]
fn test_writes_through_reversed_view_land_mirrored() {
    let mut backing = vec![0; 5];
    let mut reversed = backing.sublist_range_mut(1, 3).unwrap().reversed();
    *reversed.at_mut(0) = 1;
    reversed.swap(0, 2);
    assert_eq!(backing, vec![0, 1, 0, 0, 0]);
}

#[rstest]
fn test_iteration_runs_in_both_directions() {
    let backing = [1, 2, 3, 4];
    let view = backing.sublist_range(1, 3).unwrap();
    assert_eq!(view.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
    assert_eq!(view.iter().rev().copied().collect::<Vec<_>>(), vec![4, 3, 2]);
    assert_eq!(view.iter().len(), 3);
}

// =============================================================================
// Growth
// =============================================================================

#[rstest]
fn test_growth_keeps_the_view_window() {
    let mut backing = vec![1, 2, 3, 4];
    let view = backing.sublist_range_mut(1, 2).unwrap();
    let view = view.push_front(10).push_back(20);
    let (view, removed) = view.remove(1).unwrap();
    assert_eq!(removed, 2);
    assert_eq!(view.to_vec(), vec![10, 3, 20]);
    assert_eq!(backing, vec![1, 10, 3, 20, 4]);
}

#[rstest]
fn test_clear_removes_only_the_window() {
    let mut backing = vec![1, 2, 3, 4, 5];
    let view = backing.sublist_range_mut(1, 3).unwrap().clear();
    assert!(view.is_empty());
    assert_eq!(backing, vec![1, 5]);
}

#[rstest]
fn test_clear_window_of_two() {
    let mut backing = vec![1, 2, 3, 4, 5];
    let _ = backing.sublist_range_mut(1, 2).unwrap().clear();
    assert_eq!(backing, vec![1, 4, 5]);
}

#[rstest]
fn test_vec_deque_backs_a_growable_view() {
    let mut backing: VecDeque<i32> = (1..=4).collect();
    let view = backing
        .sublist_range_mut(2, 1)
        .unwrap()
        .extend_at(0, [7, 8])
        .unwrap();
    assert_eq!(view.to_vec(), vec![7, 8, 3]);
    assert_eq!(backing, VecDeque::from(vec![1, 2, 7, 8, 3, 4]));
}

#[rstest]
fn test_reborrow_allows_repeated_mutation() {
    let mut backing = vec![3, 1, 2];
    let mut view = backing.sublist_mut();
    view.reborrow().swap(0, 1);
    view.reborrow().swap(1, 2);
    assert_eq!(view.to_vec(), vec![1, 2, 3]);
}
