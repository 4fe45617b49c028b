//! In-place sorting.
//!
//! Every sort arranges the view ascending under its comparison and works
//! purely by swapping, so none of them requires `Clone`. None is stable.
//! Empty and single-element views are left untouched.
//!
//! | Function | Worst case | Notes |
//! |---|---|---|
//! | [`quick_sort`] (= [`sort`]) | O(n²) | median-of-three, insertion sort for short ranges |
//! | [`heap_sort`] | O(n log n) | |
//! | [`shell_sort`] | O(n^1.5) | Knuth gap sequence |
//! | [`insertion_sort`] | O(n²) | linear on sorted input |
//! | [`selection_sort`] | O(n²) | at most n swaps |
//! | [`bubble_sort`] | O(n²) | stops after a pass without swaps |
//!
//! # Examples
//!
//! ```rust
//! use sublist::algorithm::{heap_sort_by, partial_sort, sort};
//! use sublist::view::{AsSublist, View};
//!
//! let mut values = vec![4, 1, 3, 9, 7];
//! sort(&mut values.sublist_mut());
//! assert_eq!(values, vec![1, 3, 4, 7, 9]);
//!
//! // Sort only the middle three, descending.
//! let mut values = vec![0, 2, 8, 5, 0];
//! heap_sort_by(&mut values.sublist_range_mut(1, 3).unwrap(), |left, right| right.cmp(left));
//! assert_eq!(values, vec![0, 8, 5, 2, 0]);
//!
//! // Sorting a reversed view sorts the backing range descending.
//! let mut values = vec![2, 3, 1];
//! sort(&mut values.sublist_mut().reversed());
//! assert_eq!(values, vec![3, 2, 1]);
//!
//! // Bring the two smallest to the front.
//! let mut values = vec![5, 4, 3, 2, 1];
//! partial_sort(&mut values.sublist_mut(), 2).unwrap();
//! assert_eq!(&values[..2], &[1, 2]);
//! ```

use std::cmp::Ordering;

use super::heap::{heapify, sift_down};
use crate::compare::{Comparer, FnComparer, NaturalOrder};
use crate::error::{SublistError, ensure_at_most};
use crate::view::ViewMut;

/// Ranges at or below this length are finished by insertion sort.
const INSERTION_THRESHOLD: usize = 16;

// =============================================================================
// Quicksort
// =============================================================================

/// Sorts the view ascending. Same as [`quick_sort`].
pub fn sort<V>(view: &mut V)
where
    V: ViewMut,
    V::Item: Ord,
{
    quick_sort_with(view, &NaturalOrder);
}

/// Sorts the view ascending under `compare`. Same as [`quick_sort_by`].
pub fn sort_by<V, F>(view: &mut V, compare: F)
where
    V: ViewMut,
    F: Fn(&V::Item, &V::Item) -> Ordering,
{
    quick_sort_with(view, &FnComparer::new(compare));
}

/// Sorts the view ascending under `comparer`. Same as [`quick_sort_with`].
pub fn sort_with<V, C>(view: &mut V, comparer: &C)
where
    V: ViewMut,
    C: Comparer<V::Item> + ?Sized,
{
    quick_sort_with(view, comparer);
}

/// Sorts the view ascending with quicksort.
///
/// # Complexity
///
/// O(n log n) expected, O(n²) worst case. Recursion depth is O(log n):
/// the smaller side is recursed into and the larger one iterated.
pub fn quick_sort<V>(view: &mut V)
where
    V: ViewMut,
    V::Item: Ord,
{
    quick_sort_with(view, &NaturalOrder);
}

/// Sorts the view with quicksort under `compare`.
pub fn quick_sort_by<V, F>(view: &mut V, compare: F)
where
    V: ViewMut,
    F: Fn(&V::Item, &V::Item) -> Ordering,
{
    quick_sort_with(view, &FnComparer::new(compare));
}

/// Sorts the view with quicksort under `comparer`.
pub fn quick_sort_with<V, C>(view: &mut V, comparer: &C)
where
    V: ViewMut,
    C: Comparer<V::Item> + ?Sized,
{
    let length = view.len();
    quick_sort_range(view, 0, length, comparer);
}

fn quick_sort_range<V, C>(view: &mut V, mut low: usize, mut high: usize, comparer: &C)
where
    V: ViewMut,
    C: Comparer<V::Item> + ?Sized,
{
    loop {
        if high - low <= INSERTION_THRESHOLD {
            insertion_sort_range(view, low, high, comparer);
            return;
        }
        let pivot = partition_around_median(view, low, high, comparer);
        if pivot - low < high - pivot {
            quick_sort_range(view, low, pivot, comparer);
            low = pivot + 1;
        } else {
            quick_sort_range(view, pivot + 1, high, comparer);
            high = pivot;
        }
    }
}

/// Partitions `[low, high)` around the median of its first, middle and last
/// elements and returns the pivot's final position.
///
/// Requires `high - low >= 3`.
fn partition_around_median<V, C>(view: &mut V, low: usize, high: usize, comparer: &C) -> usize
where
    V: ViewMut,
    C: Comparer<V::Item> + ?Sized,
{
    let middle = low + (high - low) / 2;
    let last = high - 1;
    if comparer.less(view.at(middle), view.at(low)) {
        view.swap(middle, low);
    }
    if comparer.less(view.at(last), view.at(low)) {
        view.swap(last, low);
    }
    if comparer.less(view.at(last), view.at(middle)) {
        view.swap(last, middle);
    }
    view.swap(low, middle);

    // The pivot sits at `low` while the two scans converge.
    let mut front = low + 1;
    let mut back = last;
    loop {
        while front <= back && comparer.less(view.at(front), view.at(low)) {
            front += 1;
        }
        while front <= back && comparer.less(view.at(low), view.at(back)) {
            back -= 1;
        }
        if front >= back {
            break;
        }
        view.swap(front, back);
        front += 1;
        back -= 1;
    }
    view.swap(low, back);
    back
}

// =============================================================================
// Heapsort
// =============================================================================

/// Sorts the view ascending with heapsort.
///
/// # Complexity
///
/// O(n log n) comparisons and swaps in every case.
pub fn heap_sort<V>(view: &mut V)
where
    V: ViewMut,
    V::Item: Ord,
{
    heap_sort_with(view, &NaturalOrder);
}

/// Sorts the view with heapsort under `compare`.
pub fn heap_sort_by<V, F>(view: &mut V, compare: F)
where
    V: ViewMut,
    F: Fn(&V::Item, &V::Item) -> Ordering,
{
    heap_sort_with(view, &FnComparer::new(compare));
}

/// Sorts the view with heapsort under `comparer`.
pub fn heap_sort_with<V, C>(view: &mut V, comparer: &C)
where
    V: ViewMut,
    C: Comparer<V::Item> + ?Sized,
{
    let length = view.len();
    heapify(view, length, comparer);
    sort_heap_prefix(view, length, comparer);
}

/// Turns a max-heap occupying `[0, end)` into an ascending run.
fn sort_heap_prefix<V, C>(view: &mut V, end: usize, comparer: &C)
where
    V: ViewMut,
    C: Comparer<V::Item> + ?Sized,
{
    for last in (1..end).rev() {
        view.swap(0, last);
        sift_down(view, 0, last, comparer);
    }
}

// =============================================================================
// Simple sorts
// =============================================================================

/// Sorts the view ascending with insertion sort.
pub fn insertion_sort<V>(view: &mut V)
where
    V: ViewMut,
    V::Item: Ord,
{
    insertion_sort_with(view, &NaturalOrder);
}

/// Sorts the view with insertion sort under `compare`.
pub fn insertion_sort_by<V, F>(view: &mut V, compare: F)
where
    V: ViewMut,
    F: Fn(&V::Item, &V::Item) -> Ordering,
{
    insertion_sort_with(view, &FnComparer::new(compare));
}

/// Sorts the view with insertion sort under `comparer`.
pub fn insertion_sort_with<V, C>(view: &mut V, comparer: &C)
where
    V: ViewMut,
    C: Comparer<V::Item> + ?Sized,
{
    let length = view.len();
    insertion_sort_range(view, 0, length, comparer);
}

fn insertion_sort_range<V, C>(view: &mut V, low: usize, high: usize, comparer: &C)
where
    V: ViewMut,
    C: Comparer<V::Item> + ?Sized,
{
    for index in low + 1..high {
        let mut current = index;
        while current > low && comparer.less(view.at(current), view.at(current - 1)) {
            view.swap(current, current - 1);
            current -= 1;
        }
    }
}

/// Sorts the view ascending with selection sort.
pub fn selection_sort<V>(view: &mut V)
where
    V: ViewMut,
    V::Item: Ord,
{
    selection_sort_with(view, &NaturalOrder);
}

/// Sorts the view with selection sort under `compare`.
pub fn selection_sort_by<V, F>(view: &mut V, compare: F)
where
    V: ViewMut,
    F: Fn(&V::Item, &V::Item) -> Ordering,
{
    selection_sort_with(view, &FnComparer::new(compare));
}

/// Sorts the view with selection sort under `comparer`.
pub fn selection_sort_with<V, C>(view: &mut V, comparer: &C)
where
    V: ViewMut,
    C: Comparer<V::Item> + ?Sized,
{
    let length = view.len();
    for start in 0..length {
        let mut smallest = start;
        for candidate in start + 1..length {
            if comparer.less(view.at(candidate), view.at(smallest)) {
                smallest = candidate;
            }
        }
        if smallest != start {
            view.swap(start, smallest);
        }
    }
}

/// Sorts the view ascending with bubble sort.
pub fn bubble_sort<V>(view: &mut V)
where
    V: ViewMut,
    V::Item: Ord,
{
    bubble_sort_with(view, &NaturalOrder);
}

/// Sorts the view with bubble sort under `compare`.
pub fn bubble_sort_by<V, F>(view: &mut V, compare: F)
where
    V: ViewMut,
    F: Fn(&V::Item, &V::Item) -> Ordering,
{
    bubble_sort_with(view, &FnComparer::new(compare));
}

/// Sorts the view with bubble sort under `comparer`.
pub fn bubble_sort_with<V, C>(view: &mut V, comparer: &C)
where
    V: ViewMut,
    C: Comparer<V::Item> + ?Sized,
{
    let mut end = view.len();
    while end > 1 {
        // Everything from the last swap onwards is already in place.
        let mut last_swap = 0;
        for index in 1..end {
            if comparer.less(view.at(index), view.at(index - 1)) {
                view.swap(index, index - 1);
                last_swap = index;
            }
        }
        end = last_swap;
    }
}

/// Sorts the view ascending with Shell sort.
pub fn shell_sort<V>(view: &mut V)
where
    V: ViewMut,
    V::Item: Ord,
{
    shell_sort_with(view, &NaturalOrder);
}

/// Sorts the view with Shell sort under `compare`.
pub fn shell_sort_by<V, F>(view: &mut V, compare: F)
where
    V: ViewMut,
    F: Fn(&V::Item, &V::Item) -> Ordering,
{
    shell_sort_with(view, &FnComparer::new(compare));
}

/// Sorts the view with Shell sort under `comparer`, using the gaps
/// 1, 4, 13, 40, ...
pub fn shell_sort_with<V, C>(view: &mut V, comparer: &C)
where
    V: ViewMut,
    C: Comparer<V::Item> + ?Sized,
{
    let length = view.len();
    let mut gap = 1;
    while gap < length / 3 {
        gap = 3 * gap + 1;
    }
    while gap >= 1 {
        for index in gap..length {
            let mut current = index;
            while current >= gap && comparer.less(view.at(current), view.at(current - gap)) {
                view.swap(current, current - gap);
                current -= gap;
            }
        }
        gap /= 3;
    }
}

// =============================================================================
// Partial sort
// =============================================================================

/// Places the `k` smallest elements, ascending, at the front of the view.
///
/// The order of the remaining elements is unspecified.
///
/// # Errors
///
/// Returns [`SublistError::ArgumentOutOfRange`] if `k > view.len()`; the
/// view is left untouched.
///
/// # Complexity
///
/// O(n log k).
pub fn partial_sort<V>(view: &mut V, k: usize) -> Result<(), SublistError>
where
    V: ViewMut,
    V::Item: Ord,
{
    partial_sort_with(view, k, &NaturalOrder)
}

/// Places the `k` smallest elements under `compare` at the front.
///
/// # Errors
///
/// Returns [`SublistError::ArgumentOutOfRange`] if `k > view.len()`.
pub fn partial_sort_by<V, F>(view: &mut V, k: usize, compare: F) -> Result<(), SublistError>
where
    V: ViewMut,
    F: Fn(&V::Item, &V::Item) -> Ordering,
{
    partial_sort_with(view, k, &FnComparer::new(compare))
}

/// Places the `k` smallest elements under `comparer` at the front.
///
/// # Errors
///
/// Returns [`SublistError::ArgumentOutOfRange`] if `k > view.len()`.
pub fn partial_sort_with<V, C>(view: &mut V, k: usize, comparer: &C) -> Result<(), SublistError>
where
    V: ViewMut,
    C: Comparer<V::Item> + ?Sized,
{
    ensure_at_most("k", k, view.len())?;
    if k == 0 {
        return Ok(());
    }
    heapify(view, k, comparer);
    for index in k..view.len() {
        if comparer.less(view.at(index), view.at(0)) {
            view.swap(0, index);
            sift_down(view, 0, k, comparer);
        }
    }
    sort_heap_prefix(view, k, comparer);
    Ok(())
}
