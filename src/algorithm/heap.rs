//! Implicit binary max-heaps.
//!
//! The heap lives directly in the view: the children of position `i` are at
//! `2i + 1` and `2i + 2`, and no element orders before any of its children.
//! With an inverted comparison ([`Reverse`](crate::compare::Reverse)) the
//! same functions maintain a min-heap.
//!
//! # Examples
//!
//! ```rust
//! use sublist::algorithm::{heap_add, heap_remove, is_heap, make_heap};
//! use sublist::view::{AsSublist, View};
//!
//! let mut values = vec![3, 1, 4, 1, 5];
//! make_heap(&mut values.sublist_mut());
//! assert_eq!(values[0], 5);
//! assert!(is_heap(&values.sublist()).exists);
//!
//! // Append, then restore the heap over the grown view.
//! values.push(9);
//! heap_add(&mut values.sublist_mut());
//! assert_eq!(values[0], 9);
//!
//! // Pop the maximum: it moves to the end, the rest stays a heap.
//! let boundary = heap_remove(&mut values.sublist_mut());
//! assert_eq!(values[boundary], 9);
//! assert!(is_heap(&values.sublist().nest(0, boundary).unwrap()).exists);
//! ```

use std::cmp::Ordering;

use crate::compare::{Comparer, FnComparer, NaturalOrder};
use crate::output::SearchResult;
use crate::view::{View, ViewMut};

/// Rearranges the view into a max-heap.
///
/// # Complexity
///
/// O(n).
pub fn make_heap<V>(view: &mut V)
where
    V: ViewMut,
    V::Item: Ord,
{
    make_heap_with(view, &NaturalOrder);
}

/// Rearranges the view into a max-heap under `compare`.
pub fn make_heap_by<V, F>(view: &mut V, compare: F)
where
    V: ViewMut,
    F: Fn(&V::Item, &V::Item) -> Ordering,
{
    make_heap_with(view, &FnComparer::new(compare));
}

/// Rearranges the view into a max-heap under `comparer`.
pub fn make_heap_with<V, C>(view: &mut V, comparer: &C)
where
    V: ViewMut,
    C: Comparer<V::Item> + ?Sized,
{
    let length = view.len();
    heapify(view, length, comparer);
}

/// Restores the heap after its last element was added.
///
/// Everything but the last element must already form a heap. The last
/// element is percolated up to its place.
///
/// # Complexity
///
/// O(log n).
pub fn heap_add<V>(view: &mut V)
where
    V: ViewMut,
    V::Item: Ord,
{
    heap_add_with(view, &NaturalOrder);
}

/// Restores the heap under `compare` after its last element was added.
pub fn heap_add_by<V, F>(view: &mut V, compare: F)
where
    V: ViewMut,
    F: Fn(&V::Item, &V::Item) -> Ordering,
{
    heap_add_with(view, &FnComparer::new(compare));
}

/// Restores the heap under `comparer` after its last element was added.
pub fn heap_add_with<V, C>(view: &mut V, comparer: &C)
where
    V: ViewMut,
    C: Comparer<V::Item> + ?Sized,
{
    if let Some(last) = view.len().checked_sub(1) {
        sift_up(view, last, comparer);
    }
}

/// Moves the maximum to the last position and restores the heap over the
/// remaining elements.
///
/// Returns the new heap boundary `len() - 1`, or `0` for an empty view.
///
/// # Complexity
///
/// O(log n).
pub fn heap_remove<V>(view: &mut V) -> usize
where
    V: ViewMut,
    V::Item: Ord,
{
    heap_remove_with(view, &NaturalOrder)
}

/// Removes the maximum under `compare`. See [`heap_remove`].
pub fn heap_remove_by<V, F>(view: &mut V, compare: F) -> usize
where
    V: ViewMut,
    F: Fn(&V::Item, &V::Item) -> Ordering,
{
    heap_remove_with(view, &FnComparer::new(compare))
}

/// Removes the maximum under `comparer`. See [`heap_remove`].
pub fn heap_remove_with<V, C>(view: &mut V, comparer: &C) -> usize
where
    V: ViewMut,
    C: Comparer<V::Item> + ?Sized,
{
    let Some(last) = view.len().checked_sub(1) else {
        return 0;
    };
    view.swap(0, last);
    sift_down(view, 0, last, comparer);
    last
}

/// Checks the heap property.
///
/// On success the result is `found(len())`. Otherwise `index` is the first
/// position that orders after its parent, so `[0, index)` is the longest
/// prefix that is a heap.
///
/// # Examples
///
/// ```rust
/// use sublist::algorithm::is_heap;
/// use sublist::output::SearchResult;
/// use sublist::view::AsSublist;
///
/// assert_eq!(is_heap(&[9, 5, 8, 1].sublist()), SearchResult::found(4));
/// assert_eq!(is_heap(&[9, 5, 8, 6].sublist()), SearchResult::missing(3));
/// ```
pub fn is_heap<V>(view: &V) -> SearchResult
where
    V: View,
    V::Item: Ord,
{
    is_heap_with(view, &NaturalOrder)
}

/// Checks the heap property under `compare`. See [`is_heap`].
pub fn is_heap_by<V, F>(view: &V, compare: F) -> SearchResult
where
    V: View,
    F: Fn(&V::Item, &V::Item) -> Ordering,
{
    is_heap_with(view, &FnComparer::new(compare))
}

/// Checks the heap property under `comparer`. See [`is_heap`].
pub fn is_heap_with<V, C>(view: &V, comparer: &C) -> SearchResult
where
    V: View,
    C: Comparer<V::Item> + ?Sized,
{
    let length = view.len();
    (1..length)
        .find(|&child| comparer.less(view.at((child - 1) / 2), view.at(child)))
        .map_or(SearchResult::found(length), SearchResult::missing)
}

// =============================================================================
// Shared with the sorts
// =============================================================================

/// Builds a max-heap over `[0, end)`.
pub(crate) fn heapify<V, C>(view: &mut V, end: usize, comparer: &C)
where
    V: ViewMut,
    C: Comparer<V::Item> + ?Sized,
{
    for root in (0..end / 2).rev() {
        sift_down(view, root, end, comparer);
    }
}

/// Moves the element at `root` down until neither child within `[0, end)`
/// orders after it.
pub(crate) fn sift_down<V, C>(view: &mut V, root: usize, end: usize, comparer: &C)
where
    V: ViewMut,
    C: Comparer<V::Item> + ?Sized,
{
    let mut parent = root;
    loop {
        let left = 2 * parent + 1;
        if left >= end {
            return;
        }
        let right = left + 1;
        let child = if right < end && comparer.less(view.at(left), view.at(right)) {
            right
        } else {
            left
        };
        if !comparer.less(view.at(parent), view.at(child)) {
            return;
        }
        view.swap(parent, child);
        parent = child;
    }
}

/// Moves the element at `index` up while it orders after its parent.
pub(crate) fn sift_up<V, C>(view: &mut V, index: usize, comparer: &C)
where
    V: ViewMut,
    C: Comparer<V::Item> + ?Sized,
{
    let mut child = index;
    while child > 0 {
        let parent = (child - 1) / 2;
        if !comparer.less(view.at(parent), view.at(child)) {
            return;
        }
        view.swap(parent, child);
        child = parent;
    }
}
