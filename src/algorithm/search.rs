//! Searching: binary search and bounds on sorted views, linear find,
//! extrema and sortedness checks.
//!
//! The sorted-view searches take a *probe* in their `_by` form, like
//! [`slice::binary_search_by`]: the closure receives an element and reports
//! how it orders relative to the target. This is what allows searching for a
//! value of another type.
//!
//! # Examples
//!
//! ```rust
//! use sublist::algorithm::{binary_search_by, equal_range, lower_bound, upper_bound};
//! use sublist::view::AsSublist;
//!
//! let values = vec![1, 2, 2, 2, 5];
//! let view = values.sublist();
//!
//! assert_eq!(lower_bound(&view, &2), 1);
//! assert_eq!(upper_bound(&view, &2), 4);
//! assert_eq!(equal_range(&view, &2), 1..4);
//!
//! // Search an integer view for a fractional value.
//! let target = 2.5_f64;
//! let result = binary_search_by(&view, |element| f64::from(*element).total_cmp(&target));
//! assert!(!result.exists);
//! assert_eq!(result.index, 4);
//! ```

use std::cmp::Ordering;
use std::ops::Range;

use super::{debug_assert_sorted, sorted_prefix};
use crate::compare::{Comparer, FnComparer, NaturalOrder};
use crate::output::SearchResult;
use crate::view::View;

// =============================================================================
// Binary search
// =============================================================================

/// Searches a sorted view for `value`.
///
/// When the value is present, `index` is the position of its first
/// occurrence. Otherwise `index` is where it could be inserted to keep the
/// view sorted.
///
/// # Complexity
///
/// O(log n) comparisons.
///
/// # Examples
///
/// ```rust
/// use sublist::algorithm::binary_search;
/// use sublist::output::SearchResult;
/// use sublist::view::AsSublist;
///
/// let values = [10, 20, 30];
/// assert_eq!(binary_search(&values.sublist(), &20), SearchResult::found(1));
/// assert_eq!(binary_search(&values.sublist(), &25), SearchResult::missing(2));
/// ```
pub fn binary_search<V>(view: &V, value: &V::Item) -> SearchResult
where
    V: View,
    V::Item: Ord,
{
    binary_search_with(view, value, &NaturalOrder)
}

/// Searches a sorted view with a probe reporting how each element orders
/// relative to the target.
pub fn binary_search_by<V, F>(view: &V, mut probe: F) -> SearchResult
where
    V: View,
    F: FnMut(&V::Item) -> Ordering,
{
    let index = lower_bound_by(view, &mut probe);
    if index < view.len() && probe(view.at(index)) == Ordering::Equal {
        SearchResult::found(index)
    } else {
        SearchResult::missing(index)
    }
}

/// Searches a view sorted under `comparer` for `value`.
pub fn binary_search_with<V, C>(view: &V, value: &V::Item, comparer: &C) -> SearchResult
where
    V: View,
    C: Comparer<V::Item> + ?Sized,
{
    debug_assert_sorted(view, comparer, "binary_search");
    binary_search_by(view, |element| comparer.compare(element, value))
}

// =============================================================================
// Bounds
// =============================================================================

/// Returns the first index whose element is not less than `value`.
pub fn lower_bound<V>(view: &V, value: &V::Item) -> usize
where
    V: View,
    V::Item: Ord,
{
    lower_bound_with(view, value, &NaturalOrder)
}

/// Returns the first index for which `probe` does not report
/// [`Ordering::Less`].
pub fn lower_bound_by<V, F>(view: &V, mut probe: F) -> usize
where
    V: View,
    F: FnMut(&V::Item) -> Ordering,
{
    first_failing(view, |element| probe(element) == Ordering::Less)
}

/// Returns the first index whose element is not less than `value` under
/// `comparer`.
pub fn lower_bound_with<V, C>(view: &V, value: &V::Item, comparer: &C) -> usize
where
    V: View,
    C: Comparer<V::Item> + ?Sized,
{
    debug_assert_sorted(view, comparer, "lower_bound");
    lower_bound_by(view, |element| comparer.compare(element, value))
}

/// Returns the first index whose element is greater than `value`.
pub fn upper_bound<V>(view: &V, value: &V::Item) -> usize
where
    V: View,
    V::Item: Ord,
{
    upper_bound_with(view, value, &NaturalOrder)
}

/// Returns the first index for which `probe` reports
/// [`Ordering::Greater`].
pub fn upper_bound_by<V, F>(view: &V, mut probe: F) -> usize
where
    V: View,
    F: FnMut(&V::Item) -> Ordering,
{
    first_failing(view, |element| probe(element) != Ordering::Greater)
}

/// Returns the first index whose element is greater than `value` under
/// `comparer`.
pub fn upper_bound_with<V, C>(view: &V, value: &V::Item, comparer: &C) -> usize
where
    V: View,
    C: Comparer<V::Item> + ?Sized,
{
    debug_assert_sorted(view, comparer, "upper_bound");
    upper_bound_by(view, |element| comparer.compare(element, value))
}

/// Returns the range of positions holding elements equal to `value`.
///
/// The range is empty, and starts at the insertion point, when there are
/// none.
pub fn equal_range<V>(view: &V, value: &V::Item) -> Range<usize>
where
    V: View,
    V::Item: Ord,
{
    equal_range_with(view, value, &NaturalOrder)
}

/// Returns the range of positions for which `probe` reports
/// [`Ordering::Equal`].
pub fn equal_range_by<V, F>(view: &V, mut probe: F) -> Range<usize>
where
    V: View,
    F: FnMut(&V::Item) -> Ordering,
{
    let start = lower_bound_by(view, &mut probe);
    let end = upper_bound_by(view, &mut probe);
    start..end
}

/// Returns the range of positions holding elements equal to `value` under
/// `comparer`.
pub fn equal_range_with<V, C>(view: &V, value: &V::Item, comparer: &C) -> Range<usize>
where
    V: View,
    C: Comparer<V::Item> + ?Sized,
{
    debug_assert_sorted(view, comparer, "equal_range");
    equal_range_by(view, |element| comparer.compare(element, value))
}

/// Binary search for the first position where `holds` turns false, given
/// that it holds on a (possibly empty) prefix and fails afterwards.
pub(crate) fn first_failing<V, P>(view: &V, mut holds: P) -> usize
where
    V: View,
    P: FnMut(&V::Item) -> bool,
{
    let mut low = 0;
    let mut high = view.len();
    while low < high {
        let middle = low + (high - low) / 2;
        if holds(view.at(middle)) {
            low = middle + 1;
        } else {
            high = middle;
        }
    }
    low
}

// =============================================================================
// Linear search
// =============================================================================

/// Returns the position of the first element equal to `value`.
///
/// # Examples
///
/// ```rust
/// use sublist::algorithm::find;
/// use sublist::view::{AsSublist, View};
///
/// let letters = ['a', 'b', 'c', 'b'];
/// assert_eq!(find(&letters.sublist(), &'b'), Some(1));
/// assert_eq!(find(&letters.sublist().reversed(), &'b'), Some(0));
/// assert_eq!(find(&letters.sublist(), &'z'), None);
/// ```
pub fn find<V>(view: &V, value: &V::Item) -> Option<usize>
where
    V: View,
    V::Item: PartialEq,
{
    find_if(view, |element| element == value)
}

/// Returns the position of the first element equal to `value` under
/// `equals`.
pub fn find_by<V, F>(view: &V, value: &V::Item, equals: F) -> Option<usize>
where
    V: View,
    F: Fn(&V::Item, &V::Item) -> bool,
{
    find_if(view, |element| equals(element, value))
}

/// Returns the position of the first element `comparer` deems equal to
/// `value`.
pub fn find_with<V, C>(view: &V, value: &V::Item, comparer: &C) -> Option<usize>
where
    V: View,
    C: Comparer<V::Item> + ?Sized,
{
    find_if(view, |element| comparer.equals(element, value))
}

/// Returns the position of the first element satisfying `predicate`.
pub fn find_if<V, P>(view: &V, mut predicate: P) -> Option<usize>
where
    V: View,
    P: FnMut(&V::Item) -> bool,
{
    view.iter().position(|element| predicate(element))
}

// =============================================================================
// Extrema
// =============================================================================

/// Returns the position of the first smallest element, or `None` for an
/// empty view.
pub fn min_element<V>(view: &V) -> Option<usize>
where
    V: View,
    V::Item: Ord,
{
    min_element_with(view, &NaturalOrder)
}

/// Returns the position of the first smallest element under `compare`.
pub fn min_element_by<V, F>(view: &V, compare: F) -> Option<usize>
where
    V: View,
    F: Fn(&V::Item, &V::Item) -> Ordering,
{
    min_element_with(view, &FnComparer::new(compare))
}

/// Returns the position of the first smallest element under `comparer`.
pub fn min_element_with<V, C>(view: &V, comparer: &C) -> Option<usize>
where
    V: View,
    C: Comparer<V::Item> + ?Sized,
{
    extreme(view, |candidate, best| comparer.less(candidate, best))
}

/// Returns the position of the first largest element, or `None` for an
/// empty view.
pub fn max_element<V>(view: &V) -> Option<usize>
where
    V: View,
    V::Item: Ord,
{
    max_element_with(view, &NaturalOrder)
}

/// Returns the position of the first largest element under `compare`.
pub fn max_element_by<V, F>(view: &V, compare: F) -> Option<usize>
where
    V: View,
    F: Fn(&V::Item, &V::Item) -> Ordering,
{
    max_element_with(view, &FnComparer::new(compare))
}

/// Returns the position of the first largest element under `comparer`.
pub fn max_element_with<V, C>(view: &V, comparer: &C) -> Option<usize>
where
    V: View,
    C: Comparer<V::Item> + ?Sized,
{
    extreme(view, |candidate, best| comparer.less(best, candidate))
}

fn extreme<V, B>(view: &V, beats: B) -> Option<usize>
where
    V: View,
    B: Fn(&V::Item, &V::Item) -> bool,
{
    if view.is_empty() {
        return None;
    }
    let mut best = 0;
    for index in 1..view.len() {
        if beats(view.at(index), view.at(best)) {
            best = index;
        }
    }
    Some(best)
}

// =============================================================================
// Sortedness
// =============================================================================

/// Returns `true` if the view is sorted ascending.
pub fn is_sorted<V>(view: &V) -> bool
where
    V: View,
    V::Item: Ord,
{
    is_sorted_with(view, &NaturalOrder)
}

/// Returns `true` if the view is sorted ascending under `compare`.
pub fn is_sorted_by<V, F>(view: &V, compare: F) -> bool
where
    V: View,
    F: Fn(&V::Item, &V::Item) -> Ordering,
{
    is_sorted_with(view, &FnComparer::new(compare))
}

/// Returns `true` if the view is sorted ascending under `comparer`.
pub fn is_sorted_with<V, C>(view: &V, comparer: &C) -> bool
where
    V: View,
    C: Comparer<V::Item> + ?Sized,
{
    is_sorted_until_with(view, comparer) == view.len()
}

/// Returns the length of the longest sorted prefix.
///
/// # Examples
///
/// ```rust
/// use sublist::algorithm::is_sorted_until;
/// use sublist::view::AsSublist;
///
/// assert_eq!(is_sorted_until(&[1, 2, 5, 3, 4].sublist()), 3);
/// assert_eq!(is_sorted_until(&[1, 1, 2].sublist()), 3);
/// ```
pub fn is_sorted_until<V>(view: &V) -> usize
where
    V: View,
    V::Item: Ord,
{
    is_sorted_until_with(view, &NaturalOrder)
}

/// Returns the length of the longest prefix sorted under `compare`.
pub fn is_sorted_until_by<V, F>(view: &V, compare: F) -> usize
where
    V: View,
    F: Fn(&V::Item, &V::Item) -> Ordering,
{
    is_sorted_until_with(view, &FnComparer::new(compare))
}

/// Returns the length of the longest prefix sorted under `comparer`.
pub fn is_sorted_until_with<V, C>(view: &V, comparer: &C) -> usize
where
    V: View,
    C: Comparer<V::Item> + ?Sized,
{
    sorted_prefix(view, comparer)
}
