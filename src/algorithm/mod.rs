//! STL-style algorithms over views.
//!
//! Algorithms are free functions grouped by category:
//!
//! - [`search`]: binary search, bounds, linear find, extrema, sortedness
//! - [`sort`]: quick, heap, insertion, selection, bubble, shell and partial sort
//! - [`heap`]: implicit binary max-heap maintenance
//! - [`partition`]: unstable, stable and copying partitions
//! - [`set`]: merge and set algebra over sorted views
//! - [`permutation`]: lexicographic permutation stepping
//! - [`unique`]: adjacent duplicate detection and removal
//! - [`modify`]: copy, transform, generate, fill, reverse, rotate
//! - `random` (feature `random`): shuffles and reservoir sampling
//!
//! Operations that only inspect or reorder their input return a plain index,
//! boolean or [`SearchResult`](crate::output::SearchResult). Operations that
//! produce new elements return an [`Output`](crate::output::Output) to be
//! finalized by the caller.
//!
//! # Naming
//!
//! Comparison-based operations come as `name` (natural [`Ord`]), `name_by`
//! (closure) and `name_with` ([`Comparer`](crate::compare::Comparer)).
//! Equality-based operations come as `name` ([`PartialEq`]), `name_by`
//! (equality closure) and `name_with` (a comparer whose `Equal` means equal).
//!
//! # Preconditions
//!
//! Requirements such as "already sorted" or "already a heap" are not
//! checked. Violating them gives an unspecified but memory-safe result. The
//! `checked-preconditions` feature adds debug-build assertions for the
//! sortedness of search and set inputs.
//!
//! # Examples
//!
//! ```rust
//! use sublist::algorithm::{binary_search, make_heap, partition, sort};
//! use sublist::view::AsSublist;
//!
//! let mut values = vec![5, 3, 8, 1, 9, 2];
//!
//! sort(&mut values.sublist_mut());
//! assert_eq!(values, vec![1, 2, 3, 5, 8, 9]);
//! assert_eq!(binary_search(&values.sublist(), &8).into_result(), Ok(4));
//!
//! let boundary = partition(&mut values.sublist_mut(), |value| value % 2 == 0);
//! assert_eq!(boundary, 2);
//!
//! make_heap(&mut values.sublist_mut());
//! assert_eq!(values[0], 9);
//! ```

pub mod heap;
pub mod modify;
pub mod partition;
pub mod permutation;
#[cfg(feature = "random")]
pub mod random;
pub mod search;
pub mod set;
pub mod sort;
pub mod unique;

pub use heap::*;
pub use modify::*;
pub use partition::*;
pub use permutation::*;
#[cfg(feature = "random")]
pub use random::*;
pub use search::*;
pub use set::*;
pub use sort::*;
pub use unique::*;

use crate::compare::Comparer;
use crate::view::{View, ViewMut};

/// Rearranges `view` so that position `i` receives the element previously
/// at `plan[i]`.
///
/// `plan` must be a permutation of `0..view.len()`. Follows each cycle of the
/// permutation once, so every element moves at most once.
pub(crate) fn apply_permutation<V: ViewMut>(view: &mut V, plan: &[usize]) {
    let mut placed = vec![false; plan.len()];
    for start in 0..plan.len() {
        if placed[start] {
            continue;
        }
        let mut current = start;
        loop {
            placed[current] = true;
            let next = plan[current];
            if next == start {
                break;
            }
            view.swap(current, next);
            current = next;
        }
    }
}

/// Length of the longest prefix of `view` that is sorted under `comparer`.
pub(crate) fn sorted_prefix<V, C>(view: &V, comparer: &C) -> usize
where
    V: View,
    C: Comparer<V::Item> + ?Sized,
{
    let length = view.len();
    (1..length)
        .find(|&index| comparer.less(view.at(index), view.at(index - 1)))
        .unwrap_or(length)
}

/// Debug-build check that an input which must be sorted actually is.
///
/// Compiled to nothing unless both `debug_assertions` and the
/// `checked-preconditions` feature are enabled.
#[inline]
#[allow(unused_variables)]
pub(crate) fn debug_assert_sorted<V, C>(view: &V, comparer: &C, operation: &'static str)
where
    V: View,
    C: Comparer<V::Item> + ?Sized,
{
    #[cfg(all(debug_assertions, feature = "checked-preconditions"))]
    debug_assert!(
        sorted_prefix(view, comparer) == view.len(),
        "{operation}: input view is not sorted"
    );
}
