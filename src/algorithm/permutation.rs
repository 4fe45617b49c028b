//! Lexicographic permutation stepping.
//!
//! [`next_permutation`] rearranges a view into the next arrangement in
//! lexicographic order. After the last (descending) arrangement it wraps to
//! the first (ascending) one and reports `false`, so starting from a sorted
//! view and looping until `false` visits every distinct arrangement exactly
//! once.
//!
//! # Examples
//!
//! ```rust
//! use sublist::algorithm::next_permutation;
//! use sublist::view::AsSublist;
//!
//! let mut values = vec![1, 2, 3];
//! let mut seen = vec![values.clone()];
//! while next_permutation(&mut values.sublist_mut()) {
//!     seen.push(values.clone());
//! }
//! assert_eq!(seen.len(), 6);
//! assert_eq!(seen[1], vec![1, 3, 2]);
//! assert_eq!(values, vec![1, 2, 3]);
//! ```

use std::cmp::Ordering;

use crate::compare::{Comparer, FnComparer, NaturalOrder, Reverse};
use crate::output::{Output, Picked};
use crate::view::{AsSublist, SublistMut, View, ViewMut, reverse_range};

/// Advances the view to its next lexicographic arrangement.
///
/// Returns `false`, leaving the view sorted ascending, when it already held
/// the last arrangement.
///
/// # Complexity
///
/// O(n) comparisons and swaps.
pub fn next_permutation<V>(view: &mut V) -> bool
where
    V: ViewMut,
    V::Item: Ord,
{
    next_permutation_with(view, &NaturalOrder)
}

/// Advances the view to its next arrangement under `compare`.
pub fn next_permutation_by<V, F>(view: &mut V, compare: F) -> bool
where
    V: ViewMut,
    F: Fn(&V::Item, &V::Item) -> Ordering,
{
    next_permutation_with(view, &FnComparer::new(compare))
}

/// Advances the view to its next arrangement under `comparer`.
pub fn next_permutation_with<V, C>(view: &mut V, comparer: &C) -> bool
where
    V: ViewMut,
    C: Comparer<V::Item> + ?Sized,
{
    let length = view.len();
    if length < 2 {
        return false;
    }
    // Longest non-increasing suffix starts at `suffix`.
    let mut suffix = length - 1;
    while suffix > 0 && !comparer.less(view.at(suffix - 1), view.at(suffix)) {
        suffix -= 1;
    }
    if suffix == 0 {
        reverse_range(view, 0, length);
        return false;
    }
    let pivot = suffix - 1;
    let mut successor = length - 1;
    while !comparer.less(view.at(pivot), view.at(successor)) {
        successor -= 1;
    }
    view.swap(pivot, successor);
    reverse_range(view, suffix, length);
    true
}

/// Steps the view back to its previous lexicographic arrangement.
///
/// Returns `false`, leaving the view sorted descending, when it already held
/// the first arrangement.
pub fn previous_permutation<V>(view: &mut V) -> bool
where
    V: ViewMut,
    V::Item: Ord,
{
    previous_permutation_with(view, &NaturalOrder)
}

/// Steps the view back to its previous arrangement under `compare`.
pub fn previous_permutation_by<V, F>(view: &mut V, compare: F) -> bool
where
    V: ViewMut,
    F: Fn(&V::Item, &V::Item) -> Ordering,
{
    previous_permutation_with(view, &FnComparer::new(compare))
}

/// Steps the view back to its previous arrangement under `comparer`.
pub fn previous_permutation_with<V, C>(view: &mut V, comparer: &C) -> bool
where
    V: ViewMut,
    C: Comparer<V::Item> + ?Sized,
{
    next_permutation_with(view, &Reverse(comparer))
}

// =============================================================================
// Staged copies
// =============================================================================

/// Produces the next lexicographic arrangement of `source` without
/// modifying it.
///
/// After the last arrangement this wraps to the ascending one, like
/// [`next_permutation`].
///
/// # Examples
///
/// ```rust
/// use sublist::algorithm::next_permutation_of;
/// use sublist::view::AsSublist;
///
/// let source = vec!['a', 'c', 'b'];
/// assert_eq!(next_permutation_of(source.sublist()).to_vec(), vec!['b', 'a', 'c']);
/// assert_eq!(source, vec!['a', 'c', 'b']);
/// ```
pub fn next_permutation_of<V>(source: V) -> Output<Picked<V>>
where
    V: View,
    V::Item: Clone + Ord,
{
    next_permutation_of_with(source, &NaturalOrder)
}

/// Produces the next arrangement of `source` under `compare`.
pub fn next_permutation_of_by<V, F>(source: V, compare: F) -> Output<Picked<V>>
where
    V: View,
    V::Item: Clone,
    F: Fn(&V::Item, &V::Item) -> Ordering,
{
    next_permutation_of_with(source, &FnComparer::new(compare))
}

/// Produces the next arrangement of `source` under `comparer`.
pub fn next_permutation_of_with<V, C>(source: V, comparer: &C) -> Output<Picked<V>>
where
    V: View,
    V::Item: Clone,
    C: Comparer<V::Item> + ?Sized,
{
    let plan = stepped_plan(&source, |plan| {
        next_permutation_with(plan, &by_position(&source, comparer));
    });
    Output::new(Picked::new(source, plan))
}

/// Produces the previous lexicographic arrangement of `source` without
/// modifying it.
pub fn previous_permutation_of<V>(source: V) -> Output<Picked<V>>
where
    V: View,
    V::Item: Clone + Ord,
{
    previous_permutation_of_with(source, &NaturalOrder)
}

/// Produces the previous arrangement of `source` under `compare`.
pub fn previous_permutation_of_by<V, F>(source: V, compare: F) -> Output<Picked<V>>
where
    V: View,
    V::Item: Clone,
    F: Fn(&V::Item, &V::Item) -> Ordering,
{
    previous_permutation_of_with(source, &FnComparer::new(compare))
}

/// Produces the previous arrangement of `source` under `comparer`.
pub fn previous_permutation_of_with<V, C>(source: V, comparer: &C) -> Output<Picked<V>>
where
    V: View,
    V::Item: Clone,
    C: Comparer<V::Item> + ?Sized,
{
    let plan = stepped_plan(&source, |plan| {
        previous_permutation_with(plan, &by_position(&source, comparer));
    });
    Output::new(Picked::new(source, plan))
}

/// Runs `step` over the identity plan `0..len()` and returns the result.
fn stepped_plan<V, S>(source: &V, step: S) -> Vec<usize>
where
    V: View,
    S: FnOnce(&mut SublistMut<'_, Vec<usize>>),
{
    let mut plan: Vec<usize> = (0..source.len()).collect();
    step(&mut plan.sublist_mut());
    plan
}

/// Orders source positions by the elements they refer to.
fn by_position<'s, V, C>(
    source: &'s V,
    comparer: &'s C,
) -> FnComparer<impl Fn(&usize, &usize) -> Ordering + 's>
where
    V: View,
    C: Comparer<V::Item> + ?Sized,
{
    FnComparer::new(move |left: &usize, right: &usize| {
        comparer.compare(source.at(*left), source.at(*right))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    fn factorial(n: usize) -> usize {
        (1..=n).product()
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(3)]
    #[case(5)]
    fn test_next_permutation_visits_every_arrangement(#[case] n: usize) {
        let mut values: Vec<usize> = (0..n).collect();
        let mut seen = HashSet::new();
        seen.insert(values.clone());
        let mut advances = 0;
        while next_permutation(&mut values.sublist_mut()) {
            advances += 1;
            assert!(seen.insert(values.clone()), "repeated {values:?}");
        }
        assert_eq!(advances, factorial(n) - 1);
        assert_eq!(seen.len(), factorial(n));
        assert_eq!(values, (0..n).collect::<Vec<usize>>());
    }

    #[rstest]
    fn test_next_permutation_with_repeated_elements() {
        let mut values = vec![1, 1, 2];
        let mut count = 1;
        while next_permutation(&mut values.sublist_mut()) {
            count += 1;
        }
        assert_eq!(count, 3);
    }

    #[rstest]
    #[case(vec![1, 2, 3], vec![1, 3, 2], true)]
    #[case(vec![1, 3, 2], vec![2, 1, 3], true)]
    #[case(vec![3, 2, 1], vec![1, 2, 3], false)]
    fn test_next_permutation_steps(
        #[case] mut values: Vec<i32>,
        #[case] expected: Vec<i32>,
        #[case] advanced: bool,
    ) {
        assert_eq!(next_permutation(&mut values.sublist_mut()), advanced);
        assert_eq!(values, expected);
    }

    #[rstest]
    #[case(vec![1, 3, 2], vec![1, 2, 3], true)]
    #[case(vec![1, 2, 3], vec![3, 2, 1], false)]
    fn test_previous_permutation_steps(
        #[case] mut values: Vec<i32>,
        #[case] expected: Vec<i32>,
        #[case] advanced: bool,
    ) {
        assert_eq!(previous_permutation(&mut values.sublist_mut()), advanced);
        assert_eq!(values, expected);
    }

    #[rstest]
    fn test_next_permutation_inside_view_only() {
        let mut values = vec![9, 1, 2, 3, 0];
        assert!(next_permutation(&mut values.sublist_range_mut(1, 3).unwrap()));
        assert_eq!(values, vec![9, 1, 3, 2, 0]);
    }

    #[rstest]
    fn test_permutation_of_round_trip() {
        let source = vec![2, 3, 1];
        let next = next_permutation_of(source.sublist()).to_vec();
        assert_eq!(next, vec![3, 1, 2]);
        let back = previous_permutation_of(next.sublist()).to_vec();
        assert_eq!(back, source);
    }

    #[rstest]
    fn test_next_permutation_of_wraps_and_applies_in_place() {
        let mut values = vec![3, 2, 1];
        let written = next_permutation_of(values.sublist_mut()).in_place();
        assert_eq!(written, 3);
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_next_permutation_of_by_descending_order() {
        let source = vec![3, 1, 2];
        let next =
            next_permutation_of_by(source.sublist(), |left: &i32, right: &i32| right.cmp(left))
                .to_vec();
        assert_eq!(next, vec![2, 3, 1]);
    }
}
