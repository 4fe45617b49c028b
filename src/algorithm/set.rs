//! Merging and set algebra over sorted views.
//!
//! Both inputs must be sorted under the same comparison. Inputs are treated
//! as multisets: an element occurring `m` times in the first view and `n`
//! times in the second occurs
//!
//! - `m + n` times in a [`merge`]
//! - `max(m, n)` times in a [`union`]
//! - `min(m, n)` times in an [`intersection`]
//! - `m - n` times (saturating) in a [`difference`]
//! - `|m - n|` times in a [`symmetric_difference`]
//!
//! All outputs come out sorted. Equal elements present in both inputs are
//! taken from the first one.
//!
//! # Examples
//!
//! ```rust
//! use sublist::algorithm::{difference, intersection, merge, symmetric_difference};
//! use sublist::view::AsSublist;
//!
//! let first = vec![1, 2, 2, 5];
//! let second = vec![2, 3, 5];
//!
//! assert_eq!(merge(first.sublist(), second.sublist()).to_vec(), vec![1, 2, 2, 2, 3, 5, 5]);
//! assert_eq!(intersection(first.sublist(), second.sublist()).to_vec(), vec![2, 5]);
//! assert_eq!(difference(first.sublist(), second.sublist()).to_vec(), vec![1, 2]);
//! assert_eq!(
//!     symmetric_difference(first.sublist(), second.sublist()).to_vec(),
//!     vec![1, 2, 3]
//! );
//! ```

use std::cmp::Ordering;

use super::debug_assert_sorted;
use super::sort::sort_with;
use super::unique::dedup_in_place;
use crate::compare::{Comparer, FnComparer, NaturalOrder};
use crate::output::{MergeResult, Output, Producer};
use crate::view::{View, ViewMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SetOperation {
    Merge,
    Union,
    Intersection,
    Difference,
    SymmetricDifference,
}

impl SetOperation {
    /// Whether an element found only in the first input is emitted.
    const fn keeps_first_only(self) -> bool {
        !matches!(self, Self::Intersection)
    }

    /// Whether an element found only in the second input is emitted.
    const fn keeps_second_only(self) -> bool {
        matches!(self, Self::Merge | Self::Union | Self::SymmetricDifference)
    }
}

/// Walks two sorted views in step, emitting elements per a set operation.
#[derive(Debug, Clone)]
pub struct Combined<V1, V2, C> {
    first: V1,
    second: V2,
    comparer: C,
    operation: SetOperation,
    first_position: usize,
    second_position: usize,
}

impl<V1, V2, C> Combined<V1, V2, C>
where
    V1: View,
    V2: View<Item = V1::Item>,
    V1::Item: Clone,
    C: Comparer<V1::Item>,
{
    fn staged(first: V1, second: V2, comparer: C, operation: SetOperation) -> Output<Self> {
        debug_assert_sorted(&first, &comparer, "set operation");
        debug_assert_sorted(&second, &comparer, "set operation");
        Output::new(Self {
            first,
            second,
            comparer,
            operation,
            first_position: 0,
            second_position: 0,
        })
    }
}

impl<V1, V2, C> Producer for Combined<V1, V2, C>
where
    V1: View,
    V2: View<Item = V1::Item>,
    V1::Item: Clone,
    C: Comparer<V1::Item>,
{
    type Item = V1::Item;
    type Outcome = MergeResult;

    fn next_item(&mut self) -> Option<V1::Item> {
        loop {
            let left = self.first.get(self.first_position);
            let right = self.second.get(self.second_position);
            match (left, right) {
                (None, None) => return None,
                (Some(left), None) => {
                    if !self.operation.keeps_first_only() {
                        return None;
                    }
                    self.first_position += 1;
                    return Some(left.clone());
                }
                (None, Some(right)) => {
                    if !self.operation.keeps_second_only() {
                        return None;
                    }
                    self.second_position += 1;
                    return Some(right.clone());
                }
                (Some(left), Some(right)) => match self.comparer.compare(left, right) {
                    Ordering::Less => {
                        self.first_position += 1;
                        if self.operation.keeps_first_only() {
                            return Some(left.clone());
                        }
                    }
                    Ordering::Greater => {
                        self.second_position += 1;
                        if self.operation.keeps_second_only() {
                            return Some(right.clone());
                        }
                    }
                    Ordering::Equal => match self.operation {
                        SetOperation::Merge => {
                            self.first_position += 1;
                            return Some(left.clone());
                        }
                        SetOperation::Union | SetOperation::Intersection => {
                            self.first_position += 1;
                            self.second_position += 1;
                            return Some(left.clone());
                        }
                        SetOperation::Difference | SetOperation::SymmetricDifference => {
                            self.first_position += 1;
                            self.second_position += 1;
                        }
                    },
                },
            }
        }
    }

    fn outcome(&self, destination_offset: usize) -> MergeResult {
        MergeResult {
            first_source_offset: self.first_position,
            second_source_offset: self.second_position,
            destination_offset,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let first = self.first.len() - self.first_position;
        let second = self.second.len() - self.second_position;
        match self.operation {
            SetOperation::Merge => (first + second, Some(first + second)),
            SetOperation::Union => (first.max(second), Some(first + second)),
            SetOperation::Intersection => (0, Some(first.min(second))),
            SetOperation::Difference => (first.saturating_sub(second), Some(first)),
            SetOperation::SymmetricDifference => (0, Some(first + second)),
        }
    }
}

macro_rules! staged_set_operation {
    ($operation:ident, $name:ident, $name_by:ident, $name_with:ident, $summary:literal) => {
        #[doc = $summary]
        pub fn $name<V1, V2>(first: V1, second: V2) -> Output<Combined<V1, V2, NaturalOrder>>
        where
            V1: View,
            V2: View<Item = V1::Item>,
            V1::Item: Clone + Ord,
        {
            $name_with(first, second, NaturalOrder)
        }

        #[doc = $summary]
        ///
        /// Both views must be sorted under `compare`.
        pub fn $name_by<V1, V2, F>(
            first: V1,
            second: V2,
            compare: F,
        ) -> Output<Combined<V1, V2, FnComparer<F>>>
        where
            V1: View,
            V2: View<Item = V1::Item>,
            V1::Item: Clone,
            F: Fn(&V1::Item, &V1::Item) -> Ordering,
        {
            $name_with(first, second, FnComparer::new(compare))
        }

        #[doc = $summary]
        ///
        /// Both views must be sorted under `comparer`, which may be owned or
        /// borrowed.
        pub fn $name_with<V1, V2, C>(first: V1, second: V2, comparer: C) -> Output<Combined<V1, V2, C>>
        where
            V1: View,
            V2: View<Item = V1::Item>,
            V1::Item: Clone,
            C: Comparer<V1::Item>,
        {
            Combined::staged(first, second, comparer, SetOperation::$operation)
        }
    };
}

staged_set_operation!(
    Merge,
    merge,
    merge_by,
    merge_with,
    "Merges two sorted views into one sorted sequence, keeping every element."
);
staged_set_operation!(
    Union,
    union,
    union_by,
    union_with,
    "Elements present in either sorted view."
);
staged_set_operation!(
    Intersection,
    intersection,
    intersection_by,
    intersection_with,
    "Elements present in both sorted views."
);
staged_set_operation!(
    Difference,
    difference,
    difference_by,
    difference_with,
    "Elements of the first sorted view that are not in the second."
);
staged_set_operation!(
    SymmetricDifference,
    symmetric_difference,
    symmetric_difference_by,
    symmetric_difference_with,
    "Elements present in exactly one of the two sorted views."
);

// =============================================================================
// In-place and predicates
// =============================================================================

/// Sorts the view and moves one representative of each distinct element to
/// the front.
///
/// Returns the number of distinct elements. Positions from the returned
/// boundary onwards hold the removed duplicates in unspecified order.
///
/// # Examples
///
/// ```rust
/// use sublist::algorithm::make_set;
/// use sublist::view::AsSublist;
///
/// let mut values = vec![3, 1, 3, 2, 1];
/// let boundary = make_set(&mut values.sublist_mut());
/// values.truncate(boundary);
/// assert_eq!(values, vec![1, 2, 3]);
/// ```
pub fn make_set<V>(view: &mut V) -> usize
where
    V: ViewMut,
    V::Item: Ord,
{
    make_set_with(view, &NaturalOrder)
}

/// Sorts and deduplicates the view under `compare`. See [`make_set`].
pub fn make_set_by<V, F>(view: &mut V, compare: F) -> usize
where
    V: ViewMut,
    F: Fn(&V::Item, &V::Item) -> Ordering,
{
    make_set_with(view, &FnComparer::new(compare))
}

/// Sorts and deduplicates the view under `comparer`. See [`make_set`].
pub fn make_set_with<V, C>(view: &mut V, comparer: &C) -> usize
where
    V: ViewMut,
    C: Comparer<V::Item> + ?Sized,
{
    sort_with(view, comparer);
    dedup_in_place(view, |left, right| comparer.equals(left, right))
}

/// Returns `true` if every element of `subset` also occurs in `superset`,
/// counting multiplicity.
pub fn is_subset<V1, V2>(subset: &V1, superset: &V2) -> bool
where
    V1: View,
    V2: View<Item = V1::Item>,
    V1::Item: Ord,
{
    is_subset_with(subset, superset, &NaturalOrder)
}

/// [`is_subset`] under `compare`.
pub fn is_subset_by<V1, V2, F>(subset: &V1, superset: &V2, compare: F) -> bool
where
    V1: View,
    V2: View<Item = V1::Item>,
    F: Fn(&V1::Item, &V1::Item) -> Ordering,
{
    is_subset_with(subset, superset, &FnComparer::new(compare))
}

/// [`is_subset`] under `comparer`.
pub fn is_subset_with<V1, V2, C>(subset: &V1, superset: &V2, comparer: &C) -> bool
where
    V1: View,
    V2: View<Item = V1::Item>,
    C: Comparer<V1::Item> + ?Sized,
{
    debug_assert_sorted(subset, comparer, "is_subset");
    debug_assert_sorted(superset, comparer, "is_subset");
    let mut position = 0;
    for element in subset.iter() {
        loop {
            let Some(candidate) = superset.get(position) else {
                return false;
            };
            position += 1;
            match comparer.compare(candidate, element) {
                Ordering::Less => {}
                Ordering::Equal => break,
                Ordering::Greater => return false,
            }
        }
    }
    true
}

/// Returns `true` if the two sorted views have no element in common.
pub fn is_disjoint<V1, V2>(first: &V1, second: &V2) -> bool
where
    V1: View,
    V2: View<Item = V1::Item>,
    V1::Item: Ord,
{
    is_disjoint_with(first, second, &NaturalOrder)
}

/// [`is_disjoint`] under `compare`.
pub fn is_disjoint_by<V1, V2, F>(first: &V1, second: &V2, compare: F) -> bool
where
    V1: View,
    V2: View<Item = V1::Item>,
    F: Fn(&V1::Item, &V1::Item) -> Ordering,
{
    is_disjoint_with(first, second, &FnComparer::new(compare))
}

/// [`is_disjoint`] under `comparer`.
pub fn is_disjoint_with<V1, V2, C>(first: &V1, second: &V2, comparer: &C) -> bool
where
    V1: View,
    V2: View<Item = V1::Item>,
    C: Comparer<V1::Item> + ?Sized,
{
    debug_assert_sorted(first, comparer, "is_disjoint");
    debug_assert_sorted(second, comparer, "is_disjoint");
    let (mut left, mut right) = (0, 0);
    while let (Some(a), Some(b)) = (first.get(left), second.get(right)) {
        match comparer.compare(a, b) {
            Ordering::Less => left += 1,
            Ordering::Greater => right += 1,
            Ordering::Equal => return false,
        }
    }
    true
}

/// Returns `true` if the value ranges spanned by two sorted views
/// intersect, that is, neither view lies entirely before the other.
///
/// Views can overlap without sharing an element: `[1, 5]` overlaps `[3]`.
/// An empty view overlaps nothing.
///
/// # Examples
///
/// ```rust
/// use sublist::algorithm::{is_disjoint, overlaps};
/// use sublist::view::AsSublist;
///
/// let wide = [1, 5];
/// let inner = [3];
/// let later = [6, 7];
/// assert!(overlaps(&wide.sublist(), &inner.sublist()));
/// assert!(is_disjoint(&wide.sublist(), &inner.sublist()));
/// assert!(!overlaps(&wide.sublist(), &later.sublist()));
/// ```
pub fn overlaps<V1, V2>(first: &V1, second: &V2) -> bool
where
    V1: View,
    V2: View<Item = V1::Item>,
    V1::Item: Ord,
{
    overlaps_with(first, second, &NaturalOrder)
}

/// [`overlaps`] under `compare`.
pub fn overlaps_by<V1, V2, F>(first: &V1, second: &V2, compare: F) -> bool
where
    V1: View,
    V2: View<Item = V1::Item>,
    F: Fn(&V1::Item, &V1::Item) -> Ordering,
{
    overlaps_with(first, second, &FnComparer::new(compare))
}

/// [`overlaps`] under `comparer`.
pub fn overlaps_with<V1, V2, C>(first: &V1, second: &V2, comparer: &C) -> bool
where
    V1: View,
    V2: View<Item = V1::Item>,
    C: Comparer<V1::Item> + ?Sized,
{
    let (Some(first_last), Some(second_last)) = (
        first.len().checked_sub(1),
        second.len().checked_sub(1),
    ) else {
        return false;
    };
    !comparer.less(first.at(first_last), second.at(0))
        && !comparer.less(second.at(second_last), first.at(0))
}
