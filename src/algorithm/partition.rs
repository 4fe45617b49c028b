//! Partitioning by a predicate.
//!
//! After partitioning, every element satisfying the predicate precedes every
//! element that does not, and the returned boundary is the number of
//! satisfying elements.
//!
//! # Examples
//!
//! ```rust
//! use sublist::algorithm::{is_partitioned, partition_point, stable_partition};
//! use sublist::view::AsSublist;
//!
//! let mut values = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! let boundary = stable_partition(&mut values.sublist_mut(), |value| value % 2 == 0);
//! assert_eq!(boundary, 4);
//! assert_eq!(values, vec![2, 4, 6, 8, 1, 3, 5, 7]);
//!
//! let even = |value: &i32| value % 2 == 0;
//! assert!(is_partitioned(&values.sublist(), even).exists);
//! assert_eq!(partition_point(&values.sublist(), even), 4);
//! ```

use super::apply_permutation;
use super::search::first_failing;
use crate::collection::Growable;
use crate::output::{PartitionResult, SearchResult};
use crate::view::{SublistMut, View, ViewMut};

/// Moves the elements satisfying `predicate` to the front and returns how
/// many there are.
///
/// The relative order inside each group is unspecified. Each element is
/// tested exactly once.
///
/// # Complexity
///
/// O(n) predicate calls, at most n / 2 swaps.
pub fn partition<V, P>(view: &mut V, mut predicate: P) -> usize
where
    V: ViewMut,
    P: FnMut(&V::Item) -> bool,
{
    let mut front = 0;
    let mut back = view.len();
    loop {
        while front < back && predicate(view.at(front)) {
            front += 1;
        }
        // `front` is either `back` or an element already known to fail.
        loop {
            if front + 1 >= back {
                return front;
            }
            back -= 1;
            if predicate(view.at(back)) {
                break;
            }
        }
        view.swap(front, back);
        front += 1;
    }
}

/// Like [`partition`], but both groups keep their original relative order.
///
/// Needs O(n) auxiliary indices.
pub fn stable_partition<V, P>(view: &mut V, mut predicate: P) -> usize
where
    V: ViewMut,
    P: FnMut(&V::Item) -> bool,
{
    let (selected, rejected): (Vec<usize>, Vec<usize>) =
        (0..view.len()).partition(|&index| predicate(view.at(index)));
    let boundary = selected.len();
    let mut plan = selected;
    plan.extend(rejected);
    apply_permutation(view, &plan);
    boundary
}

/// Checks that every element satisfying `predicate` precedes every element
/// that does not.
///
/// On success the result is `found(boundary)`. Otherwise `index` is the
/// first satisfying element found after a non-satisfying one.
pub fn is_partitioned<V, P>(view: &V, mut predicate: P) -> SearchResult
where
    V: View,
    P: FnMut(&V::Item) -> bool,
{
    let length = view.len();
    let boundary = (0..length)
        .find(|&index| !predicate(view.at(index)))
        .unwrap_or(length);
    (boundary..length)
        .find(|&index| predicate(view.at(index)))
        .map_or(SearchResult::found(boundary), SearchResult::missing)
}

/// Returns the boundary of an already partitioned view by binary search.
///
/// # Complexity
///
/// O(log n) predicate calls.
pub fn partition_point<V, P>(view: &V, predicate: P) -> usize
where
    V: View,
    P: FnMut(&V::Item) -> bool,
{
    first_failing(view, predicate)
}

// =============================================================================
// Two-destination copy
// =============================================================================

/// Splits the elements of `source` into two destinations by `predicate`,
/// keeping their order.
///
/// # Examples
///
/// ```rust
/// use sublist::algorithm::partition_copy;
/// use sublist::view::AsSublist;
///
/// let source = vec![1, 2, 3, 4, 5];
/// let mut evens = Vec::new();
/// let mut odds = vec![0];
///
/// partition_copy(source.sublist(), |value| value % 2 == 0)
///     .add_to(evens.sublist_mut(), odds.sublist_mut());
/// assert_eq!(evens, vec![2, 4]);
/// assert_eq!(odds, vec![0, 1, 3, 5]);
/// ```
pub fn partition_copy<V, P>(source: V, predicate: P) -> PartitionCopy<V, P>
where
    V: View,
    P: FnMut(&V::Item) -> bool,
{
    PartitionCopy { source, predicate }
}

/// A staged partition, finalized by `copy_to`, `add_to` or `in_place`.
#[must_use = "a partition copy does nothing until it is copied, added or applied in place"]
#[derive(Debug, Clone)]
pub struct PartitionCopy<V, P> {
    source: V,
    predicate: P,
}

impl<V, P> PartitionCopy<V, P>
where
    V: View,
    V::Item: Clone,
    P: FnMut(&V::Item) -> bool,
{
    /// Writes satisfying elements over `first` and the rest over `second`,
    /// front to back.
    ///
    /// Stops at the first element whose destination is already full, without
    /// consuming it.
    pub fn copy_to<D1, D2>(mut self, first: &mut D1, second: &mut D2) -> PartitionResult
    where
        D1: ViewMut<Item = V::Item>,
        D2: ViewMut<Item = V::Item>,
    {
        let mut result = PartitionResult::default();
        while let Some(element) = self.source.get(result.source_offset) {
            if (self.predicate)(element) {
                let Some(slot) = first.get_mut(result.first_destination_offset) else {
                    break;
                };
                slot.clone_from(element);
                result.first_destination_offset += 1;
            } else {
                let Some(slot) = second.get_mut(result.second_destination_offset) else {
                    break;
                };
                slot.clone_from(element);
                result.second_destination_offset += 1;
            }
            result.source_offset += 1;
        }
        result
    }

    /// Appends satisfying elements after `first` and the rest after
    /// `second`, returning both grown views.
    pub fn add_to<'a, 'b, C1, C2>(
        mut self,
        first: SublistMut<'a, C1>,
        second: SublistMut<'b, C2>,
    ) -> (SublistMut<'a, C1>, SublistMut<'b, C2>)
    where
        C1: Growable<Item = V::Item> + ?Sized,
        C2: Growable<Item = V::Item> + ?Sized,
    {
        let decisions: Vec<bool> = self
            .source
            .iter()
            .map(|element| (self.predicate)(element))
            .collect();
        let source = &self.source;
        let selected = decisions
            .iter()
            .zip(source.iter())
            .filter(|(decision, _)| **decision)
            .map(|(_, element)| element.clone());
        let first = first.extend(selected);
        let rejected = decisions
            .iter()
            .zip(source.iter())
            .filter(|(decision, _)| !**decision)
            .map(|(_, element)| element.clone());
        (first, second.extend(rejected))
    }

    /// Collects the two groups into new `Vec`s.
    pub fn to_vecs(mut self) -> (Vec<V::Item>, Vec<V::Item>) {
        let predicate = &mut self.predicate;
        self.source
            .iter()
            .cloned()
            .partition(|element| predicate(element))
    }
}

impl<V, P> PartitionCopy<V, P>
where
    V: ViewMut,
    P: FnMut(&V::Item) -> bool,
{
    /// Partitions the source view itself, stably, and returns the boundary.
    pub fn in_place(mut self) -> usize {
        stable_partition(&mut self.source, self.predicate)
    }
}
