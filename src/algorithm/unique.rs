//! Adjacent duplicate detection and removal.
//!
//! Duplicates are only recognized when adjacent, so the view should already
//! group equal elements together, typically by being sorted.
//!
//! # Examples
//!
//! ```rust
//! use sublist::algorithm::{find_duplicate, remove_duplicates};
//! use sublist::output::SearchResult;
//! use sublist::view::AsSublist;
//!
//! let mut values = vec![1, 1, 2, 3, 3, 3, 4];
//! assert_eq!(find_duplicate(&values.sublist()), SearchResult::found(1));
//!
//! // Copy the distinct elements out...
//! assert_eq!(remove_duplicates(values.sublist()).to_vec(), vec![1, 2, 3, 4]);
//!
//! // ...or compact the view itself and drop the tail.
//! let boundary = remove_duplicates(values.sublist_mut()).in_place();
//! values.truncate(boundary);
//! assert_eq!(values, vec![1, 2, 3, 4]);
//! ```

use crate::compare::Comparer;
use crate::output::{CopyResult, Output, Producer, SearchResult};
use crate::view::{View, ViewMut};

// =============================================================================
// Detection
// =============================================================================

/// Finds the first element equal to its predecessor.
///
/// Returns `found(index)` of that element, or `missing(len())` when all
/// adjacent pairs differ.
pub fn find_duplicate<V>(view: &V) -> SearchResult
where
    V: View,
    V::Item: PartialEq,
{
    find_duplicate_by(view, |left, right| left == right)
}

/// Finds the first element `equals` to its predecessor.
pub fn find_duplicate_by<V, E>(view: &V, equals: E) -> SearchResult
where
    V: View,
    E: Fn(&V::Item, &V::Item) -> bool,
{
    let length = view.len();
    (1..length)
        .find(|&index| equals(view.at(index - 1), view.at(index)))
        .map_or(SearchResult::missing(length), SearchResult::found)
}

/// Finds the first element that `comparer` deems equal to its predecessor.
pub fn find_duplicate_with<V, C>(view: &V, comparer: &C) -> SearchResult
where
    V: View,
    C: Comparer<V::Item> + ?Sized,
{
    find_duplicate_by(view, |left, right| comparer.equals(left, right))
}

/// Returns `true` if some element equals its predecessor.
pub fn has_duplicates<V>(view: &V) -> bool
where
    V: View,
    V::Item: PartialEq,
{
    find_duplicate(view).exists
}

/// Returns `true` if some element is `equals` to its predecessor.
pub fn has_duplicates_by<V, E>(view: &V, equals: E) -> bool
where
    V: View,
    E: Fn(&V::Item, &V::Item) -> bool,
{
    find_duplicate_by(view, equals).exists
}

/// Returns `true` if `comparer` deems some element equal to its
/// predecessor.
pub fn has_duplicates_with<V, C>(view: &V, comparer: &C) -> bool
where
    V: View,
    C: Comparer<V::Item> + ?Sized,
{
    find_duplicate_with(view, comparer).exists
}

// =============================================================================
// Removal
// =============================================================================

/// Yields the first element of every run of equal elements.
#[derive(Debug, Clone)]
pub struct Deduplicated<V, E> {
    source: V,
    equals: E,
    position: usize,
    last_kept: Option<usize>,
}

impl<V, E> Producer for Deduplicated<V, E>
where
    V: View,
    V::Item: Clone,
    E: Fn(&V::Item, &V::Item) -> bool,
{
    type Item = V::Item;
    type Outcome = CopyResult;

    fn next_item(&mut self) -> Option<V::Item> {
        while let Some(candidate) = self.source.get(self.position) {
            let index = self.position;
            self.position += 1;
            let repeated = self
                .last_kept
                .is_some_and(|kept| (self.equals)(self.source.at(kept), candidate));
            if !repeated {
                self.last_kept = Some(index);
                return Some(candidate.clone());
            }
        }
        None
    }

    fn outcome(&self, destination_offset: usize) -> CopyResult {
        CopyResult {
            source_offset: self.position,
            destination_offset,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.source.len() - self.position;
        let lower = usize::from(remaining > 0 && self.last_kept.is_none());
        (lower, Some(remaining))
    }
}

impl<V, E> Output<Deduplicated<V, E>>
where
    V: ViewMut,
    E: Fn(&V::Item, &V::Item) -> bool,
{
    /// Compacts the source view so each run of equal elements keeps only its
    /// first member, and returns the boundary of the compacted prefix.
    ///
    /// Elements already yielded through [`Iterator::next`] are part of the
    /// prefix, so the boundary always counts every kept element. Elements
    /// from the boundary onwards are the removed duplicates, in unspecified
    /// order.
    pub fn in_place(self) -> usize {
        let Deduplicated { mut source, equals, .. } = self.producer;
        dedup_in_place(&mut source, equals)
    }
}

/// Removes adjacent duplicates.
///
/// Compares each element with the last element kept, so for an equivalence
/// this keeps the first element of every run.
pub fn remove_duplicates<V>(
    source: V,
) -> Output<Deduplicated<V, impl Fn(&V::Item, &V::Item) -> bool>>
where
    V: View,
    V::Item: Clone + PartialEq,
{
    remove_duplicates_by(source, |left: &V::Item, right: &V::Item| left == right)
}

/// Removes elements `equals` to the last element kept.
pub fn remove_duplicates_by<V, E>(source: V, equals: E) -> Output<Deduplicated<V, E>>
where
    V: View,
    V::Item: Clone,
    E: Fn(&V::Item, &V::Item) -> bool,
{
    Output::new(Deduplicated {
        source,
        equals,
        position: 0,
        last_kept: None,
    })
}

/// Removes elements `comparer` deems equal to the last element kept.
///
/// The comparer may be owned or borrowed.
pub fn remove_duplicates_with<V, C>(
    source: V,
    comparer: C,
) -> Output<Deduplicated<V, impl Fn(&V::Item, &V::Item) -> bool>>
where
    V: View,
    V::Item: Clone,
    C: Comparer<V::Item>,
{
    remove_duplicates_by(source, move |left: &V::Item, right: &V::Item| {
        comparer.equals(left, right)
    })
}

/// Compacts the whole view in place, returning the boundary of the kept
/// prefix. Only swaps, so no `Clone` is needed.
pub(crate) fn dedup_in_place<V, E>(view: &mut V, equals: E) -> usize
where
    V: ViewMut,
    E: Fn(&V::Item, &V::Item) -> bool,
{
    let length = view.len();
    if length == 0 {
        return 0;
    }
    let mut kept = 0;
    for index in 1..length {
        if !equals(view.at(kept), view.at(index)) {
            kept += 1;
            if kept != index {
                view.swap(kept, index);
            }
        }
    }
    kept + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::ByKey;
    use crate::view::AsSublist;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], SearchResult::missing(0))]
    #[case(vec![1], SearchResult::missing(1))]
    #[case(vec![1, 2, 3], SearchResult::missing(3))]
    #[case(vec![1, 2, 2, 3, 3], SearchResult::found(2))]
    #[case(vec![1, 2, 1], SearchResult::missing(3))]
    fn test_find_duplicate(#[case] values: Vec<i32>, #[case] expected: SearchResult) {
        assert_eq!(find_duplicate(&values.sublist()), expected);
        assert_eq!(has_duplicates(&values.sublist()), expected.exists);
    }

    #[rstest]
    fn test_find_duplicate_by_case_insensitive() {
        let words = vec!["Apple", "apple", "pear"];
        let result = find_duplicate_by(&words.sublist(), |left, right| {
            left.eq_ignore_ascii_case(right)
        });
        assert_eq!(result, SearchResult::found(1));
        assert!(!has_duplicates(&words.sublist()));
    }

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![5, 5, 5], vec![5])]
    #[case(vec![1, 1, 2, 3, 3, 3, 4], vec![1, 2, 3, 4])]
    #[case(vec![1, 2, 1, 1], vec![1, 2, 1])]
    fn test_remove_duplicates(#[case] values: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(remove_duplicates(values.sublist()).to_vec(), expected);

        let mut compacted = values.clone();
        let boundary = remove_duplicates(compacted.sublist_mut()).in_place();
        assert_eq!(&compacted[..boundary], expected.as_slice());
    }

    #[rstest]
    fn test_remove_duplicates_copy_to_reports_progress() {
        let values = vec![1, 1, 2, 2, 3];
        let mut destination = vec![0; 2];
        let result =
            remove_duplicates(values.sublist()).copy_to(&mut destination.sublist_mut());
        assert_eq!(destination, vec![1, 2]);
        assert_eq!(
            result,
            CopyResult {
                source_offset: 3,
                destination_offset: 2,
            }
        );
    }

    #[rstest]
    fn test_remove_duplicates_with_key_comparer() {
        let pairs = vec![(1, 'a'), (1, 'b'), (2, 'c')];
        let by_number = ByKey::new(|pair: &(i32, char)| pair.0);
        let kept = remove_duplicates_with(pairs.sublist(), &by_number).to_vec();
        assert_eq!(kept, vec![(1, 'a'), (2, 'c')]);
    }

    #[rstest]
    fn test_in_place_keeps_removed_elements_in_tail() {
        let mut values = vec![3, 3, 4, 4, 5];
        let boundary = remove_duplicates(values.sublist_mut()).in_place();
        assert_eq!(boundary, 3);
        let mut tail = values[boundary..].to_vec();
        tail.sort_unstable();
        assert_eq!(tail, vec![3, 4]);
    }

    #[rstest]
    #[case(vec![1, 1, 2], 1, vec![1, 2])]
    #[case(vec![1, 1, 2, 3, 3], 2, vec![1, 2, 3])]
    #[case(vec![4, 4, 4], 1, vec![4])]
    #[case(vec![1, 2, 2], 3, vec![1, 2])]
    fn test_in_place_after_partial_iteration(
        #[case] values: Vec<i32>,
        #[case] consumed: usize,
        #[case] expected: Vec<i32>,
    ) {
        let mut compacted = values.clone();
        let mut output = remove_duplicates(compacted.sublist_mut());
        let yielded: Vec<i32> = output.by_ref().take(consumed).collect();
        assert_eq!(yielded.as_slice(), &expected[..yielded.len()]);
        let boundary = output.in_place();
        assert_eq!(boundary, expected.len());
        assert_eq!(&compacted[..boundary], expected.as_slice());
    }
}
