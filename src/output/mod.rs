//! The three-way output protocol.
//!
//! Algorithms that produce a new sequence (merge, set algebra, copies,
//! transforms, samples, permutation copies, ...) do not write anywhere by
//! themselves. They return an [`Output`], a staged computation the caller
//! finalizes in exactly one of three ways:
//!
//! - [`Output::copy_to`]: overwrite an existing destination view from the
//!   front, stopping when either the producer runs dry or the destination is
//!   full. Reports how far each side got.
//! - [`Output::add_to`]: append everything to a growable destination view,
//!   returning the grown view.
//! - `in_place()`: where source and destination coincide, write the result
//!   back over the source and return the boundary index. Elements past the
//!   boundary keep whatever values the rewrite left there.
//!
//! An [`Output`] is also an [`Iterator`], so it can be consumed with the
//! usual adapters when none of the above fits.
//!
//! # Examples
//!
//! ```rust
//! use sublist::algorithm::union;
//! use sublist::output::MergeResult;
//! use sublist::view::AsSublist;
//!
//! let first = vec![1, 3, 5];
//! let second = vec![2, 3, 4];
//!
//! // Fixed-capacity destination: stop early and report progress.
//! let mut destination = [0; 3];
//! let result = union(first.sublist(), second.sublist())
//!     .copy_to(&mut destination.sublist_mut());
//! assert_eq!(destination, [1, 2, 3]);
//! assert_eq!(
//!     result,
//!     MergeResult {
//!         first_source_offset: 2,
//!         second_source_offset: 2,
//!         destination_offset: 3,
//!     }
//! );
//!
//! // Growable destination: append everything.
//! let mut grown = vec![0];
//! union(first.sublist(), second.sublist()).add_to(grown.sublist_mut());
//! assert_eq!(grown, vec![0, 1, 2, 3, 4, 5]);
//! ```

mod producer;
mod result;

pub use producer::{Cloned, Generated, Mapped, Picked};
pub use result::{CopyResult, MergeResult, PartitionResult, SearchResult};

use crate::collection::Growable;
use crate::view::{SublistMut, ViewMut};

/// The computation behind an [`Output`]: yields elements one at a time and
/// describes its own progress.
pub trait Producer {
    /// The produced element type.
    type Item;

    /// The progress descriptor returned by [`Output::copy_to`].
    type Outcome;

    /// Produces the next element, or `None` when exhausted.
    fn next_item(&mut self) -> Option<Self::Item>;

    /// Describes how far the producer got, given how many destination
    /// positions were written.
    fn outcome(&self, destination_offset: usize) -> Self::Outcome;

    /// Bounds on the number of elements left, as for [`Iterator::size_hint`].
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }
}

/// A staged result, finalized by `copy_to`, `add_to` or `in_place`.
#[must_use = "an output does nothing until it is copied, added or applied in place"]
#[derive(Debug, Clone)]
pub struct Output<P> {
    pub(crate) producer: P,
}

impl<P: Producer> Output<P> {
    #[inline]
    pub(crate) const fn new(producer: P) -> Self {
        Self { producer }
    }

    /// Writes produced elements over `destination`, front to back.
    ///
    /// Stops as soon as the producer is exhausted or every position of
    /// `destination` has been written; no element is produced that cannot be
    /// stored. Never grows `destination` and never touches its positions past
    /// the last one written.
    pub fn copy_to<D>(mut self, destination: &mut D) -> P::Outcome
    where
        D: ViewMut<Item = P::Item>,
    {
        let capacity = destination.len();
        let mut written = 0;
        while written < capacity {
            let Some(element) = self.producer.next_item() else {
                break;
            };
            *destination.at_mut(written) = element;
            written += 1;
        }
        self.producer.outcome(written)
    }

    /// Appends every produced element after the last element of
    /// `destination`, growing its backing collection.
    ///
    /// Returns the view over the original elements followed by the appended
    /// ones.
    pub fn add_to<'a, C>(self, destination: SublistMut<'a, C>) -> SublistMut<'a, C>
    where
        C: Growable<Item = P::Item> + ?Sized,
    {
        destination.extend(self)
    }

    /// Collects every produced element into a new `Vec`.
    pub fn to_vec(self) -> Vec<P::Item> {
        self.collect()
    }
}

impl<P: Producer> Iterator for Output<P> {
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<P::Item> {
        self.producer.next_item()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.producer.size_hint()
    }
}

impl<V> Output<Picked<V>>
where
    V: ViewMut,
    V::Item: Clone,
{
    /// Writes the planned elements over the front of the source view.
    ///
    /// Returns the number of elements written; positions past it are left as
    /// they were.
    pub fn in_place(self) -> usize {
        let Picked {
            mut source,
            plan,
            position,
        } = self.producer;
        let staged: Vec<V::Item> = plan[position..]
            .iter()
            .map(|&index| source.at(index).clone())
            .collect();
        let written = staged.len();
        for (index, element) in staged.into_iter().enumerate() {
            *source.at_mut(index) = element;
        }
        written
    }
}

impl<V, F> Output<Mapped<V, F>>
where
    V: ViewMut,
    F: FnMut(&V::Item) -> V::Item,
{
    /// Replaces each remaining source element with its transformed value.
    ///
    /// Returns the number of elements rewritten.
    pub fn in_place(self) -> usize {
        let Mapped {
            mut source,
            position,
            mut transform,
        } = self.producer;
        for index in position..source.len() {
            let replacement = transform(source.at(index));
            *source.at_mut(index) = replacement;
        }
        source.len() - position
    }
}
