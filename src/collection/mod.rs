//! Capability traits for backing collections.
//!
//! A view never owns its elements. It borrows a backing collection through
//! one of three independent capabilities:
//!
//! - [`Indexable`]: element count and shared element access
//! - [`IndexableMut`]: exclusive element access and swapping
//! - [`Growable`]: insertion and removal by position
//!
//! Algorithms ask for the smallest capability they need: searching only
//! needs [`Indexable`], sorting needs [`IndexableMut`], and only the growth
//! operations of [`SublistMut`](crate::view::SublistMut) need [`Growable`].
//!
//! # Examples
//!
//! ```rust
//! use sublist::collection::{Growable, Indexable, IndexableMut};
//!
//! fn first_two<C: Indexable + ?Sized>(collection: &C) -> (Option<&C::Item>, Option<&C::Item>) {
//!     (collection.get(0), collection.get(1))
//! }
//!
//! let mut values = vec![3, 1, 2];
//! assert_eq!(first_two(&values), (Some(&3), Some(&1)));
//!
//! IndexableMut::swap(&mut values, 0, 2);
//! Growable::push(&mut values, 9);
//! assert_eq!(values, vec![2, 1, 3, 9]);
//! ```

use std::collections::VecDeque;

/// A collection with a known length and shared positional access.
pub trait Indexable {
    /// The element type.
    type Item;

    /// Returns the number of elements currently stored.
    fn len(&self) -> usize;

    /// Returns the element at `index`, or `None` when `index >= len()`.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Returns `true` if the collection holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A collection whose elements can be modified in place.
pub trait IndexableMut: Indexable {
    /// Returns exclusive access to the element at `index`, or `None` when
    /// `index >= len()`.
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Item>;

    /// Exchanges the elements at two positions.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds.
    fn swap(&mut self, first: usize, second: usize);
}

/// A collection that can grow and shrink by position.
pub trait Growable: IndexableMut {
    /// Inserts `element` at `index`, shifting every later element right.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    fn insert(&mut self, index: usize, element: Self::Item);

    /// Removes and returns the element at `index`, shifting every later
    /// element left. Returns `None` when `index >= len()`.
    fn remove(&mut self, index: usize) -> Option<Self::Item>;

    /// Appends `element` after the last position.
    #[inline]
    fn push(&mut self, element: Self::Item) {
        let length = self.len();
        self.insert(length, element);
    }

    /// Removes `count` elements starting at `start`.
    ///
    /// Positions past the end are ignored.
    fn remove_range(&mut self, start: usize, count: usize) {
        for _ in 0..count {
            if self.remove(start).is_none() {
                break;
            }
        }
    }
}

// =============================================================================
// Slices and arrays
// =============================================================================

impl<T> Indexable for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T> IndexableMut for [T] {
    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, index)
    }

    #[inline]
    fn swap(&mut self, first: usize, second: usize) {
        <[T]>::swap(self, first, second);
    }
}

impl<T, const N: usize> Indexable for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T, const N: usize> IndexableMut for [T; N] {
    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    #[inline]
    fn swap(&mut self, first: usize, second: usize) {
        self.as_mut_slice().swap(first, second);
    }
}

// =============================================================================
// Vec
// =============================================================================

impl<T> Indexable for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> IndexableMut for Vec<T> {
    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    #[inline]
    fn swap(&mut self, first: usize, second: usize) {
        self.as_mut_slice().swap(first, second);
    }
}

impl<T> Growable for Vec<T> {
    #[inline]
    fn insert(&mut self, index: usize, element: T) {
        Vec::insert(self, index, element);
    }

    #[inline]
    fn remove(&mut self, index: usize) -> Option<T> {
        (index < Vec::len(self)).then(|| Vec::remove(self, index))
    }

    #[inline]
    fn push(&mut self, element: T) {
        Vec::push(self, element);
    }

    fn remove_range(&mut self, start: usize, count: usize) {
        let length = Vec::len(self);
        let start = start.min(length);
        let end = start.saturating_add(count).min(length);
        self.drain(start..end);
    }
}

// =============================================================================
// VecDeque
// =============================================================================

impl<T> Indexable for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
}

impl<T> IndexableMut for VecDeque<T> {
    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        VecDeque::get_mut(self, index)
    }

    #[inline]
    fn swap(&mut self, first: usize, second: usize) {
        VecDeque::swap(self, first, second);
    }
}

impl<T> Growable for VecDeque<T> {
    #[inline]
    fn insert(&mut self, index: usize, element: T) {
        VecDeque::insert(self, index, element);
    }

    #[inline]
    fn remove(&mut self, index: usize) -> Option<T> {
        VecDeque::remove(self, index)
    }

    #[inline]
    fn push(&mut self, element: T) {
        self.push_back(element);
    }

    fn remove_range(&mut self, start: usize, count: usize) {
        let length = VecDeque::len(self);
        let start = start.min(length);
        let end = start.saturating_add(count).min(length);
        self.drain(start..end);
    }
}

// =============================================================================
// SmallVec
// =============================================================================

#[cfg(feature = "smallvec")]
impl<A: smallvec::Array> Indexable for smallvec::SmallVec<A> {
    type Item = A::Item;

    #[inline]
    fn len(&self) -> usize {
        smallvec::SmallVec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&A::Item> {
        self.as_slice().get(index)
    }
}

#[cfg(feature = "smallvec")]
impl<A: smallvec::Array> IndexableMut for smallvec::SmallVec<A> {
    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut A::Item> {
        self.as_mut_slice().get_mut(index)
    }

    #[inline]
    fn swap(&mut self, first: usize, second: usize) {
        self.as_mut_slice().swap(first, second);
    }
}

#[cfg(feature = "smallvec")]
impl<A: smallvec::Array> Growable for smallvec::SmallVec<A> {
    #[inline]
    fn insert(&mut self, index: usize, element: A::Item) {
        smallvec::SmallVec::insert(self, index, element);
    }

    #[inline]
    fn remove(&mut self, index: usize) -> Option<A::Item> {
        (index < smallvec::SmallVec::len(self)).then(|| smallvec::SmallVec::remove(self, index))
    }

    #[inline]
    fn push(&mut self, element: A::Item) {
        smallvec::SmallVec::push(self, element);
    }

    fn remove_range(&mut self, start: usize, count: usize) {
        let length = smallvec::SmallVec::len(self);
        let start = start.min(length);
        let end = start.saturating_add(count).min(length);
        self.drain(start..end);
    }
}
