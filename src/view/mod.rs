//! Bounds-checked windows over backing collections.
//!
//! A view is the triple `(collection, offset, count)`: logical index `i`
//! maps to physical index `offset + i` of the backing collection. Views are
//! cheap to build, never copy elements, and compose:
//!
//! - [`View::nest`] narrows a view to a sub-range of itself
//! - [`View::reversed`] wraps a view in an order-inverting [`Reversed`]
//!   decorator; reversing a [`Reversed`] unwraps it again
//!
//! Three concrete views are provided:
//!
//! - [`Sublist`]: shared access, `Copy`
//! - [`SublistMut`]: exclusive access, writes go straight to the backing
//!   collection; over a [`Growable`](crate::collection::Growable) collection
//!   it can also insert and remove, resizing the backing store
//! - [`Reversed`]: the decorator above
//!
//! Every access is checked against both the view's own count and the live
//! length of the backing collection.
//!
//! # Aliasing
//!
//! Views do not track each other. Resizing the backing collection through
//! one [`SublistMut`] moves elements under any offset recorded elsewhere;
//! recomputing those offsets is the caller's job. The borrow checker
//! already rules out a live sibling view during the resize itself.
//!
//! # Examples
//!
//! ```rust
//! use sublist::view::{AsSublist, View};
//!
//! let backing = vec![1, 2, 3, 4, 5, 6];
//! let middle = backing.sublist().nest(1, 4).unwrap();
//! assert_eq!(middle.to_vec(), vec![2, 3, 4, 5]);
//!
//! let reversed = middle.reversed();
//! assert_eq!(reversed.to_vec(), vec![5, 4, 3, 2]);
//!
//! // Nesting inside a reversed view reverses within the sub-range only.
//! let inner = reversed.nest(1, 2).unwrap();
//! assert_eq!(inner.to_vec(), vec![4, 3]);
//!
//! // Double reversal cancels.
//! assert_eq!(inner.reversed().to_vec(), vec![3, 4]);
//! ```

mod iter;
mod reversed;
mod sublist;
mod sublist_mut;

pub use iter::Iter;
pub use reversed::Reversed;
pub use sublist::Sublist;
pub use sublist_mut::SublistMut;

use crate::collection::{Indexable, IndexableMut};
use crate::error::{SublistError, ensure_at_most};

/// A bounds-checked, read-only window of elements.
pub trait View: Sized {
    /// The element type.
    type Item;

    /// The view produced by [`View::reversed`].
    type Reversed: View<Item = Self::Item>;

    /// Returns the number of elements the view covers.
    fn len(&self) -> usize;

    /// Returns the element at logical `index`, or `None` when `index` is not
    /// in `[0, len())` or the backing collection no longer reaches it.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Narrows the view to `count` elements starting at logical `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`SublistError::ArgumentOutOfRange`] if `offset > len()` or
    /// `offset + count > len()`.
    fn nest(self, offset: usize, count: usize) -> Result<Self, SublistError>;

    /// Returns a view presenting the same elements in reverse order.
    fn reversed(self) -> Self::Reversed;

    /// Returns `true` if the view covers no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Narrows the view to everything from logical `offset` onwards.
    ///
    /// # Errors
    ///
    /// Returns [`SublistError::ArgumentOutOfRange`] if `offset > len()`.
    #[inline]
    fn nest_from(self, offset: usize) -> Result<Self, SublistError> {
        let length = self.len();
        ensure_at_most("offset", offset, length)?;
        self.nest(offset, length - offset)
    }

    /// Returns the element at logical `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SublistError::IndexOutOfRange`] when `index` is not in
    /// `[0, len())`.
    #[inline]
    fn element_at(&self, index: usize) -> Result<&Self::Item, SublistError> {
        self.get(index)
            .ok_or_else(|| SublistError::index_out_of_range(index, self.len()))
    }

    /// Returns the element at logical `index`.
    ///
    /// This is the accessor the algorithms use, with the contract of slice
    /// indexing.
    ///
    /// # Panics
    ///
    /// Panics when `index` is not in `[0, len())`.
    #[inline]
    #[track_caller]
    fn at(&self, index: usize) -> &Self::Item {
        match self.get(index) {
            Some(element) => element,
            None => panic!(
                "index {index} is out of range for a view of {} elements",
                self.len()
            ),
        }
    }

    /// Returns an iterator over the elements in logical order.
    ///
    /// Each call starts afresh from the view's bounds, so iteration can be
    /// repeated any number of times.
    #[inline]
    fn iter(&self) -> Iter<'_, Self> {
        Iter::new(self)
    }

    /// Clones the elements into a `Vec`, in logical order.
    fn to_vec(&self) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        self.iter().cloned().collect()
    }
}

/// A view whose elements can be written through to the backing collection.
pub trait ViewMut: View {
    /// Returns exclusive access to the element at logical `index`.
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Item>;

    /// Exchanges the elements at two logical positions.
    ///
    /// # Panics
    ///
    /// Panics if either position is not in `[0, len())`.
    fn swap(&mut self, first: usize, second: usize);

    /// Overwrites the element at logical `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SublistError::IndexOutOfRange`] when `index` is not in
    /// `[0, len())`; nothing is written.
    #[inline]
    fn set(&mut self, index: usize, value: Self::Item) -> Result<(), SublistError> {
        self.replace(index, value).map(drop)
    }

    /// Overwrites the element at logical `index`, returning the old value.
    ///
    /// # Errors
    ///
    /// Returns [`SublistError::IndexOutOfRange`] when `index` is not in
    /// `[0, len())`; nothing is written.
    #[inline]
    fn replace(&mut self, index: usize, value: Self::Item) -> Result<Self::Item, SublistError> {
        let count = self.len();
        self.get_mut(index)
            .map(|slot| std::mem::replace(slot, value))
            .ok_or(SublistError::index_out_of_range(index, count))
    }

    /// Returns exclusive access to the element at logical `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is not in `[0, len())`.
    #[inline]
    #[track_caller]
    fn at_mut(&mut self, index: usize) -> &mut Self::Item {
        let count = self.len();
        match self.get_mut(index) {
            Some(element) => element,
            None => panic!("index {index} is out of range for a view of {count} elements"),
        }
    }
}

/// Builds views directly from any [`Indexable`] collection.
///
/// # Examples
///
/// ```rust
/// use sublist::view::{AsSublist, View, ViewMut};
///
/// let mut backing = vec![1, 2, 3, 4];
/// assert_eq!(backing.sublist().len(), 4);
///
/// let mut tail = backing.sublist_range_mut(2, 2).unwrap();
/// tail.set(0, 30).unwrap();
/// assert_eq!(backing, vec![1, 2, 30, 4]);
/// ```
pub trait AsSublist: Indexable {
    /// A shared view over the whole collection.
    #[inline]
    fn sublist(&self) -> Sublist<'_, Self> {
        Sublist::new(self)
    }

    /// A shared view over `count` elements starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`SublistError::ArgumentOutOfRange`] if the range does not fit
    /// inside the collection.
    #[inline]
    fn sublist_range(&self, offset: usize, count: usize) -> Result<Sublist<'_, Self>, SublistError> {
        Sublist::with_range(self, offset, count)
    }

    /// An exclusive view over the whole collection.
    #[inline]
    fn sublist_mut(&mut self) -> SublistMut<'_, Self>
    where
        Self: IndexableMut,
    {
        SublistMut::new(self)
    }

    /// An exclusive view over `count` elements starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`SublistError::ArgumentOutOfRange`] if the range does not fit
    /// inside the collection.
    #[inline]
    fn sublist_range_mut(
        &mut self,
        offset: usize,
        count: usize,
    ) -> Result<SublistMut<'_, Self>, SublistError>
    where
        Self: IndexableMut,
    {
        SublistMut::with_range(self, offset, count)
    }
}

impl<C: Indexable + ?Sized> AsSublist for C {}

/// Checks that `offset + count` fits inside `length`.
#[inline]
pub(crate) const fn check_range(
    offset: usize,
    count: usize,
    length: usize,
) -> Result<(), SublistError> {
    if offset > length {
        return Err(SublistError::argument_out_of_range("offset", offset, length));
    }
    ensure_at_most("count", count, length - offset)
}

/// Reverses logical positions `[start, end)` of a view.
pub(crate) fn reverse_range<V: ViewMut>(view: &mut V, start: usize, end: usize) {
    let (mut low, mut high) = (start, end);
    while low + 1 < high {
        high -= 1;
        view.swap(low, high);
        low += 1;
    }
}

/// Rotates `[start, end)` so that the element at `middle` becomes first.
pub(crate) fn rotate_range<V: ViewMut>(view: &mut V, start: usize, middle: usize, end: usize) {
    if start == middle || middle == end {
        return;
    }
    reverse_range(view, start, middle);
    reverse_range(view, middle, end);
    reverse_range(view, start, end);
}

static_assertions::assert_impl_all!(Sublist<'static, Vec<i32>>: Copy, Send, Sync);
static_assertions::assert_impl_all!(SublistMut<'static, Vec<i32>>: Send, Sync);
static_assertions::assert_not_impl_any!(SublistMut<'static, Vec<i32>>: Clone);
