use std::fmt;

use super::{Iter, Reversed, View, check_range};
use crate::collection::Indexable;
use crate::error::SublistError;

/// A shared, read-only window over an [`Indexable`] collection.
///
/// `Sublist` is `Copy`: narrowing or reversing it produces new values and
/// never touches the backing collection.
///
/// # Examples
///
/// ```rust
/// use sublist::view::{Sublist, View};
///
/// let backing = [10, 20, 30, 40];
/// let view = Sublist::with_range(&backing, 1, 2).unwrap();
///
/// assert_eq!(view.offset(), 1);
/// assert_eq!(view.len(), 2);
/// assert_eq!(view.get(0), Some(&20));
/// assert_eq!(view.get(2), None);
/// ```
pub struct Sublist<'a, C: ?Sized> {
    collection: &'a C,
    offset: usize,
    count: usize,
}

impl<'a, C: Indexable + ?Sized> Sublist<'a, C> {
    /// Creates a view over the whole collection.
    #[inline]
    #[must_use]
    pub fn new(collection: &'a C) -> Self {
        Self {
            collection,
            offset: 0,
            count: collection.len(),
        }
    }

    /// Creates a view over `count` elements starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`SublistError::ArgumentOutOfRange`] if the range does not fit
    /// inside the collection.
    #[inline]
    pub fn with_range(collection: &'a C, offset: usize, count: usize) -> Result<Self, SublistError> {
        check_range(offset, count, collection.len())?;
        Ok(Self {
            collection,
            offset,
            count,
        })
    }

    /// Physical index of the first element in the backing collection.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// The backing collection.
    #[inline]
    #[must_use]
    pub const fn collection(&self) -> &'a C {
        self.collection
    }
}

impl<'a, C: ?Sized> Sublist<'a, C> {
    #[inline]
    pub(crate) const fn from_parts(collection: &'a C, offset: usize, count: usize) -> Self {
        Self {
            collection,
            offset,
            count,
        }
    }
}

impl<C: ?Sized> Clone for Sublist<'_, C> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for Sublist<'_, C> {}

impl<C: Indexable + ?Sized> View for Sublist<'_, C> {
    type Item = C::Item;
    type Reversed = Reversed<Self>;

    #[inline]
    fn len(&self) -> usize {
        self.count
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&C::Item> {
        if index < self.count {
            self.collection.get(self.offset + index)
        } else {
            None
        }
    }

    #[inline]
    fn nest(self, offset: usize, count: usize) -> Result<Self, SublistError> {
        check_range(offset, count, self.count)?;
        Ok(Self {
            collection: self.collection,
            offset: self.offset + offset,
            count,
        })
    }

    #[inline]
    fn reversed(self) -> Reversed<Self> {
        Reversed::new(self)
    }
}

impl<'v, 'a, C: Indexable + ?Sized> IntoIterator for &'v Sublist<'a, C> {
    type Item = &'v C::Item;
    type IntoIter = Iter<'v, Sublist<'a, C>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<C> fmt::Debug for Sublist<'_, C>
where
    C: Indexable + ?Sized,
    C::Item: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}
