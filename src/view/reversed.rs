use std::fmt;

use super::{Iter, View, ViewMut, check_range};
use crate::error::SublistError;

/// A decorator presenting the elements of another view in reverse order.
///
/// Logical index `i` maps to index `len - 1 - i` of the inner view.
/// Reversing a `Reversed` returns the inner view, and nesting inside a
/// `Reversed` nests the mirrored range of the inner view, so both compose
/// in O(1).
///
/// # Examples
///
/// ```rust
/// use sublist::view::{AsSublist, View, ViewMut};
///
/// let mut backing = vec![1, 2, 3, 4];
/// let mut backwards = backing.sublist_mut().reversed();
/// assert_eq!(backwards.get(0), Some(&4));
///
/// backwards.set(0, 40).unwrap();
/// assert_eq!(backing, vec![1, 2, 3, 40]);
/// ```
#[derive(Clone, Copy)]
pub struct Reversed<V> {
    inner: V,
}

impl<V: View> Reversed<V> {
    /// Wraps `inner`.
    #[inline]
    pub const fn new(inner: V) -> Self {
        Self { inner }
    }

    /// The wrapped view, in its own order.
    #[inline]
    pub const fn inner(&self) -> &V {
        &self.inner
    }

    /// Unwraps the decorator.
    #[inline]
    pub fn into_inner(self) -> V {
        self.inner
    }

    #[inline]
    const fn mirror(length: usize, index: usize) -> usize {
        length - 1 - index
    }
}

impl<V: View> View for Reversed<V> {
    type Item = V::Item;
    type Reversed = V;

    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&V::Item> {
        let length = self.inner.len();
        if index < length {
            self.inner.get(Self::mirror(length, index))
        } else {
            None
        }
    }

    fn nest(self, offset: usize, count: usize) -> Result<Self, SublistError> {
        let length = self.inner.len();
        check_range(offset, count, length)?;
        self.inner
            .nest(length - offset - count, count)
            .map(Self::new)
    }

    #[inline]
    fn reversed(self) -> V {
        self.inner
    }
}

impl<V: ViewMut> ViewMut for Reversed<V> {
    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut V::Item> {
        let length = self.inner.len();
        if index < length {
            self.inner.get_mut(Self::mirror(length, index))
        } else {
            None
        }
    }

    #[inline]
    #[track_caller]
    fn swap(&mut self, first: usize, second: usize) {
        let length = self.inner.len();
        assert!(
            first < length && second < length,
            "swap positions ({first}, {second}) out of range for a view of {length} elements"
        );
        self.inner
            .swap(Self::mirror(length, first), Self::mirror(length, second));
    }
}

impl<'v, V: View> IntoIterator for &'v Reversed<V> {
    type Item = &'v V::Item;
    type IntoIter = Iter<'v, Reversed<V>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> fmt::Debug for Reversed<V>
where
    V: View,
    V::Item: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}
