use std::fmt;

use super::{Iter, Reversed, Sublist, View, ViewMut, check_range, rotate_range};
use crate::collection::{Growable, Indexable, IndexableMut};
use crate::error::{SublistError, ensure_at_most};

/// An exclusive window over a backing collection.
///
/// Element writes go straight through to the backing collection. When the
/// collection is [`Growable`], the view can also resize it: every resizing
/// operation consumes the view and returns one covering the new extent,
/// leaving the original offset unchanged.
///
/// # Examples
///
/// ```rust
/// use sublist::view::{AsSublist, View, ViewMut};
///
/// let mut backing = vec![1, 2, 3, 4, 5];
///
/// // Overwrite through a window.
/// let mut window = backing.sublist_range_mut(1, 2).unwrap();
/// window.swap(0, 1);
/// assert_eq!(backing, vec![1, 3, 2, 4, 5]);
///
/// // Remove the window's elements from the backing collection.
/// let window = backing.sublist_range_mut(1, 2).unwrap();
/// let emptied = window.clear();
/// assert_eq!(emptied.len(), 0);
/// assert_eq!(backing, vec![1, 4, 5]);
/// ```
pub struct SublistMut<'a, C: ?Sized> {
    collection: &'a mut C,
    offset: usize,
    count: usize,
}

impl<'a, C: IndexableMut + ?Sized> SublistMut<'a, C> {
    /// Creates a view over the whole collection.
    #[inline]
    #[must_use]
    pub fn new(collection: &'a mut C) -> Self {
        let count = collection.len();
        Self {
            collection,
            offset: 0,
            count,
        }
    }

    /// Creates a view over `count` elements starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`SublistError::ArgumentOutOfRange`] if the range does not fit
    /// inside the collection.
    #[inline]
    pub fn with_range(
        collection: &'a mut C,
        offset: usize,
        count: usize,
    ) -> Result<Self, SublistError> {
        check_range(offset, count, collection.len())?;
        Ok(Self {
            collection,
            offset,
            count,
        })
    }
}

impl<'a, C: ?Sized> SublistMut<'a, C> {
    /// Physical index of the first element in the backing collection.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Borrows this view for a shorter lifetime, leaving it usable afterwards.
    ///
    /// This is how a caller nests or reverses a view it wants to keep:
    /// `view.reborrow().nest(1, 2)`.
    #[inline]
    pub fn reborrow(&mut self) -> SublistMut<'_, C> {
        SublistMut {
            collection: &mut *self.collection,
            offset: self.offset,
            count: self.count,
        }
    }

    /// Returns a shared view over the same range.
    #[inline]
    pub fn as_sublist(&self) -> Sublist<'_, C>
    where
        C: Indexable,
    {
        Sublist::from_parts(&*self.collection, self.offset, self.count)
    }

    /// Gives up exclusivity, returning a shared view over the same range.
    #[inline]
    pub fn into_sublist(self) -> Sublist<'a, C>
    where
        C: Indexable,
    {
        Sublist::from_parts(self.collection, self.offset, self.count)
    }
}

impl<C: Indexable + ?Sized> View for SublistMut<'_, C> {
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

impl<C: IndexableMut + ?Sized> ViewMut for SublistMut<'_, C> {
    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut C::Item> {
        if index < self.count {
            self.collection.get_mut(self.offset + index)
        } else {
            None
        }
    }

    #[inline]
    #[track_caller]
    fn swap(&mut self, first: usize, second: usize) {
        let count = self.count;
        assert!(
            first < count && second < count,
            "swap positions ({first}, {second}) out of range for a view of {count} elements"
        );
        self.collection
            .swap(self.offset + first, self.offset + second);
    }
}

// =============================================================================
// Resizing through the view
// =============================================================================

impl<'a, C: Growable + ?Sized> SublistMut<'a, C> {
    /// Removes every element the view covers from the backing collection.
    ///
    /// Later elements shift left by `len()`. Returns an empty view at the
    /// same offset.
    ///
    /// # Complexity
    ///
    /// Whatever [`Growable::remove_range`] costs for the collection: O(n) for
    /// `Vec`.
    #[must_use = "the returned view is the only one that reflects the new length"]
    pub fn clear(self) -> Self {
        self.collection.remove_range(self.offset, self.count);
        Self {
            collection: self.collection,
            offset: self.offset,
            count: 0,
        }
    }

    /// Inserts `element` at logical `index`, growing the backing collection.
    ///
    /// # Errors
    ///
    /// Returns [`SublistError::ArgumentOutOfRange`] if `index > len()`.
    pub fn insert(self, index: usize, element: C::Item) -> Result<Self, SublistError> {
        ensure_at_most("index", index, self.count)?;
        self.collection.insert(self.offset + index, element);
        Ok(Self {
            collection: self.collection,
            offset: self.offset,
            count: self.count + 1,
        })
    }

    /// Inserts `element` before the first element of the view.
    #[must_use = "the returned view is the only one that reflects the new length"]
    pub fn push_front(self, element: C::Item) -> Self {
        self.collection.insert(self.offset, element);
        Self {
            collection: self.collection,
            offset: self.offset,
            count: self.count + 1,
        }
    }

    /// Inserts `element` after the last element of the view.
    #[must_use = "the returned view is the only one that reflects the new length"]
    pub fn push_back(self, element: C::Item) -> Self {
        self.collection.insert(self.offset + self.count, element);
        Self {
            collection: self.collection,
            offset: self.offset,
            count: self.count + 1,
        }
    }

    /// Removes the element at logical `index` from the backing collection.
    ///
    /// # Errors
    ///
    /// Returns [`SublistError::IndexOutOfRange`] if `index >= len()`.
    pub fn remove(self, index: usize) -> Result<(Self, C::Item), SublistError> {
        if index >= self.count {
            return Err(SublistError::index_out_of_range(index, self.count));
        }
        let removed = self
            .collection
            .remove(self.offset + index)
            .ok_or(SublistError::index_out_of_range(index, self.count))?;
        Ok((
            Self {
                collection: self.collection,
                offset: self.offset,
                count: self.count - 1,
            },
            removed,
        ))
    }

    /// Appends every element of `elements` after the view's last element.
    ///
    /// See [`SublistMut::extend_at`].
    #[must_use = "the returned view is the only one that reflects the new length"]
    pub fn extend<I>(self, elements: I) -> Self
    where
        I: IntoIterator<Item = C::Item>,
    {
        let count = self.count;
        self.splice_in(count, elements)
    }

    /// Inserts every element of `elements` at logical `index`.
    ///
    /// The number of elements does not need to be known up front. They are
    /// pushed onto the end of the backing collection and the new block is
    /// then rotated into position, so each displaced element moves a bounded
    /// number of times regardless of how many are inserted.
    ///
    /// # Errors
    ///
    /// Returns [`SublistError::ArgumentOutOfRange`] if `index > len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sublist::view::{AsSublist, View};
    ///
    /// let mut backing = vec![1, 2, 6, 7];
    /// let view = backing.sublist_range_mut(0, 2).unwrap();
    /// let grown = view.extend_at(2, 3..=5).unwrap();
    /// assert_eq!(grown.len(), 5);
    /// assert_eq!(backing, vec![1, 2, 3, 4, 5, 6, 7]);
    /// ```
    pub fn extend_at<I>(self, index: usize, elements: I) -> Result<Self, SublistError>
    where
        I: IntoIterator<Item = C::Item>,
    {
        ensure_at_most("index", index, self.count)?;
        Ok(self.splice_in(index, elements))
    }

    fn splice_in<I>(self, index: usize, elements: I) -> Self
    where
        I: IntoIterator<Item = C::Item>,
    {
        let position = self.offset + index;
        let original_length = self.collection.len();
        for element in elements {
            self.collection.push(element);
        }
        let added = self.collection.len() - original_length;

        if added > 0 && position < original_length {
            let mut tail = SublistMut {
                collection: &mut *self.collection,
                offset: position,
                count: original_length + added - position,
            };
            let end = tail.count;
            rotate_range(&mut tail, 0, original_length - position, end);
        }

        Self {
            collection: self.collection,
            offset: self.offset,
            count: self.count + added,
        }
    }
}

impl<'v, 'a, C: Indexable + ?Sized> IntoIterator for &'v SublistMut<'a, C> {
    type Item = &'v C::Item;
    type IntoIter = Iter<'v, SublistMut<'a, C>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<C> fmt::Debug for SublistMut<'_, C>
where
    C: Indexable + ?Sized,
    C::Item: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::AsSublist;
    use rstest::rstest;
    use std::collections::VecDeque;

    #[rstest]
    fn test_clear_removes_covered_range() {
        let mut backing = vec![1, 2, 3, 4, 5];
        let view = SublistMut::with_range(&mut backing, 1, 2).unwrap();
        let emptied = view.clear();
        assert_eq!(emptied.offset(), 1);
        assert!(emptied.is_empty());
        assert_eq!(backing, vec![1, 4, 5]);
    }

    #[rstest]
    fn test_insert_and_remove_track_count() {
        let mut backing = vec![1, 2, 3];
        let view = backing.sublist_range_mut(1, 1).unwrap();
        let view = view.insert(1, 9).unwrap();
        assert_eq!(view.to_vec(), vec![2, 9]);
        let (view, removed) = view.remove(0).unwrap();
        assert_eq!(removed, 2);
        assert_eq!(view.to_vec(), vec![9]);
        assert_eq!(backing, vec![1, 9, 3]);
    }

    #[rstest]
    fn test_insert_past_count_fails_without_mutation() {
        let mut backing = vec![1, 2, 3];
        let view = backing.sublist_range_mut(0, 1).unwrap();
        assert!(matches!(
            view.insert(2, 7),
            Err(SublistError::ArgumentOutOfRange(_))
        ));
        assert_eq!(backing, vec![1, 2, 3]);
    }

    #[rstest]
    #[case(0, 1, 2)]
    #[case(1, 1, 3)]
    #[case(2, 0, 2)]
    fn test_extend_at_past_count_fails_without_mutation(
        #[case] offset: usize,
        #[case] count: usize,
        #[case] index: usize,
    ) {
        let mut backing = vec![1, 2, 3];
        let mut pulled = 0;
        let view = backing.sublist_range_mut(offset, count).unwrap();
        let result = view.extend_at(index, (4..=6).inspect(|_| pulled += 1));
        assert_eq!(
            result.map(|grown| grown.len()),
            Err(SublistError::argument_out_of_range("index", index, count))
        );
        assert_eq!(pulled, 0);
        assert_eq!(backing, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_remove_past_count_fails() {
        let mut backing = vec![1, 2, 3];
        let view = backing.sublist_range_mut(0, 1).unwrap();
        assert!(matches!(
            view.remove(1),
            Err(SublistError::IndexOutOfRange(_))
        ));
        assert_eq!(backing, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_push_front_and_back() {
        let mut backing = vec![0, 5, 0];
        let view = backing.sublist_range_mut(1, 1).unwrap();
        let view = view.push_front(4).push_back(6);
        assert_eq!(view.to_vec(), vec![4, 5, 6]);
        assert_eq!(backing, vec![0, 4, 5, 6, 0]);
    }

    #[rstest]
    #[case(0, vec![7, 8, 1, 2, 3])]
    #[case(1, vec![1, 7, 8, 2, 3])]
    #[case(3, vec![1, 2, 3, 7, 8])]
    fn test_extend_at_rotates_block_into_place(#[case] index: usize, #[case] expected: Vec<i32>) {
        let mut backing = vec![1, 2, 3];
        let view = backing.sublist_mut();
        let grown = view.extend_at(index, vec![7, 8]).unwrap();
        assert_eq!(grown.len(), 5);
        assert_eq!(backing, expected);
    }

    #[rstest]
    fn test_extend_from_lazy_iterator_into_middle_view() {
        let mut backing: VecDeque<i32> = VecDeque::from(vec![1, 2, 9, 10]);
        let view = SublistMut::with_range(&mut backing, 0, 2).unwrap();
        let grown = view.extend((3..9).filter(|value| value % 2 == 1));
        assert_eq!(grown.to_vec(), vec![1, 2, 3, 5, 7]);
        assert_eq!(backing, VecDeque::from(vec![1, 2, 3, 5, 7, 9, 10]));
    }

    #[rstest]
    fn test_extend_with_nothing_leaves_view_unchanged() {
        let mut backing = vec![1, 2];
        let view = backing.sublist_range_mut(0, 1).unwrap();
        let same = view.extend(std::iter::empty());
        assert_eq!(same.len(), 1);
        assert_eq!(backing, vec![1, 2]);
    }

    #[rstest]
    fn test_reborrow_keeps_outer_view_usable() {
        let mut backing = vec![1, 2, 3, 4];
        let mut view = backing.sublist_mut();
        {
            let mut inner = view.reborrow().nest(2, 2).unwrap();
            inner.set(0, 30).unwrap();
        }
        view.set(0, 10).unwrap();
        assert_eq!(backing, vec![10, 2, 30, 4]);
    }

    #[rstest]
    #[should_panic(expected = "out of range")]
    fn test_swap_outside_view_panics() {
        let mut backing = vec![1, 2, 3];
        let mut view = backing.sublist_range_mut(0, 2).unwrap();
        view.swap(0, 2);
    }
}
