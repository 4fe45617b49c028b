use std::iter::FusedIterator;

use super::View;

/// Iterator over the elements of a view, in logical order.
///
/// Created by [`View::iter`].
#[derive(Debug)]
pub struct Iter<'v, V> {
    view: &'v V,
    front: usize,
    back: usize,
}

impl<'v, V: View> Iter<'v, V> {
    #[inline]
    pub(crate) fn new(view: &'v V) -> Self {
        Self {
            view,
            front: 0,
            back: view.len(),
        }
    }
}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            view: self.view,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'v, V: View> Iterator for Iter<'v, V> {
    type Item = &'v V::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let element = self.view.get(self.front);
        self.front += 1;
        element
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<V: View> DoubleEndedIterator for Iter<'_, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.view.get(self.back)
    }
}

impl<V: View> ExactSizeIterator for Iter<'_, V> {}

impl<V: View> FusedIterator for Iter<'_, V> {}
