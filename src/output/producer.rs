//! Producers shared by several algorithms.

use super::{CopyResult, Producer};
use crate::view::View;

/// Clones the elements of a view, front to back.
#[derive(Debug, Clone)]
pub struct Cloned<V> {
    source: V,
    position: usize,
}

impl<V: View> Cloned<V> {
    pub(crate) const fn new(source: V) -> Self {
        Self {
            source,
            position: 0,
        }
    }
}

impl<V> Producer for Cloned<V>
where
    V: View,
    V::Item: Clone,
{
    type Item = V::Item;
    type Outcome = CopyResult;

    fn next_item(&mut self) -> Option<V::Item> {
        let element = self.source.get(self.position)?.clone();
        self.position += 1;
        Some(element)
    }

    fn outcome(&self, destination_offset: usize) -> CopyResult {
        CopyResult {
            source_offset: self.position,
            destination_offset,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.source.len() - self.position;
        (remaining, Some(remaining))
    }
}

/// Applies a function to each element of a view, front to back.
#[derive(Debug, Clone)]
pub struct Mapped<V, F> {
    pub(crate) source: V,
    pub(crate) position: usize,
    pub(crate) transform: F,
}

impl<V: View, F> Mapped<V, F> {
    pub(crate) const fn new(source: V, transform: F) -> Self {
        Self {
            source,
            position: 0,
            transform,
        }
    }
}

impl<V, F, U> Producer for Mapped<V, F>
where
    V: View,
    F: FnMut(&V::Item) -> U,
{
    type Item = U;
    type Outcome = CopyResult;

    fn next_item(&mut self) -> Option<U> {
        let mapped = (self.transform)(self.source.get(self.position)?);
        self.position += 1;
        Some(mapped)
    }

    fn outcome(&self, destination_offset: usize) -> CopyResult {
        CopyResult {
            source_offset: self.position,
            destination_offset,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.source.len() - self.position;
        (remaining, Some(remaining))
    }
}

/// Calls a generator a fixed number of times.
#[derive(Debug, Clone)]
pub struct Generated<F> {
    remaining: usize,
    produced: usize,
    generator: F,
}

impl<F> Generated<F> {
    pub(crate) const fn new(count: usize, generator: F) -> Self {
        Self {
            remaining: count,
            produced: 0,
            generator,
        }
    }
}

impl<F, T> Producer for Generated<F>
where
    F: FnMut() -> T,
{
    type Item = T;
    type Outcome = CopyResult;

    fn next_item(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.produced += 1;
        Some((self.generator)())
    }

    /// `source_offset` counts generator calls.
    fn outcome(&self, destination_offset: usize) -> CopyResult {
        CopyResult {
            source_offset: self.produced,
            destination_offset,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Clones source elements in the order given by a precomputed plan of
/// logical indices.
///
/// Used by operations that decide the whole output before emitting any of
/// it: random samples, shuffled copies and permutation copies. The
/// `source_offset` of its [`CopyResult`] counts plan entries emitted.
#[derive(Debug, Clone)]
pub struct Picked<V> {
    pub(crate) source: V,
    pub(crate) plan: Vec<usize>,
    pub(crate) position: usize,
}

impl<V: View> Picked<V> {
    pub(crate) const fn new(source: V, plan: Vec<usize>) -> Self {
        Self {
            source,
            plan,
            position: 0,
        }
    }

    /// The logical source indices still to be emitted, in emission order.
    #[inline]
    pub fn plan(&self) -> &[usize] {
        &self.plan[self.position..]
    }
}

impl<V> Producer for Picked<V>
where
    V: View,
    V::Item: Clone,
{
    type Item = V::Item;
    type Outcome = CopyResult;

    fn next_item(&mut self) -> Option<V::Item> {
        let index = *self.plan.get(self.position)?;
        let element = self.source.get(index)?.clone();
        self.position += 1;
        Some(element)
    }

    fn outcome(&self, destination_offset: usize) -> CopyResult {
        CopyResult {
            source_offset: self.position,
            destination_offset,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.plan.len() - self.position;
        (remaining, Some(remaining))
    }
}
