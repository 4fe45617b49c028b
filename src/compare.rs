//! Comparer objects.
//!
//! Every comparison-based algorithm comes in three forms:
//!
//! - `name`: natural ordering through [`Ord`]
//! - `name_by`: a three-way comparison closure
//! - `name_with`: a [`Comparer`] object
//!
//! `name_by` wraps its closure in an [`FnComparer`] and forwards to
//! `name_with`. References to comparers are comparers too, so operations
//! that keep their comparer inside a staged [`Output`](crate::output::Output)
//! accept either an owned comparer or a borrowed one.
//!
//! # Examples
//!
//! ```rust
//! use std::cmp::Ordering;
//! use sublist::compare::{ByKey, Comparer, FnComparer, NaturalOrder, Reverse};
//!
//! assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
//! assert_eq!(Reverse(NaturalOrder).compare(&1, &2), Ordering::Greater);
//!
//! let by_length = ByKey::new(|word: &&str| word.len());
//! assert!(by_length.equals(&"abc", &"xyz"));
//!
//! let by_absolute = FnComparer::new(|left: &i32, right: &i32| left.abs().cmp(&right.abs()));
//! assert!((&by_absolute).less(&1, &-2));
//! ```

use std::cmp::Ordering;

/// A three-way comparison over `T`.
pub trait Comparer<T: ?Sized> {
    /// Compares two elements.
    fn compare(&self, left: &T, right: &T) -> Ordering;

    /// Returns `true` if the elements compare equal.
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) == Ordering::Equal
    }

    /// Returns `true` if `left` orders strictly before `right`.
    #[inline]
    fn less(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) == Ordering::Less
    }
}

impl<T: ?Sized, C: Comparer<T> + ?Sized> Comparer<T> for &C {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (**self).compare(left, right)
    }
}

/// Turns a comparison closure into a [`Comparer`].
#[derive(Debug, Clone, Copy)]
pub struct FnComparer<F> {
    compare: F,
}

impl<F> FnComparer<F> {
    /// Wraps `compare`.
    #[inline]
    pub const fn new(compare: F) -> Self {
        Self { compare }
    }
}

impl<T: ?Sized, F> Comparer<T> for FnComparer<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.compare)(left, right)
    }
}

/// Orders elements by their [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparer<T> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

/// Inverts another comparer.
///
/// Sorting with `Reverse(NaturalOrder)` sorts descending, and the heap
/// operations turn into min-heap operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reverse<C>(pub C);

impl<T: ?Sized, C: Comparer<T>> Comparer<T> for Reverse<C> {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.0.compare(right, left)
    }
}

/// Orders elements by a key extracted from each one.
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F> {
    key: F,
}

impl<F> ByKey<F> {
    /// Creates a comparer ordering by `key(element)`.
    #[inline]
    pub const fn new(key: F) -> Self {
        Self { key }
    }
}

impl<T: ?Sized, K: Ord, F> Comparer<T> for ByKey<F>
where
    F: Fn(&T) -> K,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.key)(left).cmp(&(self.key)(right))
    }
}
