//! Copy, transform, generate and fill primitives, plus in-place reversal,
//! rotation and range swapping.
//!
//! # Examples
//!
//! ```rust
//! use sublist::algorithm::{copy, generate, rotate, transform};
//! use sublist::view::{AsSublist, View};
//!
//! let source = vec![1, 2, 3];
//!
//! // Copy into a reversed destination.
//! let mut destination = vec![0; 3];
//! copy(source.sublist()).copy_to(&mut destination.sublist_mut().reversed());
//! assert_eq!(destination, vec![3, 2, 1]);
//!
//! // Transform to another element type and append.
//! let mut labels = vec![String::from("start")];
//! transform(source.sublist(), |value| format!("#{value}")).add_to(labels.sublist_mut());
//! assert_eq!(labels, vec!["start", "#1", "#2", "#3"]);
//!
//! // Generate a fixed number of values.
//! let mut next = 1;
//! let powers = generate(4, || {
//!     next *= 2;
//!     next
//! })
//! .to_vec();
//! assert_eq!(powers, vec![2, 4, 8, 16]);
//!
//! let mut values = vec![1, 2, 3, 4, 5];
//! rotate(&mut values.sublist_mut(), 2).unwrap();
//! assert_eq!(values, vec![3, 4, 5, 1, 2]);
//! ```

use crate::error::{SublistError, ensure_at_most};
use crate::output::{Cloned, Generated, Mapped, Output};
use crate::view::{View, ViewMut, reverse_range, rotate_range};

/// Clones every element of `source`, front to back.
pub fn copy<V>(source: V) -> Output<Cloned<V>>
where
    V: View,
    V::Item: Clone,
{
    Output::new(Cloned::new(source))
}

/// Maps every element of `source` through `mapping`, front to back.
///
/// When the result has the source's element type and the source is
/// mutable, `in_place()` rewrites the source itself.
///
/// # Examples
///
/// ```rust
/// use sublist::algorithm::transform;
/// use sublist::view::AsSublist;
///
/// let mut values = vec![1, 2, 3];
/// let rewritten = transform(values.sublist_mut(), |value| value * 10).in_place();
/// assert_eq!(rewritten, 3);
/// assert_eq!(values, vec![10, 20, 30]);
/// ```
pub fn transform<V, F, U>(source: V, mapping: F) -> Output<Mapped<V, F>>
where
    V: View,
    F: FnMut(&V::Item) -> U,
{
    Output::new(Mapped::new(source, mapping))
}

/// Calls `generator` `count` times.
///
/// With [`Output::copy_to`] the generator is only called for positions that
/// can be written.
pub fn generate<F, T>(count: usize, generator: F) -> Output<Generated<F>>
where
    F: FnMut() -> T,
{
    Output::new(Generated::new(count, generator))
}

/// Overwrites every element with a clone of `value`.
pub fn fill<V>(view: &mut V, value: &V::Item)
where
    V: ViewMut,
    V::Item: Clone,
{
    for index in 0..view.len() {
        view.at_mut(index).clone_from(value);
    }
}

/// Overwrites every element, front to back, with successive results of
/// `generator`.
pub fn fill_with<V, F>(view: &mut V, mut generator: F)
where
    V: ViewMut,
    F: FnMut() -> V::Item,
{
    for index in 0..view.len() {
        *view.at_mut(index) = generator();
    }
}

/// Reverses the elements of the view in place.
///
/// Unlike [`View::reversed`], this moves elements in the backing collection.
pub fn reverse<V: ViewMut>(view: &mut V) {
    let length = view.len();
    reverse_range(view, 0, length);
}

/// Rotates the view left so that the element at `middle` becomes the first.
///
/// # Errors
///
/// Returns [`SublistError::ArgumentOutOfRange`] if `middle > len()`; the
/// view is left untouched.
///
/// # Complexity
///
/// O(n) swaps.
pub fn rotate<V: ViewMut>(view: &mut V, middle: usize) -> Result<(), SublistError> {
    let length = view.len();
    ensure_at_most("middle", middle, length)?;
    rotate_range(view, 0, middle, length);
    Ok(())
}

/// Exchanges the elements of two views position by position.
///
/// Stops at the end of the shorter view and returns the number of pairs
/// swapped.
///
/// # Examples
///
/// ```rust
/// use sublist::algorithm::swap_ranges;
/// use sublist::view::AsSublist;
///
/// let mut left = vec![1, 2, 3];
/// let mut right = vec![7, 8];
/// let swapped = swap_ranges(&mut left.sublist_mut(), &mut right.sublist_mut());
/// assert_eq!(swapped, 2);
/// assert_eq!(left, vec![7, 8, 3]);
/// assert_eq!(right, vec![1, 2]);
/// ```
pub fn swap_ranges<V1, V2>(first: &mut V1, second: &mut V2) -> usize
where
    V1: ViewMut,
    V2: ViewMut<Item = V1::Item>,
{
    let count = first.len().min(second.len());
    for index in 0..count {
        std::mem::swap(first.at_mut(index), second.at_mut(index));
    }
    count
}
