//! # sublist
//!
//! STL-style algorithms over bounds-checked views into indexable
//! collections.
//!
//! ## Overview
//!
//! A *sublist* is an `(offset, count)` window into a collection that can be
//! nested, reversed and mutated through without copying the underlying
//! data. Every algorithm in this crate works on views rather than on
//! concrete collections:
//!
//! - **Collections**: capability traits implemented for slices, arrays,
//!   `Vec`, `VecDeque` and (optionally) `SmallVec`
//! - **Views**: `Sublist`, `SublistMut` and the `Reversed` decorator
//! - **Comparers**: natural order, reversed order, key projection and
//!   closure-backed comparers
//! - **Output protocol**: staged results finalized by `copy_to`, `add_to`
//!   or `in_place`
//! - **Algorithms**: search, sort, heap, partition, set algebra,
//!   permutations, duplicates, modification primitives and random sampling
//!
//! ## Feature Flags
//!
//! - `algorithm`: the algorithm library (default)
//! - `random`: shuffles and reservoir sampling through `rand` (default)
//! - `smallvec`: collection traits for `SmallVec`
//! - `serde`: `Serialize`/`Deserialize` for the result descriptors
//! - `checked-preconditions`: debug-build assertions that search and set
//!   inputs are sorted
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use sublist::prelude::*;
//!
//! let mut values = vec![7, 3, 9, 1, 4, 4, 8];
//!
//! // Sort only the middle of the collection.
//! sort(&mut values.sublist_range_mut(1, 5).unwrap());
//! assert_eq!(values, vec![7, 1, 3, 4, 4, 9, 8]);
//!
//! // Search the sorted window.
//! let window = values.sublist_range(1, 5).unwrap();
//! assert_eq!(lower_bound(&window, &4), 2);
//!
//! // Stage a deduplicated copy and append it elsewhere.
//! let mut distinct = Vec::new();
//! remove_duplicates(window).add_to(distinct.sublist_mut());
//! assert_eq!(distinct, vec![1, 3, 4, 9]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the capability traits, views, comparers, result descriptors
/// and, with the `algorithm` feature, every algorithm.
///
/// # Usage
///
/// ```rust
/// use sublist::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::{Growable, Indexable, IndexableMut};
    pub use crate::compare::{ByKey, Comparer, FnComparer, NaturalOrder, Reverse};
    pub use crate::error::SublistError;
    pub use crate::output::{CopyResult, MergeResult, Output, PartitionResult, SearchResult};
    pub use crate::view::{AsSublist, Reversed, Sublist, SublistMut, View, ViewMut};

    #[cfg(feature = "algorithm")]
    pub use crate::algorithm::*;
}

pub mod collection;
pub mod compare;
pub mod error;
pub mod output;
pub mod view;

#[cfg(feature = "algorithm")]
pub mod algorithm;
