//! Result descriptors returned by searches and by the output protocol.

/// Outcome of a search or validity check.
///
/// `index` is always a boundary position: where the value was found, where
/// it could be inserted to keep the order, or the length of the longest
/// valid prefix. `exists` reports whether the search hit or the check
/// passed.
///
/// # Examples
///
/// ```rust
/// use sublist::output::SearchResult;
///
/// let hit = SearchResult::found(2);
/// assert_eq!(hit.into_result(), Ok(2));
///
/// let miss = SearchResult::missing(5);
/// assert_eq!(miss.into_result(), Err(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// The boundary position.
    pub index: usize,
    /// Whether the search found a match, or the check succeeded.
    pub exists: bool,
}

impl SearchResult {
    /// A successful result at `index`.
    #[inline]
    #[must_use]
    pub const fn found(index: usize) -> Self {
        Self {
            index,
            exists: true,
        }
    }

    /// An unsuccessful result whose boundary is `index`.
    #[inline]
    #[must_use]
    pub const fn missing(index: usize) -> Self {
        Self {
            index,
            exists: false,
        }
    }

    /// Converts to the `Ok(found)` / `Err(insertion point)` shape used by
    /// `slice::binary_search`.
    #[inline]
    pub const fn into_result(self) -> Result<usize, usize> {
        if self.exists {
            Ok(self.index)
        } else {
            Err(self.index)
        }
    }
}

/// How far a single-source copy got on each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CopyResult {
    /// Number of source positions consumed.
    pub source_offset: usize,
    /// Number of destination positions written.
    pub destination_offset: usize,
}

/// How far a two-source operation (merge, set algebra) got on each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MergeResult {
    /// Number of positions consumed from the first source.
    pub first_source_offset: usize,
    /// Number of positions consumed from the second source.
    pub second_source_offset: usize,
    /// Number of destination positions written.
    pub destination_offset: usize,
}

/// How far a two-destination partition copy got on each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartitionResult {
    /// Number of source positions consumed.
    pub source_offset: usize,
    /// Number of positions written to the destination for matching elements.
    pub first_destination_offset: usize,
    /// Number of positions written to the destination for the rest.
    pub second_destination_offset: usize,
}

static_assertions::assert_impl_all!(SearchResult: Copy, Send, Sync);
static_assertions::assert_impl_all!(CopyResult: Copy, Send, Sync);
static_assertions::assert_impl_all!(MergeResult: Copy, Send, Sync);
static_assertions::assert_impl_all!(PartitionResult: Copy, Send, Sync);
