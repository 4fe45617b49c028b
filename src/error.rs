//! Error types for views and algorithms.
//!
//! Every fallible operation in this crate fails fast, before any element is
//! written, with one of two errors:
//!
//! - [`IndexOutOfRangeError`]: an element access outside `[0, len)` of a view,
//!   or outside the live bounds of its backing collection.
//! - [`ArgumentOutOfRangeError`]: an explicit offset, count or size argument
//!   that exceeds the capacity available to it.
//!
//! Both are wrapped by [`SublistError`], which is what fallible functions
//! return.

/// An element access fell outside the bounds of a view.
///
/// # Examples
///
/// ```rust
/// use sublist::error::IndexOutOfRangeError;
///
/// let error = IndexOutOfRangeError { index: 5, count: 3 };
/// assert_eq!(
///     format!("{}", error),
///     "index 5 is out of range for a view of 3 elements"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRangeError {
    /// The logical index that was requested.
    pub index: usize,
    /// The number of elements the view covered at the time of the access.
    pub count: usize,
}

impl std::fmt::Display for IndexOutOfRangeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "index {} is out of range for a view of {} elements",
            self.index, self.count
        )
    }
}

impl std::error::Error for IndexOutOfRangeError {}

/// An explicit size argument exceeded what was available.
///
/// # Examples
///
/// ```rust
/// use sublist::error::ArgumentOutOfRangeError;
///
/// let error = ArgumentOutOfRangeError {
///     argument: "count",
///     value: 10,
///     limit: 4,
/// };
/// assert_eq!(
///     format!("{}", error),
///     "argument `count` is 10 but at most 4 is allowed"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentOutOfRangeError {
    /// Name of the offending argument.
    pub argument: &'static str,
    /// The value that was passed.
    pub value: usize,
    /// The largest value that would have been accepted.
    pub limit: usize,
}

impl std::fmt::Display for ArgumentOutOfRangeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "argument `{}` is {} but at most {} is allowed",
            self.argument, self.value, self.limit
        )
    }
}

impl std::error::Error for ArgumentOutOfRangeError {}

/// Unified error type for view and algorithm operations.
///
/// # Examples
///
/// ```rust
/// use sublist::error::SublistError;
/// use sublist::view::{AsSublist, View};
///
/// let backing = vec![1, 2, 3];
/// let error = backing.sublist().element_at(7).unwrap_err();
/// assert!(matches!(error, SublistError::IndexOutOfRange(_)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SublistError {
    /// An element access was out of range.
    IndexOutOfRange(IndexOutOfRangeError),
    /// An explicit size argument was out of range.
    ArgumentOutOfRange(ArgumentOutOfRangeError),
}

impl SublistError {
    /// Shorthand for building an [`SublistError::IndexOutOfRange`].
    #[inline]
    #[must_use]
    pub const fn index_out_of_range(index: usize, count: usize) -> Self {
        Self::IndexOutOfRange(IndexOutOfRangeError { index, count })
    }

    /// Shorthand for building an [`SublistError::ArgumentOutOfRange`].
    #[inline]
    #[must_use]
    pub const fn argument_out_of_range(argument: &'static str, value: usize, limit: usize) -> Self {
        Self::ArgumentOutOfRange(ArgumentOutOfRangeError {
            argument,
            value,
            limit,
        })
    }
}

impl std::fmt::Display for SublistError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange(error) => write!(formatter, "{error}"),
            Self::ArgumentOutOfRange(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for SublistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IndexOutOfRange(error) => Some(error),
            Self::ArgumentOutOfRange(error) => Some(error),
        }
    }
}

impl From<IndexOutOfRangeError> for SublistError {
    fn from(error: IndexOutOfRangeError) -> Self {
        Self::IndexOutOfRange(error)
    }
}

impl From<ArgumentOutOfRangeError> for SublistError {
    fn from(error: ArgumentOutOfRangeError) -> Self {
        Self::ArgumentOutOfRange(error)
    }
}

/// Fails with [`SublistError::ArgumentOutOfRange`] when `value > limit`.
#[inline]
pub(crate) const fn ensure_at_most(
    argument: &'static str,
    value: usize,
    limit: usize,
) -> Result<(), SublistError> {
    if value > limit {
        Err(SublistError::argument_out_of_range(argument, value, limit))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_index_out_of_range_display() {
        let error = SublistError::index_out_of_range(4, 2);
        assert_eq!(
            format!("{error}"),
            "index 4 is out of range for a view of 2 elements"
        );
    }

    #[rstest]
    fn test_argument_out_of_range_display() {
        let error = SublistError::argument_out_of_range("offset", 9, 3);
        assert_eq!(
            format!("{error}"),
            "argument `offset` is 9 but at most 3 is allowed"
        );
    }

    #[rstest]
    fn test_source_exposes_inner_error() {
        use std::error::Error;

        let error = SublistError::index_out_of_range(1, 0);
        let source = error.source().map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("index 1 is out of range for a view of 0 elements")
        );
    }

    #[rstest]
    #[case(0, 0, true)]
    #[case(3, 3, true)]
    #[case(4, 3, false)]
    fn test_ensure_at_most(#[case] value: usize, #[case] limit: usize, #[case] accepted: bool) {
        assert_eq!(ensure_at_most("count", value, limit).is_ok(), accepted);
    }

    #[rstest]
    fn test_from_conversions() {
        let error: SublistError = IndexOutOfRangeError { index: 1, count: 1 }.into();
        assert_eq!(error, SublistError::index_out_of_range(1, 1));

        let error: SublistError = ArgumentOutOfRangeError {
            argument: "k",
            value: 2,
            limit: 1,
        }
        .into();
        assert_eq!(error, SublistError::argument_out_of_range("k", 2, 1));
    }
}
