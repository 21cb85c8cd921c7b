use derive_more::{Display, Error};

/// An index fell outside the range that a positional operation accepts. Carries the offending
/// index and the length of the collection at the time of the call.
///
/// # Examples
/// ```
/// # use dynamic_array::collections::contiguous::dynamic_array::IndexOutOfRange;
/// let error = IndexOutOfRange { index: -1, size: 0 };
/// assert_eq!(error.to_string(), "Index: -1, Size: 0");
/// ```
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[display("Index: {index}, Size: {size}")]
pub struct IndexOutOfRange {
    /// The index that was rejected.
    pub index: isize,
    /// The length of the collection when the index was rejected.
    pub size: usize,
}
