//! Common functions and types.

use core::ops::{Bound, Range, RangeBounds};
use core::{error, fmt};

/// Panics with the provided displayable error message.
///
/// # Panics
///
/// Always panics with the provided error message.
#[track_caller]
pub(crate) fn panic_display<T>(e: impl fmt::Display) -> T {
    panic!("{e}");
}

/// Converts any generic range into a concrete `Range<usize>` given a length.
///
/// # Errors
///
/// Returns a `RangeError` if the range is invalid.
pub fn range(range: impl RangeBounds<usize>, len: usize) -> Result<Range<usize>, RangeError> {
    range_mono(
        range.start_bound().cloned(),
        range.end_bound().cloned(),
        0,
        len,
    )
}

/// Converts any generic range into a concrete `Range<usize>` given absolute
/// bounds, i.e. a valid index span that does not start at zero.
///
/// Unbounded ends default to `bounds.start` and `bounds.end` respectively.
///
/// # Errors
///
/// Returns a `RangeError` if the range is invalid or escapes `bounds`.
pub fn absolute_range(
    range: impl RangeBounds<usize>,
    bounds: Range<usize>,
) -> Result<Range<usize>, RangeError> {
    range_mono(
        range.start_bound().cloned(),
        range.end_bound().cloned(),
        bounds.start,
        bounds.end,
    )
}

/// Converts start and end bounds to a concrete `Range<usize>` given the
/// valid index span `min..max`.
///
/// # Errors
///
/// Returns a `RangeError` if the range is invalid.
fn range_mono(
    start: Bound<usize>,
    end: Bound<usize>,
    min: usize,
    max: usize,
) -> Result<Range<usize>, RangeError> {
    let start = match start {
        Bound::Included(start) => start,
        Bound::Excluded(start) => start.checked_add(1).ok_or(RangeError::StartOverflows)?,
        Bound::Unbounded => min,
    };
    let end = match end {
        Bound::Included(end) => end.checked_add(1).ok_or(RangeError::EndOverflows)?,
        Bound::Excluded(end) => end,
        Bound::Unbounded => max,
    };
    if start > end {
        Err(RangeError::StartGreaterThanEnd { start, end })
    } else if start < min {
        Err(RangeError::StartOutOfBounds { start, min })
    } else if end > max {
        Err(RangeError::EndOutOfBounds { end, max })
    } else {
        Ok(Range { start, end })
    }
}

/// Represents errors that can occur when creating a range.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RangeError {
    /// The start index overflows.
    StartOverflows,
    /// The end index overflows.
    EndOverflows,
    /// The start index is greater than the end index.
    StartGreaterThanEnd { start: usize, end: usize },
    /// The start index is below the valid span (absolute ranges only).
    StartOutOfBounds { start: usize, min: usize },
    /// The end index is out of bounds.
    EndOutOfBounds { end: usize, max: usize },
}

impl RangeError {
    /// Returns a static message for the error.
    #[must_use]
    pub const fn const_message(&self) -> &'static str {
        match self {
            Self::StartOverflows => "start index overflows",
            Self::EndOverflows => "end index overflows",
            Self::StartGreaterThanEnd { .. } => "start index is greater than end index",
            Self::StartOutOfBounds { .. } => "start index is out of bounds",
            Self::EndOutOfBounds { .. } => "end index is out of bounds",
        }
    }
}

impl error::Error for RangeError {}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::StartOverflows => write!(f, "start index overflows"),
            Self::EndOverflows => write!(f, "end index overflows"),
            Self::StartGreaterThanEnd { start, end } => {
                write!(f, "start index {start} is greater than end index {end}")
            }
            Self::StartOutOfBounds { start, min } => {
                write!(
                    f,
                    "start index {start} is out of bounds for view starting at {min}"
                )
            }
            Self::EndOutOfBounds { end, max } => {
                write!(f, "end index {end} is out of bounds for length {max}")
            }
        }
    }
}
