//! Optional start/end bounds for [`Array::slice`] and [`Array::fill`].
//!
//! [`Array::slice`]: crate::Array::slice
//! [`Array::fill`]: crate::Array::fill

use core::ops::{Range, RangeFrom, RangeFull};

/// Which part of an array an operation applies to.
///
/// Usually built from a Rust range: `..` is [`Bounds::Omitted`], `2..` is
/// [`Bounds::From`], `2..4` is [`Bounds::Range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bounds {
    /// No bounds given. `slice` copies everything, `fill` does nothing.
    #[default]
    Omitted,
    /// From `start` to the end of the array.
    From(usize),
    /// Half-open `[start, end)`. `end` is clamped to the array length.
    Range { start: usize, end: usize },
}

impl Bounds {
    /// Normalizes against an array of length `len`.
    ///
    /// Returns `None` if no bounds were given. Otherwise returns a half-open
    /// range that is always valid for indexing (possibly empty): a start past
    /// the end, or an end before the start, collapses to an empty range.
    pub(crate) fn resolve(self, len: usize) -> Option<Range<usize>> {
        let (start, end) = match self {
            Bounds::Omitted => return None,
            Bounds::From(start) => (start, len),
            Bounds::Range { start, end } => {
                if end > len {
                    tracing::debug!(end, len, "Clamping end bound to array length");
                }
                (start, end.min(len))
            }
        };
        if start >= len || end < start {
            tracing::debug!(bounds = ?self, len, "Bounds out of range, using empty range");
            return Some(len..len);
        }
        Some(start..end)
    }
}

impl From<RangeFull> for Bounds {
    fn from(_: RangeFull) -> Self {
        Bounds::Omitted
    }
}

impl From<RangeFrom<usize>> for Bounds {
    fn from(range: RangeFrom<usize>) -> Self {
        Bounds::From(range.start)
    }
}

impl From<Range<usize>> for Bounds {
    fn from(range: Range<usize>) -> Self {
        Bounds::Range {
            start: range.start,
            end: range.end,
        }
    }
}
