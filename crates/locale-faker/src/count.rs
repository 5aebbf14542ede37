//! Count specifiers: a fixed quantity or an inclusive range.

use std::ops::RangeInclusive;

/// How many items a generator should produce.
///
/// Resolved at call time by [`Faker::resolve_count`](crate::Faker::resolve_count):
/// an exact count is returned unchanged, a range is sampled uniformly with
/// both bounds included.
///
/// Negative integers clamp to zero, and a range whose start exceeds its end
/// is treated as if its bounds were swapped.
///
/// # Example
///
/// ```
/// use locale_faker::Count;
///
/// assert_eq!(Count::from(3), Count::Exact(3));
/// assert_eq!(Count::from(-2), Count::Exact(0));
/// assert_eq!(Count::from(2..=5).bounds(), (2, 5));
/// assert_eq!(Count::from(5..=2).bounds(), (2, 5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Count {
    /// Exactly this many items.
    Exact(usize),
    /// Any number of items in the range, bounds included.
    Range(RangeInclusive<usize>),
}

impl Count {
    /// Returns the lowest and highest count this specifier can produce.
    #[must_use]
    pub fn bounds(&self) -> (usize, usize) {
        match self {
            Self::Exact(count) => (*count, *count),
            Self::Range(range) => ordered(*range.start(), *range.end()),
        }
    }
}

impl Default for Count {
    fn default() -> Self {
        Self::Exact(0)
    }
}

impl From<usize> for Count {
    fn from(count: usize) -> Self {
        Self::Exact(count)
    }
}

impl From<u32> for Count {
    fn from(count: u32) -> Self {
        Self::Exact(usize::try_from(count).unwrap_or(usize::MAX))
    }
}

impl From<i32> for Count {
    fn from(count: i32) -> Self {
        Self::Exact(clamp_signed(i64::from(count)))
    }
}

impl From<i64> for Count {
    fn from(count: i64) -> Self {
        Self::Exact(clamp_signed(count))
    }
}

impl From<RangeInclusive<usize>> for Count {
    fn from(range: RangeInclusive<usize>) -> Self {
        Self::Range(range)
    }
}

impl From<RangeInclusive<i32>> for Count {
    fn from(range: RangeInclusive<i32>) -> Self {
        let (start, end) = range.into_inner();
        Self::Range(clamp_signed(i64::from(start))..=clamp_signed(i64::from(end)))
    }
}

fn clamp_signed(count: i64) -> usize {
    usize::try_from(count).unwrap_or(0)
}

pub(crate) fn ordered<T: PartialOrd>(first: T, second: T) -> (T, T) {
    if first <= second {
        (first, second)
    } else {
        (second, first)
    }
}
