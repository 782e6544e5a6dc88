//! Distance newtype returned by every measure.

use std::cmp::Ordering;
use std::fmt;

/// A non-negative distance value.
///
/// For LCSS this is a normalized dissimilarity in `[0, 1]`; for every other
/// measure it is an unnormalized accumulated cost.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    /// Zero distance.
    pub const ZERO: Self = Self(0.0);

    pub(crate) fn new(value: f64) -> Self {
        debug_assert!(value >= 0.0, "distance must be non-negative, got {value}");
        Self(value)
    }

    /// Return the raw distance value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Total ordering comparison using [`f64::total_cmp`].
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<Distance> for f64 {
    fn from(d: Distance) -> Self {
        d.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}
