//! Longest Common Subsequence distance.

use tracing::{debug, instrument};

use crate::distance::Distance;
use crate::error::MetricError;
use crate::rows::{RollingRows, orient};
use crate::series::SeriesView;

/// LCSS dissimilarity with a matching threshold.
///
/// Two points match when `|a_i - b_j| <= epsilon`. The distance is
/// `1 - matches / max(m, n)`, so it lies in `[0, 1]`: 0 when every point of
/// the longer series takes part in a match, 1 when no pair of points matches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lcss {
    epsilon: f64,
}

impl Lcss {
    /// Create an LCSS calculator with matching threshold `epsilon`.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`MetricError::InvalidEpsilon`] | `epsilon` is negative, NaN, or infinite |
    pub fn new(epsilon: f64) -> Result<Self, MetricError> {
        if !(epsilon.is_finite() && epsilon >= 0.0) {
            debug!(epsilon, "rejected LCSS threshold");
            return Err(MetricError::InvalidEpsilon { epsilon });
        }
        Ok(Self { epsilon })
    }

    /// Return the matching threshold.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Compute the LCSS distance between two time series.
    #[must_use]
    #[instrument(skip(a, b), fields(m = a.len(), n = b.len()))]
    pub fn distance(&self, a: SeriesView<'_>, b: SeriesView<'_>) -> Distance {
        let matches = self.matches(a.as_slice(), b.as_slice());
        let longest = a.len().max(b.len());
        Distance::new(1.0 - matches as f64 / longest as f64)
    }

    /// Length of the longest thresholded common subsequence.
    ///
    /// Zero boundary: an empty prefix has zero matches, which is a valid
    /// count rather than an excluded state.
    fn matches(&self, a: &[f64], b: &[f64]) -> usize {
        let (outer, inner) = orient(a, b);
        let n = inner.len();

        let mut rows = RollingRows::new(n + 1, 0usize);

        for &x in outer {
            let (prev, curr) = rows.split();
            curr[0] = 0;

            for (j, &y) in inner.iter().enumerate() {
                curr[j + 1] = if (x - y).abs() <= self.epsilon {
                    prev[j] + 1
                } else {
                    curr[j].max(prev[j + 1])
                };
            }

            rows.advance();
        }

        rows.last()[n]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Series;

    fn lcss(a: &[f64], b: &[f64], epsilon: f64) -> f64 {
        let a = Series::new(a.to_vec()).unwrap();
        let b = Series::new(b.to_vec()).unwrap();
        Lcss::new(epsilon).unwrap().distance(a.as_view(), b.as_view()).value()
    }

    #[test]
    fn reference_value() {
        // Common subsequence [2, 2], longest series has 5 points: 1 - 2/5
        assert_eq!(lcss(&[1.0, 2.0, 2.0], &[2.0, 2.0, 2.0, 3.0, 4.0], 0.1), 0.6);
    }

    #[test]
    fn identical_series_distance_zero() {
        assert_eq!(lcss(&[3.0, 1.0, 4.0, 1.0, 5.0], &[3.0, 1.0, 4.0, 1.0, 5.0], 0.0), 0.0);
    }

    #[test]
    fn disjoint_series_distance_one() {
        assert_eq!(lcss(&[1.0, 2.0, 3.0], &[10.0, 20.0], 0.5), 1.0);
    }

    #[test]
    fn threshold_is_inclusive() {
        // Exactly representable gap of 0.5 must count as a match.
        assert_eq!(lcss(&[1.0], &[1.5], 0.5), 0.0);
        assert_eq!(lcss(&[1.0], &[1.5], 0.25), 1.0);
    }

    #[test]
    fn matches_respect_order() {
        // [1, 2] vs [2, 1]: only one of the two matches can be kept in order.
        assert_eq!(lcss(&[1.0, 2.0], &[2.0, 1.0], 0.0), 0.5);
    }

    #[test]
    fn symmetric_under_swap() {
        let a = [0.0, 1.0, 0.5, 2.0, 2.1];
        let b = [1.05, 2.05, 0.0];
        assert_eq!(lcss(&a, &b, 0.1), lcss(&b, &a, 0.1));
    }

    #[test]
    fn rejects_invalid_epsilon() {
        assert_eq!(Lcss::new(-0.1), Err(MetricError::InvalidEpsilon { epsilon: -0.1 }));
        assert!(matches!(Lcss::new(f64::NAN), Err(MetricError::InvalidEpsilon { .. })));
        assert_eq!(Lcss::new(0.0).unwrap().epsilon(), 0.0);
    }
}
