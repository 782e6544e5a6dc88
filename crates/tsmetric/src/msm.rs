//! Move-Split-Merge distance.

use tracing::{debug, instrument};

use crate::distance::Distance;
use crate::error::MetricError;
use crate::rows::{RollingRows, orient};
use crate::series::SeriesView;

/// Cost of a split or merge that inserts `new` next to `x`, compared with `y`.
///
/// Returns `c` when `new` lies in the closed interval bounded by `x` and `y`
/// (in either order), otherwise `c` plus the distance to the nearer of the two.
#[must_use]
pub fn edit_cost(new: f64, x: f64, y: f64, c: f64) -> f64 {
    if x.min(y) <= new && new <= x.max(y) {
        c
    } else {
        c + (new - x).abs().min((new - y).abs())
    }
}

/// Move-Split-Merge distance.
///
/// Minimum total cost of turning one series into the other using moves
/// (cost `|a_i - b_j|`), splits and merges (cost from [`edit_cost`]).
///
/// # Defaults
///
/// | Parameter | Default |
/// |---|---|
/// | `cost` | 1.0 |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Msm {
    cost: f64,
}

impl Msm {
    /// Default split/merge cost.
    pub const DEFAULT_COST: f64 = 1.0;

    /// Create an MSM calculator with split/merge cost `cost`.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`MetricError::InvalidCost`] | `cost` is not positive and finite |
    pub fn new(cost: f64) -> Result<Self, MetricError> {
        if !(cost.is_finite() && cost > 0.0) {
            debug!(cost, "rejected MSM unit cost");
            return Err(MetricError::InvalidCost { cost });
        }
        Ok(Self { cost })
    }

    /// Return the split/merge cost.
    #[must_use]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Compute the MSM distance between two time series.
    ///
    /// Runs in O(m * n) time and O(min(m, n)) space. Single-point inputs
    /// reduce to the move cost `|a_0 - b_0|`.
    #[must_use]
    #[instrument(skip(a, b), fields(m = a.len(), n = b.len()))]
    pub fn distance(&self, a: SeriesView<'_>, b: SeriesView<'_>) -> Distance {
        Distance::new(self.accumulate(a.as_slice(), b.as_slice()))
    }

    /// Rolling-row MSM.
    ///
    /// Unlike DTW there is no sentinel column: the first row and the first
    /// column are cumulative split/merge chains anchored at `|a_0 - b_0|`.
    #[allow(clippy::needless_range_loop)]
    fn accumulate(&self, a: &[f64], b: &[f64]) -> f64 {
        let (outer, inner) = orient(a, b);
        let c = self.cost;
        let n = inner.len();

        let mut rows = RollingRows::new(n, 0.0);

        // Row 0: extend along `inner` holding outer[0] fixed.
        let first = rows.seed();
        first[0] = (outer[0] - inner[0]).abs();
        for j in 1..n {
            first[j] = first[j - 1] + edit_cost(inner[j], outer[0], inner[j - 1], c);
        }

        for i in 1..outer.len() {
            let (prev, curr) = rows.split();
            let x = outer[i];
            let x_prev = outer[i - 1];

            curr[0] = prev[0] + edit_cost(x, x_prev, inner[0], c);

            for j in 1..n {
                let y = inner[j];
                let moved = prev[j - 1] + (x - y).abs();
                let split = prev[j] + edit_cost(x, x_prev, y, c);
                let merged = curr[j - 1] + edit_cost(y, x, inner[j - 1], c);
                curr[j] = moved.min(split).min(merged);
            }

            rows.advance();
        }

        rows.last()[n - 1]
    }
}

impl Default for Msm {
    fn default() -> Self {
        Self {
            cost: Self::DEFAULT_COST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Series;

    fn msm(a: &[f64], b: &[f64], cost: f64) -> f64 {
        let a = Series::new(a.to_vec()).unwrap();
        let b = Series::new(b.to_vec()).unwrap();
        Msm::new(cost).unwrap().distance(a.as_view(), b.as_view()).value()
    }

    #[test]
    fn edit_cost_inside_interval() {
        assert_eq!(edit_cost(2.0, 1.0, 3.0, 0.5), 0.5);
        assert_eq!(edit_cost(2.0, 3.0, 1.0, 0.5), 0.5);
        // Closed interval: endpoints count as inside.
        assert_eq!(edit_cost(3.0, 1.0, 3.0, 0.5), 0.5);
        assert_eq!(edit_cost(1.0, 1.0, 1.0, 0.5), 0.5);
    }

    #[test]
    fn edit_cost_outside_interval() {
        // Nearer reference is 3, distance 2.
        assert_eq!(edit_cost(5.0, 1.0, 3.0, 1.0), 3.0);
        // Nearer reference is 1, distance 1.5.
        assert_eq!(edit_cost(-0.5, 3.0, 1.0, 1.0), 2.5);
    }

    #[test]
    fn single_points_reduce_to_move() {
        assert_eq!(msm(&[5.0], &[3.0], 1.0), 2.0);
    }

    #[test]
    fn hand_computed_merge() {
        // a = [1,2,3], b = [1,3], c = 1
        // row 0 (a=1):  0, 0 + C(3; 1, 1) = 3
        // row 1 (a=2):  0 + C(2; 1, 1) = 2,  min(0 + 1, 3 + 1, 2 + 2) = 1
        // row 2 (a=3):  2 + C(3; 2, 1) = 4,  min(2 + 0, 1 + 1, 4 + 1) = 2
        assert_eq!(msm(&[1.0, 2.0, 3.0], &[1.0, 3.0], 1.0), 2.0);
    }

    #[test]
    fn identical_series_distance_zero() {
        let s = [0.0, 2.5, -1.0, 4.0, 4.0];
        assert_eq!(msm(&s, &s, 1.0), 0.0);
        assert_eq!(msm(&s, &s, 0.1), 0.0);
    }

    #[test]
    fn symmetric_under_swap() {
        let a = [1.0, 2.0, 3.0];
        let b = [1.0, 3.0];
        assert_eq!(msm(&a, &b, 1.0), msm(&b, &a, 1.0));

        let a = [0.3, -1.2, 4.0, 2.2, 0.0, 1.0];
        let b = [1.5, 0.0, 3.3];
        assert_eq!(msm(&a, &b, 0.7), msm(&b, &a, 0.7));
    }

    #[test]
    fn rejects_non_positive_cost() {
        assert_eq!(Msm::new(0.0), Err(MetricError::InvalidCost { cost: 0.0 }));
        assert_eq!(Msm::new(-2.0), Err(MetricError::InvalidCost { cost: -2.0 }));
        assert!(matches!(Msm::new(f64::INFINITY), Err(MetricError::InvalidCost { .. })));
        assert_eq!(Msm::default().cost(), 1.0);
    }
}
