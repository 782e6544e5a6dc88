//! Weighted DTW with logistic positional weights.

use tracing::{debug, instrument};

use crate::distance::Distance;
use crate::dtw::accumulate;
use crate::error::MetricError;
use crate::series::SeriesView;

/// Logistic weight for a positional gap.
///
/// `w(a) = wmax / (1 + exp(-g * (a - m / 2)))` where `a = |i - j|` and
/// `m` is the length of the longer series. With `g > 0` alignments far from
/// the diagonal are penalized more; `g = 0` gives the constant `wmax / 2`.
#[must_use]
pub fn logistic_weight(gap: usize, wmax: f64, g: f64, max_len: usize) -> f64 {
    debug_assert!(wmax > 0.0, "wmax must be positive, got {wmax}");
    debug_assert!(max_len > 0, "max_len must be positive");
    let centre = max_len as f64 / 2.0;
    wmax / (1.0 + (-g * (gap as f64 - centre)).exp())
}

/// Weighted Dynamic Time Warping.
///
/// Same recurrence and boundary as [`Dtw`](crate::Dtw), with the local cost
/// `|a_i - b_j|` scaled by [`logistic_weight`] of `|i - j|`.
///
/// # Defaults
///
/// | Parameter | Default |
/// |---|---|
/// | `wmax` | 1.0 |
/// | `g` | 1.0 |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wdtw {
    wmax: f64,
    g: f64,
}

impl Wdtw {
    /// Default maximum weight.
    pub const DEFAULT_WMAX: f64 = 1.0;
    /// Default growth rate.
    pub const DEFAULT_G: f64 = 1.0;

    /// Create a WDTW calculator with maximum weight `wmax` and growth rate `g`.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`MetricError::InvalidWeight`] | `wmax` is not positive and finite |
    /// | [`MetricError::InvalidGrowth`] | `g` is NaN or infinite |
    pub fn new(wmax: f64, g: f64) -> Result<Self, MetricError> {
        if !(wmax.is_finite() && wmax > 0.0) {
            debug!(wmax, "rejected WDTW maximum weight");
            return Err(MetricError::InvalidWeight { wmax });
        }
        if !g.is_finite() {
            debug!(g, "rejected WDTW growth rate");
            return Err(MetricError::InvalidGrowth { g });
        }
        Ok(Self { wmax, g })
    }

    /// Return the maximum weight.
    #[must_use]
    pub fn wmax(&self) -> f64 {
        self.wmax
    }

    /// Return the logistic growth rate.
    #[must_use]
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Compute the WDTW distance between two time series.
    ///
    /// Weights are evaluated per cell, so only the two DP rows are allocated.
    /// Runs in O(m * n) time and O(min(m, n)) space.
    ///
    /// A weight that underflows to zero contributes zero cost, even when
    /// `|a_i - b_j|` overflows to infinity.
    #[must_use]
    #[instrument(skip(a, b), fields(m = a.len(), n = b.len()))]
    pub fn distance(&self, a: SeriesView<'_>, b: SeriesView<'_>) -> Distance {
        let max_len = a.len().max(b.len());
        let cost = accumulate(a.as_slice(), b.as_slice(), |x, y, gap| {
            weighted_cost(logistic_weight(gap, self.wmax, self.g, max_len), x, y)
        });
        Distance::new(cost)
    }
}

/// `w * |x - y|`, with `0 * inf` taken as zero.
fn weighted_cost(w: f64, x: f64, y: f64) -> f64 {
    if w == 0.0 { 0.0 } else { w * (x - y).abs() }
}

impl Default for Wdtw {
    fn default() -> Self {
        Self {
            wmax: Self::DEFAULT_WMAX,
            g: Self::DEFAULT_G,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtw::Dtw;
    use crate::series::Series;

    fn series(values: &[f64]) -> Series {
        Series::new(values.to_vec()).unwrap()
    }

    #[test]
    fn weight_at_centre_is_half_wmax() {
        // gap == m/2 puts the logistic curve at its midpoint
        assert_eq!(logistic_weight(2, 3.0, 1.0, 4), 1.5);
    }

    #[test]
    fn weight_increases_with_gap_for_positive_g() {
        let w: Vec<f64> = (0..6).map(|gap| logistic_weight(gap, 1.0, 0.5, 6)).collect();
        for pair in w.windows(2) {
            assert!(pair[1] > pair[0], "weights not increasing: {w:?}");
        }
        assert!(w.iter().all(|&x| x > 0.0 && x < 1.0));
    }

    #[test]
    fn single_point_reference_value() {
        // gap 0, m = 1: w = 1 / (1 + e^{0.5})
        let a = series(&[0.0]);
        let b = series(&[1.0]);
        let d = Wdtw::default().distance(a.as_view(), b.as_view()).value();
        let expected = 1.0 / (1.0 + 0.5_f64.exp());
        assert!((d - expected).abs() < 1e-15, "got {d}, expected {expected}");
    }

    #[test]
    fn zero_growth_scales_dtw_by_half_wmax() {
        // With g = 0 every weight is wmax / 2; wmax = 2 recovers plain DTW.
        let a = series(&[1.0, 2.0, 3.0]);
        let b = series(&[2.0, 2.0, 2.0, 3.0, 4.0]);
        let wdtw = Wdtw::new(2.0, 0.0).unwrap().distance(a.as_view(), b.as_view());
        let dtw = Dtw::new().distance(a.as_view(), b.as_view());
        assert_eq!(wdtw, dtw);
    }

    #[test]
    fn identical_series_distance_zero() {
        let a = series(&[0.5, -1.0, 3.0, 2.0]);
        let d = Wdtw::new(1.0, 0.25).unwrap().distance(a.as_view(), a.as_view());
        assert_eq!(d.value(), 0.0);
    }

    #[test]
    fn vanishing_weight_masks_overflowing_difference() {
        // g = 2000, m = 1: exp(1000) overflows, so w(0) = 0 while
        // 1e308 - (-1e308) overflows to infinity.
        let a = series(&[1e308]);
        let b = series(&[-1e308]);
        let d = Wdtw::new(1.0, 2000.0).unwrap().distance(a.as_view(), b.as_view());
        assert_eq!(d.value(), 0.0);
        assert_eq!(weighted_cost(0.0, 1e308, -1e308), 0.0);
        assert_eq!(weighted_cost(0.5, 1.0, 3.0), 1.0);
    }

    #[test]
    fn rejects_non_positive_wmax() {
        assert_eq!(Wdtw::new(0.0, 1.0), Err(MetricError::InvalidWeight { wmax: 0.0 }));
        assert_eq!(Wdtw::new(-1.0, 1.0), Err(MetricError::InvalidWeight { wmax: -1.0 }));
        assert!(matches!(
            Wdtw::new(f64::NAN, 1.0),
            Err(MetricError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_growth() {
        assert_eq!(
            Wdtw::new(1.0, f64::INFINITY),
            Err(MetricError::InvalidGrowth { g: f64::INFINITY })
        );
    }

    #[test]
    fn accepts_negative_growth() {
        let wdtw = Wdtw::new(1.0, -2.0).unwrap();
        assert_eq!(wdtw.g(), -2.0);
        assert_eq!(wdtw.wmax(), 1.0);
    }
}
