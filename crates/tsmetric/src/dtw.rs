//! DTW distance computation.

use tracing::instrument;

use crate::distance::Distance;
use crate::rows::{RollingRows, orient};
use crate::series::SeriesView;

/// Unconstrained Dynamic Time Warping with absolute-difference cost.
///
/// Stateless and copyable; one value can be shared across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dtw;

impl Dtw {
    /// Create a DTW calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Compute the DTW distance between two time series.
    ///
    /// The result is the minimum accumulated `|a_i - b_j|` over all warping
    /// paths from `(0, 0)` to `(m-1, n-1)`. No square root is taken. Runs in
    /// O(m * n) time and O(min(m, n)) space.
    #[must_use]
    #[instrument(skip(a, b), fields(m = a.len(), n = b.len()))]
    pub fn distance(&self, a: SeriesView<'_>, b: SeriesView<'_>) -> Distance {
        let cost = accumulate(a.as_slice(), b.as_slice(), |x, y, _| (x - y).abs());
        Distance::new(cost)
    }
}

/// Rolling two-row DTW over an arbitrary local cost.
///
/// `local_cost(x, y, gap)` receives the two aligned values and the positional
/// gap `|i - j|`. Row index 0 of each buffer is the `D[i][0]` boundary;
/// active columns occupy `1..=n`.
///
/// Boundary: `D[0][0] = 0`, `D[i][0] = D[0][j] = INF` elsewhere, so every
/// path starts at the first point of both series.
pub(crate) fn accumulate<F>(a: &[f64], b: &[f64], local_cost: F) -> f64
where
    F: Fn(f64, f64, usize) -> f64,
{
    let (outer, inner) = orient(a, b);
    let n = inner.len();

    let mut rows = RollingRows::new(n + 1, f64::INFINITY);
    rows.seed()[0] = 0.0;

    for (i, &x) in outer.iter().enumerate() {
        let (prev, curr) = rows.split();
        curr[0] = f64::INFINITY;

        for (j, &y) in inner.iter().enumerate() {
            let cost = local_cost(x, y, i.abs_diff(j));
            // curr[j] is D[i][j-1], prev[j + 1] is D[i-1][j], prev[j] is D[i-1][j-1]
            curr[j + 1] = cost + curr[j].min(prev[j + 1]).min(prev[j]);
        }

        rows.advance();
    }

    rows.last()[n]
}
