//! Derivative transform and Derivative DTW.

use tracing::{debug, instrument};

use crate::distance::Distance;
use crate::dtw::Dtw;
use crate::error::MetricError;
use crate::series::{Series, SeriesView};

/// Shortest series the derivative transform accepts.
pub const MIN_DERIVATIVE_LEN: usize = 3;

/// Compute the smoothed first derivative of a time series.
///
/// `d[i] = 0.5 * ((s[i+1] - s[i]) + (s[i+2] - s[i]) / 2)` for `i in 0..len-2`,
/// so the output is two points shorter than the input.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`MetricError::SequenceTooShort`] | Series has fewer than 3 elements |
/// | [`MetricError::Series`] | A derivative value overflows to infinity |
#[must_use = "returns a new derivative series; the input is unchanged"]
pub fn derivative(series: SeriesView<'_>) -> Result<Series, MetricError> {
    let s = series.as_slice();
    if s.len() < MIN_DERIVATIVE_LEN {
        debug!(len = s.len(), "series too short for derivative transform");
        return Err(MetricError::SequenceTooShort {
            len: s.len(),
            min: MIN_DERIVATIVE_LEN,
        });
    }

    let deriv = s
        .windows(3)
        .map(|w| 0.5 * ((w[1] - w[0]) + (w[2] - w[0]) / 2.0))
        .collect();

    // Finite inputs can still overflow when differenced near f64::MAX.
    Ok(Series::new(deriv)?)
}

/// Derivative Dynamic Time Warping.
///
/// Applies [`derivative`] to both inputs and runs [`Dtw`] on the results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ddtw;

impl Ddtw {
    /// Create a DDTW calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Compute the DDTW distance between two time series.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`MetricError::SequenceTooShort`] | Either series has fewer than 3 elements |
    #[instrument(skip(a, b), fields(m = a.len(), n = b.len()))]
    pub fn distance(&self, a: SeriesView<'_>, b: SeriesView<'_>) -> Result<Distance, MetricError> {
        let da = derivative(a)?;
        let db = derivative(b)?;
        Ok(Dtw::new().distance(da.as_view(), db.as_view()))
    }
}
