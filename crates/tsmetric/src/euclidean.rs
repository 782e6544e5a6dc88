//! Lock-step squared Euclidean baseline.

use tracing::{debug, instrument};

use crate::distance::Distance;
use crate::error::MetricError;
use crate::series::SeriesView;

/// Sum of squared pointwise differences.
///
/// This is the *squared* Euclidean distance: no square root is applied, and
/// callers comparing against the elastic measures rely on the un-rooted value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SquaredEuclidean;

impl SquaredEuclidean {
    /// Compute `sum((a_i - b_i)^2)`.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`MetricError::LengthMismatch`] | `a` and `b` have different lengths |
    #[instrument(skip(a, b), fields(m = a.len(), n = b.len()))]
    pub fn distance(&self, a: SeriesView<'_>, b: SeriesView<'_>) -> Result<Distance, MetricError> {
        if a.len() != b.len() {
            debug!("lock-step distance needs equal lengths");
            return Err(MetricError::LengthMismatch {
                left: a.len(),
                right: b.len(),
            });
        }

        let sum = a
            .as_slice()
            .iter()
            .zip(b.as_slice())
            .map(|(x, y)| (x - y).powi(2))
            .sum();
        Ok(Distance::new(sum))
    }
}
