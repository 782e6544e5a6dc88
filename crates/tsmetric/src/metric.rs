//! Serializable metric selection and dispatch.

use std::fmt;

use tracing::{instrument, warn};

use crate::derivative::Ddtw;
use crate::distance::Distance;
use crate::dtw::Dtw;
use crate::error::MetricError;
use crate::euclidean::SquaredEuclidean;
use crate::lcss::Lcss;
use crate::msm::Msm;
use crate::series::SeriesView;
use crate::wdtw::Wdtw;

/// A distance measure and its parameters.
///
/// Serialized with an internal `"metric"` tag, e.g.
/// `{"metric": "wdtw", "wmax": 1.0, "g": 0.05}`. Omitted optional parameters
/// take the engine defaults; `epsilon` for LCSS is required.
/// Parameters are validated when [`Metric::distance`] is called.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "metric", rename_all = "snake_case")]
pub enum Metric {
    /// Dynamic Time Warping.
    Dtw,
    /// Derivative DTW. Both series need at least 3 points.
    Ddtw,
    /// Weighted DTW with logistic positional weights.
    Wdtw {
        /// Maximum weight, must be positive.
        #[serde(default = "default_wmax")]
        wmax: f64,
        /// Logistic growth rate.
        #[serde(default = "default_g")]
        g: f64,
    },
    /// Longest Common Subsequence distance.
    Lcss {
        /// Matching threshold, must be non-negative.
        epsilon: f64,
    },
    /// Move-Split-Merge.
    Msm {
        /// Split/merge cost, must be positive.
        #[serde(default = "default_cost")]
        cost: f64,
    },
    /// Sum of squared differences. Equal lengths only.
    SquaredEuclidean,
    /// Edit Distance on Real sequences. Not implemented.
    Edr,
    /// Time Warp Edit Distance. Not implemented.
    Twed,
}

fn default_wmax() -> f64 {
    Wdtw::DEFAULT_WMAX
}

fn default_g() -> f64 {
    Wdtw::DEFAULT_G
}

fn default_cost() -> f64 {
    Msm::DEFAULT_COST
}

impl Metric {
    /// Short display name of the measure.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dtw => "DTW",
            Self::Ddtw => "DDTW",
            Self::Wdtw { .. } => "WDTW",
            Self::Lcss { .. } => "LCSS",
            Self::Msm { .. } => "MSM",
            Self::SquaredEuclidean => "squared Euclidean",
            Self::Edr => "EDR",
            Self::Twed => "TWED",
        }
    }

    /// Validate both inputs and the parameters, then compute the distance.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`MetricError::Series`] | Either slice is empty or holds a non-finite value |
    /// | [`MetricError::SequenceTooShort`] | DDTW input shorter than 3 points |
    /// | [`MetricError::LengthMismatch`] | Squared Euclidean on unequal lengths |
    /// | [`MetricError::InvalidWeight`], [`MetricError::InvalidGrowth`] | Bad WDTW parameters |
    /// | [`MetricError::InvalidEpsilon`] | Bad LCSS threshold |
    /// | [`MetricError::InvalidCost`] | Bad MSM cost |
    /// | [`MetricError::Unimplemented`] | EDR or TWED |
    #[instrument(skip(a, b), fields(metric = self.name(), m = a.len(), n = b.len()))]
    pub fn distance(&self, a: &[f64], b: &[f64]) -> Result<Distance, MetricError> {
        let a = SeriesView::new(a)?;
        let b = SeriesView::new(b)?;

        match *self {
            Self::Dtw => Ok(Dtw::new().distance(a, b)),
            Self::Ddtw => Ddtw::new().distance(a, b),
            Self::Wdtw { wmax, g } => Ok(Wdtw::new(wmax, g)?.distance(a, b)),
            Self::Lcss { epsilon } => Ok(Lcss::new(epsilon)?.distance(a, b)),
            Self::Msm { cost } => Ok(Msm::new(cost)?.distance(a, b)),
            Self::SquaredEuclidean => SquaredEuclidean.distance(a, b),
            Self::Edr | Self::Twed => {
                warn!(metric = self.name(), "called a measure with no implementation");
                Err(MetricError::Unimplemented {
                    metric: self.name(),
                })
            }
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
