//! Error types for series validation and distance computation.

/// Errors from validating a time series.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Returned when an empty slice is provided as a time series.
    #[error("time series must be non-empty")]
    Empty,

    /// Returned when a time series contains NaN, infinity, or negative infinity.
    #[error("time series contains non-finite value at index {index}")]
    NonFinite {
        /// Position of the first non-finite value found.
        index: usize,
    },
}

/// Errors from distance computation and metric parameter validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetricError {
    /// Wraps a validation failure on one of the input series.
    #[error("invalid input series: {0}")]
    Series(#[from] SeriesError),

    /// Returned when a series is shorter than a transform requires.
    #[error("series length must be at least {min}, got {len}")]
    SequenceTooShort {
        /// Length of the offending series.
        len: usize,
        /// Minimum length accepted.
        min: usize,
    },

    /// Returned when a lock-step measure receives series of different lengths.
    #[error("series lengths differ: {left} vs {right}")]
    LengthMismatch {
        /// Length of the first series.
        left: usize,
        /// Length of the second series.
        right: usize,
    },

    /// Returned when the WDTW maximum weight is not a positive finite number.
    #[error("wmax must be positive and finite, got {wmax}")]
    InvalidWeight {
        /// The rejected maximum weight.
        wmax: f64,
    },

    /// Returned when the WDTW growth rate is NaN or infinite.
    #[error("g must be finite, got {g}")]
    InvalidGrowth {
        /// The rejected growth rate.
        g: f64,
    },

    /// Returned when the LCSS matching threshold is negative or non-finite.
    #[error("epsilon must be non-negative and finite, got {epsilon}")]
    InvalidEpsilon {
        /// The rejected threshold.
        epsilon: f64,
    },

    /// Returned when the MSM split/merge cost is not a positive finite number.
    #[error("cost must be positive and finite, got {cost}")]
    InvalidCost {
        /// The rejected unit cost.
        cost: f64,
    },

    /// Returned by measures that are recognized but carry no algorithm.
    #[error("{metric} distance is not implemented")]
    Unimplemented {
        /// Display name of the measure.
        metric: &'static str,
    },
}
