//! Elastic distance measures between two time series.
//!
//! Pure math library with zero I/O. Provides Dynamic Time Warping (DTW),
//! Derivative DTW (DDTW), Weighted DTW (WDTW), Longest Common Subsequence
//! (LCSS) and Move-Split-Merge (MSM) distances over series of possibly unequal
//! length, plus a squared Euclidean baseline. Every DP engine keeps two rows
//! of the grid, sized by the shorter series.
//!
//! ```
//! use tsmetric::{Dtw, Metric, Series};
//!
//! let a = Series::new(vec![1.0, 2.0, 3.0]).unwrap();
//! let b = Series::new(vec![2.0, 2.0, 2.0, 3.0, 4.0]).unwrap();
//! assert_eq!(Dtw::new().distance(a.as_view(), b.as_view()).value(), 2.0);
//!
//! let lcss: Metric = serde_json::from_str(r#"{"metric": "lcss", "epsilon": 0.1}"#).unwrap();
//! assert_eq!(lcss.distance(&[1.0, 2.0, 2.0], b.as_ref()).unwrap().value(), 0.6);
//! ```

mod derivative;
mod distance;
mod dtw;
mod error;
mod euclidean;
mod lcss;
mod metric;
mod msm;
mod rows;
mod series;
mod wdtw;

pub use derivative::{Ddtw, MIN_DERIVATIVE_LEN, derivative};
pub use distance::Distance;
pub use dtw::Dtw;
pub use error::{MetricError, SeriesError};
pub use euclidean::SquaredEuclidean;
pub use lcss::Lcss;
pub use metric::Metric;
pub use msm::{Msm, edit_cost};
pub use series::{Series, SeriesView};
pub use wdtw::{Wdtw, logistic_weight};
