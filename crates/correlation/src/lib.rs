//! # lagstat-correlation
//!
//! Second-order structure of a [`Series`](lagstat_series::Series):
//! autocovariance, autocorrelation (ACF) and partial autocorrelation (PACF),
//! with the Levinson-Durbin recursion as the shared solver.
//!
//! ```mermaid
//! graph LR
//!     S["Series"] --> A["acvf(&s, opts)"]
//!     S --> B["acf(&s, max_lags)"]
//!     A --> L["levinson_durbin(&gamma, order)"]
//!     B --> L
//!     L --> P["pacf(&s, max_lags, method)"]
//! ```
//!
//! ## PACF methods
//!
//! | [`PacfMethod`] | Name | Input to the solver |
//! |----------------|------|---------------------|
//! | `YuleWalker` | `"yw"` | ACF vector, Levinson-Durbin |
//! | `MaximumLikelihood` | `"mle"` | raw series, conditional likelihood per order |
//! | `LevinsonDurbin` | `"ld"` | autocovariance vector, Levinson-Durbin |
//!
//! ```
//! use lagstat_correlation::{PacfMethod, acf, pacf};
//! use lagstat_series::Series;
//!
//! let s = Series::from(vec![1.0, 3.0, 2.0, 5.0, 4.0, 6.0, 5.0, 8.0, 7.0, 9.0]);
//! let r = acf(&s, Some(3)).unwrap();
//! assert_eq!(r[0], 1.0);
//! let method: PacfMethod = "ld".parse().unwrap();
//! assert_eq!(pacf(&s, Some(2), method).unwrap().len(), 2);
//! ```

mod acf;
mod acvf;
mod error;
mod levinson;
mod mle;
mod pacf;

pub use acf::acf;
pub use acvf::{AcvfOptions, acvf, acvf_to_lag, default_max_lags};
pub use error::CorrelationError;
pub use levinson::{LevinsonDurbin, levinson_durbin, reflection_to_coefficients};
pub use mle::MaximumLikelihoodPacf;
pub use pacf::{AutocovariancePacf, PacfEstimator, PacfMethod, YuleWalkerPacf, pacf};
