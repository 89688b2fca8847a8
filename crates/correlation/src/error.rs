//! Error types for the lagstat-correlation crate.

use lagstat_series::SeriesError;

/// Error type for autocovariance, ACF and PACF estimation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CorrelationError {
    /// Returned when a PACF method name is not one of `yw`, `mle` or `ld`.
    #[error("Method presents for pacf are 'yw', 'mle' or 'ld'")]
    InvalidMethod {
        /// The rejected method name.
        method: String,
    },

    /// Returned when the series is constant, so every correlation is 0/0.
    #[error("series is constant (zero variance)")]
    ZeroVariance,

    /// Returned when the Levinson-Durbin prediction-error variance is not
    /// positive, i.e. the input is not a valid autocovariance sequence.
    #[error("non-positive prediction-error variance {variance} at order {order}")]
    NonPositiveVariance {
        /// Recursion order at which the variance degenerated (0 = input lag 0).
        order: usize,
        /// The offending variance.
        variance: f64,
    },

    /// Returned when Levinson-Durbin is asked for more orders than the
    /// autocovariance vector supports.
    #[error("order {order} needs {} autocovariances, got {available}", .order + 1)]
    InsufficientAutocovariances {
        /// Requested recursion order.
        order: usize,
        /// Length of the autocovariance vector.
        available: usize,
    },

    /// Returned when the likelihood optimiser fails for an AR order.
    #[error("likelihood optimisation failed at order {order}")]
    OptimizationFailed {
        /// AR order being fitted.
        order: usize,
    },

    /// A series statistic could not be computed.
    #[error(transparent)]
    Series(#[from] SeriesError),
}
