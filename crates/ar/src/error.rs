//! Error types for the lagstat-ar crate.

use lagstat_correlation::CorrelationError;
use lagstat_series::SeriesError;

/// Error type for all fallible operations in the lagstat-ar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArError {
    /// Returned when the requested AR order is zero.
    #[error("AR order must be positive, got {order}")]
    InvalidOrder {
        /// The rejected order.
        order: usize,
    },

    /// Returned when random innovations are requested but the fitted
    /// innovation variance cannot parametrise a normal distribution.
    #[error("innovation variance {sigma2} is not positive and finite")]
    InvalidInnovationVariance {
        /// The fitted innovation variance.
        sigma2: f64,
    },

    /// Autocovariance estimation or the Levinson-Durbin recursion failed.
    #[error(transparent)]
    Correlation(#[from] CorrelationError),

    /// A series statistic could not be computed.
    #[error(transparent)]
    Series(#[from] SeriesError),
}
