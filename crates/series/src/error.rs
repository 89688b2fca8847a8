//! Error types for the lagstat-series crate.

/// Error type for fallible [`Series`](crate::Series) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeriesError {
    /// Returned when an elementwise operation receives series of different lengths.
    #[error("series length mismatch: left has {left} positions, right has {right}")]
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },

    /// Returned when a statistic would divide by zero because too few
    /// observations are present.
    #[error("cannot compute {statistic}: {valid} valid observation(s), need at least {min}")]
    ZeroDivisor {
        /// Name of the statistic being computed.
        statistic: &'static str,
        /// Number of non-absent observations.
        valid: usize,
        /// Minimum number of observations required.
        min: usize,
    },
}
