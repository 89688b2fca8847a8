//! Error types for the lagstat-smooth crate.

use lagstat_series::SeriesError;

/// Error type for smoothing transforms.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SmoothError {
    /// Returned when a window or span is zero.
    #[error("{name} must be positive, got {value}")]
    InvalidWindow {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: usize,
    },

    /// A series statistic could not be computed.
    #[error(transparent)]
    Series(#[from] SeriesError),
}
