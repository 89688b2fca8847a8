//! Configuration for one-shot AR estimation.

use lagstat_series::Series;

use crate::error::ArError;
use crate::innovations::Innovations;
use crate::spec::ArSpec;

/// Configuration for [`ar()`].
///
/// Defaults: `length = 1500`, `order = 1`, `innovations = Zero`.
///
/// # Example
///
/// ```
/// use lagstat_ar::{ArConfig, Innovations};
///
/// let config = ArConfig::new()
///     .with_order(2)
///     .with_length(500)
///     .with_innovations(Innovations::Gaussian { seed: 7 });
/// assert_eq!(config.order(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ArConfig {
    length: usize,
    order: usize,
    innovations: Innovations,
}

impl ArConfig {
    /// Creates a configuration with the defaults.
    pub fn new() -> Self {
        Self {
            length: 1500,
            order: 1,
            innovations: Innovations::Zero,
        }
    }

    /// Sets the length of the estimated series.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets the AR order.
    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    /// Sets the innovation source.
    pub fn with_innovations(mut self, innovations: Innovations) -> Self {
        self.innovations = innovations;
        self
    }

    /// Returns the length of the estimated series.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns the AR order.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the innovation source.
    pub fn innovations(&self) -> Innovations {
        self.innovations
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ArError::InvalidOrder`] if the order is zero.
    pub fn validate(&self) -> Result<(), ArError> {
        if self.order == 0 {
            return Err(ArError::InvalidOrder { order: self.order });
        }
        Ok(())
    }
}

impl Default for ArConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Fits AR(`order`) to `series` and returns the estimated series of
/// `length` observations.
///
/// Shorthand for [`ArSpec::fit()`] followed by
/// [`ArFit::estimate()`](crate::ArFit::estimate).
///
/// # Errors
///
/// Propagates [`ArConfig::validate()`], fitting and estimation errors.
#[tracing::instrument(skip(series), fields(n = series.len()))]
pub fn ar(series: &Series, config: &ArConfig) -> Result<Series, ArError> {
    config.validate()?;
    let fit = ArSpec::new(config.order).fit(series)?;
    fit.estimate(config.length, &config.innovations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ArConfig::default();
        assert_eq!(config.length(), 1500);
        assert_eq!(config.order(), 1);
        assert_eq!(config.innovations(), Innovations::Zero);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_order_is_invalid() {
        let err = ArConfig::new().with_order(0).validate().unwrap_err();
        assert_eq!(err, ArError::InvalidOrder { order: 0 });
    }

    #[test]
    fn ar_default_length() {
        let s = Series::from(vec![2.0, 1.0, 4.0, 3.0, 5.0, 2.0, 6.0]);
        let out = ar(&s, &ArConfig::default()).unwrap();
        assert_eq!(out.len(), 1500);
        assert_eq!(out.get(0), Some(2.0));
    }

    #[test]
    fn ar_rejects_zero_order_before_fitting() {
        let err = ar(&Series::default(), &ArConfig::new().with_order(0)).unwrap_err();
        assert_eq!(err, ArError::InvalidOrder { order: 0 });
    }
}
