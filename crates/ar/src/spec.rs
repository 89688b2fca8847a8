//! AR model specification (unfitted).

use lagstat_correlation::{AcvfOptions, acvf_to_lag, levinson_durbin};
use lagstat_series::Series;
use tracing::debug;

use crate::error::ArError;
use crate::fit::ArFit;

/// An unfitted AR(k) model specification.
///
/// This is the entry point of the typestate workflow. Create a spec with
/// [`ArSpec::new()`], then call [`ArSpec::fit()`] to obtain an [`ArFit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArSpec {
    order: usize,
}

impl ArSpec {
    /// Creates a new AR(`order`) specification.
    ///
    /// # Example
    ///
    /// ```
    /// use lagstat_ar::ArSpec;
    ///
    /// assert_eq!(ArSpec::new(3).order(), 3);
    /// ```
    pub fn new(order: usize) -> Self {
        Self { order }
    }

    /// Returns the AR order (`k`).
    pub fn order(&self) -> usize {
        self.order
    }

    /// Fits this AR(k) specification to `series` via the Yule-Walker
    /// equations.
    ///
    /// Computes the autocovariances at lags `0..=k` (demeaned, default
    /// divisors) and runs the Levinson-Durbin recursion to order `k`.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ArError::InvalidOrder`] | `k == 0` |
    /// | [`ArError::Correlation`] | no observations, or the recursion degenerates (e.g. constant series) |
    #[tracing::instrument(skip(series), fields(n = series.len()))]
    pub fn fit(&self, series: &Series) -> Result<ArFit, ArError> {
        if self.order == 0 {
            return Err(ArError::InvalidOrder { order: 0 });
        }
        let gamma = acvf_to_lag(series, self.order, AcvfOptions::default())?;
        let ld = levinson_durbin(&gamma, self.order)?;
        let mean = series.mean()?;
        let initial: Vec<f64> = (0..self.order)
            .map(|i| series.get(i).unwrap_or(mean))
            .collect();
        debug!(
            coefficients = ?ld.coefficients(),
            sigma2 = ld.sigma2(),
            "ar model fitted"
        );
        Ok(ArFit::new(
            *self,
            ld.coefficients().to_vec(),
            ld.sigma2(),
            mean,
            initial,
        ))
    }
}
