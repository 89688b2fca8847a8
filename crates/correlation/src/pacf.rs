//! Partial autocorrelation function.

use std::fmt;
use std::str::FromStr;

use lagstat_series::Series;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::acf::acf;
use crate::acvf::{AcvfOptions, acvf_to_lag, default_max_lags};
use crate::error::CorrelationError;
use crate::levinson::levinson_durbin;
use crate::mle::MaximumLikelihoodPacf;

/// PACF estimation method.
///
/// Parses from and renders as the short names `"yw"`, `"mle"` and `"ld"`.
///
/// ```
/// use lagstat_correlation::PacfMethod;
///
/// assert_eq!("mle".parse::<PacfMethod>().unwrap(), PacfMethod::MaximumLikelihood);
/// assert_eq!(PacfMethod::LevinsonDurbin.to_string(), "ld");
/// assert!("ols".parse::<PacfMethod>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PacfMethod {
    /// Yule-Walker equations solved by Levinson-Durbin over the ACF.
    #[default]
    #[serde(rename = "yw")]
    YuleWalker,
    /// Conditional maximum likelihood, one AR fit per order.
    #[serde(rename = "mle")]
    MaximumLikelihood,
    /// Levinson-Durbin over the autocovariance vector.
    #[serde(rename = "ld")]
    LevinsonDurbin,
}

impl PacfMethod {
    /// Returns the short method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PacfMethod::YuleWalker => "yw",
            PacfMethod::MaximumLikelihood => "mle",
            PacfMethod::LevinsonDurbin => "ld",
        }
    }

    /// Returns the estimator implementing this method.
    pub fn estimator(&self) -> &'static dyn PacfEstimator {
        match self {
            PacfMethod::YuleWalker => &YuleWalkerPacf,
            PacfMethod::MaximumLikelihood => &MaximumLikelihoodPacf,
            PacfMethod::LevinsonDurbin => &AutocovariancePacf,
        }
    }
}

impl fmt::Display for PacfMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PacfMethod {
    type Err = CorrelationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yw" => Ok(PacfMethod::YuleWalker),
            "mle" => Ok(PacfMethod::MaximumLikelihood),
            "ld" => Ok(PacfMethod::LevinsonDurbin),
            other => Err(CorrelationError::InvalidMethod {
                method: other.to_string(),
            }),
        }
    }
}

/// A PACF estimation strategy.
///
/// Implementations return the partial autocorrelations at lags
/// `1..=max_lags`; element `j` is lag `j + 1`.
pub trait PacfEstimator: Sync {
    /// Estimates the PACF of `series` up to `max_lags` (at least 1).
    fn estimate(&self, series: &Series, max_lags: usize) -> Result<Vec<f64>, CorrelationError>;
}

/// Yule-Walker PACF: Levinson-Durbin over the ACF of [`acf()`].
#[derive(Clone, Copy, Debug, Default)]
pub struct YuleWalkerPacf;

impl PacfEstimator for YuleWalkerPacf {
    fn estimate(&self, series: &Series, max_lags: usize) -> Result<Vec<f64>, CorrelationError> {
        let rho = acf(series, Some(max_lags))?;
        Ok(levinson_durbin(&rho, max_lags)?.into_reflection())
    }
}

/// Levinson-Durbin PACF over the autocovariance vector of [`acvf_to_lag()`]
/// with default options.
#[derive(Clone, Copy, Debug, Default)]
pub struct AutocovariancePacf;

impl PacfEstimator for AutocovariancePacf {
    fn estimate(&self, series: &Series, max_lags: usize) -> Result<Vec<f64>, CorrelationError> {
        let gamma = acvf_to_lag(series, max_lags, AcvfOptions::default())?;
        Ok(levinson_durbin(&gamma, max_lags)?.into_reflection())
    }
}

/// Partial autocorrelation at lags `1..=max_lags`.
///
/// `max_lags` defaults to [`default_max_lags`]; 0 gives an empty vector.
/// Element `j` of the result is the partial autocorrelation at lag `j + 1`.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`CorrelationError::Series`] | too few observations for the moments |
/// | [`CorrelationError::ZeroVariance`] | constant series (`yw`, `mle`) |
/// | [`CorrelationError::NonPositiveVariance`] | the recursion degenerates |
/// | [`CorrelationError::OptimizationFailed`] | `mle` optimiser failure |
#[tracing::instrument(skip(series), fields(n = series.len()))]
pub fn pacf(
    series: &Series,
    max_lags: Option<usize>,
    method: PacfMethod,
) -> Result<Vec<f64>, CorrelationError> {
    let max_lags = max_lags.unwrap_or_else(|| default_max_lags(series.len()));
    if max_lags == 0 {
        return Ok(Vec::new());
    }
    debug!(max_lags, %method, "computing pacf");
    method.estimator().estimate(series, max_lags)
}
