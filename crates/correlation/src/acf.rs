//! Autocorrelation function.

use lagstat_series::Series;
use tracing::debug;

use crate::acvf::{default_max_lags, is_constant, lagged_cross_sum};
use crate::error::CorrelationError;

/// Autocorrelation at lags `0..=max_lags`.
///
/// `max_lags` defaults to [`default_max_lags`]. Entry 0 is exactly `1.0`;
/// entry `i` is `sum((x[t] - m) * (x[t - i] - m)) / (variance_sample * (size - 1))`
/// where both factors are centred on the same global mean `m`, so the
/// lagged copy shares its parent's mean.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`CorrelationError::Series`] | fewer than two observations present |
/// | [`CorrelationError::ZeroVariance`] | every present observation is equal |
#[tracing::instrument(skip(series), fields(n = series.len()))]
pub fn acf(series: &Series, max_lags: Option<usize>) -> Result<Vec<f64>, CorrelationError> {
    let max_lags = max_lags.unwrap_or_else(|| default_max_lags(series.len()));
    let variance = series.variance_sample()?;
    if is_constant(series) {
        return Err(CorrelationError::ZeroVariance);
    }
    let mean = series.mean()?;
    let denom = variance * (series.len() - 1) as f64;
    debug!(max_lags, mean, variance, "computing acf");

    let mut out = Vec::with_capacity(max_lags + 1);
    out.push(1.0);
    out.extend((1..=max_lags).map(|i| lagged_cross_sum(series, i, mean, mean) / denom));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn lag_zero_is_exactly_one() {
        let s = Series::from(vec![0.3, -1.2, 4.5, 2.2, 0.0, 1.1]);
        assert_eq!(acf(&s, None).unwrap()[0], 1.0);
    }

    #[test]
    fn default_length() {
        let s = Series::from((0..50).map(|x| (x as f64).sin()).collect::<Vec<_>>());
        // floor(10 * log10(50)) = 16
        assert_eq!(acf(&s, None).unwrap().len(), 17);
    }

    #[test]
    fn ramp_hand_computed() {
        // deviations [-2, -1, 0, 1, 2], sum of squares 10
        let s = Series::from(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let r = acf(&s, Some(2)).unwrap();
        assert_relative_eq!(r[1], 0.4, epsilon = 1e-12);
        assert_relative_eq!(r[2], -0.1, epsilon = 1e-12);
    }

    #[test]
    fn alternating_series_is_negative_at_lag_one() {
        let s = Series::from(vec![1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0]);
        let r = acf(&s, Some(2)).unwrap();
        assert!(r[1] < -0.8, "r1 = {}", r[1]);
        assert!(r[2] > 0.7, "r2 = {}", r[2]);
    }

    #[test]
    fn lags_past_end_are_zero() {
        let s = Series::from(vec![1.0, 2.0, 4.0]);
        let r = acf(&s, Some(5)).unwrap();
        assert_eq!(r.len(), 6);
        assert_eq!(r[3], 0.0);
        assert_eq!(r[5], 0.0);
    }

    #[test]
    fn constant_series_errors() {
        let err = acf(&Series::filled(2.5, 10), None).unwrap_err();
        assert_eq!(err, CorrelationError::ZeroVariance);
    }

    #[test]
    fn single_observation_errors() {
        let err = acf(&Series::from(vec![1.0]), None).unwrap_err();
        assert!(matches!(err, CorrelationError::Series(_)));
    }
}
