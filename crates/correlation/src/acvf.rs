//! Autocovariance estimation.

use lagstat_series::{Series, lag};
use tracing::warn;

use crate::error::CorrelationError;

/// Options for [`acvf()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AcvfOptions {
    /// Subtract the series mean from the current factor before forming
    /// products. The lagged factor is always centred on the mean.
    pub demean: bool,
    /// Divide lag `i` by `size - i` instead of `size`.
    ///
    /// The name is historical: the divisor counts positions, absent ones
    /// included, not valid pairs.
    pub unbiased: bool,
}

impl Default for AcvfOptions {
    fn default() -> Self {
        Self {
            demean: true,
            unbiased: true,
        }
    }
}

/// Default number of lags for a series of `size` observations:
/// `floor(10 * log10(size))`, or 0 for an empty series.
///
/// ```
/// use lagstat_correlation::default_max_lags;
///
/// assert_eq!(default_max_lags(100), 20);
/// assert_eq!(default_max_lags(5), 6);
/// assert_eq!(default_max_lags(1), 0);
/// ```
pub fn default_max_lags(size: usize) -> usize {
    if size == 0 {
        return 0;
    }
    (10.0 * (size as f64).log10()).floor() as usize
}

/// Autocovariance at lags `0..=default_max_lags(size)`.
///
/// Entry 0 is the variance estimate. See [`acvf_to_lag()`] for the estimator.
///
/// # Errors
///
/// Returns [`CorrelationError::Series`] if the series holds no observation.
pub fn acvf(series: &Series, options: AcvfOptions) -> Result<Vec<f64>, CorrelationError> {
    acvf_to_lag(series, default_max_lags(series.len()), options)
}

/// Autocovariance at lags `0..=max_lag`.
///
/// Lag `i` sums `(x[t] - c) * (x[t - i] - m)` over positions where both
/// observations are present, where `m` is the mean and `c` is `m` when
/// demeaning, else 0. The sum is then divided by `size` or, when `unbiased`, by `size - i` floored at 1. Lags
/// at or past the series length have no pairs and come out as 0.
///
/// # Errors
///
/// Returns [`CorrelationError::Series`] if the series holds no observation.
pub fn acvf_to_lag(
    series: &Series,
    max_lag: usize,
    options: AcvfOptions,
) -> Result<Vec<f64>, CorrelationError> {
    let size = series.len();
    let mean = series.mean()?;
    let current_center = if options.demean { mean } else { 0.0 };

    if max_lag >= size {
        warn!(max_lag, size, "autocovariance lags reach past the series length");
    }

    let out = (0..=max_lag)
        .map(|i| {
            let divisor = if options.unbiased {
                size.saturating_sub(i).max(1)
            } else {
                size
            };
            lagged_cross_sum(series, i, current_center, mean) / divisor as f64
        })
        .collect();
    Ok(out)
}

/// Sum of `(x[t] - current_center) * (lag(x, k)[t] - lagged_center)` over
/// positions where both factors are present.
pub(crate) fn lagged_cross_sum(
    series: &Series,
    k: usize,
    current_center: f64,
    lagged_center: f64,
) -> f64 {
    let lagged = lag(series, k);
    series
        .iter()
        .zip(lagged.iter())
        .filter_map(|pair| match pair {
            (Some(a), Some(b)) => Some((a - current_center) * (b - lagged_center)),
            _ => None,
        })
        .sum()
}

/// Returns `true` when every present observation is the same value, up to
/// rounding.
pub(crate) fn is_constant(series: &Series) -> bool {
    let (lo, hi) = series
        .valid()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
            (lo.min(x), hi.max(x))
        });
    (hi - lo).abs() <= f64::EPSILON * hi.abs().max(lo.abs()).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_lag_count() {
        assert_eq!(default_max_lags(0), 0);
        assert_eq!(default_max_lags(10), 10);
        assert_eq!(default_max_lags(1000), 30);
    }

    #[test]
    fn acvf_length_follows_default_lags() {
        let s = Series::from((0..100).map(|x| x as f64).collect::<Vec<_>>());
        assert_eq!(acvf(&s, AcvfOptions::default()).unwrap().len(), 21);
    }

    #[test]
    fn acvf_biased_hand_computed() {
        // mean 3, deviations [-2, -1, 0, 1, 2]
        let s = Series::from(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let opts = AcvfOptions {
            demean: true,
            unbiased: false,
        };
        let g = acvf_to_lag(&s, 2, opts).unwrap();
        assert_relative_eq!(g[0], 10.0 / 5.0, epsilon = 1e-12);
        // lag 1: (-1)(-2) + 0(-1) + 1*0 + 2*1 = 4
        assert_relative_eq!(g[1], 4.0 / 5.0, epsilon = 1e-12);
        // lag 2: 0(-2) + 1(-1) + 2*0 = -1
        assert_relative_eq!(g[2], -1.0 / 5.0, epsilon = 1e-12);
    }

    #[test]
    fn acvf_unbiased_uses_reverse_counting_divisor() {
        let s = Series::from(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let g = acvf_to_lag(&s, 2, AcvfOptions::default()).unwrap();
        assert_relative_eq!(g[0], 10.0 / 5.0, epsilon = 1e-12);
        assert_relative_eq!(g[1], 4.0 / 4.0, epsilon = 1e-12);
        assert_relative_eq!(g[2], -1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn acvf_without_demeaning_centres_only_lagged_factor() {
        // mean 1.5; lag 0: 1 * (-0.5) + 2 * 0.5 = 0.5; lag 1: 2 * (1 - 1.5) = -1
        let s = Series::from(vec![1.0, 2.0]);
        let opts = AcvfOptions {
            demean: false,
            unbiased: false,
        };
        let g = acvf_to_lag(&s, 1, opts).unwrap();
        assert_relative_eq!(g[0], 0.25, epsilon = 1e-12);
        assert_relative_eq!(g[1], -0.5, epsilon = 1e-12);
    }

    #[test]
    fn demean_only_changes_current_factor() {
        // sum over pairs of (x[t] - c)(y - m) differs by c * sum(y - m)
        let s = Series::from(vec![2.0, 5.0, 1.0, 4.0, 3.0]);
        let raw = acvf_to_lag(
            &s,
            2,
            AcvfOptions {
                demean: false,
                unbiased: false,
            },
        )
        .unwrap();
        let centred = acvf_to_lag(
            &s,
            2,
            AcvfOptions {
                demean: true,
                unbiased: false,
            },
        )
        .unwrap();
        // lag 0: sum(y - m) = 0, so both agree
        assert_relative_eq!(raw[0], centred[0], epsilon = 1e-12);
        // lag 1: lagged values [2, 5, 1, 4] minus 3 sum to 0, so both agree
        assert_relative_eq!(raw[1], centred[1], epsilon = 1e-12);
        // lag 2: lagged values [2, 5, 1] minus 3 sum to -1, so raw = centred + 3 * (-1) / 5
        assert_relative_eq!(raw[2], centred[2] - 3.0 / 5.0, epsilon = 1e-12);
    }

    #[test]
    fn acvf_lags_past_end_are_zero() {
        let s = Series::from(vec![1.0, 3.0]);
        let g = acvf_to_lag(&s, 5, AcvfOptions::default()).unwrap();
        assert_eq!(g.len(), 6);
        assert!(g[2..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn acvf_constant_series_is_zero() {
        let s = Series::filled(4.0, 10);
        let g = acvf(&s, AcvfOptions::default()).unwrap();
        assert!(g.iter().all(|v| v.abs() < 1e-12));
    }

    #[test]
    fn acvf_skips_absent_pairs() {
        let s = Series::new(vec![Some(1.0), None, Some(3.0), Some(5.0)]);
        let opts = AcvfOptions {
            demean: true,
            unbiased: false,
        };
        // mean 3; lag 1 has the single pair (5, 3) -> 2 * 0 = 0
        let g = acvf_to_lag(&s, 1, opts).unwrap();
        assert_relative_eq!(g[0], 8.0 / 4.0, epsilon = 1e-12);
        assert_relative_eq!(g[1], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn acvf_empty_errors() {
        let err = acvf(&Series::default(), AcvfOptions::default()).unwrap_err();
        assert!(matches!(err, CorrelationError::Series(_)));
    }

    #[test]
    fn constant_detection() {
        assert!(is_constant(&Series::filled(0.1, 7)));
        assert!(!is_constant(&Series::from(vec![0.1, 0.2])));
    }
}
