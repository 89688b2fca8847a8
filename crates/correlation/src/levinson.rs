//! Levinson-Durbin recursion for the Yule-Walker system.

use tracing::debug;

use crate::error::CorrelationError;

/// Output of [`levinson_durbin()`].
///
/// The reflection coefficients are the partial autocorrelations at lags
/// `1..=order`; the coefficients are the AR(`order`) Yule-Walker solution.
#[derive(Clone, Debug, PartialEq)]
pub struct LevinsonDurbin {
    reflection: Vec<f64>,
    coefficients: Vec<f64>,
    variances: Vec<f64>,
}

impl LevinsonDurbin {
    /// Returns the recursion order.
    pub fn order(&self) -> usize {
        self.reflection.len()
    }

    /// Returns the reflection coefficients `phi_mm` for `m = 1..=order`.
    pub fn reflection(&self) -> &[f64] {
        &self.reflection
    }

    /// Returns the AR coefficients `phi_1..phi_order` of the final order.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Returns the prediction-error variance for orders `0..=order`.
    pub fn variances(&self) -> &[f64] {
        &self.variances
    }

    /// Returns the prediction-error variance of the final order.
    pub fn sigma2(&self) -> f64 {
        self.variances[self.variances.len() - 1]
    }

    /// Consumes the result and returns the reflection coefficients.
    pub fn into_reflection(self) -> Vec<f64> {
        self.reflection
    }
}

/// Solves the Yule-Walker equations of orders `1..=order` from the
/// autocovariances `gamma[0..=order]`.
///
/// The order-0 error variance is `gamma[0]`. Each order `m` computes the
/// reflection coefficient
/// `k = (gamma[m] - sum_j phi[m-1][j] * gamma[m - j]) / v[m-1]`, updates the
/// lower coefficients with `phi[m][j] = phi[m-1][j] - k * phi[m-1][m-j]` and
/// shrinks the error variance by `1 - k^2`.
///
/// Autocorrelations work as well as autocovariances; the reflection
/// coefficients are scale-free.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`CorrelationError::InsufficientAutocovariances`] | `gamma.len() < order + 1` |
/// | [`CorrelationError::NonPositiveVariance`] | `gamma[0]` or any prediction-error variance is not positive and finite |
///
/// # Example
///
/// ```
/// use lagstat_correlation::levinson_durbin;
///
/// // AR(1) with phi = 0.5: gamma[h] = 0.5^h
/// let ld = levinson_durbin(&[1.0, 0.5, 0.25], 2).unwrap();
/// assert!((ld.reflection()[0] - 0.5).abs() < 1e-12);
/// assert!(ld.reflection()[1].abs() < 1e-12);
/// ```
pub fn levinson_durbin(gamma: &[f64], order: usize) -> Result<LevinsonDurbin, CorrelationError> {
    if gamma.len() < order + 1 {
        return Err(CorrelationError::InsufficientAutocovariances {
            order,
            available: gamma.len(),
        });
    }
    let v0 = gamma[0];
    if !(v0.is_finite() && v0 > 0.0) {
        return Err(CorrelationError::NonPositiveVariance {
            order: 0,
            variance: v0,
        });
    }

    let mut phi = vec![0.0; order];
    let mut prev = vec![0.0; order];
    let mut reflection = Vec::with_capacity(order);
    let mut variances = Vec::with_capacity(order + 1);
    variances.push(v0);
    let mut v = v0;

    for m in 1..=order {
        prev[..m - 1].copy_from_slice(&phi[..m - 1]);

        let acc: f64 = (1..m).map(|j| prev[j - 1] * gamma[m - j]).sum();
        let k = (gamma[m] - acc) / v;

        phi[m - 1] = k;
        for j in 1..m {
            phi[j - 1] = prev[j - 1] - k * prev[m - j - 1];
        }

        v *= 1.0 - k * k;
        debug!(order = m, reflection = k, variance = v, "levinson-durbin step");
        if !(v.is_finite() && v > 0.0) {
            return Err(CorrelationError::NonPositiveVariance {
                order: m,
                variance: v,
            });
        }

        reflection.push(k);
        variances.push(v);
    }

    Ok(LevinsonDurbin {
        reflection,
        coefficients: phi,
        variances,
    })
}

/// Converts reflection coefficients (partial autocorrelations) to AR
/// polynomial coefficients with the Levinson-Durbin step-up.
///
/// Reflection coefficients inside `(-1, 1)` always give a stationary AR
/// polynomial. The last coefficient equals the last reflection coefficient.
pub fn reflection_to_coefficients(reflection: &[f64]) -> Vec<f64> {
    let p = reflection.len();
    let mut phi = vec![0.0; p];
    let mut prev = vec![0.0; p];

    for (k, &r) in reflection.iter().enumerate() {
        prev[..k].copy_from_slice(&phi[..k]);
        phi[k] = r;
        for j in 0..k {
            phi[j] = prev[j] - r * prev[k - 1 - j];
        }
    }

    phi
}
