//! Fitted AR model results.

use lagstat_series::Series;
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::error::ArError;
use crate::innovations::Innovations;
use crate::spec::ArSpec;

/// Burn-in discarded by [`ArFit::simulate()`] before recording a path.
const BURN_IN: usize = 100;

/// A fitted AR(k) model produced by [`ArSpec::fit()`].
///
/// Holds the Yule-Walker coefficients, the innovation variance, the source
/// mean and the source's first `k` observations, which seed
/// [`ArFit::estimate()`].
#[derive(Clone, Debug)]
pub struct ArFit {
    spec: ArSpec,
    coefficients: Vec<f64>,
    sigma2: f64,
    mean: f64,
    initial: Vec<f64>,
}

impl ArFit {
    /// Creates a new `ArFit` (crate-internal constructor).
    pub(crate) fn new(
        spec: ArSpec,
        coefficients: Vec<f64>,
        sigma2: f64,
        mean: f64,
        initial: Vec<f64>,
    ) -> Self {
        Self {
            spec,
            coefficients,
            sigma2,
            mean,
            initial,
        }
    }

    /// Returns the [`ArSpec`] that produced this fit.
    pub fn spec(&self) -> ArSpec {
        self.spec
    }

    /// Returns the AR order `k`.
    pub fn order(&self) -> usize {
        self.spec.order()
    }

    /// Returns the AR coefficients `phi_1..phi_k`.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Returns the innovation variance (`sigma2`).
    pub fn sigma2(&self) -> f64 {
        self.sigma2
    }

    /// Returns the mean of the source series.
    ///
    /// The recurrence runs on deviations from this mean; generated series
    /// have it added back.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the source's first `k` observations (absent ones replaced by the mean).
    pub fn initial(&self) -> &[f64] {
        &self.initial
    }

    /// One-step forecast from `history`, whose last `k` values are the most
    /// recent observations. Returns `None` if fewer than `k` values are given.
    pub fn predict_next(&self, history: &[f64]) -> Option<f64> {
        let k = self.order();
        if history.len() < k {
            return None;
        }
        let recent = &history[history.len() - k..];
        let dev: f64 = self
            .coefficients
            .iter()
            .zip(recent.iter().rev())
            .map(|(phi, x)| phi * (x - self.mean))
            .sum();
        Some(self.mean + dev)
    }

    /// Produces the estimated AR series of length `n`.
    ///
    /// Positions `0..k` repeat the source's first observations; each later
    /// position follows `x[t] = mean + sum_j phi_j * (x[t - j] - mean) + eps[t]`
    /// with `eps` drawn according to `innovations`.
    ///
    /// # Errors
    ///
    /// Returns [`ArError::InvalidInnovationVariance`] if Gaussian innovations
    /// are requested and `sigma2` is not positive and finite.
    pub fn estimate(&self, n: usize, innovations: &Innovations) -> Result<Series, ArError> {
        match *innovations {
            Innovations::Zero => Ok(self.estimate_with(n, || 0.0)),
            Innovations::Gaussian { seed } => {
                let mut rng = StdRng::seed_from_u64(seed);
                self.estimate_with_rng(n, &mut rng)
            }
        }
    }

    /// Like [`ArFit::estimate()`] with Gaussian innovations drawn from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`ArError::InvalidInnovationVariance`] if `sigma2` is not
    /// positive and finite.
    pub fn estimate_with_rng<R: Rng>(&self, n: usize, rng: &mut R) -> Result<Series, ArError> {
        let normal = self.innovation_distribution()?;
        Ok(self.estimate_with(n, || normal.sample(rng)))
    }

    fn estimate_with(&self, n: usize, mut draw: impl FnMut() -> f64) -> Series {
        let k = self.order();
        let mut dev = vec![0.0; n];
        for (t, slot) in dev.iter_mut().enumerate().take(k.min(n)) {
            *slot = self.initial[t] - self.mean;
        }
        for t in k..n {
            let ar: f64 = self
                .coefficients
                .iter()
                .enumerate()
                .map(|(j, phi)| phi * dev[t - 1 - j])
                .sum();
            dev[t] = ar + draw();
        }
        dev.into_iter().map(|d| Some(d + self.mean)).collect()
    }

    fn innovation_distribution(&self) -> Result<Normal<f64>, ArError> {
        if !self.sigma2.is_finite() || self.sigma2 <= 0.0 {
            return Err(ArError::InvalidInnovationVariance {
                sigma2: self.sigma2,
            });
        }
        Normal::new(0.0, self.sigma2.sqrt()).map_err(|_| ArError::InvalidInnovationVariance {
            sigma2: self.sigma2,
        })
    }

    /// Generates independent synthetic realisations from this fitted model.
    ///
    /// Each of the `n_sim` paths starts from zero state, runs a burn-in of
    /// 100 steps driven by Gaussian white noise with variance `sigma2`, and
    /// records the next `n` values with the mean added back.
    ///
    /// Returns an [`Array2<f64>`] with shape `(n, n_sim)`; each column is one
    /// realisation. A degenerate `sigma2` gives a matrix of zeros.
    pub fn simulate<R: Rng>(&self, n: usize, n_sim: usize, rng: &mut R) -> Array2<f64> {
        if n == 0 || n_sim == 0 {
            return Array2::zeros((n, n_sim));
        }
        let normal = match self.innovation_distribution() {
            Ok(normal) => normal,
            Err(_) => return Array2::zeros((n, n_sim)),
        };

        let k = self.order();
        let n_tot = BURN_IN + n;
        let mut output = Array2::zeros((n, n_sim));

        for sim in 0..n_sim {
            let mut y = vec![0.0; n_tot];
            for t in 0..n_tot {
                let mut val = normal.sample(rng);
                for i in 0..k.min(t) {
                    val += self.coefficients[i] * y[t - 1 - i];
                }
                y[t] = val;
            }
            for (i, &val) in y[BURN_IN..].iter().enumerate() {
                output[[i, sim]] = val + self.mean;
            }
        }

        output
    }
}
