//! Conditional maximum-likelihood PACF.
//!
//! For each order `m` an AR(m) model is fitted to the demeaned series by
//! maximising the conditional Gaussian likelihood with the innovation
//! variance concentrated out, which amounts to minimising the mean squared
//! one-step residual. The partial autocorrelation at lag `m` is the last
//! coefficient of that fit.
//!
//! Coefficients are searched in an unconstrained space: each parameter maps
//! through `tanh` to a reflection coefficient in `(-1, 1)` and the step-up
//! recursion turns those into a stationary AR polynomial. The last AR
//! coefficient equals the last reflection coefficient, so the PACF is read
//! off directly as `tanh(alpha_m)`.

use argmin::core::{CostFunction, Executor};
use argmin::solver::neldermead::NelderMead;
use lagstat_series::Series;
use tracing::{debug, warn};

use crate::acf::acf;
use crate::acvf::is_constant;
use crate::error::CorrelationError;
use crate::levinson::{levinson_durbin, reflection_to_coefficients};
use crate::pacf::PacfEstimator;

const MAX_ITERS: u64 = 2000;
const SD_TOLERANCE: f64 = 1e-10;
/// Starting reflection coefficients are clamped so `atanh` stays finite.
const START_CLAMP: f64 = 0.95;
const SIMPLEX_STEP: f64 = 0.5;

/// Maximum-likelihood PACF estimator (`"mle"`).
///
/// Each order is optimised with Nelder-Mead, started from the Yule-Walker
/// reflection coefficients. Observations whose lag window contains an absent
/// value are left out of the likelihood.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaximumLikelihoodPacf;

impl PacfEstimator for MaximumLikelihoodPacf {
    fn estimate(&self, series: &Series, max_lags: usize) -> Result<Vec<f64>, CorrelationError> {
        series.variance_sample()?;
        if is_constant(series) {
            return Err(CorrelationError::ZeroVariance);
        }
        let mean = series.mean()?;
        let centered = series.map(|x| x - mean);

        let start = acf(series, Some(max_lags))
            .and_then(|rho| levinson_durbin(&rho, max_lags))
            .map(|ld| ld.into_reflection())
            .unwrap_or_else(|err| {
                debug!(%err, "yule-walker start unavailable, starting from zero");
                vec![0.0; max_lags]
            });

        (1..=max_lags)
            .map(|order| fit_order(centered.values(), order, &start[..order]))
            .collect()
    }
}

/// One conditional regression row: `target` and its `order` predecessors,
/// most recent first.
struct Row {
    target: f64,
    lags: Vec<f64>,
}

fn design_rows(centered: &[Option<f64>], order: usize) -> Vec<Row> {
    (order..centered.len())
        .filter_map(|t| {
            let target = centered[t]?;
            let lags = (1..=order)
                .map(|j| centered[t - j])
                .collect::<Option<Vec<f64>>>()?;
            Some(Row { target, lags })
        })
        .collect()
}

fn fit_order(
    centered: &[Option<f64>],
    order: usize,
    start: &[f64],
) -> Result<f64, CorrelationError> {
    let rows = design_rows(centered, order);
    if rows.is_empty() {
        warn!(order, "no complete lag window; partial autocorrelation set to 0");
        return Ok(0.0);
    }

    let origin: Vec<f64> = start
        .iter()
        .map(|r| r.clamp(-START_CLAMP, START_CLAMP).atanh())
        .collect();
    let mut simplex = Vec::with_capacity(order + 1);
    simplex.push(origin.clone());
    for i in 0..order {
        let mut vertex = origin.clone();
        vertex[i] += SIMPLEX_STEP;
        simplex.push(vertex);
    }

    let cost = ConditionalCost { rows: &rows };
    let solver = NelderMead::new(simplex)
        .with_sd_tolerance(SD_TOLERANCE)
        .map_err(|_| CorrelationError::OptimizationFailed { order })?;
    let result = Executor::new(cost, solver)
        .configure(|state| state.max_iters(MAX_ITERS))
        .run()
        .map_err(|_| CorrelationError::OptimizationFailed { order })?;

    let best = result
        .state()
        .best_param
        .as_ref()
        .ok_or(CorrelationError::OptimizationFailed { order })?;
    let phi_mm = best[order - 1].tanh();
    debug!(order, pacf = phi_mm, rows = rows.len(), "mle order fitted");
    Ok(phi_mm)
}

/// Concentrated innovation variance of the conditional likelihood.
struct ConditionalCost<'a> {
    rows: &'a [Row],
}

impl CostFunction for ConditionalCost<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, params: &Self::Param) -> Result<Self::Output, argmin::core::Error> {
        let reflection: Vec<f64> = params.iter().map(|a| a.tanh()).collect();
        let phi = reflection_to_coefficients(&reflection);
        let ssr: f64 = self
            .rows
            .iter()
            .map(|row| {
                let fitted: f64 = phi.iter().zip(&row.lags).map(|(p, x)| p * x).sum();
                let e = row.target - fitted;
                e * e
            })
            .sum();
        let sigma2 = ssr / self.rows.len() as f64;
        Ok(if sigma2.is_finite() { sigma2 } else { f64::MAX })
    }
}
