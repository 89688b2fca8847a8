//! JSON report for the `analyze` subcommand.

use anyhow::{Context, Result};
use lagstat_ar::ArFit;
use serde::Serialize;

/// Top-level analysis report.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    /// Number of positions, absent ones included.
    pub n: usize,
    /// Number of present observations.
    pub valid: usize,
    pub mean: f64,
    /// Sample variance (`N - 1` divisor).
    pub variance: f64,
    pub max_lags: usize,
    /// PACF method short name.
    pub method: String,
    /// Autocovariances at lags `0..=max_lags`.
    pub acvf: Vec<f64>,
    /// Autocorrelations at lags `0..=max_lags`.
    pub acf: Vec<f64>,
    /// Partial autocorrelations at lags `1..=max_lags`.
    pub pacf: Vec<f64>,
    pub ar: ArSummary,
}

/// Fitted AR model summary.
#[derive(Debug, Serialize)]
pub struct ArSummary {
    pub order: usize,
    pub coefficients: Vec<f64>,
    pub sigma2: f64,
    pub mean: f64,
}

impl From<&ArFit> for ArSummary {
    fn from(fit: &ArFit) -> Self {
        Self {
            order: fit.order(),
            coefficients: fit.coefficients().to_vec(),
            sigma2: fit.sigma2(),
            mean: fit.mean(),
        }
    }
}

/// Serializes the report to pretty-printed JSON with a trailing newline.
pub fn to_json(report: &AnalysisReport) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
    json.push('\n');
    Ok(json)
}
