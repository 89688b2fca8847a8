//! Analyze command: moments, ACF, PACF and an AR fit as a JSON report.

use anyhow::{Context, Result};
use lagstat_ar::ArSpec;
use lagstat_correlation::{AcvfOptions, PacfMethod, acf, acvf_to_lag, default_max_lags, pacf};
use lagstat_series::Series;
use tracing::{info, info_span};

use crate::cli::AnalyzeArgs;
use crate::config::LagstatConfig;
use crate::convert;
use crate::report::{self, AnalysisReport, ArSummary};
use crate::series_io;

/// Run the analysis pipeline.
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let _cmd = info_span!("analyze").entered();
    let config = LagstatConfig::load(args.config.as_deref())?;
    let method = match args.method {
        Some(method) => method,
        None => convert::parse_pacf_method(&config.analysis)?,
    };
    let order = args.order.unwrap_or(config.ar.order);

    let series = series_io::read_series(&args.input)?;
    let max_lags = args
        .max_lags
        .or(config.analysis.max_lags)
        .unwrap_or_else(|| default_max_lags(series.len()));

    let report = analyze(&series, max_lags, method, order)?;
    series_io::write_output(args.output.as_deref(), &report::to_json(&report)?)
}

/// Builds the report; ACF and PACF are computed concurrently.
fn analyze(
    series: &Series,
    max_lags: usize,
    method: PacfMethod,
    order: usize,
) -> Result<AnalysisReport> {
    let mean = series.mean().context("cannot compute the mean")?;
    let variance = series
        .variance_sample()
        .context("cannot compute the variance")?;
    let acvf = acvf_to_lag(series, max_lags, AcvfOptions::default())
        .context("autocovariance failed")?;

    let (acf_result, pacf_result) = rayon::join(
        || acf(series, Some(max_lags)),
        || pacf(series, Some(max_lags), method),
    );
    let acf = acf_result.context("autocorrelation failed")?;
    let pacf = pacf_result.with_context(|| format!("partial autocorrelation ({method}) failed"))?;

    let fit = ArSpec::new(order)
        .fit(series)
        .with_context(|| format!("AR({order}) fit failed"))?;
    info!(
        max_lags,
        %method,
        coefficients = ?fit.coefficients(),
        sigma2 = fit.sigma2(),
        "analysis complete"
    );

    Ok(AnalysisReport {
        n: series.len(),
        valid: series.valid_count(),
        mean,
        variance,
        max_lags,
        method: method.to_string(),
        acvf,
        acf,
        pacf,
        ar: ArSummary::from(&fit),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ramp() -> Series {
        Series::from(vec![1.0, 2.0, 3.0, 4.0, 5.0])
    }

    #[test]
    fn ramp_report() {
        let report = analyze(&ramp(), 2, PacfMethod::YuleWalker, 1).unwrap();
        assert_eq!(report.n, 5);
        assert_eq!(report.valid, 5);
        assert_relative_eq!(report.mean, 3.0);
        assert_relative_eq!(report.variance, 2.5);
        assert_eq!(report.method, "yw");
        assert_eq!(report.acvf.len(), 3);
        assert_eq!(report.acf[0], 1.0);
        assert_relative_eq!(report.acf[1], 0.4, epsilon = 1e-12);
        assert_relative_eq!(report.acf[2], -0.1, epsilon = 1e-12);
        assert_eq!(report.pacf.len(), 2);
        assert_relative_eq!(report.pacf[0], 0.4, epsilon = 1e-12);
        assert_relative_eq!(report.pacf[1], -0.26 / 0.84, epsilon = 1e-12);
        assert_relative_eq!(report.ar.coefficients[0], 0.5, epsilon = 1e-12);
        assert_relative_eq!(report.ar.sigma2, 1.5, epsilon = 1e-12);
    }

    #[test]
    fn absent_observations_counted() {
        let s = Series::new(vec![Some(1.0), None, Some(3.0), Some(2.0), Some(5.0), Some(4.0)]);
        let report = analyze(&s, 2, PacfMethod::LevinsonDurbin, 1).unwrap();
        assert_eq!(report.n, 6);
        assert_eq!(report.valid, 5);
        assert_eq!(report.method, "ld");
    }

    #[test]
    fn constant_series_fails_with_context() {
        let err = analyze(&Series::filled(2.0, 10), 2, PacfMethod::YuleWalker, 1).unwrap_err();
        assert_eq!(err.to_string(), "autocorrelation failed");
    }
}
