//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};

use lagstat_ar::{ArConfig, Innovations};
use lagstat_correlation::PacfMethod;
use lagstat_smooth::{EmaConfig, MacdConfig};

use crate::config::{AnalysisToml, ArToml, SmoothingToml};

/// Parses the configured PACF method name.
pub fn parse_pacf_method(analysis: &AnalysisToml) -> Result<PacfMethod> {
    analysis
        .pacf_method
        .parse()
        .with_context(|| format!("invalid [analysis].pacf_method {:?}", analysis.pacf_method))
}

/// Maps an optional seed to the innovation source: Gaussian when seeded.
pub fn innovations(seed: Option<u64>) -> Innovations {
    match seed {
        Some(seed) => Innovations::Gaussian { seed },
        None => Innovations::Zero,
    }
}

/// Builds an [`ArConfig`] from the TOML AR configuration.
pub fn build_ar_config(ar: &ArToml) -> Result<ArConfig> {
    let cfg = ArConfig::new()
        .with_order(ar.order)
        .with_length(ar.length)
        .with_innovations(innovations(ar.seed));
    cfg.validate().context("invalid [ar] configuration")?;
    Ok(cfg)
}

/// Builds an [`EmaConfig`] from the TOML smoothing configuration.
pub fn build_ema_config(smoothing: &SmoothingToml) -> Result<EmaConfig> {
    let cfg = EmaConfig::new()
        .with_span(smoothing.ema_span)
        .with_wilder(smoothing.wilder);
    cfg.validate().context("invalid [smoothing] ema settings")?;
    Ok(cfg)
}

/// Builds a [`MacdConfig`] from the TOML smoothing configuration.
pub fn build_macd_config(smoothing: &SmoothingToml) -> Result<MacdConfig> {
    let cfg = MacdConfig::new()
        .with_fast(smoothing.macd_fast)
        .with_slow(smoothing.macd_slow)
        .with_signal(smoothing.macd_signal);
    cfg.validate().context("invalid [smoothing] macd settings")?;
    Ok(cfg)
}
