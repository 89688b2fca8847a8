//! Smooth command: moving average, EMA or MACD of the input series.

use anyhow::{Context, Result};
use lagstat_series::Series;
use lagstat_smooth::{ema, ma, macd};
use tracing::{info_span, warn};

use crate::cli::{SmoothArgs, SmoothMethod};
use crate::config::{LagstatConfig, SmoothingToml};
use crate::convert;
use crate::series_io;

/// Run the smoothing pipeline.
pub fn run(args: SmoothArgs) -> Result<()> {
    let _cmd = info_span!("smooth", method = ?args.method).entered();
    let config = LagstatConfig::load(args.config.as_deref())?;

    let mut smoothing = config.smoothing;
    if let Some(window) = args.window {
        if args.method == SmoothMethod::Macd {
            warn!(window, "--window is ignored for macd; set [smoothing].macd_* instead");
        }
        smoothing.ma_window = window;
        smoothing.ema_span = window;
    }
    if args.wilder {
        smoothing.wilder = true;
    }

    let series = series_io::read_series(&args.input)?;
    let contents = smooth(&series, args.method, &smoothing)?;
    series_io::write_output(args.output.as_deref(), &contents)
}

/// Applies `method` and formats the result; MACD writes line and signal columns.
fn smooth(series: &Series, method: SmoothMethod, smoothing: &SmoothingToml) -> Result<String> {
    match method {
        SmoothMethod::Ma => {
            let n = smoothing.ma_window;
            let out = ma(series, n).with_context(|| format!("moving average (window {n}) failed"))?;
            Ok(series_io::format_columns(&[&out]))
        }
        SmoothMethod::Ema => {
            let cfg = convert::build_ema_config(smoothing)?;
            let out = ema(series, &cfg).context("exponential moving average failed")?;
            Ok(series_io::format_columns(&[&out]))
        }
        SmoothMethod::Macd => {
            let cfg = convert::build_macd_config(smoothing)?;
            let out = macd(series, &cfg).context("MACD failed")?;
            Ok(series_io::format_columns(&[&out.line, &out.signal]))
        }
    }
}
