//! Exponential moving average.

use lagstat_series::Series;
use tracing::{debug, warn};

use crate::error::SmoothError;

/// Configuration for [`ema()`].
///
/// Defaults: `span = 10`, `wilder = false`.
///
/// # Example
///
/// ```
/// use lagstat_smooth::EmaConfig;
///
/// let config = EmaConfig::new().with_span(14).with_wilder(true);
/// assert!((config.alpha() - 1.0 / 14.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmaConfig {
    span: usize,
    wilder: bool,
}

impl EmaConfig {
    /// Creates a configuration with the defaults.
    pub fn new() -> Self {
        Self {
            span: 10,
            wilder: false,
        }
    }

    /// Sets the span `n`.
    pub fn with_span(mut self, span: usize) -> Self {
        self.span = span;
        self
    }

    /// Selects Wilder smoothing (`alpha = 1 / n`) instead of `2 / (n + 1)`.
    pub fn with_wilder(mut self, wilder: bool) -> Self {
        self.wilder = wilder;
        self
    }

    /// Returns the span.
    pub fn span(&self) -> usize {
        self.span
    }

    /// Returns whether Wilder smoothing is used.
    pub fn wilder(&self) -> bool {
        self.wilder
    }

    /// Returns the smoothing factor.
    pub fn alpha(&self) -> f64 {
        if self.wilder {
            1.0 / self.span as f64
        } else {
            2.0 / (self.span as f64 + 1.0)
        }
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SmoothError::InvalidWindow`] if the span is zero.
    pub fn validate(&self) -> Result<(), SmoothError> {
        if self.span == 0 {
            return Err(SmoothError::InvalidWindow {
                name: "span",
                value: self.span,
            });
        }
        Ok(())
    }
}

impl Default for EmaConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Exponential moving average of `series`.
///
/// Let `start` be the first present position and `n` the span. The output is
/// absent before `start + n - 1`; that position holds the sum of the present
/// values in `[start, start + n)` divided by `n`, and every later position
/// follows `ema[i] = alpha * x[i] + (1 - alpha) * ema[i - 1]`. An absent
/// input gives an absent output and leaves the running average unchanged.
///
/// A series without a present value, or too short to fill the first window,
/// gives an all-absent result of the same length.
///
/// # Errors
///
/// Returns [`SmoothError::InvalidWindow`] if the span is zero.
#[tracing::instrument(skip(series), fields(n = series.len()))]
pub fn ema(series: &Series, config: &EmaConfig) -> Result<Series, SmoothError> {
    config.validate()?;
    let len = series.len();
    let span = config.span();

    let Some(start) = series.first_valid_index() else {
        warn!("no observation present; ema is absent everywhere");
        return Ok(Series::absent(len));
    };
    let Some(seed_at) = start.checked_add(span - 1).filter(|&i| i < len) else {
        warn!(span, len, start, "series too short for the first ema window");
        return Ok(Series::absent(len));
    };

    let alpha = config.alpha();
    debug!(span, alpha, start, "computing ema");

    let values = series.values();
    let mut out = vec![None; len];
    let mut state = values[start..=seed_at].iter().flatten().sum::<f64>() / span as f64;
    out[seed_at] = Some(state);
    for i in seed_at + 1..len {
        if let Some(x) = values[i] {
            state = alpha * x + (1.0 - alpha) * state;
            out[i] = Some(state);
        }
    }
    Ok(Series::new(out))
}
