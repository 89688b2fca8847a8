//! Moving average convergence/divergence.

use lagstat_series::Series;

use crate::ema::{EmaConfig, ema};
use crate::error::SmoothError;

/// Spans for [`macd()`]. Defaults: `fast = 12`, `slow = 26`, `signal = 9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MacdConfig {
    fast: usize,
    slow: usize,
    signal: usize,
}

impl MacdConfig {
    /// Creates a configuration with the defaults.
    pub fn new() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }

    /// Sets the fast EMA span.
    pub fn with_fast(mut self, fast: usize) -> Self {
        self.fast = fast;
        self
    }

    /// Sets the slow EMA span.
    pub fn with_slow(mut self, slow: usize) -> Self {
        self.slow = slow;
        self
    }

    /// Sets the signal EMA span.
    pub fn with_signal(mut self, signal: usize) -> Self {
        self.signal = signal;
        self
    }

    /// Returns the fast EMA span.
    pub fn fast(&self) -> usize {
        self.fast
    }

    /// Returns the slow EMA span.
    pub fn slow(&self) -> usize {
        self.slow
    }

    /// Returns the signal EMA span.
    pub fn signal(&self) -> usize {
        self.signal
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SmoothError::InvalidWindow`] naming the first zero span.
    pub fn validate(&self) -> Result<(), SmoothError> {
        for (name, value) in [("fast", self.fast), ("slow", self.slow), ("signal", self.signal)] {
            if value == 0 {
                return Err(SmoothError::InvalidWindow { name, value });
            }
        }
        Ok(())
    }
}

impl Default for MacdConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// MACD line and its signal line, both aligned with the input.
#[derive(Clone, Debug, PartialEq)]
pub struct Macd {
    /// `ema(fast) - ema(slow)`.
    pub line: Series,
    /// EMA of `line` with the signal span.
    pub signal: Series,
}

impl Macd {
    /// Returns `line - signal`.
    pub fn histogram(&self) -> Series {
        &self.line - &self.signal
    }
}

/// Computes the MACD of `series` using standard (non-Wilder) EMAs.
///
/// # Errors
///
/// Returns [`SmoothError::InvalidWindow`] if any span is zero.
#[tracing::instrument(skip(series), fields(n = series.len()))]
pub fn macd(series: &Series, config: &MacdConfig) -> Result<Macd, SmoothError> {
    config.validate()?;
    let fast = ema(series, &EmaConfig::new().with_span(config.fast()))?;
    let slow = ema(series, &EmaConfig::new().with_span(config.slow()))?;
    let line = fast.try_sub(&slow)?;
    let signal = ema(&line, &EmaConfig::new().with_span(config.signal()))?;
    Ok(Macd { line, signal })
}
