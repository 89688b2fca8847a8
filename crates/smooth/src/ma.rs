//! Simple moving average.

use lagstat_series::Series;
use tracing::warn;

use crate::error::SmoothError;

/// Moving average over a trailing window of `n` positions.
///
/// Positions `0..n - 1` are absent; position `i >= n - 1` is the mean of the
/// present observations in `[i - n + 1, i]`, or absent if there are none.
/// When `n` is at least the series length the series mean is broadcast to
/// every position instead.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SmoothError::InvalidWindow`] | `n == 0` |
/// | [`SmoothError::Series`] | `n >= len` and no observation is present |
pub fn ma(series: &Series, n: usize) -> Result<Series, SmoothError> {
    if n == 0 {
        return Err(SmoothError::InvalidWindow {
            name: "window",
            value: n,
        });
    }
    let len = series.len();
    if n >= len {
        warn!(window = n, len, "window covers the whole series; broadcasting the mean");
        let mean = series.mean()?;
        return Ok(Series::filled(mean, len));
    }

    let values = series.values();
    let mut sum = 0.0;
    let mut count = 0usize;
    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        if let Some(x) = values[i] {
            sum += x;
            count += 1;
        }
        if i >= n {
            if let Some(old) = values[i - n] {
                sum -= old;
                count -= 1;
            }
        }
        let value = if i + 1 >= n && count > 0 {
            Some(sum / count as f64)
        } else {
            None
        };
        out.push(value);
    }
    Ok(Series::new(out))
}
