//! Lag and difference transforms.

use crate::series::Series;

/// Shifts `series` right by `k` positions.
///
/// Position `i >= k` holds the observation that was at `i - k`; positions
/// `0..k` are absent. The result always has the input's length, so `k`
/// beyond the end gives an all-absent series. `k = 0` returns an equal copy.
pub fn lag(series: &Series, k: usize) -> Series {
    if k == 0 {
        return series.clone();
    }
    let n = series.len();
    let mut out = vec![None; n];
    for (i, slot) in out.iter_mut().enumerate().skip(k) {
        *slot = series.get(i - k);
    }
    Series::new(out)
}

/// Applies the first difference `s - lag(s, 1)` exactly `d` times.
///
/// Each pass feeds the previous result back in, so the output loses one more
/// leading observation per pass. This is not `s - lag(s, d)`.
pub fn diff(series: &Series, d: usize) -> Series {
    let mut current = series.clone();
    for _ in 0..d {
        current = &current - &lag(&current, 1);
    }
    current
}
