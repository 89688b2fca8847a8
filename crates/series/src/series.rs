//! Fixed-length series of optional observations.

use std::ops::{Add, Sub};

use crate::error::SeriesError;

/// An ordered, fixed-length sequence of observations, each either a finite
/// `f64` or absent.
///
/// Position is the only index; the earliest observation comes first.
/// Non-finite inputs (NaN, infinity) are stored as absent.
///
/// # Example
///
/// ```
/// use lagstat_series::Series;
///
/// let s = Series::new(vec![Some(1.0), None, Some(3.0)]);
/// assert_eq!(s.len(), 3);
/// assert_eq!(s.valid_count(), 2);
/// assert_eq!(s.mean().unwrap(), 2.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    values: Vec<Option<f64>>,
}

impl Series {
    /// Creates a series from optional observations.
    pub fn new(values: Vec<Option<f64>>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.filter(|x| x.is_finite()))
            .collect();
        Self { values }
    }

    /// Creates a series of `len` absent positions.
    pub fn absent(len: usize) -> Self {
        Self {
            values: vec![None; len],
        }
    }

    /// Creates a series holding `value` at every one of `len` positions.
    pub fn filled(value: f64, len: usize) -> Self {
        Self::new(vec![Some(value); len])
    }

    /// Returns the number of positions, absent ones included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the series has no positions.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the observation at `index`, or `None` if it is absent or out of range.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }

    /// Returns the observations as a slice.
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Iterates over the observations in order.
    pub fn iter(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.values.iter().copied()
    }

    /// Iterates over the present observations only.
    pub fn valid(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().filter_map(|v| *v)
    }

    /// Returns the number of present observations.
    pub fn valid_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// Returns the index of the first present observation.
    pub fn first_valid_index(&self) -> Option<usize> {
        self.values.iter().position(|v| v.is_some())
    }

    /// Consumes the series and returns its observations.
    pub fn into_values(self) -> Vec<Option<f64>> {
        self.values
    }

    /// Returns a copy of the positions in `start..end`, clamped to the series length.
    pub fn slice(&self, start: usize, end: usize) -> Series {
        let end = end.min(self.len());
        let start = start.min(end);
        Series {
            values: self.values[start..end].to_vec(),
        }
    }

    /// Arithmetic mean of the present observations.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::ZeroDivisor`] if no observation is present.
    pub fn mean(&self) -> Result<f64, SeriesError> {
        let (sum, count) = self
            .valid()
            .fold((0.0, 0usize), |(sum, count), x| (sum + x, count + 1));
        if count == 0 {
            return Err(SeriesError::ZeroDivisor {
                statistic: "mean",
                valid: 0,
                min: 1,
            });
        }
        Ok(sum / count as f64)
    }

    /// Sample variance (N-1 denominator) of the present observations.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::ZeroDivisor`] if fewer than two observations are present.
    pub fn variance_sample(&self) -> Result<f64, SeriesError> {
        let valid = self.valid_count();
        if valid < 2 {
            return Err(SeriesError::ZeroDivisor {
                statistic: "variance_sample",
                valid,
                min: 2,
            });
        }
        let mean = self.mean()?;
        let ss: f64 = self.valid().map(|x| (x - mean) * (x - mean)).sum();
        Ok(ss / (valid - 1) as f64)
    }

    /// Elementwise sum of two same-length series.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::LengthMismatch`] if the lengths differ.
    pub fn try_add(&self, other: &Series) -> Result<Series, SeriesError> {
        self.zip_checked(other, |a, b| a + b)
    }

    /// Elementwise difference of two same-length series.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::LengthMismatch`] if the lengths differ.
    pub fn try_sub(&self, other: &Series) -> Result<Series, SeriesError> {
        self.zip_checked(other, |a, b| a - b)
    }

    /// Applies `f` to every present observation.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Series {
        Series::new(self.values.iter().map(|v| v.map(&f)).collect())
    }

    fn zip_checked(
        &self,
        other: &Series,
        op: impl Fn(f64, f64) -> f64,
    ) -> Result<Series, SeriesError> {
        if self.len() != other.len() {
            return Err(SeriesError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(zip_padded(self, other, op))
    }
}

/// Combines two series position by position; the shorter one is treated as
/// absent beyond its end.
fn zip_padded(a: &Series, b: &Series, op: impl Fn(f64, f64) -> f64) -> Series {
    let len = a.len().max(b.len());
    let values = (0..len)
        .map(|i| match (a.get(i), b.get(i)) {
            (Some(x), Some(y)) => Some(op(x, y)),
            _ => None,
        })
        .collect();
    Series::new(values)
}

impl Add for &Series {
    type Output = Series;

    /// Elementwise sum; positions past the shorter operand are absent.
    fn add(self, rhs: &Series) -> Series {
        zip_padded(self, rhs, |a, b| a + b)
    }
}

impl Sub for &Series {
    type Output = Series;

    /// Elementwise difference; positions past the shorter operand are absent.
    fn sub(self, rhs: &Series) -> Series {
        zip_padded(self, rhs, |a, b| a - b)
    }
}

impl From<Vec<f64>> for Series {
    fn from(values: Vec<f64>) -> Self {
        Series::new(values.into_iter().map(Some).collect())
    }
}

impl From<&[f64]> for Series {
    fn from(values: &[f64]) -> Self {
        Series::new(values.iter().copied().map(Some).collect())
    }
}

impl From<Vec<Option<f64>>> for Series {
    fn from(values: Vec<Option<f64>>) -> Self {
        Series::new(values)
    }
}

impl FromIterator<Option<f64>> for Series {
    fn from_iter<I: IntoIterator<Item = Option<f64>>>(iter: I) -> Self {
        Series::new(iter.into_iter().collect())
    }
}
