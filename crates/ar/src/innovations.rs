//! Innovation sources for AR estimation.

/// How the innovation term `eps[t]` of the AR recurrence is generated by
/// [`ArFit::estimate()`](crate::ArFit::estimate).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Innovations {
    /// `eps[t] = 0`: the estimate is the deterministic decay of the
    /// recurrence from the source's first observations.
    #[default]
    Zero,
    /// `eps[t] ~ N(0, sigma2)` drawn from a `StdRng` seeded with `seed`.
    Gaussian {
        /// RNG seed; equal seeds give equal estimates.
        seed: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        assert_eq!(Innovations::default(), Innovations::Zero);
    }
}
