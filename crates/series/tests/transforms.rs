//! Integration tests for lag and diff.

use lagstat_series::{Series, SeriesError, diff, lag};

#[test]
fn lag_preserves_length_for_every_k() {
    let s = Series::from(vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0]);
    for k in 0..10 {
        let lagged = lag(&s, k);
        assert_eq!(lagged.len(), s.len());
        assert_eq!(lagged.valid_count(), s.len().saturating_sub(k));
    }
}

#[test]
fn lag_then_subtract_matches_diff() {
    let s = Series::from(vec![2.0, 7.0, 1.0, 8.0, 2.0, 8.0]);
    let manual = s.try_sub(&lag(&s, 1)).unwrap();
    assert_eq!(diff(&s, 1), manual);
}

#[test]
fn diff_is_not_a_single_long_lag() {
    let s = Series::from(vec![1.0, 2.0, 4.0, 8.0, 16.0]);
    let iterated = diff(&s, 2);
    let long_lag = s.try_sub(&lag(&s, 2)).unwrap();
    assert_ne!(iterated, long_lag);
    assert_eq!(
        iterated.values(),
        &[None, None, Some(1.0), Some(2.0), Some(4.0)]
    );
}

#[test]
fn leading_absent_values_shift_with_lag() {
    let s = Series::new(vec![None, Some(1.0), Some(2.0)]);
    assert_eq!(lag(&s, 1).values(), &[None, None, Some(1.0)]);
}

#[test]
fn mismatched_subtraction_is_reported() {
    let a = Series::from(vec![1.0, 2.0, 3.0]);
    let b = Series::from(vec![1.0, 2.0]);
    assert!(matches!(
        a.try_sub(&b),
        Err(SeriesError::LengthMismatch { left: 3, right: 2 })
    ));
}
