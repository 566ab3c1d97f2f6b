/// Rounds to two decimal places, the precision every simulated field is kept at.
#[inline]
pub fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Min and max of a slice of finite values. Returns None for an empty slice.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let mut iter = values.iter().copied();
    let first = iter.next()?;
    Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}

/// Maps `value` from `[lo, hi]` into `[0, 1]`. A flat range maps to the middle.
pub fn normalize(value: f64, lo: f64, hi: f64) -> f64 {
    let span = hi - lo;
    if span.abs() <= f64::EPSILON {
        return 0.5;
    }
    (value - lo) / span
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_2dp(1.005_1), 1.01);
        assert_eq!(round_2dp(-2.344), -2.34);
        assert_eq!(round_2dp(63759.475_01), 63759.48);
    }

    #[test]
    fn min_max_of_sparkline() {
        assert_eq!(min_max(&[3.0, 1.0, 2.0]), Some((1.0, 3.0)));
        assert_eq!(min_max(&[]), None);
    }

    #[test]
    fn normalize_flat_range_is_centered() {
        assert_eq!(normalize(5.0, 5.0, 5.0), 0.5);
        assert_eq!(normalize(7.5, 5.0, 10.0), 0.5);
        assert_eq!(normalize(10.0, 5.0, 10.0), 1.0);
    }
}
