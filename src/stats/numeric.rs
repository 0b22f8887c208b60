//! Rounding and median helpers shared by the statistics engine.
//!
//! `f64::round` rounds half away from zero, which is the policy for every
//! rounded output.

/// Median of `values`: the middle element of a sorted copy, the mean of the
/// two middle elements for an even length, or 0 for an empty sample.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Arithmetic mean, or 0 for an empty sample.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn round_to_integer(value: f64) -> i64 {
    value.round() as i64
}

pub fn floor_to_integer(value: f64) -> i64 {
    value.floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_of_empty_is_zero() {
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn median_odd_and_even() {
        assert_eq!(median(&[30.0, 10.0, 20.0]), 20.0);
        assert_eq!(median(&[40.0, 10.0, 30.0, 20.0]), 25.0);
        assert_eq!(median(&[7.0]), 7.0);
    }

    #[test]
    fn median_leaves_input_untouched() {
        let values = [3.0, 1.0, 2.0];
        median(&values);
        assert_eq!(values, [3.0, 1.0, 2.0]);
    }

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[10.0, 30.0]), 20.0);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round_to_integer(2.5), 3);
        assert_eq!(round_to_integer(-2.5), -3);
        assert_eq!(round_to_integer(24.4), 24);
        assert_eq!(round_one_decimal(27.25), 27.3);
        assert_eq!(round_one_decimal(27.24), 27.2);
        assert_eq!(round_one_decimal(-1.25), -1.3);
    }

    #[test]
    fn floor_truncates_toward_negative_infinity() {
        assert_eq!(floor_to_integer(34.999), 34);
        assert_eq!(floor_to_integer(-0.5), -1);
    }
}
