//! Rate and average helpers. Every division whose denominator can
//! legitimately be zero (empty store, empty filter scope) goes through here
//! and yields `None`, which serializes as JSON null. NaN and Infinity never
//! reach the wire.

/// Percentage of `part` in `total`, e.g. win rate out of games played.
pub fn pct(part: i64, total: i64) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some(part as f64 / total as f64 * 100.0)
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pct_guards_zero_denominator() {
        assert_eq!(pct(3, 0), None);
        assert_eq!(pct(3, 4), Some(75.0));
        assert_eq!(pct(0, 4), Some(0.0));
    }

    #[test]
    fn rounding_is_decimal_not_truncation() {
        assert_eq!(round1(66.666), 66.7);
        assert_eq!(round2(10.625), 10.63);
        assert_eq!(round1(100.0), 100.0);
    }
}
