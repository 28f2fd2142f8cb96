//! Decimal rounding shared by every formula.
//!
//! All public results are rounded here so that 2- and 3-place outputs behave
//! the same way everywhere: half away from zero, applied to the decimal value
//! the arithmetic was meant to produce rather than its binary approximation.

/// Fractional digits the scaled value is snapped to before the final rounding.
/// Large enough to keep real precision, small enough to absorb f64 noise
/// such as `1181.7499999999998`.
const SNAP_DIGITS: i32 = 6;

/// Round `value` to `places` decimal places, half away from zero.
///
/// Non-finite input rounds to `0.0`, and a negative zero result is returned
/// as positive zero.
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }

    let factor = 10f64.powi(places as i32);
    let snap = 10f64.powi(SNAP_DIGITS);

    let scaled = value * factor;
    if !(scaled * snap).is_finite() {
        // Far beyond f64's fractional precision; already "rounded".
        return value;
    }

    let snapped = (scaled * snap).round() / snap;
    let rounded = snapped.round() / factor;

    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Round to 2 decimal places (currency, experience, damage).
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Round to 3 decimal places (probabilities).
pub fn round3(value: f64) -> f64 {
    round_to(value, 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_basic() {
        assert_eq!(round2(9.0), 9.0);
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(1.236), 1.24);
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round_to(2.5, 0), 3.0);
    }

    #[test]
    fn test_binary_artifacts_resolve_upward() {
        // 47.27 * 0.25 is stored as 11.8175 or a hair below it
        assert_eq!(round2(47.27 * 0.25), 11.82);
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(round2(1.005), 1.01);
    }

    #[test]
    fn test_round3() {
        assert_eq!(round3(0.3 + 5.0 / 60.0 + 10.0 / 200.0), 0.433);
        assert_eq!(round3(0.05 + 100.0 / 400.0), 0.3);
    }

    #[test]
    fn test_non_finite_rounds_to_zero() {
        assert_eq!(round2(f64::NAN), 0.0);
        assert_eq!(round2(f64::INFINITY), 0.0);
        assert_eq!(round3(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_huge_values_pass_through() {
        assert_eq!(round2(f64::MAX), f64::MAX);
        assert_eq!(round3(-1e305), -1e305);
    }

    #[test]
    fn test_negative_zero_normalised() {
        let r = round2(-0.001);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }
}
