//! Coercion into 32-bit signed integers
//!
//! Seeds and sampling bounds are 32-bit signed integers. Callers that hold
//! other numeric types are coerced rather than rejected: values are
//! truncated toward zero and wrapped modulo 2³² with two's-complement
//! reinterpretation. Non-finite values become zero.

/// 2³² as an exact `f64`.
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Coerces a floating-point value into an `i32`.
///
/// - the fractional part is dropped (`3.7 → 3`, `-3.7 → -3`)
/// - out-of-range values wrap modulo 2³² (`4294967301.0 → 5`)
/// - `NaN` and infinities become `0`
pub fn to_int32(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }

    value.trunc().rem_euclid(TWO_POW_32) as u32 as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_toward_zero() {
        assert_eq!(to_int32(3.7), 3);
        assert_eq!(to_int32(-3.7), -3);
        assert_eq!(to_int32(-0.5), 0);
    }

    #[test]
    fn wraps_out_of_range_values() {
        assert_eq!(to_int32(4_294_967_301.0), 5);
        assert_eq!(to_int32(2_147_483_648.0), i32::MIN);
        assert_eq!(to_int32(-2_147_483_649.0), i32::MAX);
    }

    #[test]
    fn non_finite_is_zero() {
        assert_eq!(to_int32(f64::NAN), 0);
        assert_eq!(to_int32(f64::INFINITY), 0);
        assert_eq!(to_int32(f64::NEG_INFINITY), 0);
    }
}
