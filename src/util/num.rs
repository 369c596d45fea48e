use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Smallest `f64` strictly above the `i64` range (`2^63`).
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Converts an `f64` to `i64` if and only if the value is finite, integral and
/// within range.
///
/// Used to decide whether a numeric literal is stored as an integer.
///
/// ## Example
/// ```
/// use exprtree::util::num::f64_to_i64_exact;
///
/// assert_eq!(f64_to_i64_exact(12.0), Some(12));
/// assert_eq!(f64_to_i64_exact(1.5), None);
/// assert_eq!(f64_to_i64_exact(1e30), None);
/// assert_eq!(f64_to_i64_exact(f64::NAN), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value < -I64_UPPER_BOUND || value >= I64_UPPER_BOUND {
        return None;
    }
    Some(value as i64)
}

/// Converts an `i64` to `f64` for mixed integer/real arithmetic.
///
/// Integers beyond `2^53` round to the nearest representable `f64`, which is
/// the usual promotion rule for mixed arithmetic.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts a non-negative `i64` exponent to `u32` for `checked_pow`.
///
/// ## Errors
/// Returns `EvalError::Overflow` if the exponent does not fit in a `u32`. Any
/// base other than `-1`, `0` or `1` overflows an `i64` long before that.
///
/// ## Example
/// ```
/// use exprtree::{error::EvalError, util::num::exponent_to_u32};
///
/// assert_eq!(exponent_to_u32(10).unwrap(), 10);
/// assert!(matches!(exponent_to_u32(i64::MAX), Err(EvalError::Overflow)));
/// ```
pub fn exponent_to_u32(value: i64) -> EvalResult<u32> {
    u32::try_from(value).map_err(|_| EvalError::Overflow)
}
