use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::Number},
    util::num::{exponent_to_u32, i64_to_f64},
};

/// Evaluates an exponentiation.
///
/// Integer–integer exponentiation with a non-negative exponent stays an
/// integer and uses checked arithmetic. Negative integer exponents, and any
/// real operand, are computed in floating point with `powf`.
///
/// # Errors
/// - `DivisionByZero` if zero is raised to a negative power.
/// - `Overflow` if an integer power does not fit in an `i64`.
///
/// # Example
/// ```
/// use exprtree::interpreter::{evaluator::binary::power::eval_pow, value::Number};
///
/// assert_eq!(eval_pow(Number::Integer(2), Number::Integer(10)).unwrap(), Number::Integer(1024));
/// assert_eq!(eval_pow(Number::Integer(2), Number::Integer(-1)).unwrap(), Number::Real(0.5));
/// ```
pub fn eval_pow(base: Number, exponent: Number) -> EvalResult<Number> {
    if base.is_zero() && exponent.as_real() < 0.0 {
        return Err(EvalError::DivisionByZero);
    }

    match (base, exponent) {
        (Number::Integer(b), Number::Integer(e)) if e >= 0 => integer_pow(b, e),
        (Number::Integer(b), Number::Integer(e)) => {
            Ok(Number::Real(i64_to_f64(b).powf(i64_to_f64(e))))
        },
        _ => Ok(Number::Real(base.as_real().powf(exponent.as_real()))),
    }
}

/// Raises an integer to a non-negative integer power.
///
/// Exponents too large for `checked_pow` only succeed for the bases whose
/// powers stay bounded.
fn integer_pow(base: i64, exponent: i64) -> EvalResult<Number> {
    match exponent_to_u32(exponent) {
        Ok(e) => base.checked_pow(e)
                     .map(Number::Integer)
                     .ok_or(EvalError::Overflow),
        Err(overflow) => match base {
            0 | 1 => Ok(Number::Integer(base)),
            -1 => Ok(Number::Integer(if exponent % 2 == 0 { 1 } else { -1 })),
            _ => Err(overflow),
        },
    }
}
