use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{
        evaluator::{binary::power::eval_pow, core::EvalResult},
        value::Number,
    },
};

/// Evaluates a binary arithmetic operation.
///
/// Two integers combine under checked integer arithmetic for `+`, `-` and
/// `*`. If either operand is real, both are promoted to real. Division is
/// always true division and yields a real, even for exact integer operands.
/// Exponentiation is delegated to [`eval_pow`].
///
/// # Errors
/// - `DivisionByZero` if the divisor is zero.
/// - `Overflow` if integer arithmetic overflows.
///
/// # Example
/// ```
/// use exprtree::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::scalar::eval_scalar_op, value::Number},
/// };
///
/// let x = Number::Integer(4);
/// let y = Number::Integer(2);
///
/// assert_eq!(eval_scalar_op(BinaryOperator::Mul, x, y).unwrap(), Number::Integer(8));
/// assert_eq!(eval_scalar_op(BinaryOperator::Div, x, y).unwrap(), Number::Real(2.0));
/// ```
pub fn eval_scalar_op(op: BinaryOperator, left: Number, right: Number) -> EvalResult<Number> {
    use BinaryOperator::{Add, Div, Mul, Pow, Sub};
    use Number::{Integer, Real};

    match op {
        Pow => return eval_pow(left, right),
        Div => {
            if right.is_zero() {
                return Err(EvalError::DivisionByZero);
            }
            return Ok(Real(left.as_real() / right.as_real()));
        },
        Add | Sub | Mul => {},
    }

    if let (Integer(a), Integer(b)) = (left, right) {
        let result = match op {
            Add => a.checked_add(b),
            Sub => a.checked_sub(b),
            _ => a.checked_mul(b),
        };
        return result.map(Integer).ok_or(EvalError::Overflow);
    }

    let (a, b) = (left.as_real(), right.as_real());
    Ok(Real(match op {
                Add => a + b,
                Sub => a - b,
                _ => a * b,
            }))
}
