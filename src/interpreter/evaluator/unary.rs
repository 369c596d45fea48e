use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::Number},
};

/// Evaluates prefix negation.
///
/// Negation keeps the operand's type: integers stay integers and reals stay
/// reals.
///
/// # Errors
/// Returns `Overflow` when negating `i64::MIN`.
///
/// # Example
/// ```
/// use exprtree::interpreter::{evaluator::unary::eval_negate, value::Number};
///
/// assert_eq!(eval_negate(Number::Integer(5)).unwrap(), Number::Integer(-5));
/// assert_eq!(eval_negate(Number::Real(0.5)).unwrap(), Number::Real(-0.5));
/// ```
pub fn eval_negate(value: Number) -> EvalResult<Number> {
    match value {
        Number::Integer(n) => n.checked_neg()
                               .map(Number::Integer)
                               .ok_or(EvalError::Overflow),
        Number::Real(r) => Ok(Number::Real(-r)),
    }
}
