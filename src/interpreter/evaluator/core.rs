use crate::{
    ast::{Expr, Fold},
    error::EvalError,
    interpreter::{
        evaluator::{binary::scalar::eval_scalar_op, unary::eval_negate},
        value::Number,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression tree and returns its value.
///
/// The traversal is postorder: the children of a node are evaluated before
/// its own rule is applied. A group passes its child's value through
/// unchanged. The tree is only borrowed, so it can be evaluated any number of
/// times, and is walked with an explicit stack, so its depth is not limited by
/// the call stack.
///
/// # Errors
/// Returns `DivisionByZero` or `Overflow` if an arithmetic rule fails.
///
/// # Example
/// ```
/// use exprtree::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{evaluator::core::apply, value::Number},
/// };
///
/// let tree = Expr::binary(BinaryOperator::Mul,
///                         Expr::group(Expr::binary(BinaryOperator::Add,
///                                                  Expr::from(1),
///                                                  Expr::from(2))),
///                         Expr::from(3));
///
/// assert_eq!(apply(&tree).unwrap(), Number::Integer(9));
/// ```
pub fn apply(expr: &Expr) -> EvalResult<Number> {
    expr.try_fold(|node| match node {
            Fold::Number(value) | Fold::Group(value) => Ok(value),
            Fold::Negate(value) => eval_negate(value),
            Fold::Binary { op, left, right } => eval_scalar_op(op, left, right),
        })
}
