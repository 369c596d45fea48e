//! # exprtree
//!
//! exprtree evaluates arithmetic expressions given as text. It supports
//! integer and decimal literals, `+`, `-`, `*` (also spelled `x` or `X`), `/`,
//! `^` (also spelled `**`), parentheses and prefix minus, with the usual
//! precedence rules. Whitespace anywhere in the input is ignored.
//!
//! Evaluation is a three stage pipeline: the lexer turns text into tokens, the
//! parser folds the tokens into a tree one precedence tier at a time, and the
//! evaluator reduces the tree to a [`Number`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{evaluator::core::apply, lexer::tokenize, parser::core::build_tree},
};
pub use crate::interpreter::value::Number;

/// Defines the expression tree.
///
/// This module declares the `Expr` enum built by the parser and walked by the
/// evaluator, along with the binary operator type and the serialization of a
/// tree back to text.
///
/// # Responsibilities
/// - Defines node types for literals, negation, binary operations and groups.
/// - Provides structural equality and hashing of whole trees.
/// - Re-serializes trees to expression text.
pub mod ast;
/// Provides the error type shared by every stage.
///
/// This module defines `EvalError`, whose variants cover unrecognized input,
/// unbalanced parentheses, dangling operators, incomplete reductions and
/// arithmetic failures.
pub mod error;
/// Orchestrates lexing, tree building and evaluation.
///
/// This module ties together the operator table, the lexer, the tree builder,
/// the evaluator and the value type.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Removes every whitespace character from `text`.
///
/// # Example
/// ```
/// assert_eq!(exprtree::strip_whitespace(" 1 +\t2\n"), "1+2");
/// ```
#[must_use]
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Parses an expression into a tree without evaluating it.
///
/// Whitespace is removed first, then the text is tokenized and folded into a
/// single tree.
///
/// # Errors
/// Returns an error if the text contains an unknown token, unbalanced
/// parentheses, a dangling operator, or otherwise does not reduce to one tree.
///
/// # Examples
/// ```
/// use exprtree::{ast::Expr, parse};
///
/// let tree = parse("(1 + 2) * 3").unwrap();
/// assert_eq!(tree.to_string(), "(1+2)*3");
/// assert!(matches!(tree, Expr::Binary { .. }));
/// ```
pub fn parse(text: &str) -> Result<Expr, EvalError> {
    let stripped = strip_whitespace(text);
    build_tree(tokenize(&stripped)?)
}

/// Evaluates an arithmetic expression and returns its value.
///
/// The result is an integer when every step of the computation stays in
/// integer arithmetic, and a real otherwise. Any division produces a real.
///
/// # Errors
/// Returns an error if parsing fails (see [`parse`]) or if evaluation divides
/// by zero or overflows.
///
/// # Examples
/// ```
/// use exprtree::{Number, error::EvalError, evaluate};
///
/// assert_eq!(evaluate("(3 + 4) * 6").unwrap(), Number::Integer(42));
/// assert_eq!(evaluate("4/2").unwrap(), Number::Real(2.0));
/// assert_eq!(evaluate("3--2").unwrap(), Number::Integer(5));
///
/// assert_eq!(evaluate("((").unwrap_err(), EvalError::UnbalancedGrouping { count: 2 });
/// ```
pub fn evaluate(text: &str) -> Result<Number, EvalError> {
    apply(&parse(text)?)
}
