/// Core evaluation logic.
///
/// Contains the postorder traversal that reduces an expression tree to a
/// single number, and the result alias shared by all evaluation functions.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles addition, subtraction, multiplication, true division and
/// exponentiation, including integer/real promotion.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements prefix negation.
pub mod unary;
