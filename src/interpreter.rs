/// The evaluator module reduces an expression tree to a number.
///
/// The evaluator walks the tree in postorder, applying each operator's rule
/// once its operands are known, and keeps integer and real results apart.
///
/// # Responsibilities
/// - Evaluates every node kind: literals, negation, binary operators, groups.
/// - Applies integer/real promotion and true division.
/// - Reports arithmetic failures such as division by zero or overflow.
pub mod evaluator;
/// The lexer module turns expression text into a token stream.
///
/// Operators are recognized by a `logos` lexer, prefix minus is told apart
/// from binary minus by a separate pass, and every leftover fragment must be a
/// decimal literal.
///
/// # Responsibilities
/// - Recognizes every operator spelling (`^`/`**`, `*`/`x`/`X`, ...).
/// - Reclassifies `-` as negation where no left operand can exist.
/// - Converts literals to integer or real numbers, rejecting anything else.
pub mod lexer;
/// The operator module describes every operator kind.
///
/// Each kind carries its literal spellings, its operand layout and its
/// precedence tier. The tables here are constant and shared by the lexer and
/// the tree builder.
pub mod operator;
/// The parser module folds a token stream into an expression tree.
///
/// Instead of recursive descent, the stream is reduced once per precedence
/// tier, tightest first, with each operator consuming the operands directly
/// beside it.
///
/// # Responsibilities
/// - Consumes groups, negations and binary operators tier by tier.
/// - Validates parenthesis balance and operand presence.
/// - Guarantees that a successful result is a single well-formed tree.
pub mod parser;
/// The value module defines the numeric result type.
///
/// `Number` is either an exact integer or a real, and the distinction is kept
/// through evaluation.
pub mod value;
