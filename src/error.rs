use crate::interpreter::operator::OperatorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents every failure that can occur while tokenizing, building or
/// evaluating an expression.
///
/// Each variant carries just enough context to produce a precise message.
/// Errors are returned at the point of detection; there is no recovery.
pub enum EvalError {
    /// A text fragment matched no operator and is not a numeric literal.
    UnrecognizedToken {
        /// The offending fragment.
        token: String,
    },
    /// An opening parenthesis ran out of input before it was balanced.
    UnbalancedGrouping {
        /// Number of openings still waiting for a close when input ended.
        count: usize,
    },
    /// A closing parenthesis appeared without an opening one to match it.
    UnmatchedClosingGroup,
    /// An operator sits at the end of its scope with nothing to its right.
    MissingRightOperand {
        /// The operator that needed the operand.
        operator: OperatorKind,
    },
    /// A binary operator sits at the start of its scope with nothing to its
    /// left.
    MissingLeftOperand {
        /// The operator that needed the operand.
        operator: OperatorKind,
    },
    /// Parentheses were nested deeper than the tree builder accepts.
    NestingTooDeep {
        /// The deepest nesting accepted.
        limit: usize,
    },
    /// The tree building passes finished without a single well-formed root.
    IncompleteReduction,
    /// Division by zero, or zero raised to a negative power.
    DivisionByZero,
    /// Integer arithmetic overflowed.
    Overflow,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedToken { token } => {
                write!(f, "Error: Unknown operator or bad input: '{token}'.")
            },
            Self::UnbalancedGrouping { count } => {
                write!(f, "Error: {count} too many opening operators.")
            },
            Self::UnmatchedClosingGroup => {
                write!(f, "Error: Unmatched or out-of-order closing operator found.")
            },
            Self::MissingRightOperand { operator } => write!(f,
                                                             "Error: Operator '{operator}' at end of expression needs a right operand."),
            Self::MissingLeftOperand { operator } => write!(f,
                                                            "Error: Operator '{operator}' at start of expression needs a left operand."),
            Self::NestingTooDeep { limit } => {
                write!(f, "Error: Groups nested more than {limit} levels deep.")
            },
            Self::IncompleteReduction => {
                write!(f, "Error: Tree did not fully collapse. Invalid input.")
            },
            Self::DivisionByZero => write!(f, "Error: Division by zero."),
            Self::Overflow => {
                write!(f, "Error: Integer overflow while trying to compute result.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
