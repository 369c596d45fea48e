use crate::{
    ast::{BinaryOperator, Expr},
    error::EvalError,
    interpreter::{
        lexer::{Marker, Token, TokenStream},
        operator::{OperatorKind, PRECEDENCE_TIERS},
        parser::group::consume_group,
    },
};

pub type ParseResult<T> = Result<T, EvalError>;

/// An element of the stream while the tree is being built.
///
/// Operators start out `Blank` and become finished trees when their tier
/// consumes their operands. A blank operator can itself be swallowed as an
/// operand before its own tier runs (the `+` in `1+*4`); the consuming
/// operator is then `Stranded` and can never become a valid [`Expr`], though
/// it still occupies its place in the stream for the remaining passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// An operator whose operands have not been consumed.
    Blank(OperatorKind),
    /// A finished subtree.
    Tree(Expr),
    /// A consumed operator with a blank operator among its operands.
    Stranded(OperatorKind),
}

impl Marker for Slot {
    fn marker_kind(&self) -> Option<OperatorKind> {
        Some(match self {
                 Self::Blank(kind) | Self::Stranded(kind) => *kind,
                 Self::Tree(expr) => expr.kind(),
             })
    }

    fn into_negate(self) -> Self {
        match self {
            Self::Blank(OperatorKind::Subtract) => Self::Blank(OperatorKind::Negate),
            other => other,
        }
    }
}

impl TryFrom<Token> for Slot {
    type Error = EvalError;

    fn try_from(token: Token) -> ParseResult<Self> {
        match token {
            Token::Operator(kind) => Ok(Self::Blank(kind)),
            Token::Number(value) => Ok(Self::Tree(Expr::Number(value))),
            Token::Text(token) => Err(EvalError::UnrecognizedToken { token }),
        }
    }
}

impl Slot {
    /// Returns the finished subtree, or `None` for a blank or stranded
    /// operator.
    #[must_use]
    pub fn into_tree(self) -> Option<Expr> {
        match self {
            Self::Tree(expr) => Some(expr),
            Self::Blank(_) | Self::Stranded(_) => None,
        }
    }
}

/// Folds a token stream into a single expression tree.
///
/// The stream is reduced once per precedence tier, tightest first: numbers,
/// groups, negation, power, multiply/divide, add/subtract. Within a tier,
/// operators are consumed left to right, so operators of equal precedence
/// associate to the left.
///
/// # Errors
/// - `UnbalancedGrouping` / `UnmatchedClosingGroup` for mismatched parentheses.
/// - `MissingRightOperand` / `MissingLeftOperand` for dangling operators.
/// - `IncompleteReduction` if the stream does not collapse to one well-formed
///   root.
///
/// # Example
/// ```
/// use exprtree::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize, parser::core::build_tree},
/// };
///
/// let tree = build_tree(tokenize("1+2*3").unwrap()).unwrap();
/// assert_eq!(tree,
///            Expr::binary(BinaryOperator::Add,
///                         Expr::from(1),
///                         Expr::binary(BinaryOperator::Mul, Expr::from(2), Expr::from(3))));
/// ```
pub fn build_tree(stream: TokenStream) -> ParseResult<Expr> {
    let slots = stream.into_iter()
                      .map(Slot::try_from)
                      .collect::<ParseResult<Vec<_>>>()?;

    reduce(slots, 0)?.into_tree().ok_or(EvalError::IncompleteReduction)
}

/// Runs every precedence tier over `stream` and returns the single remaining
/// slot. `depth` counts the groups enclosing `stream`.
///
/// # Errors
/// Propagates consumption errors, and returns `IncompleteReduction` if more or
/// fewer than one slot is left.
pub fn reduce(mut stream: Vec<Slot>, depth: usize) -> ParseResult<Slot> {
    for tier in PRECEDENCE_TIERS {
        stream = reduce_tier(stream, tier, depth)?;
    }

    let mut remaining = stream.into_iter();
    match (remaining.next(), remaining.next()) {
        (Some(root), None) => Ok(root),
        _ => Err(EvalError::IncompleteReduction),
    }
}

/// Makes one left-to-right pass, consuming operands for every blank operator
/// in `tier`.
///
/// Slots already passed sit in `reduced`, so a left operand is the last
/// element pushed there and a right operand is the next one pulled from
/// `rest`.
fn reduce_tier(stream: Vec<Slot>, tier: &[OperatorKind], depth: usize) -> ParseResult<Vec<Slot>> {
    let mut reduced = Vec::with_capacity(stream.len());
    let mut rest = stream.into_iter();

    while let Some(slot) = rest.next() {
        match slot {
            Slot::Blank(kind) if tier.contains(&kind) => {
                let node = consume(kind, &mut reduced, &mut rest, depth)?;
                reduced.push(node);
            },
            other => reduced.push(other),
        }
    }

    Ok(reduced)
}

/// Consumes the operands of a blank operator.
///
/// The right operand is taken before the left one, so a dangling binary
/// operator at the very start of a one-element scope reports its missing right
/// operand first.
fn consume<I>(kind: OperatorKind,
              reduced: &mut Vec<Slot>,
              rest: &mut I,
              depth: usize)
              -> ParseResult<Slot>
    where I: Iterator<Item = Slot>
{
    if let Some(op) = BinaryOperator::from_kind(kind) {
        let right = rest.next()
                        .ok_or(EvalError::MissingRightOperand { operator: kind })?;
        let left = reduced.pop()
                          .ok_or(EvalError::MissingLeftOperand { operator: kind })?;

        return Ok(match (left.into_tree(), right.into_tree()) {
                      (Some(left), Some(right)) => Slot::Tree(Expr::binary(op, left, right)),
                      _ => Slot::Stranded(kind),
                  });
    }

    match kind {
        OperatorKind::OpenGroup => consume_group(rest, depth + 1),
        OperatorKind::CloseGroup => Err(EvalError::UnmatchedClosingGroup),
        OperatorKind::Negate => {
            let operand = rest.next()
                              .ok_or(EvalError::MissingRightOperand { operator: kind })?;
            Ok(operand.into_tree()
                      .map_or(Slot::Stranded(kind), |operand| Slot::Tree(Expr::negate(operand))))
        },
        _ => Ok(Slot::Blank(kind)),
    }
}
