/// The closed set of operator kinds recognized in expression text.
///
/// Every kind carries static metadata: the literal patterns that spell it, how
/// many operands it takes on each side, and the precedence tier in which the
/// tree builder consumes it. `Number` is included so that leaves participate
/// in the same tier scheme as operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// `(`
    OpenGroup,
    /// `)`
    CloseGroup,
    /// `^` or `**`
    Power,
    /// `*`, `x` or `X`
    Multiply,
    /// `/`
    Divide,
    /// `+`
    Add,
    /// Binary `-`
    Subtract,
    /// Prefix `-`
    Negate,
    /// A numeric literal.
    Number,
}

/// How many operands an operator takes, and from where.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Arity {
    /// Takes no operands (numbers and the closing marker).
    Nullary,
    /// Takes one operand from its right (prefix negation).
    Prefix,
    /// Takes one operand on each side.
    Infix,
    /// Takes everything up to its matching closing marker.
    Enclosing,
}

impl Arity {
    /// Number of operands taken from the right.
    ///
    /// Enclosing operators report zero: their contents are scanned for a
    /// closing marker rather than taken as a single operand.
    #[must_use]
    pub const fn right(self) -> usize {
        match self {
            Self::Prefix | Self::Infix => 1,
            Self::Nullary | Self::Enclosing => 0,
        }
    }
}

/// Precedence tiers, tightest first. The tree builder makes one left-to-right
/// pass per tier.
pub const PRECEDENCE_TIERS: [&[OperatorKind]; 6] =
    [&[OperatorKind::Number],
     &[OperatorKind::OpenGroup, OperatorKind::CloseGroup],
     &[OperatorKind::Negate],
     &[OperatorKind::Power],
     &[OperatorKind::Multiply, OperatorKind::Divide],
     &[OperatorKind::Add, OperatorKind::Subtract]];

impl OperatorKind {
    /// Literal spellings of the operator in expression text.
    ///
    /// The first pattern is the canonical one used when serializing a tree.
    /// `Number` has no literal pattern; it claims the leftover text.
    ///
    /// # Example
    /// ```
    /// use exprtree::interpreter::operator::OperatorKind;
    ///
    /// assert_eq!(OperatorKind::Multiply.patterns(), &["*", "x", "X"]);
    /// assert_eq!(OperatorKind::Power.patterns()[0], "^");
    /// ```
    #[must_use]
    pub const fn patterns(self) -> &'static [&'static str] {
        match self {
            Self::OpenGroup => &["("],
            Self::CloseGroup => &[")"],
            Self::Power => &["^", "**"],
            Self::Multiply => &["*", "x", "X"],
            Self::Divide => &["/"],
            Self::Add => &["+"],
            Self::Subtract | Self::Negate => &["-"],
            Self::Number => &[],
        }
    }

    /// Operand layout of the operator.
    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Self::OpenGroup => Arity::Enclosing,
            Self::CloseGroup | Self::Number => Arity::Nullary,
            Self::Negate => Arity::Prefix,
            Self::Power | Self::Multiply | Self::Divide | Self::Add | Self::Subtract => Arity::Infix,
        }
    }

    /// Index of the precedence tier (into [`PRECEDENCE_TIERS`]) in which this
    /// kind is consumed. Lower binds tighter.
    ///
    /// # Example
    /// ```
    /// use exprtree::interpreter::operator::OperatorKind;
    ///
    /// assert!(OperatorKind::Power.tier() < OperatorKind::Multiply.tier());
    /// assert_eq!(OperatorKind::Multiply.tier(), OperatorKind::Divide.tier());
    /// ```
    #[must_use]
    pub const fn tier(self) -> usize {
        match self {
            Self::Number => 0,
            Self::OpenGroup | Self::CloseGroup => 1,
            Self::Negate => 2,
            Self::Power => 3,
            Self::Multiply | Self::Divide => 4,
            Self::Add | Self::Subtract => 5,
        }
    }

    /// Returns `true` if this operator still expects an operand on its right.
    ///
    /// A `Subtract` following such an operator is a prefix negation.
    #[must_use]
    pub const fn expects_right_operand(self) -> bool {
        self.arity().right() > 0
    }
}

impl std::fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.patterns().first() {
            Some(pattern) => write!(f, "{pattern}"),
            None => write!(f, "number"),
        }
    }
}
