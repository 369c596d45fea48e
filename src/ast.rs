use std::{
    convert::Infallible,
    hash::{Hash, Hasher},
};

use crate::interpreter::{operator::OperatorKind, value::Number};

/// Represents a binary operator.
///
/// These are the infix kinds of [`OperatorKind`]; each takes one operand on
/// either side.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Exponentiation (`^` or `**`)
    Pow,
    /// Multiplication (`*`, `x` or `X`)
    Mul,
    /// Division (`/`)
    Div,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
}

impl BinaryOperator {
    /// Maps an operator kind to its binary operator, if it is one.
    ///
    /// # Example
    /// ```
    /// use exprtree::{ast::BinaryOperator, interpreter::operator::OperatorKind};
    ///
    /// assert_eq!(BinaryOperator::from_kind(OperatorKind::Divide), Some(BinaryOperator::Div));
    /// assert_eq!(BinaryOperator::from_kind(OperatorKind::Negate), None);
    /// ```
    #[must_use]
    pub const fn from_kind(kind: OperatorKind) -> Option<Self> {
        match kind {
            OperatorKind::Power => Some(Self::Pow),
            OperatorKind::Multiply => Some(Self::Mul),
            OperatorKind::Divide => Some(Self::Div),
            OperatorKind::Add => Some(Self::Add),
            OperatorKind::Subtract => Some(Self::Sub),
            _ => None,
        }
    }

    /// The operator kind this binary operator was built from.
    #[must_use]
    pub const fn kind(self) -> OperatorKind {
        match self {
            Self::Pow => OperatorKind::Power,
            Self::Mul => OperatorKind::Multiply,
            Self::Div => OperatorKind::Divide,
            Self::Add => OperatorKind::Add,
            Self::Sub => OperatorKind::Subtract,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}

/// A node of the expression tree.
///
/// Every node exclusively owns its children, so a tree is a plain value. Two
/// trees are equal when their kinds and all of their children are recursively
/// equal.
///
/// Long operator chains nest as deeply as they are long, so walking the tree
/// (equality, hashing, cloning, display, evaluation and drop) uses an explicit
/// stack instead of the call stack. Only the derived `Debug` recurses.
#[derive(Debug)]
pub enum Expr {
    /// A numeric literal.
    Number(Number),
    /// Prefix negation (`-x`).
    Negate(Box<Self>),
    /// A binary operation.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// A parenthesized sub-expression.
    Group(Box<Self>),
}

/// One node handed to [`Expr::try_fold`], with its children already folded.
#[derive(Debug)]
pub enum Fold<T> {
    /// A numeric literal.
    Number(Number),
    /// A negation of the folded operand.
    Negate(T),
    /// A binary operation over the folded operands.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Folded left operand.
        left:  T,
        /// Folded right operand.
        right: T,
    },
    /// A group around the folded contents.
    Group(T),
}

/// A node without its children. A preorder sequence of shapes determines the
/// whole tree, since every kind has a fixed number of children.
#[derive(PartialEq, Eq, Hash)]
enum Shape {
    Number(Number),
    Negate,
    Binary(BinaryOperator),
    Group,
}

impl Expr {
    /// Builds a binary node.
    ///
    /// ## Example
    /// ```
    /// use exprtree::ast::{BinaryOperator, Expr};
    ///
    /// let sum = Expr::binary(BinaryOperator::Add, Expr::from(1), Expr::from(2));
    /// assert_eq!(sum.to_string(), "1+2");
    /// ```
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::Binary { op,
                       left: Box::new(left),
                       right: Box::new(right) }
    }

    /// Builds a negation node.
    #[must_use]
    pub fn negate(operand: Self) -> Self {
        Self::Negate(Box::new(operand))
    }

    /// Builds a group node.
    #[must_use]
    pub fn group(enclosed: Self) -> Self {
        Self::Group(Box::new(enclosed))
    }

    /// The operator kind of this node.
    #[must_use]
    pub const fn kind(&self) -> OperatorKind {
        match self {
            Self::Number(_) => OperatorKind::Number,
            Self::Negate(_) => OperatorKind::Negate,
            Self::Binary { op, .. } => op.kind(),
            Self::Group(_) => OperatorKind::OpenGroup,
        }
    }

    /// Number of nodes in the tree, this one included.
    #[must_use]
    pub fn size(&self) -> usize {
        self.nodes().count()
    }

    /// Iterates over the nodes of the tree in preorder: every node comes
    /// before its children, and a left operand before the right one.
    ///
    /// # Example
    /// ```
    /// use exprtree::{interpreter::operator::OperatorKind, parse};
    ///
    /// let tree = parse("1+-2").unwrap();
    /// let kinds: Vec<_> = tree.nodes().map(|node| node.kind()).collect();
    /// assert_eq!(kinds,
    ///            [OperatorKind::Add,
    ///             OperatorKind::Number,
    ///             OperatorKind::Negate,
    ///             OperatorKind::Number]);
    /// ```
    #[must_use]
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes { pending: vec![self] }
    }

    /// Folds the tree in postorder: `step` receives each node once the values
    /// of all its children are known, and the value returned for the root is
    /// the result. The first error returned by `step` stops the walk.
    ///
    /// # Errors
    /// Returns the first error produced by `step`.
    ///
    /// # Example
    /// ```
    /// use exprtree::{ast::Fold, parse};
    ///
    /// let tree = parse("(1+2)*-3").unwrap();
    /// let depth = tree.try_fold(|node: Fold<usize>| {
    ///                     Ok::<usize, ()>(match node {
    ///                         Fold::Number(_) => 1,
    ///                         Fold::Negate(inner) | Fold::Group(inner) => inner + 1,
    ///                         Fold::Binary { left, right, .. } => left.max(right) + 1,
    ///                     })
    ///                 });
    /// assert_eq!(depth, Ok(4));
    /// ```
    pub fn try_fold<T, E, F>(&self, mut step: F) -> Result<T, E>
        where F: FnMut(Fold<T>) -> Result<T, E>
    {
        enum Pending<'a, T> {
            Negate,
            Group,
            Right { op: BinaryOperator, right: &'a Expr },
            Left { op: BinaryOperator, left: T },
        }

        let mut pending = Vec::new();
        let mut node = self;

        loop {
            let mut value = loop {
                match node {
                    Self::Number(value) => break step(Fold::Number(*value))?,
                    Self::Negate(operand) => {
                        pending.push(Pending::Negate);
                        node = operand;
                    },
                    Self::Group(enclosed) => {
                        pending.push(Pending::Group);
                        node = enclosed;
                    },
                    Self::Binary { op, left, right } => {
                        pending.push(Pending::Right { op: *op, right });
                        node = left;
                    },
                }
            };

            loop {
                value = match pending.pop() {
                    None => return Ok(value),
                    Some(Pending::Negate) => step(Fold::Negate(value))?,
                    Some(Pending::Group) => step(Fold::Group(value))?,
                    Some(Pending::Left { op, left }) => {
                        step(Fold::Binary { op, left, right: value })?
                    },
                    Some(Pending::Right { op, right }) => {
                        pending.push(Pending::Left { op, left: value });
                        node = right;
                        break;
                    },
                };
            }
        }
    }

    const fn shape(&self) -> Shape {
        match self {
            Self::Number(value) => Shape::Number(*value),
            Self::Negate(_) => Shape::Negate,
            Self::Binary { op, .. } => Shape::Binary(*op),
            Self::Group(_) => Shape::Group,
        }
    }

    /// Moves every non-leaf child into `detached`, leaving a leaf behind.
    fn detach_children(&mut self, detached: &mut Vec<Self>) {
        let mut detach = |child: &mut Box<Self>| {
            if !matches!(**child, Self::Number(_)) {
                detached.push(std::mem::replace(&mut **child, Self::Number(Number::Integer(0))));
            }
        };

        match self {
            Self::Number(_) => {},
            Self::Negate(child) | Self::Group(child) => detach(child),
            Self::Binary { left, right, .. } => {
                detach(left);
                detach(right);
            },
        }
    }
}

/// Preorder iterator over the nodes of an [`Expr`].
pub struct Nodes<'a> {
    pending: Vec<&'a Expr>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        match node {
            Expr::Number(_) => {},
            Expr::Negate(child) | Expr::Group(child) => self.pending.push(child),
            Expr::Binary { left, right, .. } => {
                self.pending.push(right);
                self.pending.push(left);
            },
        }
        Some(node)
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        self.nodes().map(Self::shape).eq(other.nodes().map(Self::shape))
    }
}

impl Eq for Expr {}

impl Hash for Expr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for shape in self.nodes().map(Self::shape) {
            shape.hash(state);
        }
    }
}

impl Clone for Expr {
    fn clone(&self) -> Self {
        let Ok(copy) = self.try_fold(|node| {
                               Ok::<_, Infallible>(match node {
                                   Fold::Number(value) => Self::Number(value),
                                   Fold::Negate(operand) => Self::negate(operand),
                                   Fold::Binary { op, left, right } => Self::binary(op, left, right),
                                   Fold::Group(enclosed) => Self::group(enclosed),
                               })
                           });
        copy
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut detached = Vec::new();
        self.detach_children(&mut detached);
        while let Some(mut node) = detached.pop() {
            node.detach_children(&mut detached);
        }
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Number(Number::Integer(value))
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Number(Number::Real(value))
    }
}

/// Serializes the tree back to expression text.
///
/// Operators use their canonical spelling and parentheses appear only where
/// the tree has a group node. Since the tree builder only nests a looser
/// operator under a tighter one through a group, the text of a parsed tree
/// parses back to an equal tree.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        enum Piece<'a> {
            Node(&'a Expr),
            Operator(BinaryOperator),
            Close,
        }

        let mut pieces = vec![Piece::Node(self)];
        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Node(Self::Number(value)) => write!(f, "{value}")?,
                Piece::Node(Self::Negate(operand)) => {
                    f.write_str("-")?;
                    pieces.push(Piece::Node(operand));
                },
                Piece::Node(Self::Binary { op, left, right }) => {
                    pieces.push(Piece::Node(right));
                    pieces.push(Piece::Operator(*op));
                    pieces.push(Piece::Node(left));
                },
                Piece::Node(Self::Group(enclosed)) => {
                    f.write_str("(")?;
                    pieces.push(Piece::Close);
                    pieces.push(Piece::Node(enclosed));
                },
                Piece::Operator(op) => write!(f, "{op}")?,
                Piece::Close => f.write_str(")")?,
            }
        }

        Ok(())
    }
}
