use logos::Logos;

use crate::{
    error::EvalError,
    interpreter::{operator::OperatorKind, parser::core::ParseResult, value::Number},
    util::num::f64_to_i64_exact,
};

/// Raw output of the operator recognizers.
///
/// Each operator variant lists every literal spelling it accepts; `**` wins
/// over `*` by being the longer match. Whatever no operator claims is gathered
/// into maximal `Fragment` runs, which the number pass later validates.
#[derive(Logos, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Lexeme {
    /// `(`
    #[token("(")]
    OpenGroup,
    /// `)`
    #[token(")")]
    CloseGroup,
    /// `^` or `**`
    #[token("^")]
    #[token("**")]
    Power,
    /// `*`, `x` or `X`
    #[token("*")]
    #[token("x")]
    #[token("X")]
    Multiply,
    /// `/`
    #[token("/")]
    Divide,
    /// `+`
    #[token("+")]
    Add,
    /// `-`
    #[token("-")]
    Subtract,
    /// Any run of characters that is not an operator.
    #[regex(r"[^()\^*xX/+\-]+")]
    Fragment,
}

impl Lexeme {
    /// The operator kind recognized, or `None` for a plain text fragment.
    #[must_use]
    pub const fn kind(self) -> Option<OperatorKind> {
        match self {
            Self::OpenGroup => Some(OperatorKind::OpenGroup),
            Self::CloseGroup => Some(OperatorKind::CloseGroup),
            Self::Power => Some(OperatorKind::Power),
            Self::Multiply => Some(OperatorKind::Multiply),
            Self::Divide => Some(OperatorKind::Divide),
            Self::Add => Some(OperatorKind::Add),
            Self::Subtract => Some(OperatorKind::Subtract),
            Self::Fragment => None,
        }
    }
}

/// Decimal literal accepted by the number pass: digits with at most one
/// decimal point. Signs, exponents and named values are not literals.
#[derive(Logos, Debug, Copy, Clone, PartialEq, Eq)]
enum Literal {
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    #[regex(r"\.[0-9]+")]
    Decimal,
}

/// An element of the token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Text not yet claimed by any recognizer.
    Text(String),
    /// An operator marker with blank operands.
    Operator(OperatorKind),
    /// A numeric literal.
    Number(Number),
}

/// The ordered sequence handed from the tokenizer to the tree builder.
pub type TokenStream = Vec<Token>;

/// Stream elements that the negation pass can inspect and rewrite.
///
/// Implemented by tokens and by the tree builder's intermediate elements, so
/// that the same pass runs on the top-level stream and on every group's
/// contents.
pub trait Marker: Sized {
    /// The operator kind of the element, or `None` for plain text.
    fn marker_kind(&self) -> Option<OperatorKind>;
    /// Rewrites a `Subtract` marker into a `Negate` marker.
    #[must_use]
    fn into_negate(self) -> Self;
}

impl Marker for Token {
    fn marker_kind(&self) -> Option<OperatorKind> {
        match self {
            Self::Text(_) => None,
            Self::Operator(kind) => Some(*kind),
            Self::Number(_) => Some(OperatorKind::Number),
        }
    }

    fn into_negate(self) -> Self {
        Self::Operator(OperatorKind::Negate)
    }
}

/// Converts whitespace-free text into a token stream.
///
/// Operators are split out first, then `-` markers that cannot be binary are
/// reclassified as negations, then every remaining fragment must parse as a
/// number.
///
/// Whitespace is not stripped here. Callers pass text already cleaned by
/// [`crate::strip_whitespace`]; a space left in place becomes part of a
/// fragment and is rejected with it.
///
/// # Errors
/// Returns `EvalError::UnrecognizedToken` for a fragment that is neither an
/// operator nor a decimal literal, including one that contains whitespace.
///
/// # Example
/// ```
/// use exprtree::interpreter::{
///     lexer::{Token, tokenize},
///     operator::OperatorKind,
///     value::Number,
/// };
///
/// let tokens = tokenize("3*-2").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(Number::Integer(3)),
///                 Token::Operator(OperatorKind::Multiply),
///                 Token::Operator(OperatorKind::Negate),
///                 Token::Number(Number::Integer(2))]);
/// ```
pub fn tokenize(text: &str) -> ParseResult<TokenStream> {
    let recognized = recognize_operators(text)?;
    parse_numbers(reclassify_negation(recognized))
}

/// Splits every operator out of `text`, leaving the rest as text fragments.
///
/// # Errors
/// Returns `EvalError::UnrecognizedToken` if the lexer rejects a slice.
pub fn recognize_operators(text: &str) -> ParseResult<TokenStream> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(text);

    while let Some(lexeme) = lexer.next() {
        match lexeme.map(Lexeme::kind) {
            Ok(Some(kind)) => tokens.push(Token::Operator(kind)),
            Ok(None) => tokens.push(Token::Text(lexer.slice().to_string())),
            Err(()) => {
                return Err(EvalError::UnrecognizedToken { token: lexer.slice().to_string() });
            },
        }
    }

    Ok(tokens)
}

/// Rewrites `Subtract` markers that act as prefix minus into `Negate`.
///
/// A `-` is a negation when it opens the stream or when the element before it
/// is an operator still waiting for a right operand. Numbers, text and
/// grouping markers take nothing on their right, so a `-` after them stays
/// binary.
///
/// # Example
/// ```
/// use exprtree::interpreter::{
///     lexer::{Token, reclassify_negation},
///     operator::OperatorKind,
/// };
///
/// let stream = vec![Token::Text("3".to_string()),
///                   Token::Operator(OperatorKind::Subtract),
///                   Token::Operator(OperatorKind::Subtract),
///                   Token::Text("2".to_string())];
///
/// let stream = reclassify_negation(stream);
/// assert_eq!(stream[1], Token::Operator(OperatorKind::Subtract));
/// assert_eq!(stream[2], Token::Operator(OperatorKind::Negate));
/// ```
pub fn reclassify_negation<T: Marker>(stream: Vec<T>) -> Vec<T> {
    let mut previous: Option<Option<OperatorKind>> = None;

    stream.into_iter()
          .map(|item| {
              let kind = item.marker_kind();
              let prefix = previous.is_none_or(|before| {
                                        before.is_some_and(OperatorKind::expects_right_operand)
                                    });
              previous = Some(kind);

              if kind == Some(OperatorKind::Subtract) && prefix {
                  item.into_negate()
              } else {
                  item
              }
          })
          .collect()
}

/// Converts every remaining text fragment into a number.
///
/// # Errors
/// Returns `EvalError::UnrecognizedToken` for the first fragment that is not a
/// decimal literal.
pub fn parse_numbers(stream: TokenStream) -> ParseResult<TokenStream> {
    stream.into_iter()
          .map(|token| match token {
              Token::Text(text) => parse_number(&text).map(Token::Number),
              other => Ok(other),
          })
          .collect()
}

/// Parses one decimal literal.
///
/// Values that are exact integers within `i64` range are stored as integers,
/// so `2.0` becomes `Integer(2)`; everything else is stored as a real.
///
/// # Errors
/// Returns `EvalError::UnrecognizedToken` if `text` is not entirely a decimal
/// literal.
///
/// # Example
/// ```
/// use exprtree::interpreter::{lexer::parse_number, value::Number};
///
/// assert_eq!(parse_number("12345").unwrap(), Number::Integer(12345));
/// assert_eq!(parse_number("2.0").unwrap(), Number::Integer(2));
/// assert_eq!(parse_number("0.0001").unwrap(), Number::Real(0.0001));
/// assert!(parse_number("1e5").is_err());
/// ```
pub fn parse_number(text: &str) -> ParseResult<Number> {
    let unrecognized = || EvalError::UnrecognizedToken { token: text.to_string() };

    let mut lexer = Literal::lexer(text);
    let whole = matches!(lexer.next(), Some(Ok(Literal::Decimal)))
                && lexer.span() == (0..text.len())
                && lexer.next().is_none();
    if !whole {
        return Err(unrecognized());
    }

    let value: f64 = text.parse().map_err(|_| unrecognized())?;

    Ok(f64_to_i64_exact(value).map_or(Number::Real(value), Number::Integer))
}
