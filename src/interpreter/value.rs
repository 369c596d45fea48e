use std::hash::{Hash, Hasher};

use ordered_float::OrderedFloat;

use crate::util::num::i64_to_f64;

/// A numeric value: either an exact integer or a real number.
///
/// The distinction is observable. `4/2` evaluates to `Real(2.0)`, while `2*1`
/// evaluates to `Integer(2)`, and the two compare unequal.
///
/// Equality and hashing treat reals by their bit-level total order (through
/// [`OrderedFloat`]), so `Number` is `Eq` and can sit inside hashed trees.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit floating-point number.
    Real(f64),
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Real(a), Self::Real(b)) => OrderedFloat(*a) == OrderedFloat(*b),
            _ => false,
        }
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Integer(i) => {
                state.write_u8(0);
                i.hash(state);
            },
            Self::Real(r) => {
                state.write_u8(1);
                OrderedFloat(*r).hash(state);
            },
        }
    }
}

impl Number {
    /// Returns the value as an `f64`, promoting integers.
    ///
    /// # Example
    /// ```
    /// use exprtree::interpreter::value::Number;
    ///
    /// assert_eq!(Number::Integer(10).as_real(), 10.0);
    /// assert_eq!(Number::Real(0.5).as_real(), 0.5);
    /// ```
    #[must_use]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64(n),
            Self::Real(r) => r,
        }
    }

    /// Returns `true` if the value is numerically zero, whatever its type.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r == 0.0,
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) if r.is_finite() && r.fract() == 0.0 => write!(f, "{r:.1}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}
