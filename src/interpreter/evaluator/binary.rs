/// Integer exponentiation with checked overflow, and real powers.
pub mod power;
/// Addition, subtraction, multiplication and division.
pub mod scalar;
