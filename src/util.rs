/// Numeric conversion helpers.
///
/// This module provides the conversions between `i64`, `u32` and `f64` used
/// when classifying literals and when promoting operands. Conversions that can
/// fail return an `Option` or an `EvalResult` instead of silently truncating.
pub mod num;
