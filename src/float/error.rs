use core::fmt;

/// The two error conditions the arithmetic core can raise. Everything else
/// that could go wrong saturates instead: overflow to ±∞, underflow to
/// zero, and parse trouble to a silently truncated scan.
#[derive(Clone, Copy)]
#[derive(Debug, PartialEq, Eq)]
pub enum ArithmeticError {
  /// [`div`](super::Float::div) was handed a zero divisor.
  DivideByZero,
  /// [`sqrt`](super::Float::sqrt) was handed a negative number.
  SqrtOfNegative,
}

impl fmt::Display for ArithmeticError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::DivideByZero => f.write_str("division by zero"),
      Self::SqrtOfNegative => f.write_str("square root of a negative number"),
    }
  }
}

impl core::error::Error for ArithmeticError {}
