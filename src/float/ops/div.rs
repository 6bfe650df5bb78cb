use super::*;

use core::cmp::Ordering;

impl Float {
  /// In-place division.
  ///
  /// # Panics
  ///
  /// Panics when `rhs` is zero, like integer division does. Use
  /// [`checked_div`](Self::checked_div) for a fallible version.
  pub fn div(&mut self, rhs: &Float) -> &mut Self {
    if let Err(e) = self.checked_div(rhs) {
      panic!("{e}");
    }
    self
  }

  /// In-place division, returning [`ArithmeticError::DivideByZero`] on a
  /// zero divisor (the receiver is left untouched in that case).
  ///
  /// Signs are stripped and re-applied as in multiplication, and the
  /// exponents subtract. The magnitudes are both in `[1.0, 2.0)`, so their
  /// ratio is in `(0.5, 2.0)`; when the numerator is the (unsigned)
  /// smaller, one pre-shift doubles it — paid for by the exponent — and
  /// pins the ratio inside `[1.0, 2.0)`. From there, 31 steps of classic
  /// restoring long division develop quotient bits 30 down to 0:
  ///
  /// ```text
  ///   quotient <<= 1
  ///   if num ≥ den { num −= den; quotient |= 1 }
  ///   num <<= 1
  /// ```
  ///
  /// One more compare decides the rounding: if the doubled remainder still
  /// covers the divisor, the discarded tail was at least half a unit, and
  /// the quotient is bumped (with the same `0x4000_0000` reset as in
  /// multiplication if the bump overflows the sign).
  pub fn checked_div(&mut self, rhs: &Float) -> Result<&mut Self, ArithmeticError> {
    if rhs.is_zero() {
      return Err(ArithmeticError::DivideByZero);
    }
    let mut den = *rhs;
    let negative = self.is_negative() != den.is_negative();
    if self.is_negative() {
      self.mant.negate();
    }
    if den.is_negative() {
      den.mant.negate();
    }
    let mut exp = self.exp - den.exp;
    if self.mant.ucmp(&den.mant) == Ordering::Less {
      self.mant.shl1();
      exp -= 1;
    }
    let mut quotient = Mantissa::ZERO;
    for _ in 0..31 {
      quotient.shl1();
      if self.mant.ucmp(&den.mant) != Ordering::Less {
        self.mant.sub(den.mant);
        quotient.lsw |= 1;
      }
      self.mant.shl1();
    }
    if self.mant.ucmp(&den.mant) != Ordering::Less {
      quotient.add_int(1);
      if quotient.is_negative() {
        quotient = Mantissa::ONE;
        exp += 1;
      }
    }
    self.mant = quotient;
    if negative {
      self.mant.negate();
    }
    self.exp = exp;
    self.normalize();
    Ok(self)
  }

  /// Divide by a 16-bit integer.
  ///
  /// # Panics
  ///
  /// Panics when `rhs` is zero.
  pub fn div_int(&mut self, rhs: i16) -> &mut Self {
    self.div(&Float::from_int(rhs))
  }
}

super::mk_ops! {Div, DivAssign, div, div_assign}
