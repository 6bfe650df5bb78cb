use super::*;

impl Float {
  /// Re-establish canonical form. This is the only producer of canonical
  /// values; every arithmetic method ends with exactly one call to it on
  /// its receiver.
  ///
  /// A significand is in place when its top two bits differ, i.e. when its
  /// magnitude is in `[1.0, 2.0)`. Anything smaller is shifted left with
  /// the exponent tracking each shift; running out of exponent on the way
  /// down is an underflow and flushes to zero. Two special patterns get
  /// explicit treatment:
  ///
  ///   - `0xC000_0000` (exactly −1.0) has its top two bits equal yet is
  ///     canonical; shifting it would manufacture `0x8000_0000`.
  ///   - `0x8000_0000` itself cannot be negated, so it is rewritten as
  ///     `0xC000_0000` with the exponent bumped (or to −∞ when the
  ///     exponent is already at the ceiling). This is what keeps
  ///     `neg(neg(x)) == x` exact over the whole range.
  ///
  /// Finally the exponent is clamped: below [`MIN_EXP`](Self::MIN_EXP) the
  /// value flushes to zero, above [`MAX_EXP`](Self::MAX_EXP) it saturates
  /// to the infinity of its sign.
  pub(crate) fn normalize(&mut self) {
    if self.mant.is_zero() {
      self.exp = Self::MIN_EXP;
      return;
    }
    if self.mant != (Mantissa { msw: -0x4000, lsw: 0 }) {
      while self.mant.bit30() == self.mant.is_negative() {
        if self.exp == Self::MIN_EXP {
          *self = Self::ZERO;
          return;
        }
        self.mant.shl1();
        self.exp -= 1;
      }
      if self.mant.is_max_negative() {
        if self.exp == Self::MAX_EXP {
          *self = Self::NEG_INFINITY;
          return;
        }
        self.mant = Mantissa { msw: -0x4000, lsw: 0 };
        self.exp += 1;
      }
    }
    if self.exp < Self::MIN_EXP {
      *self = Self::ZERO;
    } else if self.exp > Self::MAX_EXP {
      *self = if self.mant.is_negative() { Self::NEG_INFINITY } else { Self::INFINITY };
    }
  }

  /// Shift the significand right so the value can carry the larger exponent
  /// `e`, and return the guard bit (the last bit shifted out). With `e` at
  /// or below the current exponent nothing moves and the guard is 0.
  pub(crate) fn denormalize(&mut self, e: i16) -> bool {
    if e <= self.exp {
      return false;
    }
    let guard = self.mant.sra((e - self.exp) as u32);
    self.exp = e;
    guard
  }
}
