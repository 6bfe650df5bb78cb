use super::*;

impl Float {
  /// A fresh zero.
  pub fn new() -> Self {
    Self::ZERO
  }

  /// The value of a 16-bit integer, exactly.
  pub fn from_int(i: i16) -> Self {
    let mut f = Self::ZERO;
    f.set_int(i);
    f
  }

  /// Assemble a value from its raw `(msw, lsw, exp)` triple. The result is
  /// normalized, so any triple is accepted; a zero significand yields
  /// [`ZERO`](Self::ZERO) regardless of the exponent given.
  pub fn from_parts(msw: i16, lsw: i16, exp: i16) -> Self {
    let mut f = Self { mant: Mantissa { msw, lsw }, exp };
    f.normalize();
    f
  }

  /// The raw `(msw, lsw, exp)` triple.
  pub fn into_parts(self) -> (i16, i16, i16) {
    (self.mant.msw, self.mant.lsw, self.exp)
  }

  /// Copy-assign from another value.
  pub fn set(&mut self, rhs: &Float) -> &mut Self {
    *self = *rhs;
    self
  }

  /// Load a 16-bit integer value. At exponent 30 the significand *is* the
  /// integer; normalization does the rest.
  pub fn set_int(&mut self, i: i16) -> &mut Self {
    self.mant = Mantissa::from_int(i);
    self.exp = 30;
    self.normalize();
    self
  }
}

impl Default for Float {
  fn default() -> Self {
    Self::ZERO
  }
}
