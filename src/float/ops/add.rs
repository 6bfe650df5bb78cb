use super::*;

impl Float {
  /// In-place addition.
  ///
  /// The operands are brought to a common exponent first: the one with the
  /// smaller exponent is denormalized up to the other's, and the guard bit
  /// that shift produces (the last bit to fall off) participates in the
  /// sum. `rhs` is copied before any of this, so its owner never observes
  /// the alignment shift.
  ///
  /// Two magnitudes with the same sign can overflow by exactly one place.
  /// For example, in Q1.30:
  ///
  /// ```text
  ///     1.25 = 0x5000_0000
  ///   + 1.0  = 0x4000_0000
  ///   = 2.25 = 0x9000_0000   ← the sign bit flipped
  /// ```
  ///
  /// The flip of the sign bit is the detector: halve the sum with a logical
  /// shift, put the sign back in the top bit, and bump the exponent to
  /// compensate (saturating to the infinity of that sign when the exponent
  /// is already at the ceiling). Opposite signs cannot overflow, since the
  /// aligned magnitudes are within a factor of two of each other.
  pub fn add(&mut self, rhs: &Float) -> &mut Self {
    let mut rhs = *rhs;

    // At most one of these can actually shift, and only that side can
    // yield a guard bit.
    let guard = self.denormalize(rhs.exp) | rhs.denormalize(self.exp);

    let same_sign = self.is_negative() == rhs.is_negative();
    let was_negative = self.is_negative();
    self.mant.add(rhs.mant);
    self.mant.add_int(i16::from(guard));
    if same_sign && self.is_negative() != was_negative {
      if self.exp == Self::MAX_EXP {
        *self = if was_negative { Self::NEG_INFINITY } else { Self::INFINITY };
        return self;
      }
      self.mant.shr1();
      if was_negative {
        self.mant.msw = (self.mant.msw as u16 | 0x8000) as i16;
      }
      self.exp += 1;
    }
    self.normalize();
    self
  }

  /// In-place subtraction, as negate-add-negate; this keeps subtraction an
  /// exact mirror of addition and costs nothing on zero.
  pub fn sub(&mut self, rhs: &Float) -> &mut Self {
    self.neg();
    self.add(rhs);
    self.neg()
  }

  /// Add a 16-bit integer.
  pub fn add_int(&mut self, rhs: i16) -> &mut Self {
    self.add(&Float::from_int(rhs))
  }

  /// Subtract a 16-bit integer.
  pub fn sub_int(&mut self, rhs: i16) -> &mut Self {
    self.sub(&Float::from_int(rhs))
  }
}

super::mk_ops! {Add, AddAssign, add, add_assign}
super::mk_ops! {Sub, SubAssign, sub, sub_assign}
