use super::*;

impl Float {
  /// In-place square root.
  ///
  /// # Panics
  ///
  /// Panics on a negative receiver. Use
  /// [`checked_sqrt`](Self::checked_sqrt) for a fallible version.
  pub fn sqrt(&mut self) -> &mut Self {
    if let Err(e) = self.checked_sqrt() {
      panic!("{e}");
    }
    self
  }

  /// In-place square root, returning
  /// [`ArithmeticError::SqrtOfNegative`] on a negative receiver (which is
  /// left untouched in that case). The square root of zero is zero.
  ///
  /// Newton's iteration for `√n` is `x ← (x + n/x) / 2`. The initial guess
  /// is the input with its exponent halved — one arithmetic shift, good
  /// for a relative error under 50% — and each halving along the way is a
  /// plain exponent decrement. Convergence is quadratic, so six iterations
  /// take that sub-50% guess to full Q1.30 precision with margin.
  pub fn checked_sqrt(&mut self) -> Result<&mut Self, ArithmeticError> {
    if self.is_negative() {
      return Err(ArithmeticError::SqrtOfNegative);
    }
    if self.is_zero() {
      return Ok(self);
    }
    let n = *self;
    self.exp >>= 1;
    for _ in 0..6 {
      let mut t = n;
      t.div(self);
      self.add(&t);
      self.exp -= 1;
    }
    self.normalize();
    Ok(self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use malachite::rational::Rational;
  use proptest::prelude::*;

  use crate::float::rational::{ulp, within_ulps};

  #[test]
  fn sqrt_2() {
    let mut f = Float::from_int(2);
    f.sqrt();
    assert_eq!(f.to_decimal(5), "1.4142e+000");
  }

  #[test]
  fn perfect_squares() {
    for i in [1i16, 4, 9, 16, 25, 144, 1024, 32041] {
      let mut f = Float::from_int(i);
      f.sqrt();
      let exact = Rational::from(i.isqrt());
      assert!(within_ulps(&exact, &f, 1), "√{i} = {f:?}");
    }
  }

  #[test]
  fn sqrt_of_zero_is_zero() {
    let mut f = Float::ZERO;
    f.sqrt();
    assert_eq!(f, Float::ZERO);
  }

  #[test]
  fn negative_input_is_an_error() {
    let mut f = Float::from_int(-1);
    assert_eq!(f.checked_sqrt(), Err(ArithmeticError::SqrtOfNegative));
    assert_eq!(f, Float::from_int(-1));
  }

  #[test]
  #[should_panic(expected = "square root of a negative number")]
  fn negative_input_panics() {
    let mut f = Float::from_int(-1);
    f.sqrt();
  }

  /// `lo ≤ √x ≤ hi` iff `lo² ≤ x ≤ hi²`; squaring the bracket keeps the
  /// whole check in exact rational arithmetic.
  fn is_sqrt_within(x: &Rational, got: &Float, ulps: u32) -> bool {
    let slack = Rational::from(ulps) * ulp(got);
    let v = Rational::try_from(*got).unwrap();
    let lo = &v - &slack;
    let hi = &v + &slack;
    (lo <= Rational::from(0) || &lo * &lo <= *x) && (*x <= &hi * &hi)
  }

  proptest! {
    #![proptest_config(ProptestConfig {
      max_global_rejects: crate::PROPTEST_CASES * 4,
      ..ProptestConfig::with_cases(crate::PROPTEST_CASES)
    })]

    #[test]
    fn sqrt_matches_the_rationals(f in Float::cases_proptest()) {
      prop_assume!(f.is_positive());
      let mut root = f;
      root.sqrt();
      let exact = Rational::try_from(f).unwrap();
      prop_assert!(is_sqrt_within(&exact, &root, 3), "√{f:?} = {root:?}");
    }

    #[test]
    fn sqrt_squared_is_close(f in Float::cases_proptest()) {
      prop_assume!(f.is_positive());
      let mut root = f;
      root.sqrt();
      let squared = root * root;
      let exact = Rational::try_from(f).unwrap();
      prop_assert!(within_ulps(&exact, &squared, 8), "(√{f:?})²");
    }
  }
}
