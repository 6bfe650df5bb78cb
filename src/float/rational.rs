//! Translation of a [`Float`] into an exact arbitrary-precision rational,
//! for *testing*: the value of a float is `significand × 2^(exp − 30)`
//! with no rounding involved, so every arithmetic algorithm in the crate
//! can be checked against exact rational arithmetic, to whatever ulp
//! tolerance the algorithm promises.

use super::*;

use malachite::rational::Rational;

/// The error type returned when a [`Float`] has no finite rational value
/// because it is one of the ±∞ sentinels.
#[derive(Debug)]
#[derive(PartialEq, Eq)]
pub struct IsInfinite;

pub(crate) fn power_of_2(e: i64) -> Rational {
  use malachite::base::num::arithmetic::traits::PowerOf2;
  Rational::power_of_2(e)
}

impl TryFrom<Float> for Rational {
  type Error = IsInfinite;

  fn try_from(f: Float) -> Result<Rational, IsInfinite> {
    if f.is_infinite() {
      return Err(IsInfinite);
    }
    let significand = (f.mant.msw as i32) << 16 | f.mant.lsw as u16 as i32;
    Ok(Rational::from(significand) * power_of_2(f.exp as i64 - 30))
  }
}

/// One unit in the last place at `f`'s scale.
pub(crate) fn ulp(f: &Float) -> Rational {
  power_of_2(f.exp as i64 - 30)
}

/// Whether `got` is within `n` of its own ulps of the exact value.
pub(crate) fn within_ulps(exact: &Rational, got: &Float, n: u32) -> bool {
  within_abs(exact, got, &(Rational::from(n) * ulp(got)))
}

/// Whether `got` is within `bound` (an absolute quantity) of the exact
/// value.
pub(crate) fn within_abs(exact: &Rational, got: &Float, bound: &Rational) -> bool {
  let Ok(v) = Rational::try_from(*got) else {
    return false;
  };
  let diff = if *exact > v { exact - &v } else { &v - exact };
  diff <= *bound
}
