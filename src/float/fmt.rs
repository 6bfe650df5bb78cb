use super::*;

use core::fmt::Debug;

impl Debug for Float {
  /// The raw representation: both significand halves as one 32-bit pattern
  /// with the word split marked, plus the signed exponent.
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let msw = self.mant.msw as u16;
    let lsw = self.mant.lsw as u16;
    f.debug_struct("Float")
      .field("mant", &format_args!("0b{msw:016b}_{lsw:016b}"))
      .field("exp", &format_args!("{:+}", self.exp))
      .finish()
  }
}
