#![cfg_attr(not(test), no_std)]
//! This crate provides a self-contained software floating-point number
//! system for a host platform that natively offers only 16-bit signed
//! integer arithmetic and no FPU.
//!
//! A [`Float`] carries a 32-bit two's-complement significand, stored as two
//! signed 16-bit halves, together with a signed 16-bit binary exponent in
//! `[-512, 511]`. The significand is a Q1.30 fixed-point number (one sign
//! bit, one integer bit, thirty fraction bits), so the value of a float is
//! `significand × 2^(exp − 30)`. There are no NaNs and no denormals:
//! overflow saturates to ±∞ and underflow flushes to zero.
//!
//! # Usage
//!
//! Arithmetic is available both as in-place methods that return the receiver
//! for chaining, and through the usual operators:
//!
//! ```
//! use qfloat::Float;
//!
//! // 355/113, the classic rational approximation of π.
//! let mut f = Float::from_int(355);
//! f.div(&Float::from_int(113));
//! assert_eq!(f.to_decimal(6), "3.14159e+000");
//!
//! let x = Float::from_int(2) * Float::from_int(3);
//! assert_eq!(x, Float::from_int(6));
//! ```
//!
//! Square roots use six Newton iterations, enough to converge to full Q1.30
//! precision from an exponent-halved initial guess:
//!
//! ```
//! use qfloat::Float;
//!
//! let mut x = Float::from_int(2);
//! x.sqrt();
//! assert_eq!(x.to_decimal(5), "1.4142e+000");
//! ```
//!
//! Decimal text conversion works in both directions. Parsing is lax: the
//! first character that fits nowhere simply ends the scan, and whatever was
//! accumulated up to that point is the result:
//!
//! ```
//! use qfloat::Float;
//!
//! let x = Float::parse(" -1.5E2");
//! assert_eq!(x.to_decimal(3), "-1.50e+002");
//! assert_eq!(Float::INFINITY.to_decimal(5), "+inf.");
//! ```
//!
//! Only two operations can fail: dividing by zero and taking the square
//! root of a negative number. Like integer division in Rust, the plain
//! [`div`](Float::div) and [`sqrt`](Float::sqrt) panic on those inputs;
//! [`checked_div`](Float::checked_div) and
//! [`checked_sqrt`](Float::checked_sqrt) return a [`Result`] instead.

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod float;
mod mantissa;

pub use float::ArithmeticError;
pub use float::Float;

#[cfg(test)]
pub(crate) const PROPTEST_CASES: u32 = if cfg!(debug_assertions) { 0x400 } else { 0x8000 };
