//! GF(2) linear algebra over CRC registers.
//!
//! A reflected CRC register of `width` bits is a vector over GF(2), and
//! feeding it one zero bit is a linear map. A [`Gf2Matrix`] stores that map
//! as the images of the basis vectors: row `i` is what bit `i` of the
//! register becomes. Squaring a matrix composes the map with itself, so the
//! operator for `2^k` zero bits is `k` squarings of the one-bit operator.
//!
//! # Mathematical Background
//!
//! ```text
//! crc(A || B) = crc(A) * x^(8*len(B)) mod G(x) XOR crc(B)
//! ```
//!
//! Multiplying by `x^n` is the same as pushing `n` zero bits through the
//! register, and is computed here by square-and-multiply over `n`.

// SAFETY: All array indexing in this module is bounded: row indices come from
// `trailing_zeros()` of a `u64` (< 64 rows) or from loops below `MAX_WIDTH`,
// and rung indices from `trailing_zeros()` of a bit count below 2^LADDER_RUNGS.
#![allow(clippy::indexing_slicing)]

/// Widest supported register.
pub(crate) const MAX_WIDTH: usize = 64;

/// Number of cached operators: rung `k` skips `2^k` zero bits.
///
/// Byte lengths are `u64`, so bit counts stay below `8 * 2^64 = 2^67`.
#[cfg_attr(not(feature = "std"), allow(dead_code))]
pub(crate) const LADDER_RUNGS: usize = 67;

/// Reflect (bit-reverse) the lower `width` bits of `value`.
///
/// For example, `reflect_bits_u64(0b1010, 4)` returns `0b0101`.
#[inline]
pub(crate) const fn reflect_bits_u64(value: u64, width: u32) -> u64 {
  let mut result = 0u64;
  let mut i = 0u32;
  while i < width {
    if (value >> i) & 1 != 0 {
      result |= 1 << (width - 1 - i);
    }
    i += 1;
  }
  result
}

/// A `width`×`width` GF(2) matrix stored as up to 64 `u64` rows.
///
/// Rows and bits at or above `width` are always zero.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct Gf2Matrix {
  rows: [u64; MAX_WIDTH],
  width: u32,
}

impl Gf2Matrix {
  /// The operator for feeding one zero bit into a reflected CRC register.
  ///
  /// A reflected register shifts right; bit 0 falls off the end and, when
  /// set, XORs the polynomial back in:
  ///
  /// ```text
  /// crc' = (crc >> 1) ^ (poly if crc & 1 else 0)
  /// ```
  ///
  /// so row 0 is the polynomial and row `i` (for `i > 0`) is `1 << (i - 1)`.
  #[must_use]
  pub(crate) const fn zero_bit(poly: u64, width: u32) -> Self {
    let mut rows = [0u64; MAX_WIDTH];
    rows[0] = poly;
    let mut i = 1;
    while i < width as usize && i < MAX_WIDTH {
      rows[i] = 1 << (i - 1);
      i += 1;
    }
    Self { rows, width }
  }

  #[cfg(test)]
  pub(crate) const fn identity(width: u32) -> Self {
    let mut rows = [0u64; MAX_WIDTH];
    let mut i = 0;
    while i < width as usize && i < MAX_WIDTH {
      rows[i] = 1 << i;
      i += 1;
    }
    Self { rows, width }
  }

  /// Apply the operator to a register value: XOR of the rows selected by
  /// the set bits of `vec`.
  #[inline]
  #[must_use]
  pub(crate) const fn times(&self, vec: u64) -> u64 {
    let mut sum = 0u64;
    let mut v = vec;

    // Iterate set bits only.
    while v != 0 {
      let bit = v.trailing_zeros() as usize;
      sum ^= self.rows[bit];
      v &= v - 1;
    }

    sum
  }

  /// Write `self * self` into `dst`.
  #[inline]
  pub(crate) fn square_into(&self, dst: &mut Self) {
    dst.width = self.width;
    for (out, &row) in dst.rows.iter_mut().zip(self.rows.iter()) {
      *out = self.times(row);
    }
  }

  #[inline]
  #[must_use]
  #[cfg_attr(not(feature = "std"), allow(dead_code))]
  pub(crate) fn square(&self) -> Self {
    let mut dst = Self {
      rows: [0u64; MAX_WIDTH],
      width: self.width,
    };
    self.square_into(&mut dst);
    dst
  }
}

/// Precomputed "skip `2^k` zero bits" operators for one polynomial.
///
/// Built once per CRC algorithm and never mutated afterwards.
#[cfg_attr(not(feature = "std"), allow(dead_code))]
pub(crate) struct ZeroLadder {
  rungs: [Gf2Matrix; LADDER_RUNGS],
}

#[cfg_attr(not(feature = "std"), allow(dead_code))]
impl ZeroLadder {
  #[must_use]
  pub(crate) fn build(poly: u64, width: u32) -> Self {
    let mut rungs = [Gf2Matrix::zero_bit(poly, width); LADDER_RUNGS];
    for k in 1..LADDER_RUNGS {
      rungs[k] = rungs[k - 1].square();
    }
    Self { rungs }
  }

  /// Push `bits` zero bits through `crc`.
  ///
  /// Powers of one operator commute, so rungs may be applied in any order.
  #[inline]
  #[must_use]
  pub(crate) fn shift(&self, crc: u64, bits: u128) -> u64 {
    debug_assert!(bits >> LADDER_RUNGS == 0);
    let mut crc = crc;
    let mut bits = bits;
    while bits != 0 {
      let k = bits.trailing_zeros() as usize;
      crc = self.rungs[k].times(crc);
      bits &= bits - 1;
    }
    crc
  }
}

/// Push `bits` zero bits through `crc` without any cached state.
///
/// Derives the one-bit operator from the polynomial, then alternates between
/// two matrices: every iteration squares the current operator (skip `2^k`
/// bits becomes skip `2^(k+1)` bits), and whenever bit `k` of `bits` is set
/// the current operator is applied to the register.
#[must_use]
pub(crate) fn shift_uncached(poly: u64, width: u32, crc: u64, bits: u128) -> u64 {
  let mut current = Gf2Matrix::zero_bit(poly, width);
  let mut next = current;
  let mut crc = crc;
  let mut bits = bits;

  loop {
    if bits & 1 != 0 {
      crc = current.times(crc);
    }
    bits >>= 1;
    if bits == 0 {
      break;
    }
    current.square_into(&mut next);
    core::mem::swap(&mut current, &mut next);
  }

  crc
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::{crc32, crc32c, crc64_nvme};

  /// One reflected CRC register step with no input.
  fn step(poly: u64, crc: u64) -> u64 {
    (crc >> 1) ^ (poly & 0u64.wrapping_sub(crc & 1))
  }

  #[test]
  fn reflect_bits_examples() {
    assert_eq!(reflect_bits_u64(0b1010, 4), 0b0101);
    assert_eq!(reflect_bits_u64(1, 64), 1 << 63);
    assert_eq!(reflect_bits_u64(crc32::POLYNOMIAL_NORMAL, 32), crc32::POLYNOMIAL);
    assert_eq!(reflect_bits_u64(crc32c::POLYNOMIAL_NORMAL, 32), crc32c::POLYNOMIAL);
    assert_eq!(reflect_bits_u64(crc64_nvme::POLYNOMIAL_NORMAL, 64), crc64_nvme::POLYNOMIAL);
  }

  #[test]
  fn zero_bit_matches_register_step() {
    let m = Gf2Matrix::zero_bit(crc64_nvme::POLYNOMIAL, 64);
    for crc in [0u64, 1, 2, 0x8000_0000_0000_0000, 0xDEAD_BEEF_CAFE_F00D, u64::MAX] {
      assert_eq!(m.times(crc), step(crc64_nvme::POLYNOMIAL, crc), "crc={crc:#x}");
    }
  }

  #[test]
  fn zero_bit_32_stays_in_width() {
    let m = Gf2Matrix::zero_bit(crc32::POLYNOMIAL, 32);
    for crc in [1u64, 0xFFFF_FFFF, 0x8000_0001] {
      assert_eq!(m.times(crc) >> 32, 0);
    }
  }

  #[test]
  fn identity_is_neutral() {
    let id = Gf2Matrix::identity(32);
    assert_eq!(id.times(0x1234_5678), 0x1234_5678);
    assert!(id.square() == id);
  }

  #[test]
  fn square_equals_two_steps() {
    let m = Gf2Matrix::zero_bit(crc32c::POLYNOMIAL, 32);
    let m2 = m.square();
    for crc in [1u64, 0xFFFF_FFFF, 0x0BAD_F00D] {
      assert_eq!(m2.times(crc), step(crc32c::POLYNOMIAL, step(crc32c::POLYNOMIAL, crc)));
    }
  }

  #[test]
  fn ladder_matches_stepping() {
    let ladder = ZeroLadder::build(crc32::POLYNOMIAL, 32);
    let mut expected = 0xCAFE_BABEu64;
    for _ in 0..200 {
      expected = step(crc32::POLYNOMIAL, expected);
    }
    assert_eq!(ladder.shift(0xCAFE_BABE, 200), expected);
  }

  #[test]
  fn ladder_matches_uncached() {
    let ladder = ZeroLadder::build(crc64_nvme::POLYNOMIAL, 64);
    let cases: [u128; 6] = [0, 1, 8, 8 * 1025, 8 * (1 << 40), 8 * u128::from(u64::MAX)];
    for bits in cases {
      assert_eq!(
        ladder.shift(0x0123_4567_89AB_CDEF, bits),
        shift_uncached(crc64_nvme::POLYNOMIAL, 64, 0x0123_4567_89AB_CDEF, bits),
        "bits={bits}"
      );
    }
  }

  #[test]
  fn zero_bits_is_identity() {
    assert_eq!(shift_uncached(crc32::POLYNOMIAL, 32, 0x1234, 0), 0x1234);
    let ladder = ZeroLadder::build(crc32::POLYNOMIAL, 32);
    assert_eq!(ladder.shift(0x1234, 0), 0x1234);
  }
}
