//! CRC combination operations.
//!
//! This module implements the combine operation for CRC checksums, which
//! computes `crc(A || B)` from `crc(A)`, `crc(B)`, and `len(B)` in O(log n) time.
//!
//! # Mathematical Background
//!
//! CRC can be expressed as polynomial arithmetic in GF(2). Concatenation can be
//! computed using linear algebra: multiplying the first CRC by `x^(8*len(B))`
//! (modulo the generator polynomial) and XORing the second CRC.
//!
//! The all-ones initial value and final XOR shared by CRC32, CRC32C and
//! CRC64/NVME cancel out in this identity, so no affine correction is needed.
//!
//! There is one engine for every width: byte, Base64 and typed entry points
//! are thin adapters over [`combine`].

use traits::{ChecksumCombine, ChecksumError, Result};

use crate::{
  gf2,
  kind::ChecksumKind,
  params::{self, CrcParams},
};

/// Combine two checksums of kind `kind`.
///
/// Given `crc_a = crc(A)` and `crc_b = crc(B)`, computes `crc(A || B)`.
///
/// # Arguments
///
/// * `kind` - Algorithm both values were produced under
/// * `crc_a` - Checksum of the first range
/// * `crc_b` - Checksum of the range immediately after it
/// * `len_b` - Length of the second range in bytes (not of the first, not a running total)
///
/// Only the low `width` bits of the inputs are used. A `len_b` of zero returns
/// `crc_a` unchanged.
///
/// # Errors
///
/// [`ChecksumError::NotCombinable`] for SHA1, SHA256 and MD5, whatever the inputs.
///
/// # Examples
///
/// ```
/// use checksum::{ChecksumKind, combine};
///
/// // crc32("abc"), crc32("de") -> crc32("abcde")
/// let crc = combine(ChecksumKind::Crc32, 0x3524_41C2, 0x7D90_298B, 2)?;
/// assert_eq!(crc, 0x8587_D865);
/// # Ok::<(), checksum::ChecksumError>(())
/// ```
pub fn combine(kind: ChecksumKind, crc_a: u64, crc_b: u64, len_b: u64) -> Result<u64> {
  let params = crc_params(kind)?;
  Ok(params.combine(crc_a, crc_b, len_b))
}

/// Same result as [`combine`], recomputing every operator from the
/// polynomial instead of using the cached ladder.
///
/// # Errors
///
/// [`ChecksumError::NotCombinable`] for SHA1, SHA256 and MD5.
pub fn combine_uncached(kind: ChecksumKind, crc_a: u64, crc_b: u64, len_b: u64) -> Result<u64> {
  let params = crc_params(kind)?;
  if len_b == 0 {
    return Ok(crc_a);
  }
  let mask = params.mask();
  let shifted = gf2::shift_uncached(params.polynomial(), params.width(), crc_a & mask, zero_bits(len_b));
  Ok((shifted ^ crc_b) & mask)
}

pub(crate) fn crc_params(kind: ChecksumKind) -> Result<&'static CrcParams> {
  kind.crc().ok_or_else(|| {
    tracing::warn!(algorithm = kind.name(), "checksum algorithm has no CRC register");
    ChecksumError::NotCombinable(kind.name())
  })
}

/// Zero bits fed through the register for `len` bytes.
///
/// Widened so that `8 * u64::MAX` is representable.
#[inline]
const fn zero_bits(len: u64) -> u128 {
  (len as u128) << 3
}

impl CrcParams {
  /// Combine two values of this algorithm. See [`combine`].
  #[inline]
  #[must_use]
  pub fn combine(&self, crc_a: u64, crc_b: u64, len_b: u64) -> u64 {
    if len_b == 0 {
      return crc_a;
    }
    let mask = self.mask();
    let shifted = self.shift_zero_bits(crc_a & mask, zero_bits(len_b));
    (shifted ^ crc_b) & mask
  }
}

macro_rules! define_crc_combine {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident {
      kind: $kind:expr,
      params: $params:expr,
      output: $output:ty,
    }
  ) => {
    $(#[$outer])*
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    $vis struct $name;

    impl $name {
      /// Registry entry for this algorithm.
      pub const KIND: ChecksumKind = $kind;
    }

    impl ChecksumCombine for $name {
      const WIDTH: u32 = <$output>::BITS;
      type Output = $output;

      #[inline]
      fn combine(crc_a: $output, crc_b: $output, len_b: u64) -> $output {
        // The result is masked to the register width, so the cast is lossless.
        $params.combine(u64::from(crc_a), u64::from(crc_b), len_b) as $output
      }
    }
  };
}

define_crc_combine! {
  /// CRC32 (ISO-HDLC) combinator over `u32` values.
  ///
  /// ```
  /// use checksum::{ChecksumCombine, Crc32};
  ///
  /// // crc32("hello "), crc32("world") -> crc32("hello world")
  /// assert_eq!(Crc32::combine(0xED81_F9F6, 0x3A77_1143, 5), 0x0D4A_1185);
  /// ```
  pub struct Crc32 {
    kind: ChecksumKind::Crc32,
    params: params::CRC32,
    output: u32,
  }
}

define_crc_combine! {
  /// CRC32-C (Castagnoli) combinator over `u32` values.
  pub struct Crc32C {
    kind: ChecksumKind::Crc32C,
    params: params::CRC32C,
    output: u32,
  }
}

define_crc_combine! {
  /// CRC64/NVME combinator over `u64` values.
  pub struct Crc64Nvme {
    kind: ChecksumKind::Crc64Nvme,
    params: params::CRC64_NVME,
    output: u64,
  }
}
