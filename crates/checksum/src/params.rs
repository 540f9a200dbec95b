//! CRC algorithm parameters.
//!
//! This module defines the parameter sets for the combinable CRC algorithms
//! following the conventions from the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/),
//! together with the per-algorithm zero-bit operator cache used by combine.

use core::fmt;
#[cfg(feature = "std")]
use std::sync::OnceLock;

use crate::{constants, gf2};

/// CRC algorithm parameters.
///
/// Every algorithm here is reflected on input and output with an all-ones
/// initial value and final XOR, so only the polynomial and width vary.
///
/// # Parameters
///
/// - `width`: Number of bits in the CRC (32 or 64)
/// - `polynomial`: The generator polynomial, reflected (LSB-first)
/// - `check`: CRC of `"123456789"`, for validating implementations
pub struct CrcParams {
  name: &'static str,
  width: u32,
  polynomial: u64,
  check: u64,
  #[cfg(feature = "std")]
  ladder: &'static OnceLock<gf2::ZeroLadder>,
}

#[cfg(feature = "std")]
static CRC32_LADDER: OnceLock<gf2::ZeroLadder> = OnceLock::new();
#[cfg(feature = "std")]
static CRC32C_LADDER: OnceLock<gf2::ZeroLadder> = OnceLock::new();
#[cfg(feature = "std")]
static CRC64_NVME_LADDER: OnceLock<gf2::ZeroLadder> = OnceLock::new();

/// CRC32 (ISO-HDLC) - S3, Ethernet, gzip, PNG, zip
pub(crate) static CRC32: CrcParams = CrcParams {
  name: "CRC32",
  width: constants::crc32::WIDTH,
  polynomial: constants::crc32::POLYNOMIAL,
  check: constants::crc32::CHECK,
  #[cfg(feature = "std")]
  ladder: &CRC32_LADDER,
};

/// CRC32-C (Castagnoli) - S3, iSCSI, SCTP, ext4
pub(crate) static CRC32C: CrcParams = CrcParams {
  name: "CRC32C",
  width: constants::crc32c::WIDTH,
  polynomial: constants::crc32c::POLYNOMIAL,
  check: constants::crc32c::CHECK,
  #[cfg(feature = "std")]
  ladder: &CRC32C_LADDER,
};

/// CRC64/NVME - S3, NVMe
pub(crate) static CRC64_NVME: CrcParams = CrcParams {
  name: "CRC64NVME",
  width: constants::crc64_nvme::WIDTH,
  polynomial: constants::crc64_nvme::POLYNOMIAL,
  check: constants::crc64_nvme::CHECK,
  #[cfg(feature = "std")]
  ladder: &CRC64_NVME_LADDER,
};

impl CrcParams {
  /// Algorithm tag, as used on the wire.
  #[inline]
  #[must_use]
  pub const fn name(&self) -> &'static str {
    self.name
  }

  /// Register width in bits.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width
  }

  /// Reflected generator polynomial.
  #[inline]
  #[must_use]
  pub const fn polynomial(&self) -> u64 {
    self.polynomial
  }

  /// CRC of the ASCII string `"123456789"`.
  #[inline]
  #[must_use]
  pub const fn check(&self) -> u64 {
    self.check
  }

  /// Mask selecting the meaningful low `width` bits of a value.
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u64 {
    if self.width >= 64 {
      u64::MAX
    } else {
      (1u64 << self.width) - 1
    }
  }

  /// Encoded size of a value in bytes.
  #[inline]
  #[must_use]
  pub const fn byte_len(&self) -> usize {
    (self.width / 8) as usize
  }

  /// Push `bits` zero bits through `crc`.
  #[inline]
  pub(crate) fn shift_zero_bits(&self, crc: u64, bits: u128) -> u64 {
    #[cfg(feature = "std")]
    {
      self.ladder().shift(crc, bits)
    }
    #[cfg(not(feature = "std"))]
    {
      gf2::shift_uncached(self.polynomial, self.width, crc, bits)
    }
  }

  #[cfg(feature = "std")]
  fn ladder(&self) -> &'static gf2::ZeroLadder {
    self.ladder.get_or_init(|| {
      tracing::trace!(algorithm = self.name, rungs = gf2::LADDER_RUNGS, "building zero-bit operator ladder");
      gf2::ZeroLadder::build(self.polynomial, self.width)
    })
  }
}

impl fmt::Debug for CrcParams {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CrcParams")
      .field("name", &self.name)
      .field("width", &self.width)
      .field("polynomial", &format_args!("{:#x}", self.polynomial))
      .finish_non_exhaustive()
  }
}
