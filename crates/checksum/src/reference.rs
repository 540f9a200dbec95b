//! Bitwise reference CRC implementation.
//!
//! Processes input one bit at a time. This is the test oracle that combine
//! results are checked against; the engine itself never reads data bytes.
//!
//! # CRC Model
//!
//! Every algorithm here follows the same Rocksoft parameters apart from the
//! polynomial and width:
//!
//! | Parameter | Value |
//! |-----------|-------|
//! | `refin` / `refout` | true |
//! | `init` | all ones |
//! | `xorout` | all ones |

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
#![allow(clippy::indexing_slicing)]

use crate::kind::ChecksumKind;

/// Bitwise reflected CRC of up to 64 bits.
///
/// # Arguments
///
/// * `poly` - Reflected polynomial
/// * `width` - Register width in bits
/// * `init` - Initial register value
/// * `data` - Input bytes
///
/// # Returns
///
/// The raw register state (caller applies the final XOR).
#[must_use]
pub const fn crc_reflected_bitwise(poly: u64, width: u32, init: u64, data: &[u8]) -> u64 {
  let mask = if width >= 64 { u64::MAX } else { (1u64 << width) - 1 };
  let mut crc = init & mask;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= data[i] as u64;
    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit += 1;
    }
    i += 1;
  }
  crc & mask
}

/// Finalized CRC of `data`, or `None` if `kind` is not a CRC.
#[must_use]
pub fn checksum(kind: ChecksumKind, data: &[u8]) -> Option<u64> {
  let params = kind.crc()?;
  let mask = params.mask();
  Some(crc_reflected_bitwise(params.polynomial(), params.width(), mask, data) ^ mask)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn check_values() {
    for kind in [ChecksumKind::Crc32, ChecksumKind::Crc32C, ChecksumKind::Crc64Nvme] {
      let params = kind.crc().unwrap();
      assert_eq!(checksum(kind, b"123456789"), Some(params.check()), "{kind}");
    }
  }

  #[test]
  fn empty_input_is_zero() {
    for kind in [ChecksumKind::Crc32, ChecksumKind::Crc32C, ChecksumKind::Crc64Nvme] {
      assert_eq!(checksum(kind, b""), Some(0));
    }
  }

  #[test]
  fn digests_have_no_reference() {
    assert_eq!(checksum(ChecksumKind::Sha256, b"abc"), None);
  }

  #[test]
  fn known_vectors() {
    assert_eq!(checksum(ChecksumKind::Crc32, b"abc"), Some(0x3524_41C2));
    assert_eq!(checksum(ChecksumKind::Crc32C, b"hello world"), Some(0xC994_65AA));
    assert_eq!(checksum(ChecksumKind::Crc64Nvme, b"abcde"), Some(0x0AB3_E4D0_6746_1213));
  }
}
