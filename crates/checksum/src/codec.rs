//! Checksum value encoding.
//!
//! The engine works on `u64` register values. S3 carries checksums as
//! Base64 of the big-endian bytes, and marks a combined multipart checksum
//! with a `-<parts>` suffix:
//!
//! ```text
//! crc32c("abcde")             -> 0xC450D697 -> [C4 50 D6 97] -> "xFDWlw=="
//! combined over three parts   ->                               "xFDWlw==-3"
//! ```

use alloc::{format, string::String, vec::Vec};
use core::{fmt, ops::Deref};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use traits::{ChecksumError, Result};

use crate::{combine::crc_params, kind::ChecksumKind};

/// Big-endian encoding of a CRC value: 4 bytes for 32-bit CRCs, 8 for 64-bit.
///
/// Stored inline; dereferences to `&[u8]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CrcBytes {
  buf: [u8; 8],
  len: u8,
}

impl CrcBytes {
  /// The encoded bytes.
  #[inline]
  #[must_use]
  pub fn as_slice(&self) -> &[u8] {
    self.buf.get(..usize::from(self.len)).unwrap_or_default()
  }
}

impl Deref for CrcBytes {
  type Target = [u8];

  #[inline]
  fn deref(&self) -> &[u8] {
    self.as_slice()
  }
}

impl AsRef<[u8]> for CrcBytes {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    self.as_slice()
  }
}

impl fmt::Debug for CrcBytes {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("CrcBytes(")?;
    for b in self.as_slice() {
      write!(f, "{b:02x}")?;
    }
    f.write_str(")")
  }
}

/// Encode the low `width` bits of `value` as `width / 8` big-endian bytes.
///
/// Bits above `width` are discarded, so a 32-bit CRC always yields exactly
/// 4 bytes. Widths above 64 are clamped to 64.
#[must_use]
pub fn to_be_bytes(value: u64, width: u32) -> CrcBytes {
  let len = (width / 8).min(8);
  // Left-align the low `len` bytes so they lead the big-endian encoding.
  let aligned = value.checked_shl(64 - len * 8).unwrap_or(0);
  CrcBytes {
    buf: aligned.to_be_bytes(),
    len: len as u8,
  }
}

/// Decode big-endian bytes, zero-extending inputs shorter than 8 bytes.
///
/// # Errors
///
/// [`ChecksumError::InvalidLength`] if `bytes` is longer than 8 bytes.
pub fn from_be_bytes(bytes: &[u8]) -> Result<u64> {
  if bytes.len() > 8 {
    return Err(ChecksumError::InvalidLength {
      expected: 8,
      actual: bytes.len(),
    });
  }
  Ok(bytes.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b)))
}

/// Encode a CRC value at its algorithm's width.
///
/// # Errors
///
/// [`ChecksumError::NotCombinable`] if `kind` has no CRC register.
pub fn to_checksum_bytes(kind: ChecksumKind, value: u64) -> Result<CrcBytes> {
  let params = crc_params(kind)?;
  Ok(to_be_bytes(value, params.width()))
}

/// Decode a CRC value that must be exactly its algorithm's size.
///
/// # Errors
///
/// - [`ChecksumError::NotCombinable`] if `kind` has no CRC register.
/// - [`ChecksumError::InvalidLength`] if `bytes` is not `width / 8` bytes.
pub fn from_checksum_bytes(kind: ChecksumKind, bytes: &[u8]) -> Result<u64> {
  let params = crc_params(kind)?;
  if bytes.len() != params.byte_len() {
    return Err(ChecksumError::InvalidLength {
      expected: params.byte_len(),
      actual: bytes.len(),
    });
  }
  from_be_bytes(bytes)
}

/// Standard, padded Base64 without line wrapping.
#[must_use]
pub fn to_base64(bytes: &[u8]) -> String {
  STANDARD.encode(bytes)
}

/// Decode standard, padded Base64.
///
/// # Errors
///
/// [`ChecksumError::InvalidBase64`] for anything else, including URL-safe text.
pub fn from_base64(text: &str) -> Result<Vec<u8>> {
  STANDARD.decode(text).map_err(|_| ChecksumError::InvalidBase64)
}

/// Label for a checksum combined from `part_count` parts: `"<base64>-<parts>"`.
#[must_use]
pub fn combined_label(base64: &str, part_count: usize) -> String {
  format!("{base64}-{part_count}")
}

/// Split a received checksum into its Base64 value and optional part count.
///
/// The standard Base64 alphabet has no `-`, so the last `-` (if any) starts
/// the part count.
///
/// # Errors
///
/// [`ChecksumError::InvalidLabel`] if the value is empty or the suffix is not
/// a positive decimal number without leading zeros.
pub fn parse_label(text: &str) -> Result<(&str, Option<u32>)> {
  let Some((value, count)) = text.rsplit_once('-') else {
    return Ok((text, None));
  };
  if value.is_empty() || count.starts_with('0') || count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
    return Err(ChecksumError::InvalidLabel);
  }
  match count.parse::<u32>() {
    Ok(n) if n > 0 => Ok((value, Some(n))),
    _ => Err(ChecksumError::InvalidLabel),
  }
}
