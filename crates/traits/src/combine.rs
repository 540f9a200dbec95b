//! Checksum combination trait.
//!
//! CRCs are linear over GF(2), so the checksum of a concatenation can be
//! derived from the checksums of its pieces:
//!
//! ```text
//! crc(A || B) = crc(A) * x^(8*len(B)) mod G(x) XOR crc(B)
//! ```
//!
//! Multipart uploads rely on this to produce a whole-object checksum from
//! per-part checksums that were computed independently.

use core::fmt::Debug;

/// Checksums whose values can be combined without revisiting the data.
///
/// # Usage
///
/// ```rust,ignore
/// use checksum::{ChecksumCombine, Crc32C};
///
/// // crc32c("abc"), crc32c("de")
/// let combined = Crc32C::combine(0x364B_3FB7, 0x6B40_B476, 2);
/// assert_eq!(combined, 0xC450_D697); // crc32c("abcde")
/// ```
///
/// # Implementor Requirements
///
/// - `combine(a, b, 0)` must return `a` unchanged
/// - `combine` must not depend on anything but its arguments
pub trait ChecksumCombine {
  /// Width of the CRC register in bits.
  const WIDTH: u32;

  /// The checksum value type (`u32` for 32-bit CRCs, `u64` for 64-bit).
  type Output: Copy + Eq + Debug + Default;

  /// Combine two checksums.
  ///
  /// Given `crc_a = crc(A)` and `crc_b = crc(B)`, computes `crc(A || B)`.
  ///
  /// # Arguments
  ///
  /// * `crc_a` - Checksum of the first range (A)
  /// * `crc_b` - Checksum of the range that immediately follows (B)
  /// * `len_b` - Length of B in bytes. Never the length of A, never a running total.
  #[must_use]
  fn combine(crc_a: Self::Output, crc_b: Self::Output, len_b: u64) -> Self::Output;

  /// Fold an ordered sequence of `(checksum, length)` pairs left to right.
  ///
  /// Returns `None` for an empty sequence. The length of the first part is
  /// never consulted. Order matters: parts must be supplied by ascending offset.
  #[must_use]
  fn combine_all<I>(parts: I) -> Option<Self::Output>
  where
    I: IntoIterator<Item = (Self::Output, u64)>,
  {
    let mut parts = parts.into_iter();
    let (first, _) = parts.next()?;
    Some(parts.fold(first, |acc, (crc, len)| Self::combine(acc, crc, len)))
  }
}
