//! Whole-object checksums from per-part checksums.
//!
//! A multipart upload checksums each part on its own. The object checksum is
//! the left fold of the part checksums with [`combine`](crate::combine),
//! where each step appends one part:
//!
//! ```text
//! result = p1.value
//! result = combine(result, p2.value, p2.length)
//! result = combine(result, p3.value, p3.length)
//! ...
//! ```
//!
//! The length passed at each step is the appended part's own length. Passing
//! the running total instead is the classic mistake and silently produces a
//! wrong checksum. Parts must be supplied in ascending offset order; the fold
//! is not commutative and nothing here reorders them.

use alloc::string::String;

use traits::{ChecksumError, Result};

use crate::{
  codec::{self, CrcBytes},
  combine::crc_params,
  kind::ChecksumKind,
  params::CrcParams,
};

/// Checksum of one contiguous part and its length in bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PartChecksum {
  /// CRC of the part's bytes.
  pub value: u64,
  /// Length of the part in bytes.
  pub length: u64,
}

impl PartChecksum {
  /// Pair a part's CRC with the part's own length.
  #[inline]
  #[must_use]
  pub const fn new(value: u64, length: u64) -> Self {
    Self { value, length }
  }
}

/// Fold ordered part checksums into the whole-object checksum.
///
/// # Errors
///
/// - [`ChecksumError::NotCombinable`] if `kind` is not a CRC.
/// - [`ChecksumError::EmptyParts`] if `parts` is empty.
///
/// # Examples
///
/// ```
/// use checksum::{ChecksumKind, PartChecksum, fold};
///
/// // crc32("abc") ‖ crc32("de")
/// let parts = [PartChecksum::new(0x3524_41C2, 3), PartChecksum::new(0x7D90_298B, 2)];
/// assert_eq!(fold(ChecksumKind::Crc32, &parts)?, 0x8587_D865);
/// # Ok::<(), checksum::ChecksumError>(())
/// ```
pub fn fold(kind: ChecksumKind, parts: &[PartChecksum]) -> Result<u64> {
  let mut acc = MultipartChecksum::new(kind)?;
  for part in parts {
    acc.push(part.value, part.length);
  }
  acc.finish().map(|composite| composite.value())
}

/// Fold Base64 part checksums and render the result.
///
/// Produces `"<base64>-<n>"` for `n > 1` parts and a bare `"<base64>"` for a
/// single part.
///
/// # Errors
///
/// - [`ChecksumError::NotCombinable`] if `kind` is not a CRC.
/// - [`ChecksumError::InvalidBase64`] / [`ChecksumError::InvalidLength`] for a
///   malformed part value.
/// - [`ChecksumError::EmptyParts`] if `parts` is empty.
///
/// # Examples
///
/// ```
/// use checksum::{ChecksumKind, combine_base64};
///
/// // crc32c("abc"), crc32c("de")
/// let label = combine_base64(ChecksumKind::Crc32C, [("Nks/tw==", 3), ("a0C0dg==", 2)])?;
/// assert_eq!(label, "xFDWlw==-2");
/// # Ok::<(), checksum::ChecksumError>(())
/// ```
pub fn combine_base64<I, S>(kind: ChecksumKind, parts: I) -> Result<String>
where
  I: IntoIterator<Item = (S, u64)>,
  S: AsRef<str>,
{
  let mut acc = MultipartChecksum::new(kind)?;
  for (value, length) in parts {
    acc.push_base64(value.as_ref(), length)?;
  }
  Ok(acc.finish()?.label())
}

/// Incremental fold of part checksums.
///
/// # Examples
///
/// ```
/// use checksum::{ChecksumKind, MultipartChecksum};
///
/// let mut acc = MultipartChecksum::new(ChecksumKind::Crc64Nvme)?;
/// acc.push_base64("BeXKuz/B+us=", 3)?; // crc64nvme("abc")
/// acc.push_base64("UIAGFwzM/S0=", 2)?; // crc64nvme("de")
///
/// let composite = acc.finish()?;
/// assert_eq!(composite.total_length(), 5);
/// assert_eq!(composite.label(), "CrPk0GdGEhM=-2");
/// # Ok::<(), checksum::ChecksumError>(())
/// ```
#[derive(Clone, Debug)]
pub struct MultipartChecksum {
  kind: ChecksumKind,
  params: &'static CrcParams,
  value: u64,
  parts: usize,
  total_len: u64,
}

impl MultipartChecksum {
  /// Start an empty fold.
  ///
  /// # Errors
  ///
  /// [`ChecksumError::NotCombinable`] if `kind` is not a CRC.
  pub fn new(kind: ChecksumKind) -> Result<Self> {
    Ok(Self {
      kind,
      params: crc_params(kind)?,
      value: 0,
      parts: 0,
      total_len: 0,
    })
  }

  /// Append the next part.
  pub fn push(&mut self, value: u64, length: u64) {
    tracing::trace!(algorithm = self.kind.name(), index = self.parts, len = length, "appending part");
    self.value = if self.parts == 0 {
      value & self.params.mask()
    } else {
      self.params.combine(self.value, value, length)
    };
    self.parts += 1;
    self.total_len = self.total_len.saturating_add(length);
  }

  /// Append the next part from its Base64 checksum.
  ///
  /// # Errors
  ///
  /// [`ChecksumError::InvalidBase64`] or [`ChecksumError::InvalidLength`]; the
  /// accumulator is left unchanged on error.
  pub fn push_base64(&mut self, value: &str, length: u64) -> Result<()> {
    let bytes = codec::from_base64(value)?;
    let value = codec::from_checksum_bytes(self.kind, &bytes)?;
    self.push(value, length);
    Ok(())
  }

  /// Algorithm the parts were checksummed with.
  #[inline]
  #[must_use]
  pub const fn kind(&self) -> ChecksumKind {
    self.kind
  }

  /// Parts appended so far.
  #[inline]
  #[must_use]
  pub const fn part_count(&self) -> usize {
    self.parts
  }

  /// Bytes covered so far.
  ///
  /// Saturates at `u64::MAX`. The combined value does not depend on this
  /// total and stays exact past the clamp.
  #[inline]
  #[must_use]
  pub const fn total_length(&self) -> u64 {
    self.total_len
  }

  /// Combined value so far, or `None` before the first part.
  #[inline]
  #[must_use]
  pub const fn value(&self) -> Option<u64> {
    if self.parts == 0 { None } else { Some(self.value) }
  }

  /// Snapshot the fold as a [`CompositeChecksum`].
  ///
  /// Does not consume the accumulator; more parts may be pushed afterwards.
  ///
  /// # Errors
  ///
  /// [`ChecksumError::EmptyParts`] if no part has been pushed.
  pub fn finish(&self) -> Result<CompositeChecksum> {
    if self.parts == 0 {
      return Err(ChecksumError::EmptyParts);
    }
    tracing::debug!(
      algorithm = self.kind.name(),
      parts = self.parts,
      total_len = self.total_len,
      "combined multipart checksum"
    );
    Ok(CompositeChecksum {
      kind: self.kind,
      width: self.params.width(),
      value: self.value,
      parts: self.parts,
      total_len: self.total_len,
    })
  }
}

/// A whole-object checksum produced by folding part checksums.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CompositeChecksum {
  kind: ChecksumKind,
  width: u32,
  value: u64,
  parts: usize,
  total_len: u64,
}

impl CompositeChecksum {
  /// Algorithm the parts were checksummed with.
  #[inline]
  #[must_use]
  pub const fn kind(&self) -> ChecksumKind {
    self.kind
  }

  /// The combined CRC value.
  #[inline]
  #[must_use]
  pub const fn value(&self) -> u64 {
    self.value
  }

  /// Number of parts that were combined.
  #[inline]
  #[must_use]
  pub const fn part_count(&self) -> usize {
    self.parts
  }

  /// Total bytes covered by the parts, saturating at `u64::MAX`.
  #[inline]
  #[must_use]
  pub const fn total_length(&self) -> u64 {
    self.total_len
  }

  /// Big-endian encoding at the algorithm's width.
  #[inline]
  #[must_use]
  pub fn to_bytes(&self) -> CrcBytes {
    codec::to_be_bytes(self.value, self.width)
  }

  /// Base64 of [`to_bytes`](Self::to_bytes), without a part suffix.
  #[must_use]
  pub fn to_base64(&self) -> String {
    codec::to_base64(&self.to_bytes())
  }

  /// `"<base64>-<parts>"` for more than one part, bare `"<base64>"` otherwise.
  #[must_use]
  pub fn label(&self) -> String {
    let base64 = self.to_base64();
    if self.parts > 1 {
      codec::combined_label(&base64, self.parts)
    } else {
      base64
    }
  }

  /// Whether a received checksum agrees with this one.
  ///
  /// The value must match; a part-count suffix, when present, must match too.
  /// A bare value is compared on value alone.
  ///
  /// # Errors
  ///
  /// [`ChecksumError::InvalidLabel`], [`ChecksumError::InvalidBase64`] or
  /// [`ChecksumError::InvalidLength`] if `label` is malformed.
  pub fn matches_label(&self, label: &str) -> Result<bool> {
    let (base64, parts) = codec::parse_label(label)?;
    let value = codec::from_checksum_bytes(self.kind, &codec::from_base64(base64)?)?;
    let parts_match = parts.is_none_or(|n| usize::try_from(n).is_ok_and(|n| n == self.parts));
    Ok(parts_match && value == self.value)
  }
}
