//! Checksum algorithm registry.
//!
//! Maps the algorithm tags used by S3 (`CRC32`, `CRC32C`, `CRC64NVME`,
//! `SHA1`, `SHA256`, `MD5`) to a [`ChecksumKind`]. Width and combinability
//! are data on the kind: [`ChecksumKind::crc`] is the single place that knows
//! which kinds are CRCs and with which parameters.

use alloc::borrow::ToOwned;
use core::{fmt, str::FromStr};

use traits::{ChecksumError, Result};

use crate::params::{self, CrcParams};

/// A checksum algorithm that may appear on a multipart object.
///
/// # Examples
///
/// ```
/// use checksum::ChecksumKind;
///
/// let kind = ChecksumKind::resolve("CRC64NVME")?;
/// assert_eq!(kind.width(), Some(64));
/// assert!(kind.is_combinable());
///
/// assert!(!ChecksumKind::Sha256.is_combinable());
/// assert!(ChecksumKind::resolve("crc32").is_err());
/// # Ok::<(), checksum::ChecksumError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChecksumKind {
  /// CRC32 (ISO-HDLC), 32-bit.
  Crc32,
  /// CRC32-C (Castagnoli), 32-bit.
  Crc32C,
  /// CRC64/NVME, 64-bit.
  Crc64Nvme,
  /// SHA-1 digest. Not combinable.
  Sha1,
  /// SHA-256 digest. Not combinable.
  Sha256,
  /// MD5 digest. Not combinable.
  Md5,
}

impl ChecksumKind {
  /// Every recognized algorithm.
  pub const ALL: [Self; 6] = [
    Self::Crc32,
    Self::Crc32C,
    Self::Sha1,
    Self::Sha256,
    Self::Md5,
    Self::Crc64Nvme,
  ];

  /// Look up an algorithm by its exact, case-sensitive tag.
  ///
  /// # Errors
  ///
  /// [`ChecksumError::UnsupportedAlgorithm`] if `name` is not one of the six tags.
  pub fn resolve(name: &str) -> Result<Self> {
    Self::ALL.into_iter().find(|kind| kind.name() == name).ok_or_else(|| {
      tracing::debug!(tag = name, "rejecting unsupported checksum algorithm");
      ChecksumError::UnsupportedAlgorithm(name.to_owned())
    })
  }

  /// The algorithm tag.
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Crc32 => "CRC32",
      Self::Crc32C => "CRC32C",
      Self::Crc64Nvme => "CRC64NVME",
      Self::Sha1 => "SHA1",
      Self::Sha256 => "SHA256",
      Self::Md5 => "MD5",
    }
  }

  /// CRC parameters, or `None` for digests that are not CRCs.
  #[must_use]
  pub fn crc(self) -> Option<&'static CrcParams> {
    match self {
      Self::Crc32 => Some(&params::CRC32),
      Self::Crc32C => Some(&params::CRC32C),
      Self::Crc64Nvme => Some(&params::CRC64_NVME),
      Self::Sha1 | Self::Sha256 | Self::Md5 => None,
    }
  }

  /// Whether values of this kind can be combined. True only for CRCs.
  #[must_use]
  pub fn is_combinable(self) -> bool {
    self.crc().is_some()
  }

  /// Register width in bits for CRC kinds.
  #[must_use]
  pub fn width(self) -> Option<u32> {
    self.crc().map(CrcParams::width)
  }

  /// Size of an encoded value in bytes.
  #[must_use]
  pub const fn digest_size(self) -> usize {
    match self {
      Self::Crc32 | Self::Crc32C => 4,
      Self::Crc64Nvme => 8,
      Self::Sha1 => 20,
      Self::Sha256 => 32,
      Self::Md5 => 16,
    }
  }
}

/// Look up an algorithm by tag. See [`ChecksumKind::resolve`].
///
/// # Errors
///
/// [`ChecksumError::UnsupportedAlgorithm`] for an unrecognized tag.
#[inline]
pub fn resolve(name: &str) -> Result<ChecksumKind> {
  ChecksumKind::resolve(name)
}

/// Whether `kind` supports combination. See [`ChecksumKind::is_combinable`].
#[inline]
#[must_use]
pub fn is_combinable(kind: ChecksumKind) -> bool {
  kind.is_combinable()
}

impl fmt::Display for ChecksumKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for ChecksumKind {
  type Err = ChecksumError;

  fn from_str(s: &str) -> Result<Self> {
    Self::resolve(s)
  }
}
