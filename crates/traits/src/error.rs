//! Error types for checksum combination.
//!
//! Nothing in the engine performs I/O, so no error here is transient: the
//! same inputs always fail the same way. Callers must abort the current
//! combination rather than substitute a default value.

use alloc::string::String;

/// Convenience alias used throughout the workspace.
pub type Result<T, E = ChecksumError> = core::result::Result<T, E>;

/// Failure reported by the registry, the engine, or the codec.
///
/// # Examples
///
/// ```
/// use traits::ChecksumError;
///
/// let err = ChecksumError::NotCombinable("SHA256");
/// assert_eq!(err.to_string(), "SHA256 checksums cannot be combined");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ChecksumError {
  /// The algorithm tag is not one of the recognized names (exact, case-sensitive).
  #[error("unsupported checksum algorithm `{0}`")]
  UnsupportedAlgorithm(String),

  /// The algorithm is not a CRC and has no linear combine operation.
  ///
  /// This is a contract violation by the caller, not a data error.
  #[error("{0} checksums cannot be combined")]
  NotCombinable(&'static str),

  /// A checksum value was not valid standard, padded Base64.
  #[error("checksum is not valid base64")]
  InvalidBase64,

  /// A decoded checksum had the wrong number of bytes.
  #[error("checksum is {actual} bytes, expected {expected}")]
  InvalidLength {
    /// Byte count the algorithm requires (or the maximum accepted).
    expected: usize,
    /// Byte count that was supplied.
    actual: usize,
  },

  /// A multipart label was not `<base64>` or `<base64>-<parts>`.
  #[error("malformed multipart checksum label")]
  InvalidLabel,

  /// A fold was asked to combine zero parts.
  #[error("no parts to combine")]
  EmptyParts,
}

#[cfg(test)]
mod tests {
  use alloc::{format, string::ToString};

  use super::*;

  #[test]
  fn display_messages() {
    assert_eq!(
      ChecksumError::UnsupportedAlgorithm("crc32".into()).to_string(),
      "unsupported checksum algorithm `crc32`"
    );
    assert_eq!(
      ChecksumError::NotCombinable("MD5").to_string(),
      "MD5 checksums cannot be combined"
    );
    assert_eq!(ChecksumError::InvalidBase64.to_string(), "checksum is not valid base64");
    assert_eq!(
      ChecksumError::InvalidLength { expected: 4, actual: 8 }.to_string(),
      "checksum is 8 bytes, expected 4"
    );
    assert_eq!(ChecksumError::InvalidLabel.to_string(), "malformed multipart checksum label");
    assert_eq!(ChecksumError::EmptyParts.to_string(), "no parts to combine");
  }

  #[test]
  fn debug_names_variant() {
    let dbg = format!("{:?}", ChecksumError::EmptyParts);
    assert_eq!(dbg, "EmptyParts");
  }

  #[test]
  fn trait_bounds() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    fn assert_error<T: core::error::Error + 'static>() {}

    assert_send::<ChecksumError>();
    assert_sync::<ChecksumError>();
    assert_error::<ChecksumError>();
  }

  #[test]
  fn error_has_no_source() {
    use core::error::Error;

    let err = ChecksumError::InvalidLabel;
    assert!(err.source().is_none());
  }

  #[test]
  fn result_alias_defaults_error_type() {
    fn fails() -> Result<()> {
      Err(ChecksumError::EmptyParts)
    }
    assert_eq!(fails().unwrap_err(), ChecksumError::EmptyParts);
  }
}
