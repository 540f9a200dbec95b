//! Whole-object CRC checksums for S3 multipart uploads.
//!
//! S3 checksums every part of a multipart upload on its own. `s3sum` turns
//! the ordered per-part checksums into the checksum of the whole object
//! without touching the object's bytes, for the three CRC algorithms S3
//! supports. SHA-1, SHA-256 and MD5 are recognized but cannot be combined.
//!
//! # Quick Start
//!
//! ```
//! use s3sum::{ChecksumKind, MultipartChecksum};
//!
//! let mut upload = MultipartChecksum::new(ChecksumKind::resolve("CRC32C")?)?;
//! upload.push_base64("O/mZHg==", 16)?; // "The quick brown "
//! upload.push_base64("avvGUg==", 15)?; // "fox jumps over "
//! upload.push_base64("rE67xg==", 12)?; // "the lazy dog"
//!
//! let object = upload.finish()?;
//! assert_eq!(object.label(), "ImIEBA==-3");
//! assert!(object.matches_label("ImIEBA==-3")?);
//! # Ok::<(), s3sum::ChecksumError>(())
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Caches per-algorithm combine operators |
//! | `checksums` | Yes | CRC32, CRC32C and CRC64/NVME combination |
//!
//! ## `no_std` Usage
//!
//! ```toml
//! [dependencies]
//! s3sum = { version = "0.1", default-features = false, features = ["checksums"] }
//! ```
//!
//! Without `std`, combine operators are rebuilt per call. Results are identical.
#![cfg_attr(not(feature = "std"), no_std)]

pub use traits::{ChecksumCombine, ChecksumError, Result};

// =============================================================================
// Checksums
// =============================================================================

#[cfg(feature = "checksums")]
pub use checksum::{
  // Algorithms
  ChecksumKind,
  // Typed engines
  Crc32,
  Crc32C,
  Crc64Nvme,
  CrcParams,
  // Multipart
  CompositeChecksum,
  MultipartChecksum,
  PartChecksum,
  combine,
  combine_base64,
  fold,
  is_combinable,
  resolve,
};

/// Wire encoding of checksum values and multipart labels.
#[cfg(feature = "checksums")]
pub mod codec {
  pub use checksum::{
    CrcBytes, combined_label, from_base64, from_be_bytes, from_checksum_bytes, parse_label, to_base64, to_be_bytes,
    to_checksum_bytes,
  };
}

/// Algorithm parameters: polynomials, widths and check values.
#[cfg(feature = "checksums")]
pub mod constants {
  pub use checksum::constants::*;
}
