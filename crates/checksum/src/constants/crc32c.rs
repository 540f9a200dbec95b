//! CRC32-C (Castagnoli) constants.
//!
//! Polynomial: 0x1EDC6F41 (reflected: 0x82F63B78)
//! Used by: S3 `x-amz-checksum-crc32c`, iSCSI, SCTP, ext4

use crate::gf2;

/// Register width in bits.
pub const WIDTH: u32 = 32;

/// CRC32-C polynomial in reflected (bit-reversed) form.
pub const POLYNOMIAL: u64 = 0x82F6_3B78;

/// CRC32-C polynomial in normal form.
pub const POLYNOMIAL_NORMAL: u64 = 0x1EDC_6F41;

/// Check value: CRC of the ASCII string `"123456789"`.
pub const CHECK: u64 = 0xE306_9283;

const _: () = assert!(gf2::reflect_bits_u64(POLYNOMIAL_NORMAL, WIDTH) == POLYNOMIAL);
