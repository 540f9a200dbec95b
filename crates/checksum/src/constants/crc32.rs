//! CRC32 (ISO-HDLC) constants.
//!
//! Polynomial: 0x04C11DB7 (reflected: 0xEDB88320)
//! Used by: S3 `x-amz-checksum-crc32`, gzip, PNG, zip

use crate::gf2;

/// Register width in bits.
pub const WIDTH: u32 = 32;

/// CRC32 polynomial in reflected (bit-reversed) form.
pub const POLYNOMIAL: u64 = 0xEDB8_8320;

/// CRC32 polynomial in normal form.
pub const POLYNOMIAL_NORMAL: u64 = 0x04C1_1DB7;

/// Check value: CRC of the ASCII string `"123456789"`.
pub const CHECK: u64 = 0xCBF4_3926;

const _: () = assert!(gf2::reflect_bits_u64(POLYNOMIAL_NORMAL, WIDTH) == POLYNOMIAL);
