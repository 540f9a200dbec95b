//! CRC64/NVME constants.
//!
//! Polynomial: 0xAD93D23594C93659 (reflected: 0x9A6C9329AC4BC9B5)
//!
//! Used by NVMe storage specification and AWS S3.

use crate::gf2;

/// Register width in bits.
pub const WIDTH: u32 = 64;

/// CRC64/NVME polynomial in reflected (bit-reversed) form.
pub const POLYNOMIAL: u64 = 0x9A6C_9329_AC4B_C9B5;

/// CRC64/NVME polynomial in normal (non-reflected) form.
pub const POLYNOMIAL_NORMAL: u64 = 0xAD93_D235_94C9_3659;

/// Check value: CRC of the ASCII string `"123456789"`.
pub const CHECK: u64 = 0xAE8B_1486_0A79_9888;

const _: () = assert!(gf2::reflect_bits_u64(POLYNOMIAL_NORMAL, WIDTH) == POLYNOMIAL);
