//! Polynomial constants for the combinable CRC algorithms.
//!
//! All three algorithms used by S3 multipart checksums are reflected
//! (LSB-first) with an all-ones initial value and final XOR, so only the
//! polynomial and the register width distinguish them.

pub mod crc32;
pub mod crc32c;
pub mod crc64_nvme;
