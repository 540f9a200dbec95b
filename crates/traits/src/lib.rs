//! Core checksum-combination traits for s3sum.
//!
//! This crate provides the seam between the combination engine and the code
//! that consumes it. It is `no_std` compatible (with `alloc`).
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Implementors |
//! |-------|---------|--------------|
//! | [`ChecksumCombine`] | O(log n) `crc(A ‖ B)` from `crc(A)`, `crc(B)`, `len(B)` | CRC32, CRC32C, CRC64/NVME |
//!
//! # Error Types
//!
//! - [`ChecksumError`] - every failure the engine can report
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod combine;
pub mod error;

pub use combine::ChecksumCombine;
pub use error::{ChecksumError, Result};
