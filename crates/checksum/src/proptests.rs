//! Property tests for the combination engine.
//!
//! Two invariants, checked for every CRC kind against the bitwise reference:
//!
//! 1. **Combine correctness**: `crc(A || B) == combine(crc(A), crc(B), len(B))`
//! 2. **Fold correctness**: folding any ordered chunking equals the one-shot CRC
//!
//! plus agreement between the cached ladder and the uncached engine for
//! arbitrary lengths, including ones no test could afford to materialize.

#![cfg(all(test, not(miri)))]

extern crate std;

use alloc::vec::Vec;

use proptest::prelude::*;

use crate::{
  ChecksumKind, PartChecksum, codec,
  combine::{combine, combine_uncached},
  multipart::fold,
  reference,
};

fn crc_kind() -> impl Strategy<Value = ChecksumKind> {
  prop_oneof![
    Just(ChecksumKind::Crc32),
    Just(ChecksumKind::Crc32C),
    Just(ChecksumKind::Crc64Nvme),
  ]
}

fn crc(kind: ChecksumKind, data: &[u8]) -> u64 {
  reference::checksum(kind, data).unwrap()
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn combine_correctness(
    kind in crc_kind(),
    data in proptest::collection::vec(any::<u8>(), 0..=2048),
    split in any::<usize>()
  ) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);

    let combined = combine(kind, crc(kind, a), crc(kind, b), b.len() as u64).unwrap();
    prop_assert_eq!(combined, crc(kind, &data));
  }

  #[test]
  fn fold_matches_oneshot(
    kind in crc_kind(),
    data in proptest::collection::vec(any::<u8>(), 1..=2048),
    mut cuts in proptest::collection::vec(any::<usize>(), 0..8)
  ) {
    for cut in &mut cuts {
      *cut %= data.len() + 1;
    }
    cuts.sort_unstable();

    let mut parts = Vec::new();
    let mut start = 0;
    for &cut in cuts.iter().chain(core::iter::once(&data.len())) {
      let chunk = &data[start..cut];
      parts.push(PartChecksum::new(crc(kind, chunk), chunk.len() as u64));
      start = cut;
    }

    prop_assert_eq!(fold(kind, &parts).unwrap(), crc(kind, &data));
  }

  #[test]
  fn zero_length_is_identity(kind in crc_kind(), a in any::<u64>(), b in any::<u64>()) {
    prop_assert_eq!(combine(kind, a, b, 0).unwrap(), a);
  }

  #[test]
  fn cached_matches_uncached(kind in crc_kind(), a in any::<u64>(), b in any::<u64>(), len in any::<u64>()) {
    prop_assert_eq!(combine(kind, a, b, len), combine_uncached(kind, a, b, len));
  }

  #[test]
  fn digests_never_combine(a in any::<u64>(), b in any::<u64>(), len in any::<u64>()) {
    for kind in [ChecksumKind::Sha1, ChecksumKind::Sha256, ChecksumKind::Md5] {
      prop_assert!(combine(kind, a, b, len).is_err());
    }
  }

  #[test]
  fn checksum_bytes_round_trip(kind in crc_kind(), value in any::<u64>()) {
    let mask = kind.crc().unwrap().mask();
    let bytes = codec::to_checksum_bytes(kind, value).unwrap();
    prop_assert_eq!(bytes.len(), kind.digest_size());
    prop_assert_eq!(codec::from_checksum_bytes(kind, &bytes).unwrap(), value & mask);
  }

  #[test]
  fn base64_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..=64)) {
    let text = codec::to_base64(&bytes);
    prop_assert_eq!(codec::from_base64(&text).unwrap(), bytes);
  }
}
