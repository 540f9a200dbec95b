//! Cross-library validation.
//!
//! Whole-buffer CRCs from `crc-fast` and `crc64fast-nvme` are the oracle:
//! combining the CRCs of two halves must reproduce their checksum of the
//! concatenation, and our combine must agree with `crc-fast`'s own.

// Proptest uses getcwd() which fails under Miri isolation.
#![cfg(not(miri))]

use checksum::{ChecksumKind, PartChecksum, combine, fold};
use crc_fast::CrcAlgorithm;
use crc64fast_nvme as ref_crc64fast_nvme;
use proptest::prelude::*;

fn algorithm(kind: ChecksumKind) -> CrcAlgorithm {
  match kind {
    ChecksumKind::Crc32 => CrcAlgorithm::Crc32IsoHdlc,
    ChecksumKind::Crc32C => CrcAlgorithm::Crc32Iscsi,
    ChecksumKind::Crc64Nvme => CrcAlgorithm::Crc64Nvme,
    other => panic!("{other} is not a CRC"),
  }
}

fn crc_fast(kind: ChecksumKind, data: &[u8]) -> u64 {
  crc_fast::checksum(algorithm(kind), data)
}

fn crc_kind() -> impl Strategy<Value = ChecksumKind> {
  prop_oneof![
    Just(ChecksumKind::Crc32),
    Just(ChecksumKind::Crc32C),
    Just(ChecksumKind::Crc64Nvme),
  ]
}

proptest! {
  #[test]
  fn combine_matches_crc_fast_oneshot(
    kind in crc_kind(),
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    split in any::<prop::sample::Index>()
  ) {
    let (a, b) = data.split_at(split.index(data.len() + 1));
    let combined = combine(kind, crc_fast(kind, a), crc_fast(kind, b), b.len() as u64).unwrap();
    prop_assert_eq!(combined, crc_fast(kind, &data));
  }

  #[test]
  fn combine_matches_crc_fast_combine(kind in crc_kind(), a in any::<u64>(), b in any::<u64>(), len in 0u64..=1 << 40) {
    let mask = kind.crc().unwrap().mask();
    let (a, b) = (a & mask, b & mask);
    let ours = combine(kind, a, b, len).unwrap();
    let reference = crc_fast::checksum_combine(algorithm(kind), a, b, len);
    prop_assert_eq!(ours, reference);
  }

  #[test]
  fn crc64_nvme_matches_crc64fast_nvme(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    chunk in 1usize..=257
  ) {
    let mut whole = ref_crc64fast_nvme::Digest::new();
    whole.write(&data);

    let parts: Vec<PartChecksum> = data
      .chunks(chunk)
      .map(|part| {
        let mut digest = ref_crc64fast_nvme::Digest::new();
        digest.write(part);
        PartChecksum::new(digest.sum64(), part.len() as u64)
      })
      .collect();

    if parts.is_empty() {
      prop_assert_eq!(whole.sum64(), 0);
    } else {
      prop_assert_eq!(fold(ChecksumKind::Crc64Nvme, &parts).unwrap(), whole.sum64());
    }
  }
}

#[test]
fn check_values_agree_with_crc_fast() {
  for kind in [ChecksumKind::Crc32, ChecksumKind::Crc32C, ChecksumKind::Crc64Nvme] {
    let params = kind.crc().unwrap();
    assert_eq!(crc_fast(kind, b"123456789"), params.check(), "{kind}");
  }
}
