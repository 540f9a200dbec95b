//! Fuzz target for CRC combine operations.
//!
//! Folds arbitrary chunkings of arbitrary data and checks the result against
//! the bitwise CRC of the whole buffer, for every combinable algorithm.

#![no_main]

use arbitrary::Arbitrary;
use checksum::{ChecksumKind, PartChecksum, __internal::reference_checksum, combine, fold};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  splits: Vec<usize>,
  a: u64,
  b: u64,
  len: u64,
}

const KINDS: [ChecksumKind; 3] = [ChecksumKind::Crc32, ChecksumKind::Crc32C, ChecksumKind::Crc64Nvme];

fuzz_target!(|input: Input| {
  let data = &input.data;

  let mut splits: Vec<usize> = input.splits.iter().map(|s| s % (data.len() + 1)).collect();
  splits.push(data.len());
  splits.sort_unstable();
  splits.dedup();

  for kind in KINDS {
    check_fold(kind, data, &splits);

    let cached = combine(kind, input.a, input.b, input.len);
    let uncached = checksum::__internal::combine_uncached(kind, input.a, input.b, input.len);
    assert_eq!(cached, uncached, "{kind} cached/uncached mismatch at len={}", input.len);
  }
});

fn check_fold(kind: ChecksumKind, data: &[u8], splits: &[usize]) {
  let crc = |bytes: &[u8]| reference_checksum(kind, bytes).unwrap_or_default();

  let mut parts = Vec::with_capacity(splits.len());
  let mut prev = 0;
  for &split in splits {
    let chunk = &data[prev..split];
    parts.push(PartChecksum::new(crc(chunk), chunk.len() as u64));
    prev = split;
  }

  assert_eq!(fold(kind, &parts), Ok(crc(data)), "{kind} fold mismatch");
}
