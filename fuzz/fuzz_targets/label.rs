//! Fuzz target for received checksum parsing.
//!
//! Arbitrary text must never panic the label parser or the Base64 decoder,
//! and every label we render must verify against its own checksum.

#![no_main]

use arbitrary::Arbitrary;
use checksum::{ChecksumKind, MultipartChecksum, parse_label};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  text: String,
  parts: Vec<(u64, u32)>,
  crc64: bool,
}

fuzz_target!(|input: Input| {
  if let Ok((value, count)) = parse_label(&input.text) {
    assert!(!value.is_empty() || count.is_none());
    assert!(count.is_none_or(|n| n > 0));
  }

  let kind = if input.crc64 { ChecksumKind::Crc64Nvme } else { ChecksumKind::Crc32C };
  let Ok(mut acc) = MultipartChecksum::new(kind) else {
    return;
  };
  for &(value, len) in &input.parts {
    acc.push(value, u64::from(len));
  }
  let Ok(composite) = acc.finish() else {
    return;
  };

  let _ = composite.matches_label(&input.text);
  assert_eq!(composite.matches_label(&composite.label()), Ok(true));
  assert_eq!(composite.matches_label(&composite.to_base64()), Ok(true));
});
