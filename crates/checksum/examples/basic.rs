//! Basic usage: pairwise combine, ordered fold, and S3 multipart labels.
//!
//! Run with: `cargo run --example basic -p checksum`

use checksum::{
  ChecksumCombine, ChecksumKind, Crc32C, MultipartChecksum, PartChecksum, __internal::reference_checksum, combine,
  fold, to_base64, to_checksum_bytes,
};

const PARTS: [&[u8]; 3] = [b"The quick brown ", b"fox jumps over ", b"the lazy dog"];

fn main() -> checksum::Result<()> {
  println!("=== Checksum Combine Examples ===\n");

  pairwise()?;
  ordered_fold()?;
  multipart_upload()?;
  Ok(())
}

/// Two adjacent ranges: `crc(A || B)` from `crc(A)`, `crc(B)` and `len(B)`.
fn pairwise() -> checksum::Result<()> {
  println!("--- Pairwise ---\n");

  let combined = combine(ChecksumKind::Crc32, 0x3524_41C2, 0x7D90_298B, 2)?;
  println!("CRC32(abc ‖ de)     0x{combined:08X}");
  assert_eq!(combined, 0x8587_D865);

  // Typed form, no registry lookup.
  let combined = Crc32C::combine(0x364B_3FB7, 0x6B40_B476, 2);
  println!("CRC32C(abc ‖ de)    0x{combined:08X}\n");
  assert_eq!(combined, 0xC450_D697);
  Ok(())
}

/// Many parts, each paired with its own length.
fn ordered_fold() -> checksum::Result<()> {
  println!("--- Ordered Fold ---\n");

  for kind in [ChecksumKind::Crc32, ChecksumKind::Crc32C, ChecksumKind::Crc64Nvme] {
    let parts: Vec<PartChecksum> = PARTS
      .iter()
      .map(|p| PartChecksum::new(reference_checksum(kind, p).unwrap_or_default(), p.len() as u64))
      .collect();
    let whole = fold(kind, &parts)?;
    println!("{:<10} 0x{whole:016X}", kind.name());
    assert_eq!(Some(whole), reference_checksum(kind, &PARTS.concat()));
  }
  println!();
  Ok(())
}

/// The S3 wire form: Base64 per part in, `"<base64>-<parts>"` out.
fn multipart_upload() -> checksum::Result<()> {
  println!("--- Multipart Upload ---\n");

  let kind = ChecksumKind::resolve("CRC64NVME")?;
  let mut upload = MultipartChecksum::new(kind)?;
  for part in PARTS {
    let value = reference_checksum(kind, part).unwrap_or_default();
    let encoded = to_base64(&to_checksum_bytes(kind, value)?);
    println!("part {:>2} bytes  {encoded}", part.len());
    upload.push_base64(&encoded, part.len() as u64)?;
  }

  let object = upload.finish()?;
  println!("object {} bytes {}", object.total_length(), object.label());
  assert_eq!(object.label(), "12xUBUlUwUM=-3");
  assert!(object.matches_label("12xUBUlUwUM=-3")?);
  Ok(())
}
