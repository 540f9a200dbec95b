//! Multipart upload flows, from per-part Base64 checksums to the final label.

use checksum::{
  ChecksumError, ChecksumKind, CompositeChecksum, MultipartChecksum, __internal::reference_checksum, combine_base64,
  parse_label, to_base64, to_checksum_bytes,
};

const PARTS: [&[u8]; 3] = [b"The quick brown ", b"fox jumps over ", b"the lazy dog"];

fn part_base64(kind: ChecksumKind, data: &[u8]) -> String {
  let value = reference_checksum(kind, data).unwrap();
  to_base64(&to_checksum_bytes(kind, value).unwrap())
}

fn upload(kind: ChecksumKind) -> CompositeChecksum {
  let mut acc = MultipartChecksum::new(kind).unwrap();
  for part in PARTS {
    acc.push_base64(&part_base64(kind, part), part.len() as u64).unwrap();
  }
  acc.finish().unwrap()
}

#[test]
fn part_checksums_are_known() {
  let expected = [
    (ChecksumKind::Crc32, ["yBsqfA==", "0Z5IEA==", "KRBX4w=="]),
    (ChecksumKind::Crc32C, ["O/mZHg==", "avvGUg==", "rE67xg=="]),
    (ChecksumKind::Crc64Nvme, ["12vKGpdWRY4=", "X2dmskyaa2s=", "QLhF/tMVteg="]),
  ];
  for (kind, values) in expected {
    for (part, value) in PARTS.iter().zip(values) {
      assert_eq!(part_base64(kind, part), value, "{kind}");
    }
  }
}

#[test]
fn combined_labels() {
  for (kind, whole) in [
    (ChecksumKind::Crc32, "QU+jOQ=="),
    (ChecksumKind::Crc32C, "ImIEBA=="),
    (ChecksumKind::Crc64Nvme, "12xUBUlUwUM="),
  ] {
    let composite = upload(kind);
    assert_eq!(composite.to_base64(), whole, "{kind}");
    assert_eq!(composite.label(), format!("{whole}-3"), "{kind}");
    assert_eq!(composite.part_count(), 3);
    assert_eq!(composite.total_length(), 43);
    assert_eq!(composite.value(), reference_checksum(kind, &PARTS.concat()).unwrap());
  }
}

#[test]
fn combine_base64_matches_accumulator() {
  for kind in [ChecksumKind::Crc32, ChecksumKind::Crc32C, ChecksumKind::Crc64Nvme] {
    let parts: Vec<(String, u64)> = PARTS.iter().map(|p| (part_base64(kind, p), p.len() as u64)).collect();
    let label = combine_base64(kind, parts.iter().map(|(v, l)| (v.as_str(), *l))).unwrap();
    assert_eq!(label, upload(kind).label(), "{kind}");
  }
}

#[test]
fn received_label_verifies() {
  let composite = upload(ChecksumKind::Crc32C);
  assert_eq!(composite.matches_label("ImIEBA==-3"), Ok(true));
  assert_eq!(composite.matches_label("ImIEBA=="), Ok(true));
  assert_eq!(composite.matches_label("ImIEBA==-2"), Ok(false));
  assert_eq!(composite.matches_label("AAAAAA==-3"), Ok(false));
  assert_eq!(composite.matches_label("ImIEBA==-x"), Err(ChecksumError::InvalidLabel));

  let label = composite.label();
  let (value, parts) = parse_label(&label).unwrap();
  assert_eq!((value, parts), ("ImIEBA==", Some(3)));
}

#[test]
fn wrong_width_part_is_rejected() {
  let mut acc = MultipartChecksum::new(ChecksumKind::Crc64Nvme).unwrap();
  let narrow = part_base64(ChecksumKind::Crc32, PARTS[0]);
  assert_eq!(
    acc.push_base64(&narrow, 16),
    Err(ChecksumError::InvalidLength { expected: 8, actual: 4 })
  );
  assert_eq!(acc.part_count(), 0);
}

#[test]
fn empty_upload_has_no_checksum() {
  let acc = MultipartChecksum::new(ChecksumKind::Crc32).unwrap();
  assert_eq!(acc.finish(), Err(ChecksumError::EmptyParts));
  assert_eq!(
    combine_base64(ChecksumKind::Crc32, std::iter::empty::<(&str, u64)>()),
    Err(ChecksumError::EmptyParts)
  );
  assert_eq!(
    MultipartChecksum::new(ChecksumKind::Sha256).err(),
    Some(ChecksumError::NotCombinable("SHA256"))
  );
}
