//! CRC combine benchmarks.
//!
//! Run: `cargo bench -p checksum -- combine`
//!
//! Combine cost grows with `log2(len_b)`, not with the data. The uncached
//! path rebuilds its operators on every call and shows what the per-kind
//! zero ladder saves.

use checksum::{ChecksumKind, PartChecksum, __internal::combine_uncached, combine, fold};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const KINDS: [ChecksumKind; 3] = [ChecksumKind::Crc32, ChecksumKind::Crc32C, ChecksumKind::Crc64Nvme];

const LENGTHS: &[(&str, u64)] = &[
  ("64B", 64),
  ("4KiB", 4 << 10),
  ("8MiB", 8 << 20),
  ("5GiB", 5 << 30),
  ("max", u64::MAX),
];

fn bench_combine(c: &mut Criterion) {
  for kind in KINDS {
    let mut group = c.benchmark_group(format!("combine/{}", kind.name().to_ascii_lowercase()));
    group.throughput(Throughput::Elements(1));

    for &(label, len) in LENGTHS {
      group.bench_with_input(BenchmarkId::new("cached", label), &len, |b, &len| {
        b.iter(|| combine(kind, core::hint::black_box(0x1234_5678), 0x8765_4321, len));
      });
      group.bench_with_input(BenchmarkId::new("uncached", label), &len, |b, &len| {
        b.iter(|| combine_uncached(kind, core::hint::black_box(0x1234_5678), 0x8765_4321, len));
      });
    }

    group.finish();
  }
}

fn bench_fold(c: &mut Criterion) {
  let mut group = c.benchmark_group("fold");

  // 10,000 parts of 8 MiB: the S3 part-count ceiling.
  for count in [2usize, 100, 10_000] {
    let parts: Vec<PartChecksum> = (0..count as u64)
      .map(|i| PartChecksum::new(i.wrapping_mul(0x9E37_79B9_7F4A_7C15), 8 << 20))
      .collect();
    group.throughput(Throughput::Elements(count as u64));

    for kind in KINDS {
      group.bench_with_input(BenchmarkId::new(kind.name(), count), &parts, |b, parts| {
        b.iter(|| fold(kind, core::hint::black_box(parts)));
      });
    }
  }

  group.finish();
}

criterion_group!(benches, bench_combine, bench_fold);
criterion_main!(benches);
