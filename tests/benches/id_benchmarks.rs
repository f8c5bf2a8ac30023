//! # LAr-Core Identifier Benchmarks
//!
//! | Operation | Notes |
//! |-----------|-------|
//! | Sort | Shuffled wire IDs, lexicographic order |
//! | Render | `Display` of wire IDs |
//! | Parse | `FromStr` of rendered wire IDs |
//! | Middle point | Centroid of wire centers |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lc_01_element_ids::{ElementId, WireID};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use shared_types::{MiddlePointAccumulator, Point};

fn wires(count: usize) -> Vec<WireID> {
    (0..count as u32)
        .map(|i| WireID::new(i % 2, (i / 2) % 4, (i / 8) % 3, i / 24))
        .collect()
}

fn shuffled_wires(count: usize) -> Vec<WireID> {
    let mut ids = wires(count);
    ids.shuffle(&mut rand::rngs::StdRng::seed_from_u64(7));
    ids
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("lc-01-sort");

    for size in [100, 1_000, 10_000] {
        let ids = shuffled_wires(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("sort_wire_ids", size), &ids, |b, ids| {
            b.iter(|| {
                let mut ids = ids.clone();
                ids.sort_unstable();
                black_box(ids)
            })
        });
        group.bench_with_input(BenchmarkId::new("three_way_cmp", size), &ids, |b, ids| {
            b.iter(|| {
                ids.windows(2)
                    .map(|pair| pair[0].three_way_cmp(&pair[1]))
                    .sum::<i32>()
            })
        });
    }

    group.finish();
}

fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("lc-01-text");
    let ids = wires(1_000);
    let rendered: Vec<String> = ids.iter().map(ToString::to_string).collect();

    group.throughput(Throughput::Elements(ids.len() as u64));
    group.bench_function("render_wire_ids", |b| {
        b.iter(|| {
            ids.iter()
                .map(|id| black_box(id.to_string()).len())
                .sum::<usize>()
        })
    });
    group.bench_function("parse_wire_ids", |b| {
        b.iter(|| {
            rendered
                .iter()
                .filter_map(|text| text.parse::<WireID>().ok())
                .count()
        })
    });

    group.finish();
}

fn bench_middle_point(c: &mut Criterion) {
    let points: Vec<Point> = wires(10_000)
        .iter()
        .map(|w| Point::new(w.plane() as f64, w.tpc() as f64, w.wire() as f64 * 0.3))
        .collect();

    c.bench_function("shared-types/middle_point_10k", |b| {
        b.iter(|| {
            let acc: MiddlePointAccumulator = points.iter().copied().collect();
            black_box(acc.middle_point())
        })
    });
}

criterion_group!(benches, bench_sort, bench_text, bench_middle_point);
criterion_main!(benches);
