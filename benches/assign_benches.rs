use std::hint::black_box;

use compact_interval_map::IntervalMap;
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

/// Map with `runs` disjoint unit runs spaced four keys apart.
fn build_map(runs: u32) -> IntervalMap<u32, u32> {
    let mut map = IntervalMap::new(0);
    for i in 1..=runs {
        map.assign(i * 4, i * 4 + 2, i);
    }
    map
}

/// Local assign on maps of growing size; should stay near-flat (O(log n)).
fn local_assign_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("local assign");
    for runs in [1_000_u32, 10_000, 100_000] {
        let mut map = build_map(runs);
        let cp = map.checkpoint();
        group.bench_with_input(BenchmarkId::from_parameter(runs), &runs, |b, &runs| {
            let mut i = 0;
            b.iter(|| {
                i = (i + 1) % runs;
                map.assign(i * 4 + 1, i * 4 + 3, u32::MAX);
                black_box(map.len());
            });
        });
        map.rollback(cp);
    }
    group.finish();
}

/// Assign covering every breakpoint; cost dominated by interior removal.
fn sweeping_assign_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweeping assign");
    for runs in [1_000_u32, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(runs), &runs, |b, &runs| {
            b.iter_batched(
                || build_map(runs),
                |mut map| {
                    map.assign(1, runs * 4 + 4, 7);
                    map
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn lookup_bench(c: &mut Criterion) {
    let map = build_map(100_000);
    c.bench_function("lookup 100k runs", |b| {
        let mut key = 0_u32;
        b.iter(|| {
            key = key.wrapping_add(7_919) % 400_000;
            black_box(map.lookup(&key));
        });
    });
}

criterion_group!(
    assign_benches,
    local_assign_bench,
    sweeping_assign_bench,
    lookup_bench
);
criterion_main!(assign_benches);
