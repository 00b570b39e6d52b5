// Criterion benchmarks for the five filter variants.
//
// Schedule (matches the filter-bench defaults):
//   warm-up:      10 iterations  -> 2 s warm-up time
//   measurement:  10 x 200 ms    -> 2 s measurement time
//   setup:        fresh fixture per invocation (iter_batched, PerIteration),
//                 so generation cost is excluded and not amortised
//   throughput:   elements/s per variant and size
//
// Sizes: 10, 100, 1K, 10K, 100K, 1M uniform f64 in [1, 4).
//
// Run: cargo bench -p filter-core --bench filter_benchmark
//      cargo bench -p filter-core --bench filter_benchmark -- one_filter/1000000

use std::hint::black_box;
use std::time::Duration;

use criterion::{
    criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use filter_core::{generate_for, FilterVariant, InputSize};

fn bench_variant(c: &mut Criterion, variant: FilterVariant) {
    let mut group = c.benchmark_group(variant.name());
    group
        .warm_up_time(Duration::from_secs(2))
        .measurement_time(Duration::from_secs(2));

    for size in InputSize::ALL {
        group.throughput(Throughput::Elements(size.elements() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || generate_for(size),
                |fixture| black_box(variant.apply(black_box(&fixture))),
                BatchSize::PerIteration,
            );
        });
    }
    group.finish();
}

// ── one_filter: d < π && d > e && d != 3 && d != 2 ──────────────────────────

fn one_filter(c: &mut Criterion) {
    bench_variant(c, FilterVariant::OneFilter);
}

// ── multiple_filters: d > π | d < e | d != 3 | d != 2 ──────────────────────

fn multiple_filters(c: &mut Criterion) {
    bench_variant(c, FilterVariant::MultipleFilters);
}

fn one_filter_parallel(c: &mut Criterion) {
    bench_variant(c, FilterVariant::OneFilterParallel);
}

fn multiple_filters_parallel(c: &mut Criterion) {
    bench_variant(c, FilterVariant::MultipleFiltersParallel);
}

// ── indexed_loop: d > π && d > e && d != 3 && d != 2 ────────────────────────

fn indexed_loop(c: &mut Criterion) {
    bench_variant(c, FilterVariant::IndexedLoop);
}

criterion_group!(
    benches,
    one_filter,
    multiple_filters,
    one_filter_parallel,
    multiple_filters_parallel,
    indexed_loop,
);
criterion_main!(benches);
