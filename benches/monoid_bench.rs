//! Benchmark for single-pass `mconcat` against a pairwise `mappend` fold.
//!
//! Covers the static `List` monoid and the dynamic `generic` layer, where
//! each pairwise step re-classifies its operands.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use monadix::collection::List;
use monadix::generic::{self, Value};
use monadix::typeclass::{Monoid, Semigroup};
use std::hint::black_box;

fn chunks(count: usize) -> Vec<List<usize>> {
    (0..count).map(|index| List::from(vec![index; 8])).collect()
}

fn values(count: usize) -> Vec<Value> {
    (0..count)
        .map(|index| Value::list([i64::try_from(index).unwrap_or(i64::MAX)]))
        .collect()
}

// =============================================================================
// List Benchmark
// =============================================================================

fn benchmark_list(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("list_mconcat");

    for count in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("mconcat", count), &count, |bencher, &count| {
            bencher.iter_batched(
                || chunks(count),
                |lists| black_box(List::mconcat(lists)),
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("pairwise", count), &count, |bencher, &count| {
            bencher.iter_batched(
                || chunks(count),
                |lists| black_box(lists.into_iter().fold(List::mempty(), Semigroup::mappend)),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// =============================================================================
// Generic Benchmark
// =============================================================================

fn benchmark_generic(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("generic_mconcat");

    for count in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("mconcat", count), &count, |bencher, &count| {
            bencher.iter_batched(
                || values(count),
                |operands| black_box(generic::mconcat(operands)),
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("pairwise", count), &count, |bencher, &count| {
            bencher.iter_batched(
                || values(count),
                |operands| black_box(operands.into_iter().try_fold(Value::Mempty, generic::mappend)),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_list, benchmark_generic);

criterion_main!(benches);
