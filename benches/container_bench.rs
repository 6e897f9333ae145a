//! Benchmark for the outcome container combinator pipeline.
//!
//! Measures the cost of a construct-map-fold pipeline on each track; both
//! should compile down to straight-line code with no branching overhead
//! beyond the single variant dispatch.

use criterion::{Criterion, criterion_group, criterion_main};
use outcome::Outcome;
use std::hint::black_box;

fn benchmark_success_pipeline(criterion: &mut Criterion) {
    criterion.bench_function("success_pipeline", |bencher| {
        bencher.iter(|| {
            let outcome: Outcome<u64, String> = Outcome::ok(black_box(21));
            let value = outcome
                .map_ok(|value| value * 2)
                .tap_ok(|value| {
                    black_box(*value);
                })
                .fold(|_| 0);
            black_box(value)
        });
    });
}

fn benchmark_failure_pipeline(criterion: &mut Criterion) {
    criterion.bench_function("failure_pipeline", |bencher| {
        bencher.iter(|| {
            let outcome: Outcome<u64, String> =
                Outcome::err(black_box("unreachable host").to_string());
            let value = outcome
                .map_err(|message| message.len())
                .reduce(|_| 0, |length| length);
            black_box(value)
        });
    });
}

criterion_group!(
    benches,
    benchmark_success_pipeline,
    benchmark_failure_pipeline
);
criterion_main!(benches);
