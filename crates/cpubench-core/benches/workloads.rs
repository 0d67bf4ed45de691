//! Criterion benchmarks for the two workloads.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use cpubench_core::chudnovsky::compute_pi_digits;
use cpubench_core::primes::count_primes_with;

fn bench_pi_digits(c: &mut Criterion) {
    let digit_counts: Vec<u64> = vec![100, 1_000, 5_000];

    let mut group = c.benchmark_group("Chudnovsky");
    for &digits in &digit_counts {
        group.bench_with_input(BenchmarkId::from_parameter(digits), &digits, |b, &digits| {
            b.iter(|| compute_pi_digits(digits).unwrap());
        });
    }
    group.finish();
}

fn bench_prime_counts(c: &mut Criterion) {
    let bounds: Vec<u64> = vec![1_000, 5_000, 10_000];

    let mut group = c.benchmark_group("TrialDivision");
    for &max in &bounds {
        group.bench_with_input(BenchmarkId::from_parameter(max), &max, |b, &max| {
            b.iter(|| count_primes_with(max, 0).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pi_digits, bench_prime_counts);
criterion_main!(benches);
