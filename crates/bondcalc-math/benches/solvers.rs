//! Benchmarks for the bisection solver.

use std::hint::black_box;

use bondcalc_math::solvers::{bisection, SolverConfig};
use criterion::{criterion_group, criterion_main, Criterion};

fn coupon_residual(y: f64) -> f64 {
    let discount = (1.0 + y).powf(-10.0);
    50.0 / y * (1.0 - discount) + 1000.0 * discount - 950.0
}

fn bench_bisection(c: &mut Criterion) {
    let config = SolverConfig::default();

    c.bench_function("bisection_coupon_ytm", |b| {
        b.iter(|| bisection(coupon_residual, black_box(1e-6), black_box(5.0), &config))
    });

    c.bench_function("bisection_invalid_bracket", |b| {
        b.iter(|| bisection(|x| x - 3.0, black_box(5.0), black_box(10.0), &config))
    });
}

criterion_group!(benches, bench_bisection);
criterion_main!(benches);
