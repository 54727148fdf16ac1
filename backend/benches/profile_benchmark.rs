use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use numerology_api::algorithms::{mahadasha_sequence, reduce};
use numerology_api::services;

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduction");

    group.bench_function("reduce_1000", |b| {
        b.iter(|| {
            for n in 0..1000u32 {
                black_box(reduce(black_box(n * 7919), false));
            }
        });
    });

    group.finish();
}

fn bench_mahadasha(c: &mut Criterion) {
    let mut group = c.benchmark_group("mahadasha");

    for span in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("span_years", span), &span, |b, span| {
            b.iter(|| black_box(mahadasha_sequence(black_box(5), 1900, 1900 + *span)));
        });
    }

    group.finish();
}

fn bench_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("profile");

    group.bench_function("full_profile", |b| {
        b.iter(|| black_box(services::get_profile(black_box("15-08-1990"), 2024, 2030)));
    });

    group.bench_function("day_dasha", |b| {
        b.iter(|| {
            black_box(services::get_day_dasha(
                black_box("15-08-1990"),
                black_box("25-12-2024"),
                11,
            ))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_reduce, bench_mahadasha, bench_profile);
criterion_main!(benches);
