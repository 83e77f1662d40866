//! Benchmarks for the generation pipeline at a few portfolio scales.

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use estateseed_core::generate::{generate, GenerationProfile};

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid calendar date")
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate/full_pass");
    group.sample_size(10);

    for scale in [0.01, 0.05, 0.25] {
        let profile = GenerationProfile::new(42, anchor()).scaled(scale);
        let rows = generate(&profile).total_rows();

        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(
            BenchmarkId::new("scale", format!("{}", scale)),
            &profile,
            |b, profile| {
                b.iter(|| generate(profile));
            },
        );
    }
    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate/encode_rows");
    let dataset = generate(&GenerationProfile::new(42, anchor()).scaled(0.05));

    group.throughput(Throughput::Elements(dataset.total_rows() as u64));
    group.bench_function("tables", |b| {
        b.iter(|| dataset.tables());
    });
    group.finish();
}

criterion_group!(benches, bench_generate, bench_encode);
criterion_main!(benches);
