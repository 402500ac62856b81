//! Benchmarks for analytics aggregation
//!
//! Run with: cargo bench

use analytics_portal::analytics::{TodoRecord, TodoStats};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn create_test_records(count: usize) -> Vec<TodoRecord> {
    (0..count)
        .map(|i| TodoRecord {
            id: i as u64,
            user_id: (i % 10) as u64 + 1,
            completed: i % 3 == 0,
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for size in [200, 10_000, 100_000] {
        let records = create_test_records(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("from_records_{}", size), |b| {
            b.iter(|| TodoStats::from_records(black_box(&records)))
        });
    }

    group.finish();
}

fn bench_chart_series(c: &mut Criterion) {
    let stats = TodoStats::from_records(&create_test_records(10_000));

    c.bench_function("status_slices", |b| {
        b.iter(|| black_box(&stats).status_slices())
    });

    c.bench_function("per_user_series", |b| {
        b.iter(|| black_box(&stats).per_user_series())
    });
}

criterion_group!(benches, bench_aggregate, bench_chart_series);
criterion_main!(benches);
