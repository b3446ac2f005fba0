use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use acme_bench::chart::{self, ChartData};
use acme_bench::stats;
use acme_bench::types::{Measurement, ResultSet, Stats};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Deterministic pseudo-timings in milliseconds.
fn make_samples(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| ((i * 7919) % 1000) as f64 / 10.0 + 1.0)
        .collect()
}

fn make_chart(size: usize) -> ChartData {
    let mut stats = Stats::new();
    stats.insert("runs".to_string(), serde_json::json!(5));
    ChartData {
        entries: (0..size)
            .map(|i| (format!("target-{}", i), ((i * 31) % 97) as f64 + 0.5))
            .collect(),
        stats,
    }
}

fn make_result_set(size: usize) -> ResultSet {
    ResultSet {
        results: (0..size)
            .map(|i| Measurement {
                name: format!("target-{}", i),
                avg: i as f64 + 0.25,
                median: i as f64,
                min: i as f64 - 0.5,
                max: i as f64 + 2.0,
            })
            .collect(),
        stats: Stats::new(),
    }
}

// ---------------------------------------------------------------------------
// Benchmarks: stats
// ---------------------------------------------------------------------------

fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");
    for &size in &[5, 100, 10_000] {
        let samples = make_samples(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &samples, |b, s| {
            b.iter(|| stats::summarize("bench", s));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmarks: chart
// ---------------------------------------------------------------------------

fn bench_chart(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart");
    for &size in &[1, 10, 100] {
        let data = make_chart(size);
        group.bench_with_input(BenchmarkId::new("layout_bars", size), &data, |b, d| {
            b.iter(|| chart::layout_bars(d));
        });
        group.bench_with_input(BenchmarkId::new("render_svg", size), &data, |b, d| {
            b.iter(|| chart::render_svg(d));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmarks: results
// ---------------------------------------------------------------------------

fn bench_results_json(c: &mut Criterion) {
    let set = make_result_set(50);
    let json = set.to_json();

    let mut group = c.benchmark_group("results_json");
    group.bench_function("encode_50", |b| {
        b.iter(|| set.to_json());
    });
    group.bench_function("decode_50", |b| {
        b.iter(|| ResultSet::from_json(&json).unwrap());
    });
    group.finish();
}

// ---------------------------------------------------------------------------
// Criterion groups
// ---------------------------------------------------------------------------

criterion_group!(benches, bench_summarize, bench_chart, bench_results_json);
criterion_main!(benches);
