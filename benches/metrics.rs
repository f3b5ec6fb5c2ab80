//! Benchmarks for metric evaluation over synthetic query datasets.
//!
//! Run with: `cargo bench --bench metrics`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ndarray::Array1;
use rand::prelude::*;
use rankeval_rust::{KendallTau, Metric, QueryDataset, RankingMetric, Rbp, SpearmanRho};

const QUERY_SIZE: usize = 50;

fn synthetic(num_queries: usize) -> (QueryDataset, Array1<f64>) {
    let mut rng = StdRng::seed_from_u64(42);
    let n = num_queries * QUERY_SIZE;
    let labels = Array1::from_iter((0..n).map(|_| rng.gen_range(0..=4) as f64));
    let y_pred = labels.mapv(|y| y + rng.gen_range(-2.0..2.0));
    let sizes = vec![QUERY_SIZE; num_queries];
    let dataset = QueryDataset::from_query_sizes(labels, &sizes).expect("valid query sizes");
    (dataset, y_pred)
}

fn bench_metrics(c: &mut Criterion) {
    let metrics: Vec<RankingMetric> = vec![
        Rbp::new(Some(10), 1.0, 0.8).expect("valid rbp").into(),
        SpearmanRho::default().into(),
        KendallTau::default().into(),
    ];

    let mut group = c.benchmark_group("eval");
    for num_queries in [100, 1_000] {
        let (dataset, y_pred) = synthetic(num_queries);
        group.throughput(Throughput::Elements(num_queries as u64));

        for metric in &metrics {
            group.bench_with_input(
                BenchmarkId::new(format!("{}/sequential", metric), num_queries),
                &num_queries,
                |b, _| b.iter(|| metric.eval(black_box(&dataset), black_box(&y_pred.view()))),
            );
            group.bench_with_input(
                BenchmarkId::new(format!("{}/parallel", metric), num_queries),
                &num_queries,
                |b, _| {
                    b.iter(|| metric.eval_parallel(black_box(&dataset), black_box(&y_pred.view())))
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_metrics);
criterion_main!(benches);
