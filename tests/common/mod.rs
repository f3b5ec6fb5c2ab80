//! Common test utilities for rankeval integration tests.

#![allow(dead_code)]

use ndarray::Array1;
use rand::prelude::*;
use rankeval_rust::*;

/// Synthetic query-grouped dataset with matching predictions.
pub struct SyntheticRun {
    pub dataset: QueryDataset,
    pub y_pred: Array1<Score>,
}

/// Random query sizes in `1..=max_size`.
pub fn create_query_sizes(num_queries: usize, max_size: usize, seed: u64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..num_queries).map(|_| rng.gen_range(1..=max_size)).collect()
}

/// Graded labels in `0..=max_grade` for every instance.
pub fn create_graded_labels(num_instances: usize, max_grade: u32, seed: u64) -> Array1<Label> {
    let mut rng = StdRng::seed_from_u64(seed);
    Array1::from_iter((0..num_instances).map(|_| rng.gen_range(0..=max_grade) as f64))
}

/// Predictions loosely correlated with the labels.
pub fn create_noisy_predictions(labels: &Array1<Label>, noise: f64, seed: u64) -> Array1<Score> {
    let mut rng = StdRng::seed_from_u64(seed);
    labels.mapv(|y| y + rng.gen_range(-noise..noise))
}

/// A complete synthetic evaluation run.
pub fn create_synthetic_run(num_queries: usize, max_size: usize, seed: u64) -> SyntheticRun {
    let sizes = create_query_sizes(num_queries, max_size, seed);
    let num_instances = sizes.iter().sum();
    let labels = create_graded_labels(num_instances, 4, seed + 1);
    let y_pred = create_noisy_predictions(&labels, 1.5, seed + 2);
    let dataset = QueryDataset::from_query_sizes(labels, &sizes).expect("valid query sizes");
    SyntheticRun { dataset, y_pred }
}

/// The two-query RBP example: `[[3, 0, 1], [1, 1]]`.
pub fn create_rbp_example() -> SyntheticRun {
    let dataset = QueryDataset::from_query_sizes(
        Array1::from_vec(vec![3.0, 0.0, 1.0, 1.0, 1.0]),
        &[3, 2],
    )
    .expect("valid query sizes");
    SyntheticRun {
        dataset,
        y_pred: Array1::from_vec(vec![0.9, 0.1, 0.5, 0.2, 0.8]),
    }
}

/// One of every metric kind, with cutoffs where they make sense.
pub fn create_all_metrics() -> Vec<RankingMetric> {
    vec![
        Rbp::new(None, 1.0, 0.8).expect("valid rbp").into(),
        Rbp::new(Some(5), 2.0, 0.5).expect("valid rbp").into(),
        SpearmanRho::new(None).expect("valid spearman").into(),
        SpearmanRho::new(Some(4)).expect("valid spearman").into(),
        Precision::new(Some(3), 2.0).expect("valid precision").into(),
        KendallTau::new(None).expect("valid kendall").into(),
    ]
}

/// Assert two per-query vectors agree, treating `NaN == NaN`.
pub fn assert_same_scores(a: &Array1<f64>, b: &Array1<f64>) {
    assert_eq!(a.len(), b.len());
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        assert!(
            (x.is_nan() && y.is_nan()) || x.to_bits() == y.to_bits(),
            "query {}: {} != {}",
            i,
            x,
            y
        );
    }
}
