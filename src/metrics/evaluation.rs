//! Result of evaluating one metric over a dataset.

use crate::core::error::{RankEvalError, Result};
use ndarray::Array1;
use serde::Serialize;
use std::fmt;

/// Per-query scores and their aggregate for one metric.
///
/// Queries whose metric is undefined hold `NaN` in [`per_query`] and are left
/// out of [`overall`]'s denominator.
///
/// [`per_query`]: MetricEvaluation::per_query
/// [`overall`]: MetricEvaluation::overall
#[derive(Debug, Clone, Serialize)]
pub struct MetricEvaluation {
    /// Display label of the metric that produced the scores
    label: String,
    /// Mean over defined per-query scores (`NaN` if none are defined)
    overall: f64,
    /// One score per query, in dataset order
    per_query: Array1<f64>,
    /// Number of queries left out of the mean
    num_excluded: usize,
}

impl MetricEvaluation {
    pub(crate) fn new(
        label: String,
        overall: f64,
        per_query: Array1<f64>,
        num_excluded: usize,
    ) -> Self {
        Self {
            label,
            overall,
            per_query,
            num_excluded,
        }
    }

    /// Label of the metric.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Overall score: arithmetic mean of the defined per-query scores.
    pub fn overall(&self) -> f64 {
        self.overall
    }

    /// Per-query scores in dataset query order.
    pub fn per_query(&self) -> &Array1<f64> {
        &self.per_query
    }

    /// Number of queries evaluated.
    pub fn num_queries(&self) -> usize {
        self.per_query.len()
    }

    /// Number of queries that contributed to the mean.
    pub fn num_defined(&self) -> usize {
        self.per_query.len() - self.num_excluded
    }

    /// Number of queries excluded from the mean as undefined.
    pub fn num_excluded(&self) -> usize {
        self.num_excluded
    }

    /// Indices of the queries with an undefined score.
    pub fn undefined_queries(&self) -> Vec<usize> {
        self.per_query
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_nan())
            .map(|(q, _)| q)
            .collect()
    }

    /// Defined score of query `query`.
    pub fn query_score(&self, query: usize) -> Result<f64> {
        let score = *self
            .per_query
            .get(query)
            .ok_or_else(|| RankEvalError::index_out_of_bounds(query, self.per_query.len()))?;
        if score.is_nan() {
            return Err(RankEvalError::undefined_metric_value(self.label.clone(), query));
        }
        Ok(score)
    }

    /// Split into `(overall, per_query)`.
    pub fn into_parts(self) -> (f64, Array1<f64>) {
        (self.overall, self.per_query)
    }
}

impl fmt::Display for MetricEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.6}", self.label, self.overall)?;
        if self.num_excluded > 0 {
            write!(
                f,
                " ({} of {} queries undefined)",
                self.num_excluded,
                self.num_queries()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn sample() -> MetricEvaluation {
        MetricEvaluation::new("SpearmanRho".to_string(), 0.5, array![1.0, f64::NAN, 0.0], 1)
    }

    #[test]
    fn test_accessors() {
        let eval = sample();
        assert_eq!(eval.label(), "SpearmanRho");
        assert_eq!(eval.overall(), 0.5);
        assert_eq!(eval.num_queries(), 3);
        assert_eq!(eval.num_defined(), 2);
        assert_eq!(eval.num_excluded(), 1);
        assert_eq!(eval.undefined_queries(), vec![1]);
    }

    #[test]
    fn test_query_score() {
        let eval = sample();
        assert_eq!(eval.query_score(0).unwrap(), 1.0);
        assert!(matches!(
            eval.query_score(1),
            Err(RankEvalError::UndefinedMetricValue { query: 1, .. })
        ));
        assert!(matches!(
            eval.query_score(3),
            Err(RankEvalError::IndexOutOfBounds { index: 3, length: 3 })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            sample().to_string(),
            "SpearmanRho: 0.500000 (1 of 3 queries undefined)"
        );
        let clean = MetricEvaluation::new("RBP[>=1]".to_string(), 0.75, array![0.75, 0.75], 0);
        assert_eq!(clean.to_string(), "RBP[>=1]: 0.750000");
    }

    #[test]
    fn test_into_parts() {
        let (overall, per_query) = sample().into_parts();
        assert_eq!(overall, 0.5);
        assert_eq!(per_query.len(), 3);
    }

    #[test]
    fn test_serialize_json() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["label"], "SpearmanRho");
        assert_eq!(json["num_excluded"], 1);
    }
}
