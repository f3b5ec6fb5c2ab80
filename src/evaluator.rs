//! Evaluation of a fixed metric set over one dataset.
//!
//! [`Evaluator`] runs every configured metric in order and gathers the
//! results into an [`EvaluationReport`]. Structural input errors are caught
//! once, before any metric runs.

use crate::config::EvaluationConfig;
use crate::core::error::Result;
use crate::core::traits::{Metric, RankingDataset};
use crate::core::types::Score;
use crate::metrics::{aggregate, MetricEvaluation, RankingMetric};
use crate::{config_error, ensure};
use ndarray::ArrayView1;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Runs an ordered list of metrics.
#[derive(Debug, Clone)]
pub struct Evaluator {
    metrics: Vec<RankingMetric>,
    parallel: bool,
}

impl Evaluator {
    /// Create an evaluator for the given metrics.
    ///
    /// Display labels key the report, so they must be unique; give one of
    /// two clashing metrics a different name with `with_name`.
    pub fn new(metrics: Vec<RankingMetric>) -> Result<Self> {
        ensure!(!metrics.is_empty(), config_error!("No metrics configured"));

        let mut seen = HashSet::with_capacity(metrics.len());
        for metric in &metrics {
            let label = metric.display_label();
            ensure!(
                !seen.contains(&label),
                config_error!(
                    "Duplicate metric label {}; set a distinct name for one of them",
                    label
                )
            );
            seen.insert(label);
        }

        Ok(Evaluator {
            metrics,
            parallel: false,
        })
    }

    /// Build the metric set and run options from a configuration.
    pub fn from_config(config: &EvaluationConfig) -> Result<Self> {
        Ok(Self::new(config.build_metrics()?)?.with_parallel(config.parallel))
    }

    /// Score queries on the rayon thread pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Configured metrics, in report order.
    pub fn metrics(&self) -> &[RankingMetric] {
        &self.metrics
    }

    /// Whether queries are scored in parallel.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Evaluate every metric against `y_pred`.
    pub fn evaluate(
        &self,
        dataset: &dyn RankingDataset,
        y_pred: &ArrayView1<'_, Score>,
    ) -> Result<EvaluationReport> {
        aggregate::check_inputs(dataset, y_pred)?;
        log::info!(
            "Evaluating {} metrics over {} queries ({} instances)",
            self.metrics.len(),
            dataset.num_queries(),
            dataset.num_instances()
        );

        let results = self
            .metrics
            .iter()
            .map(|metric| {
                if self.parallel {
                    metric.eval_parallel(dataset, y_pred)
                } else {
                    metric.eval(dataset, y_pred)
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(EvaluationReport { results })
    }
}

/// Results of one [`Evaluator::evaluate`] call.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    results: Vec<MetricEvaluation>,
}

impl EvaluationReport {
    /// Result for a metric by display label.
    pub fn get(&self, label: &str) -> Option<&MetricEvaluation> {
        self.results.iter().find(|r| r.label() == label)
    }

    /// Results in configured order.
    pub fn iter(&self) -> std::slice::Iter<'_, MetricEvaluation> {
        self.results.iter()
    }

    /// Number of metric results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True when the report holds no results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// One line per metric: label, overall value and exclusions.
    pub fn summary(&self) -> String {
        self.results
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Serialize the report as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

}

impl<'a> IntoIterator for &'a EvaluationReport {
    type Item = &'a MetricEvaluation;
    type IntoIter = std::slice::Iter<'a, MetricEvaluation>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
