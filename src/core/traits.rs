//! Core trait definitions for Pure Rust RankEval.
//!
//! Two seams hold the crate together: [`RankingDataset`], the contract any
//! loader has to satisfy, and [`Metric`], the per-query scoring capability
//! that every concrete metric implements. Dataset-level aggregation is
//! provided by `Metric` itself, so a new metric only supplies
//! [`Metric::eval_per_query`] and its label.

use crate::core::error::Result;
use crate::core::types::*;
use crate::metrics::aggregate;
use crate::metrics::MetricEvaluation;
use ndarray::{s, ArrayView1};
use rayon::prelude::*;

use std::fmt::Debug;
use std::ops::Range;

/// Contract between a dataset loader and the metric framework.
///
/// Instances are stored in one flat, query-contiguous label array; each
/// query owns the index range returned by [`RankingDataset::query_range`].
pub trait RankingDataset: Sync {
    /// Flat relevance labels, one per instance.
    fn labels(&self) -> ArrayView1<'_, Label>;

    /// Number of query groups.
    fn num_queries(&self) -> usize;

    /// Contiguous index range of query `query` in the label array.
    fn query_range(&self, query: usize) -> Range<usize>;

    /// Number of instances across all queries.
    fn num_instances(&self) -> usize {
        self.labels().len()
    }

    /// All query ranges in dataset order.
    fn query_ranges(&self) -> Vec<Range<usize>> {
        (0..self.num_queries()).map(|q| self.query_range(q)).collect()
    }
}

/// A ranking-quality metric computed per query and averaged over a dataset.
///
/// Implementors must be immutable after construction: the same instance is
/// evaluated concurrently from the rayon pool by [`Metric::eval_parallel`].
pub trait Metric: Send + Sync + Debug {
    /// Configured metric name.
    fn name(&self) -> &str;

    /// Top-k truncation applied before scoring, if any.
    fn cutoff(&self) -> Option<usize>;

    /// Family of the metric.
    fn family(&self) -> MetricFamily;

    /// Score a single query.
    ///
    /// `y` and `y_pred` have equal length and are index-aligned. Neither is
    /// assumed sorted. Returns `f64::NAN` when the metric is undefined for
    /// this query.
    fn eval_per_query(&self, y: &ArrayView1<'_, Label>, y_pred: &ArrayView1<'_, Score>) -> f64;

    /// Human-readable label including cutoff and threshold, for reporting.
    fn display_label(&self) -> String;

    /// Evaluate the metric over every query of `dataset`.
    fn eval(
        &self,
        dataset: &dyn RankingDataset,
        y_pred: &ArrayView1<'_, Score>,
    ) -> Result<MetricEvaluation> {
        aggregate::check_inputs(dataset, y_pred)?;
        let label = self.display_label();
        log::debug!("Evaluating {} over {} queries", label, dataset.num_queries());

        let labels = dataset.labels();
        let per_query: Vec<f64> = (0..dataset.num_queries())
            .map(|q| {
                let range = dataset.query_range(q);
                self.eval_per_query(
                    &labels.slice(s![range.start..range.end]),
                    &y_pred.slice(s![range.start..range.end]),
                )
            })
            .collect();

        Ok(aggregate::summarize(label, per_query))
    }

    /// Same as [`Metric::eval`], scoring queries on the rayon thread pool.
    ///
    /// The per-query output keeps dataset query order.
    fn eval_parallel(
        &self,
        dataset: &dyn RankingDataset,
        y_pred: &ArrayView1<'_, Score>,
    ) -> Result<MetricEvaluation> {
        aggregate::check_inputs(dataset, y_pred)?;
        let label = self.display_label();
        log::debug!(
            "Evaluating {} over {} queries on {} threads",
            label,
            dataset.num_queries(),
            rayon::current_num_threads()
        );

        let labels = dataset.labels();
        let per_query: Vec<f64> = (0..dataset.num_queries())
            .into_par_iter()
            .map(|q| {
                let range = dataset.query_range(q);
                self.eval_per_query(
                    &labels.slice(s![range.start..range.end]),
                    &y_pred.slice(s![range.start..range.end]),
                )
            })
            .collect();

        Ok(aggregate::summarize(label, per_query))
    }
}
