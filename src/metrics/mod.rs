//! Ranking-quality metrics for query-grouped datasets.
//!
//! Every metric implements [`Metric`]: it scores one query at a time and
//! inherits dataset-level aggregation ([`Metric::eval`] and
//! [`Metric::eval_parallel`]). [`RankingMetric`] is the closed set of metrics
//! selectable from configuration.
//!
//! # Examples
//!
//! ```rust
//! use rankeval_rust::dataset::QueryDataset;
//! use rankeval_rust::metrics::Rbp;
//! use rankeval_rust::Metric;
//! use ndarray::array;
//!
//! # fn main() -> rankeval_rust::Result<()> {
//! let dataset = QueryDataset::from_query_sizes(array![3.0, 0.0, 1.0, 1.0, 1.0], &[3, 2])?;
//! let y_pred = array![0.9, 0.1, 0.5, 0.2, 0.8];
//!
//! let rbp = Rbp::new(None, 1.0, 0.5)?;
//! let result = rbp.eval(&dataset, &y_pred.view())?;
//! assert_eq!(result.overall(), 0.75);
//! # Ok(())
//! # }
//! ```
//!
//! Queries where a metric is undefined (e.g. Spearman over constant scores)
//! report `NaN` and are excluded from the mean:
//!
//! ```rust
//! use rankeval_rust::dataset::QueryDataset;
//! use rankeval_rust::metrics::SpearmanRho;
//! use rankeval_rust::Metric;
//! use ndarray::array;
//!
//! # fn main() -> rankeval_rust::Result<()> {
//! let dataset = QueryDataset::from_query_sizes(array![2.0, 1.0, 0.0, 1.0, 0.0], &[3, 2])?;
//! let y_pred = array![0.9, 0.5, 0.1, 0.4, 0.4];
//!
//! let result = SpearmanRho::new(None)?.eval(&dataset, &y_pred.view())?;
//! assert_eq!(result.overall(), 1.0);
//! assert!(result.per_query()[1].is_nan());
//! assert_eq!(result.num_excluded(), 1);
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod evaluation;
pub mod kendall;
pub mod precision;
pub mod rbp;
pub mod spearman;

pub use evaluation::MetricEvaluation;
pub use kendall::KendallTau;
pub use precision::Precision;
pub use rbp::Rbp;
pub use spearman::SpearmanRho;

use crate::core::error::{RankEvalError, Result};
use crate::core::traits::Metric;
use crate::core::types::*;
use ndarray::ArrayView1;
use std::fmt;

/// Closed set of metrics that can be built from configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum RankingMetric {
    /// Rank-Biased Precision
    Rbp(Rbp),
    /// Spearman's rank correlation
    SpearmanRho(SpearmanRho),
    /// Precision over the top-k
    Precision(Precision),
    /// Kendall's tau-b rank correlation
    KendallTau(KendallTau),
}

impl RankingMetric {
    fn inner(&self) -> &dyn Metric {
        match self {
            RankingMetric::Rbp(m) => m,
            RankingMetric::SpearmanRho(m) => m,
            RankingMetric::Precision(m) => m,
            RankingMetric::KendallTau(m) => m,
        }
    }

    /// Replace the display name of the wrapped metric.
    pub fn with_name<S: Into<String>>(self, name: S) -> Result<Self> {
        Ok(match self {
            RankingMetric::Rbp(m) => RankingMetric::Rbp(m.with_name(name)?),
            RankingMetric::SpearmanRho(m) => RankingMetric::SpearmanRho(m.with_name(name)?),
            RankingMetric::Precision(m) => RankingMetric::Precision(m.with_name(name)?),
            RankingMetric::KendallTau(m) => RankingMetric::KendallTau(m.with_name(name)?),
        })
    }
}

impl Metric for RankingMetric {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn cutoff(&self) -> Option<usize> {
        self.inner().cutoff()
    }

    fn family(&self) -> MetricFamily {
        self.inner().family()
    }

    fn eval_per_query(&self, y: &ArrayView1<'_, Label>, y_pred: &ArrayView1<'_, Score>) -> f64 {
        self.inner().eval_per_query(y, y_pred)
    }

    fn display_label(&self) -> String {
        self.inner().display_label()
    }
}

impl fmt::Display for RankingMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_label())
    }
}

impl From<Rbp> for RankingMetric {
    fn from(metric: Rbp) -> Self {
        RankingMetric::Rbp(metric)
    }
}

impl From<SpearmanRho> for RankingMetric {
    fn from(metric: SpearmanRho) -> Self {
        RankingMetric::SpearmanRho(metric)
    }
}

impl From<Precision> for RankingMetric {
    fn from(metric: Precision) -> Self {
        RankingMetric::Precision(metric)
    }
}

impl From<KendallTau> for RankingMetric {
    fn from(metric: KendallTau) -> Self {
        RankingMetric::KendallTau(metric)
    }
}

/// Parameter checks shared by metric constructors.
pub(crate) mod validate {
    use super::*;
    use crate::core::constants::MIN_CUTOFF;

    pub(crate) fn cutoff(cutoff: Option<usize>) -> Result<()> {
        match cutoff {
            Some(k) if k < MIN_CUTOFF => Err(RankEvalError::invalid_parameter(
                "cutoff",
                k.to_string(),
                format!("must be at least {}", MIN_CUTOFF),
            )),
            _ => Ok(()),
        }
    }

    pub(crate) fn threshold(threshold: f64) -> Result<()> {
        if !threshold.is_finite() {
            return Err(RankEvalError::invalid_parameter(
                "threshold",
                threshold.to_string(),
                "must be a finite number",
            ));
        }
        Ok(())
    }

    pub(crate) fn persistence(p: f64) -> Result<()> {
        if !(0.0..1.0).contains(&p) {
            return Err(RankEvalError::invalid_parameter(
                "p",
                p.to_string(),
                "must be in [0, 1)",
            ));
        }
        Ok(())
    }

    pub(crate) fn name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(RankEvalError::invalid_parameter(
                "name",
                format!("{:?}", name),
                "must not be empty",
            ));
        }
        Ok(())
    }
}

/// Build the display label `name[@cutoff][[>=threshold]]`.
pub(crate) fn format_label(name: &str, cutoff: Option<usize>, threshold: Option<f64>) -> String {
    let mut label = name.to_string();
    if let Some(k) = cutoff {
        label.push_str(&format!("@{}", k));
    }
    if let Some(t) = threshold {
        label.push_str(&format!("[>={}]", t));
    }
    label
}

/// Ranking helpers shared by the metrics.
pub mod utils {
    use crate::core::types::*;
    use ndarray::ArrayView1;
    use std::cmp::Ordering;

    /// Descending score order; `NaN` sorts after every number.
    pub fn cmp_scores_desc(a: Score, b: Score) -> Ordering {
        b.partial_cmp(&a)
            .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
    }

    /// Ascending value order; `NaN` sorts after every number.
    fn cmp_values_asc(a: f64, b: f64) -> Ordering {
        a.partial_cmp(&b)
            .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
    }

    /// Instance indices ordered by descending prediction.
    ///
    /// The sort is stable: tied scores keep their original index order.
    pub fn argsort_desc(y_pred: &ArrayView1<'_, Score>) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..y_pred.len()).collect();
        indices.sort_by(|&a, &b| cmp_scores_desc(y_pred[a], y_pred[b]));
        indices
    }

    /// Indices of the top-`cutoff` predictions in ranked order.
    ///
    /// With no cutoff, or a cutoff at least the query size, every index is
    /// returned.
    pub fn top_k_indices(y_pred: &ArrayView1<'_, Score>, cutoff: Option<usize>) -> Vec<usize> {
        let mut indices = argsort_desc(y_pred);
        if let Some(k) = cutoff {
            indices.truncate(k);
        }
        indices
    }

    /// Collect `values[i]` for each `i` in `indices`.
    pub fn gather(values: &ArrayView1<'_, f64>, indices: &[usize]) -> Vec<f64> {
        indices.iter().map(|&i| values[i]).collect()
    }

    /// 1-based ascending ranks; tied values share the mean of their positions.
    pub fn average_ranks(values: &[f64]) -> Vec<f64> {
        let n = values.len();
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| cmp_values_asc(values[a], values[b]));

        let mut ranks = vec![0.0; n];
        let mut i = 0;
        while i < n {
            let mut j = i + 1;
            while j < n && values[order[j]] == values[order[i]] {
                j += 1;
            }
            // positions i..j hold 1-based ranks i+1..=j
            let avg_rank = (i + j + 1) as f64 / 2.0;
            for &idx in &order[i..j] {
                ranks[idx] = avg_rank;
            }
            i = j;
        }

        ranks
    }

    /// Pearson correlation of two equal-length sequences.
    ///
    /// Returns `NaN` when fewer than two points are given or either sequence
    /// has zero variance.
    pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
        let n = x.len();
        if n < 2 || n != y.len() {
            return f64::NAN;
        }

        let mean_x = x.iter().sum::<f64>() / n as f64;
        let mean_y = y.iter().sum::<f64>() / n as f64;

        let mut num = 0.0;
        let mut den_x = 0.0;
        let mut den_y = 0.0;
        for (&xi, &yi) in x.iter().zip(y.iter()) {
            let dx = xi - mean_x;
            let dy = yi - mean_y;
            num += dx * dy;
            den_x += dx * dx;
            den_y += dy * dy;
        }

        if den_x == 0.0 || den_y == 0.0 {
            return f64::NAN;
        }

        (num / (den_x * den_y).sqrt()).clamp(-1.0, 1.0)
    }
}
