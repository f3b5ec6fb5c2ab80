//! Kendall's tau-b rank correlation.
//!
//! Counts concordant and discordant instance pairs between the true and the
//! predicted ordering of a query, with the tau-b correction for ties on
//! either side. Quadratic in the query size.

use crate::core::constants::{KENDALL_TAU_NAME, UNDEFINED_SCORE};
use crate::core::error::Result;
use crate::core::traits::Metric;
use crate::core::types::*;
use crate::metrics::{format_label, utils, validate};
use ndarray::ArrayView1;
use std::cmp::Ordering;
use std::fmt;

/// Kendall's tau-b between true relevance and predicted scores.
#[derive(Debug, Clone, PartialEq)]
pub struct KendallTau {
    name: String,
    cutoff: Option<usize>,
}

/// Pair counts feeding tau-b.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PairCounts {
    concordant: u64,
    discordant: u64,
    /// tied in labels only
    label_ties: u64,
    /// tied in scores only
    score_ties: u64,
}

fn count_pairs(labels: &[f64], scores: &[f64]) -> PairCounts {
    let mut counts = PairCounts::default();
    let n = labels.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let dl = labels[i].partial_cmp(&labels[j]).unwrap_or(Ordering::Equal);
            let ds = scores[i].partial_cmp(&scores[j]).unwrap_or(Ordering::Equal);
            match (dl, ds) {
                (Ordering::Equal, Ordering::Equal) => {}
                (Ordering::Equal, _) => counts.label_ties += 1,
                (_, Ordering::Equal) => counts.score_ties += 1,
                (a, b) if a == b => counts.concordant += 1,
                _ => counts.discordant += 1,
            }
        }
    }
    counts
}

impl KendallTau {
    /// Create a Kendall tau metric, optionally restricted to the top-`cutoff`
    /// predicted instances of each query.
    pub fn new(cutoff: Option<usize>) -> Result<Self> {
        validate::cutoff(cutoff)?;
        Ok(Self {
            name: KENDALL_TAU_NAME.to_string(),
            cutoff,
        })
    }

    /// Replace the display name.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Result<Self> {
        let name = name.into();
        validate::name(&name)?;
        self.name = name;
        Ok(self)
    }
}

impl Default for KendallTau {
    fn default() -> Self {
        Self {
            name: KENDALL_TAU_NAME.to_string(),
            cutoff: None,
        }
    }
}

impl Metric for KendallTau {
    fn name(&self) -> &str {
        &self.name
    }

    fn cutoff(&self) -> Option<usize> {
        self.cutoff
    }

    fn family(&self) -> MetricFamily {
        MetricFamily::RankCorrelation
    }

    fn eval_per_query(&self, y: &ArrayView1<'_, Label>, y_pred: &ArrayView1<'_, Score>) -> f64 {
        let (labels, scores) = match self.cutoff {
            Some(_) => {
                let top = utils::top_k_indices(y_pred, self.cutoff);
                (utils::gather(y, &top), utils::gather(y_pred, &top))
            }
            None => (y.to_vec(), y_pred.to_vec()),
        };

        if labels.len() < 2 {
            return UNDEFINED_SCORE;
        }

        let counts = count_pairs(&labels, &scores);
        let untied = (counts.concordant + counts.discordant) as f64;
        let denominator =
            ((untied + counts.label_ties as f64) * (untied + counts.score_ties as f64)).sqrt();
        if denominator == 0.0 {
            return UNDEFINED_SCORE;
        }

        let tau = (counts.concordant as f64 - counts.discordant as f64) / denominator;
        tau.clamp(-1.0, 1.0)
    }

    fn display_label(&self) -> String {
        format_label(&self.name, self.cutoff, None)
    }
}

impl fmt::Display for KendallTau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_label())
    }
}
