//! Rank-Biased Precision.
//!
//! RBP models a user who scans a ranked list top-down and, after each item,
//! moves on to the next one with probability `p` (the persistence) or stops
//! with probability `1 - p`. It estimates
//! `E[# relevant items viewed] / E[# items viewed]`:
//!
//! ```text
//! RBP = (1 - p) * Σ_i rel(i) * p^i        (i = 0-based rank)
//! ```
//!
//! Typical persistence values: `0.95` for a persistent user, `0.8` for a
//! patient one, `0.5` for an impatient one and `0` for "I'm feeling lucky"
//! (Precision@1).
//!
//! Reference: Moffat & Zobel, "Rank-biased precision for measurement of
//! retrieval effectiveness", ACM TOIS 27(1), 2008.

use crate::core::constants::*;
use crate::core::error::Result;
use crate::core::traits::Metric;
use crate::core::types::*;
use crate::metrics::{format_label, utils, validate};
use ndarray::ArrayView1;
use std::fmt;

/// Rank-Biased Precision with binary relevance.
#[derive(Debug, Clone, PartialEq)]
pub struct Rbp {
    name: String,
    cutoff: Option<usize>,
    threshold: f64,
    p: f64,
}

impl Rbp {
    /// Create an RBP metric.
    ///
    /// An item is relevant when its label is `>= threshold`. `p` must lie in
    /// `[0, 1)` and `cutoff`, if given, must be at least 1.
    pub fn new(cutoff: Option<usize>, threshold: f64, p: f64) -> Result<Self> {
        validate::cutoff(cutoff)?;
        validate::threshold(threshold)?;
        validate::persistence(p)?;
        Ok(Self {
            name: RBP_NAME.to_string(),
            cutoff,
            threshold,
            p,
        })
    }

    /// Replace the display name.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Result<Self> {
        let name = name.into();
        validate::name(&name)?;
        self.name = name;
        Ok(self)
    }

    /// Relevance threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Persistence parameter.
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Default for Rbp {
    fn default() -> Self {
        Self {
            name: RBP_NAME.to_string(),
            cutoff: None,
            threshold: DEFAULT_RBP_THRESHOLD,
            p: DEFAULT_RBP_PERSISTENCE,
        }
    }
}

impl Metric for Rbp {
    fn name(&self) -> &str {
        &self.name
    }

    fn cutoff(&self) -> Option<usize> {
        self.cutoff
    }

    fn family(&self) -> MetricFamily {
        MetricFamily::BinaryRelevance
    }

    fn eval_per_query(&self, y: &ArrayView1<'_, Label>, y_pred: &ArrayView1<'_, Score>) -> f64 {
        let ranked = utils::top_k_indices(y_pred, self.cutoff);

        let mut expected_utility = 0.0;
        let mut weight = 1.0;
        for &idx in &ranked {
            if y[idx] >= self.threshold {
                expected_utility += weight;
            }
            weight *= self.p;
        }

        (1.0 - self.p) * expected_utility
    }

    fn display_label(&self) -> String {
        format_label(&self.name, self.cutoff, Some(self.threshold))
    }
}

impl fmt::Display for Rbp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_label())
    }
}
