//! Precision over the top of the ranking.
//!
//! The fraction of retrieved instances (the top-`cutoff` by prediction, or
//! the whole query without a cutoff) whose label reaches the relevance
//! threshold.

use crate::core::constants::*;
use crate::core::error::Result;
use crate::core::traits::Metric;
use crate::core::types::*;
use crate::metrics::{format_label, utils, validate};
use ndarray::ArrayView1;
use std::fmt;

/// Precision@k with binary relevance.
#[derive(Debug, Clone, PartialEq)]
pub struct Precision {
    name: String,
    cutoff: Option<usize>,
    threshold: f64,
}

impl Precision {
    /// Create a precision metric; labels `>= threshold` count as relevant.
    pub fn new(cutoff: Option<usize>, threshold: f64) -> Result<Self> {
        validate::cutoff(cutoff)?;
        validate::threshold(threshold)?;
        Ok(Self {
            name: PRECISION_NAME.to_string(),
            cutoff,
            threshold,
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
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            name: PRECISION_NAME.to_string(),
            cutoff: None,
            threshold: DEFAULT_PRECISION_THRESHOLD,
        }
    }
}

impl Metric for Precision {
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
        let retrieved = utils::top_k_indices(y_pred, self.cutoff);
        if retrieved.is_empty() {
            return UNDEFINED_SCORE;
        }

        let relevant = retrieved
            .iter()
            .filter(|&&idx| y[idx] >= self.threshold)
            .count();
        relevant as f64 / retrieved.len() as f64
    }

    fn display_label(&self) -> String {
        format_label(&self.name, self.cutoff, Some(self.threshold))
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array1};

    #[test]
    fn test_precision_at_k() {
        let y = array![1.0, 0.0, 2.0, 0.0];
        let y_pred = array![0.9, 0.8, 0.7, 0.6];

        let p1 = Precision::new(Some(1), 1.0).unwrap();
        let p2 = Precision::new(Some(2), 1.0).unwrap();
        let p3 = Precision::new(Some(3), 1.0).unwrap();
        let full = Precision::default();

        assert_eq!(p1.eval_per_query(&y.view(), &y_pred.view()), 1.0);
        assert_eq!(p2.eval_per_query(&y.view(), &y_pred.view()), 0.5);
        assert!((p3.eval_per_query(&y.view(), &y_pred.view()) - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(full.eval_per_query(&y.view(), &y_pred.view()), 0.5);
    }

    #[test]
    fn test_precision_cutoff_beyond_query_size() {
        let y = array![1.0, 0.0];
        let y_pred = array![0.2, 0.4];
        let p10 = Precision::new(Some(10), 1.0).unwrap();
        assert_eq!(p10.eval_per_query(&y.view(), &y_pred.view()), 0.5);
    }

    #[test]
    fn test_precision_threshold() {
        let y = array![1.0, 2.0, 3.0];
        let y_pred = array![0.3, 0.2, 0.1];
        let strict = Precision::new(None, 2.5).unwrap();
        assert!((strict.eval_per_query(&y.view(), &y_pred.view()) - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(strict.to_string(), "Precision[>=2.5]");
    }

    #[test]
    fn test_precision_empty_query_is_undefined() {
        let empty: Array1<f64> = Array1::zeros(0);
        assert!(Precision::default()
            .eval_per_query(&empty.view(), &empty.view())
            .is_nan());
    }
}
