//! Spearman's rank correlation coefficient.
//!
//! Both the relevance labels and the predicted scores of a query are turned
//! into 1-based average ranks (ties share the mean of the positions they
//! span), and rho is the Pearson correlation of the two rank vectors.
//!
//! The coefficient is undefined for fewer than two instances or when either
//! side is constant; such queries score `NaN`.

use crate::core::constants::{SPEARMAN_RHO_NAME, UNDEFINED_SCORE};
use crate::core::error::Result;
use crate::core::traits::Metric;
use crate::core::types::*;
use crate::metrics::{format_label, utils, validate};
use ndarray::ArrayView1;
use std::fmt;

/// Spearman's rho between true relevance and predicted scores.
#[derive(Debug, Clone, PartialEq)]
pub struct SpearmanRho {
    name: String,
    cutoff: Option<usize>,
}

impl SpearmanRho {
    /// Create a Spearman metric.
    ///
    /// With a cutoff, only the top-`cutoff` predicted instances of a query are
    /// correlated.
    pub fn new(cutoff: Option<usize>) -> Result<Self> {
        validate::cutoff(cutoff)?;
        Ok(Self {
            name: SPEARMAN_RHO_NAME.to_string(),
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

impl Default for SpearmanRho {
    fn default() -> Self {
        Self {
            name: SPEARMAN_RHO_NAME.to_string(),
            cutoff: None,
        }
    }
}

impl Metric for SpearmanRho {
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

        let label_ranks = utils::average_ranks(&labels);
        let score_ranks = utils::average_ranks(&scores);
        utils::pearson(&label_ranks, &score_ranks)
    }

    fn display_label(&self) -> String {
        format_label(&self.name, self.cutoff, None)
    }
}

impl fmt::Display for SpearmanRho {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::QueryDataset;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_spearman_identity_and_reverse() {
        let rho = SpearmanRho::default();
        let y = array![4.0, 1.0, 3.0, 0.0, 2.0];
        let reversed = y.mapv(|v| -v);

        assert_eq!(rho.eval_per_query(&y.view(), &y.view()), 1.0);
        assert_eq!(rho.eval_per_query(&y.view(), &reversed.view()), -1.0);
    }

    #[test]
    fn test_spearman_with_ties() {
        let rho = SpearmanRho::default();
        // label ranks: [1.5, 1.5, 3, 4], score ranks: [1, 2, 3, 4]
        let y = array![0.0, 0.0, 1.0, 2.0];
        let y_pred = array![0.1, 0.2, 0.3, 0.4];
        let expected = 4.5 / (4.5_f64 * 5.0).sqrt();
        assert_abs_diff_eq!(
            rho.eval_per_query(&y.view(), &y_pred.view()),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_spearman_undefined_cases() {
        let rho = SpearmanRho::default();
        // constant predictions
        let value =
            rho.eval_per_query(&array![1.0, 2.0, 3.0].view(), &array![0.5, 0.5, 0.5].view());
        assert!(value.is_nan());
        // constant labels
        let value = rho.eval_per_query(&array![1.0, 1.0].view(), &array![0.1, 0.9].view());
        assert!(value.is_nan());
        // single instance
        let value = rho.eval_per_query(&array![1.0].view(), &array![0.1].view());
        assert!(value.is_nan());
    }

    #[test]
    fn test_spearman_cutoff() {
        let y = array![3.0, 0.0, 2.0, 1.0];
        let y_pred = array![0.9, 0.8, 0.7, 0.1];

        // top-2 by prediction are instances 0 and 1: labels 3, 0 vs scores 0.9, 0.8
        let top2 = SpearmanRho::new(Some(2)).unwrap();
        assert_eq!(top2.eval_per_query(&y.view(), &y_pred.view()), 1.0);

        // top-1 leaves a single point
        let top1 = SpearmanRho::new(Some(1)).unwrap();
        assert!(top1.eval_per_query(&y.view(), &y_pred.view()).is_nan());

        let full = SpearmanRho::default();
        let top4 = SpearmanRho::new(Some(4)).unwrap();
        assert_eq!(
            top4.eval_per_query(&y.view(), &y_pred.view()),
            full.eval_per_query(&y.view(), &y_pred.view())
        );
        assert_eq!(top2.to_string(), "SpearmanRho@2");
    }

    #[test]
    fn test_spearman_eval_excludes_undefined_queries() {
        // second query has tied scores, third is empty
        let dataset = QueryDataset::from_query_sizes(
            array![2.0, 1.0, 0.0, 1.0, 0.0, 1.0, 2.0],
            &[3, 2, 0, 2],
        )
        .unwrap();
        let y_pred = array![0.9, 0.5, 0.1, 0.4, 0.4, 0.9, 0.1];

        for result in [
            SpearmanRho::default().eval(&dataset, &y_pred.view()).unwrap(),
            SpearmanRho::default().eval_parallel(&dataset, &y_pred.view()).unwrap(),
        ] {
            assert_eq!(result.num_queries(), 4);
            assert_eq!(result.per_query()[0], 1.0);
            assert!(result.per_query()[1].is_nan());
            assert!(result.per_query()[2].is_nan());
            assert_eq!(result.per_query()[3], -1.0);
            assert_eq!(result.num_excluded(), 2);
            assert_eq!(result.undefined_queries(), vec![1, 2]);
            assert_eq!(result.overall(), 0.0);
        }
    }

    #[test]
    fn test_spearman_rejects_zero_cutoff() {
        assert!(SpearmanRho::new(Some(0)).is_err());
    }
}
