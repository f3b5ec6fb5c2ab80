//! Dataset-level input checks and per-query score aggregation.

use crate::core::error::{RankEvalError, Result};
use crate::core::traits::RankingDataset;
use crate::core::types::*;
use crate::metrics::MetricEvaluation;
use ndarray::{Array1, ArrayView1};

/// Validate a dataset/prediction pair before any query is scored.
pub(crate) fn check_inputs(
    dataset: &dyn RankingDataset,
    y_pred: &ArrayView1<'_, Score>,
) -> Result<()> {
    let labels = dataset.labels();

    if labels.len() != y_pred.len() {
        return Err(RankEvalError::shape_mismatch(
            format!("{} predictions (one per label)", labels.len()),
            format!("{}", y_pred.len()),
        ));
    }

    if labels.is_empty() || dataset.num_queries() == 0 {
        return Err(RankEvalError::EmptyDataset);
    }

    let mut covered = 0usize;
    for (q, range) in dataset.query_ranges().into_iter().enumerate() {
        if range.start != covered || range.end < range.start || range.end > labels.len() {
            return Err(crate::dataset_error!(
                "query {} has range {}..{} but the previous query ended at {} of {} instances",
                q,
                range.start,
                range.end,
                covered,
                labels.len()
            ));
        }
        covered = range.end;
    }
    if covered != labels.len() {
        return Err(crate::dataset_error!(
            "queries cover {} of {} instances",
            covered,
            labels.len()
        ));
    }

    if let Some(i) = labels.iter().position(|v| v.is_nan()) {
        return Err(RankEvalError::invalid_input(format!(
            "label at index {} is NaN",
            i
        )));
    }
    if let Some(i) = y_pred.iter().position(|v| v.is_nan()) {
        return Err(RankEvalError::invalid_input(format!(
            "prediction at index {} is NaN",
            i
        )));
    }

    Ok(())
}

/// Mean over the defined (non-NaN) values and the number of values skipped.
///
/// Returns `NaN` as the mean when no value is defined.
pub fn mean_defined(scores: &[f64]) -> (f64, usize) {
    let (sum, count) = scores
        .iter()
        .filter(|s| !s.is_nan())
        .fold((0.0, 0usize), |(sum, count), &s| (sum + s, count + 1));

    let excluded = scores.len() - count;
    if count == 0 {
        (f64::NAN, excluded)
    } else {
        (sum / count as f64, excluded)
    }
}

/// Build the evaluation result from ordered per-query scores.
pub(crate) fn summarize(label: String, per_query: Vec<f64>) -> MetricEvaluation {
    let (overall, num_excluded) = mean_defined(&per_query);

    if num_excluded > 0 {
        for (q, _) in per_query.iter().enumerate().filter(|(_, s)| s.is_nan()) {
            log::trace!("{} is undefined for query {}", label, q);
        }
        log::warn!(
            "{}: {} of {} queries have an undefined value and were excluded from the mean",
            label,
            num_excluded,
            per_query.len()
        );
    }
    log::debug!("{} = {:.6} over {} queries", label, overall, per_query.len());

    MetricEvaluation::new(label, overall, Array1::from_vec(per_query), num_excluded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::QueryDataset;
    use ndarray::array;
    use std::ops::Range;

    #[test]
    fn test_mean_defined() {
        let (mean, excluded) = mean_defined(&[1.0, f64::NAN, 0.0, 0.5]);
        assert!((mean - 0.5).abs() < 1e-12);
        assert_eq!(excluded, 1);

        let (mean, excluded) = mean_defined(&[f64::NAN, f64::NAN]);
        assert!(mean.is_nan());
        assert_eq!(excluded, 2);
    }

    #[test]
    fn test_check_inputs_shape_mismatch() {
        let dataset = QueryDataset::from_query_sizes(array![1.0, 0.0, 2.0], &[3]).unwrap();
        let y_pred = array![0.1, 0.2];
        let err = check_inputs(&dataset, &y_pred.view()).unwrap_err();
        assert!(matches!(err, RankEvalError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_check_inputs_empty() {
        let dataset = QueryDataset::from_query_sizes(Array1::zeros(0), &[]).unwrap();
        let y_pred: Array1<Score> = Array1::zeros(0);
        let err = check_inputs(&dataset, &y_pred.view()).unwrap_err();
        assert!(matches!(err, RankEvalError::EmptyDataset));
    }

    #[test]
    fn test_check_inputs_nan() {
        let dataset = QueryDataset::from_query_sizes(array![1.0, 0.0], &[2]).unwrap();
        let err = check_inputs(&dataset, &array![0.3, f64::NAN].view()).unwrap_err();
        assert!(matches!(err, RankEvalError::InvalidInput { .. }));
        assert!(err.to_string().contains("index 1"));

        let dataset = QueryDataset::from_query_sizes(array![f64::NAN, 0.0], &[2]).unwrap();
        let err = check_inputs(&dataset, &array![0.3, 0.2].view()).unwrap_err();
        assert!(err.to_string().contains("label at index 0"));
    }

    struct Overlapping {
        labels: Array1<Label>,
    }

    impl RankingDataset for Overlapping {
        fn labels(&self) -> ArrayView1<'_, Label> {
            self.labels.view()
        }
        fn num_queries(&self) -> usize {
            2
        }
        fn query_range(&self, query: usize) -> Range<usize> {
            if query == 0 {
                0..2
            } else {
                1..3
            }
        }
    }

    #[test]
    fn test_check_inputs_rejects_inconsistent_ranges() {
        let dataset = Overlapping {
            labels: array![1.0, 0.0, 2.0],
        };
        let err = check_inputs(&dataset, &array![0.1, 0.2, 0.3].view()).unwrap_err();
        assert!(matches!(err, RankEvalError::Dataset { .. }));
    }

    #[test]
    fn test_summarize_counts_exclusions() {
        let eval = summarize("SpearmanRho".to_string(), vec![1.0, f64::NAN, -1.0, 0.5]);
        assert_eq!(eval.num_excluded(), 1);
        assert_eq!(eval.num_queries(), 4);
        assert!((eval.overall() - 0.5 / 3.0).abs() < 1e-12);
        assert!(eval.per_query()[1].is_nan());
    }
}
