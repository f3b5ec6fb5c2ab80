//! Core scalar types for Pure Rust RankEval.
//!
//! Labels and scores are kept in double precision so that rank-correlation
//! arithmetic on average ranks stays exact for realistic query sizes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ground-truth relevance grade of one instance.
/// Any real value is accepted; grades are not restricted to integers.
pub type Label = f64;

/// Model score of one instance. Higher means ranked earlier.
pub type Score = f64;

/// Identifier of a query group as found in a per-instance id column.
pub type QueryId = i64;

/// Family a metric belongs to, used when grouping results for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricFamily {
    /// Metrics over a binarized ranked list (RBP, Precision)
    BinaryRelevance,
    /// Correlation between the true and predicted orderings
    RankCorrelation,
}

impl fmt::Display for MetricFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricFamily::BinaryRelevance => write!(f, "binary_relevance"),
            MetricFamily::RankCorrelation => write!(f, "rank_correlation"),
        }
    }
}
