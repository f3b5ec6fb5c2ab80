//! Per-metric configuration entries.

use crate::core::constants::*;
use crate::core::error::{RankEvalError, Result};
use crate::metrics::{KendallTau, Precision, RankingMetric, Rbp, SpearmanRho};
use serde::{Deserialize, Serialize};

/// One metric entry of an evaluation document, tagged by `type`.
///
/// `cutoff` is read as a signed integer so that `0` or negative values in a
/// document are reported as invalid parameters instead of parse failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MetricConfig {
    /// Rank-Biased Precision
    Rbp {
        /// Display name override
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        /// Top-k cutoff
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cutoff: Option<i64>,
        /// Relevance threshold
        #[serde(default = "default_rbp_threshold")]
        threshold: f64,
        /// Persistence
        #[serde(default = "default_rbp_persistence")]
        p: f64,
    },
    /// Spearman's rho
    SpearmanRho {
        /// Display name override
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        /// Top-k cutoff
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cutoff: Option<i64>,
    },
    /// Precision@k
    Precision {
        /// Display name override
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        /// Top-k cutoff
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cutoff: Option<i64>,
        /// Relevance threshold
        #[serde(default = "default_precision_threshold")]
        threshold: f64,
    },
    /// Kendall's tau-b
    KendallTau {
        /// Display name override
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        /// Top-k cutoff
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cutoff: Option<i64>,
    },
}

fn default_rbp_threshold() -> f64 {
    DEFAULT_RBP_THRESHOLD
}

fn default_rbp_persistence() -> f64 {
    DEFAULT_RBP_PERSISTENCE
}

fn default_precision_threshold() -> f64 {
    DEFAULT_PRECISION_THRESHOLD
}

fn convert_cutoff(cutoff: Option<i64>) -> Result<Option<usize>> {
    match cutoff {
        None => Ok(None),
        Some(k) if k >= MIN_CUTOFF as i64 => Ok(Some(k as usize)),
        Some(k) => Err(RankEvalError::invalid_parameter(
            "cutoff",
            k.to_string(),
            format!("must be >= {}", MIN_CUTOFF),
        )),
    }
}

impl MetricConfig {
    /// Configuration tag of this entry.
    pub fn kind(&self) -> &'static str {
        match self {
            MetricConfig::Rbp { .. } => "rbp",
            MetricConfig::SpearmanRho { .. } => "spearman_rho",
            MetricConfig::Precision { .. } => "precision",
            MetricConfig::KendallTau { .. } => "kendall_tau",
        }
    }

    /// Validate the entry and construct the metric.
    pub fn build(&self) -> Result<RankingMetric> {
        let (metric, name): (RankingMetric, &Option<String>) = match self {
            MetricConfig::Rbp {
                name,
                cutoff,
                threshold,
                p,
            } => (Rbp::new(convert_cutoff(*cutoff)?, *threshold, *p)?.into(), name),
            MetricConfig::SpearmanRho { name, cutoff } => {
                (SpearmanRho::new(convert_cutoff(*cutoff)?)?.into(), name)
            }
            MetricConfig::Precision {
                name,
                cutoff,
                threshold,
            } => (Precision::new(convert_cutoff(*cutoff)?, *threshold)?.into(), name),
            MetricConfig::KendallTau { name, cutoff } => {
                (KendallTau::new(convert_cutoff(*cutoff)?)?.into(), name)
            }
        };

        match name {
            Some(name) => metric.with_name(name.as_str()),
            None => Ok(metric),
        }
    }
}

impl From<&RankingMetric> for MetricConfig {
    fn from(metric: &RankingMetric) -> Self {
        use crate::core::traits::Metric;

        let name = Some(metric.name().to_string());
        let cutoff = metric.cutoff().map(|k| k as i64);
        match metric {
            RankingMetric::Rbp(m) => MetricConfig::Rbp {
                name,
                cutoff,
                threshold: m.threshold(),
                p: m.p(),
            },
            RankingMetric::SpearmanRho(_) => MetricConfig::SpearmanRho { name, cutoff },
            RankingMetric::Precision(m) => MetricConfig::Precision {
                name,
                cutoff,
                threshold: m.threshold(),
            },
            RankingMetric::KendallTau(_) => MetricConfig::KendallTau { name, cutoff },
        }
    }
}
