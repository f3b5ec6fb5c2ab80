//! # Pure Rust RankEval
//!
//! Ranking-quality metrics for learning-to-rank predictions over
//! query-grouped datasets.
//!
//! A dataset holds graded relevance labels for instances grouped into
//! contiguous queries. A metric scores the predicted ordering of each query
//! independently and reports the mean over every query where it is defined,
//! together with the per-query values.
//!
//! ## Features
//!
//! - **Rank-Biased Precision** with a configurable persistence and relevance
//!   threshold, optionally truncated at a cutoff.
//! - **Rank correlation**: Spearman's rho and Kendall's tau-b between true
//!   grades and predicted scores.
//! - **Precision@k** over binary relevance.
//! - **Undefined queries** (e.g. correlation over constant scores) are
//!   reported as `NaN` and excluded from the mean instead of failing the run.
//! - **Parallel evaluation** across queries using Rayon, with the same
//!   output as the sequential path.
//! - **TOML / JSON configuration** of metric sets.
//!
//! ## Quick Start
//!
//! ```rust
//! use rankeval_rust::{Evaluator, QueryDataset};
//! use rankeval_rust::metrics::{Rbp, SpearmanRho};
//! use ndarray::array;
//!
//! # fn main() -> rankeval_rust::Result<()> {
//! // two queries: three documents, then two
//! let dataset = QueryDataset::from_query_sizes(array![3.0, 0.0, 1.0, 1.0, 1.0], &[3, 2])?;
//! let y_pred = array![0.9, 0.1, 0.5, 0.2, 0.8];
//!
//! let evaluator = Evaluator::new(vec![
//!     Rbp::new(None, 1.0, 0.5)?.into(),
//!     SpearmanRho::new(None)?.into(),
//! ])?;
//! let report = evaluator.evaluate(&dataset, &y_pred.view())?;
//!
//! assert_eq!(report.get("RBP[>=1]").unwrap().overall(), 0.75);
//! println!("{}", report.summary());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Scalar types, constants, error handling and trait abstractions
//! - [`dataset`]: Query-grouped label storage
//! - [`metrics`]: Metric implementations and per-metric aggregation
//! - [`config`]: Serializable metric-set configuration
//! - [`evaluator`]: Running a metric set and collecting a report

#![doc(html_root_url = "https://docs.rs/rankeval-rust/")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub,
    non_snake_case,
    non_upper_case_globals
)]

// Core infrastructure module - always available
pub mod core;

// Configuration management module
pub mod config;

// Dataset management module
pub mod dataset;

// Metric implementations
pub mod metrics;

// Metric-set evaluation
pub mod evaluator;

// Re-export core functionality for convenience
pub use crate::core::{
    constants::*,
    error::{RankEvalError, Result},
    init_logging,
    traits::*,
    types::*,
};

// Re-export configuration functionality
pub use config::{ConfigFormat, EvaluationConfig, MetricConfig};

// Re-export dataset functionality
pub use dataset::{query_statistics, QueryDataset, QueryStatistics};

// Re-export metrics functionality
pub use metrics::{KendallTau, MetricEvaluation, Precision, RankingMetric, Rbp, SpearmanRho};

// Re-export evaluation functionality
pub use evaluator::{EvaluationReport, Evaluator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
