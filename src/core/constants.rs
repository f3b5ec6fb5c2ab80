//! Default parameter values and metric names for Pure Rust RankEval.

/// Default persistence for Rank-Biased Precision (an impatient user).
pub const DEFAULT_RBP_PERSISTENCE: f64 = 0.5;

/// Default relevance threshold for RBP: every non-negative grade counts.
pub const DEFAULT_RBP_THRESHOLD: f64 = 0.0;

/// Default relevance threshold for Precision@k.
pub const DEFAULT_PRECISION_THRESHOLD: f64 = 1.0;

/// Default display name of the RBP metric.
pub const RBP_NAME: &str = "RBP";

/// Default display name of the Spearman rank correlation metric.
pub const SPEARMAN_RHO_NAME: &str = "SpearmanRho";

/// Default display name of the Precision metric.
pub const PRECISION_NAME: &str = "Precision";

/// Default display name of the Kendall tau metric.
pub const KENDALL_TAU_NAME: &str = "KendallTau";

/// Sentinel stored for a query whose metric value is mathematically undefined.
pub const UNDEFINED_SCORE: f64 = f64::NAN;

/// Smallest permitted cutoff.
pub const MIN_CUTOFF: usize = 1;
