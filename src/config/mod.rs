//! Configuration management for Pure Rust RankEval.
//!
//! An evaluation is described by an [`EvaluationConfig`]: an ordered list of
//! [`MetricConfig`] entries plus run options. Documents are TOML or JSON and
//! the format is picked from the file extension.
//!
//! ```rust
//! use rankeval_rust::config::EvaluationConfig;
//! use rankeval_rust::Metric;
//!
//! # fn main() -> rankeval_rust::Result<()> {
//! let config = EvaluationConfig::from_toml_str(
//!     r#"
//!     [[metrics]]
//!     type = "rbp"
//!     cutoff = 10
//!     threshold = 1.0
//!     p = 0.8
//!
//!     [[metrics]]
//!     type = "spearman_rho"
//!     "#,
//! )?;
//! let metrics = config.build_metrics()?;
//! assert_eq!(metrics[0].display_label(), "RBP@10[>=1]");
//! assert_eq!(metrics[1].display_label(), "SpearmanRho");
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod metric;

pub use self::core::EvaluationConfig;
pub use metric::MetricConfig;

use crate::core::error::{RankEvalError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigFormat {
    /// TOML configuration format
    Toml,
    /// JSON configuration format
    Json,
}

impl Default for ConfigFormat {
    fn default() -> Self {
        ConfigFormat::Toml
    }
}

impl ConfigFormat {
    /// Pick the format from a file extension (`.toml` or `.json`).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        match path.as_ref().extension().and_then(|s| s.to_str()) {
            Some("toml") => Ok(ConfigFormat::Toml),
            Some("json") => Ok(ConfigFormat::Json),
            _ => Err(RankEvalError::config(
                "Unsupported config file format. Use .json or .toml",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(ConfigFormat::from_path("eval.toml").unwrap(), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path("dir/eval.json").unwrap(), ConfigFormat::Json);
        assert!(ConfigFormat::from_path("eval.yaml").is_err());
        assert!(ConfigFormat::from_path("eval").is_err());
        assert_eq!(ConfigFormat::default(), ConfigFormat::Toml);
    }
}
