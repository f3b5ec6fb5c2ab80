//! Core infrastructure module for Pure Rust RankEval.
//!
//! This module provides the foundational pieces shared by every metric:
//! scalar types, defaults, the error taxonomy and the trait seams between
//! dataset loaders, metrics and the aggregator.
//!
//! - [`types`]: Scalar aliases and small enumerations
//! - [`constants`]: Default parameters and metric names
//! - [`error`]: Error handling and error types
//! - [`traits`]: The `RankingDataset` and `Metric` abstractions
//!
//! ```rust
//! use rankeval_rust::core::{
//!     constants::DEFAULT_RBP_PERSISTENCE,
//!     error::{RankEvalError, Result},
//!     types::{Label, Score},
//! };
//!
//! let p = DEFAULT_RBP_PERSISTENCE;
//! let _grade: Label = 2.0;
//! let _score: Score = 0.75;
//! assert!(p > 0.0 && p < 1.0);
//! ```

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

pub use constants::*;
pub use error::{RankEvalError, Result};
pub use traits::*;
pub use types::*;

/// Version information for the core module
pub const CORE_MODULE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the logging subsystem.
///
/// Installs `env_logger` honouring `RUST_LOG`, defaulting to `info`. Calling
/// it more than once is harmless; later calls leave the first logger in place.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    if env_logger::Builder::from_env(env).try_init().is_ok() {
        log::debug!("Logging initialized (rankeval-rust {})", CORE_MODULE_VERSION);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging();
        init_logging();
        log::info!("logging still works after repeated initialization");
    }

    #[test]
    fn test_version_constants() {
        assert!(!CORE_MODULE_VERSION.is_empty());
    }

    #[test]
    fn test_module_reexports() {
        let _error: RankEvalError = RankEvalError::config("test");
        let _label: Label = 3.0;
        let _score: Score = 0.5;
        let _constant = DEFAULT_RBP_PERSISTENCE;
        assert!(UNDEFINED_SCORE.is_nan());
    }
}
