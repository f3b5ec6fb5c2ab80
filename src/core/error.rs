//! Error handling and error types for Pure Rust RankEval.
//!
//! Structural problems (shape mismatches, empty datasets, bad configuration)
//! surface as [`RankEvalError`] and abort the call that hit them. Numeric
//! degeneracy inside a single query never becomes an error during evaluation;
//! it is stored as the undefined sentinel instead.

use std::io;
use thiserror::Error;

/// Main error type for the RankEval library.
#[derive(Error, Debug)]
pub enum RankEvalError {
    /// Configuration document errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Inconsistent query boundaries or labels
    #[error("Dataset error: {message}")]
    Dataset { message: String },

    /// Label/prediction length mismatch
    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },

    /// Nothing to evaluate
    #[error("Empty dataset: no queries or no instances to evaluate")]
    EmptyDataset,

    /// Input values that cannot be ranked (e.g. NaN)
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Invalid metric parameters
    #[error("Invalid parameter: {parameter} = {value}, {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },

    /// A defined value was requested for a query whose metric is undefined
    #[error("Undefined metric value: {metric} is undefined for query {query}")]
    UndefinedMetricValue { metric: String, query: usize },

    /// Out of bounds access
    #[error("Index out of bounds: index {index}, length {length}")]
    IndexOutOfBounds { index: usize, length: usize },

    /// File I/O errors
    #[error("I/O error: {source}")]
    IO {
        #[from]
        source: io::Error,
    },

    /// JSON serialization errors
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// TOML parsing errors
    #[error("TOML parsing error: {source}")]
    Toml {
        #[from]
        source: toml::de::Error,
    },
}

/// Type alias for Results using RankEvalError
pub type Result<T> = std::result::Result<T, RankEvalError>;

impl RankEvalError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        RankEvalError::Config {
            message: message.into(),
        }
    }

    /// Create a dataset error
    pub fn dataset<S: Into<String>>(message: S) -> Self {
        RankEvalError::Dataset {
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        RankEvalError::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a shape mismatch error
    pub fn shape_mismatch<E, A>(expected: E, actual: A) -> Self
    where
        E: Into<String>,
        A: Into<String>,
    {
        RankEvalError::ShapeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter<P, V, R>(parameter: P, value: V, reason: R) -> Self
    where
        P: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        RankEvalError::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an undefined metric value error
    pub fn undefined_metric_value<S: Into<String>>(metric: S, query: usize) -> Self {
        RankEvalError::UndefinedMetricValue {
            metric: metric.into(),
            query,
        }
    }

    /// Create an index out of bounds error
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        RankEvalError::IndexOutOfBounds { index, length }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            RankEvalError::Config { .. } => "config",
            RankEvalError::Dataset { .. } => "dataset",
            RankEvalError::ShapeMismatch { .. } => "shape_mismatch",
            RankEvalError::EmptyDataset => "empty_dataset",
            RankEvalError::InvalidInput { .. } => "invalid_input",
            RankEvalError::InvalidParameter { .. } => "invalid_parameter",
            RankEvalError::UndefinedMetricValue { .. } => "undefined_metric_value",
            RankEvalError::IndexOutOfBounds { .. } => "index_out_of_bounds",
            RankEvalError::IO { .. } => "io",
            RankEvalError::Json { .. } => "json",
            RankEvalError::Toml { .. } => "toml",
        }
    }

    /// Whether the error is raised at metric construction rather than evaluation
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            RankEvalError::Config { .. }
                | RankEvalError::InvalidParameter { .. }
                | RankEvalError::Toml { .. }
                | RankEvalError::Json { .. }
        )
    }
}

/// Convenience macros for error creation
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::core::error::RankEvalError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::core::error::RankEvalError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! dataset_error {
    ($msg:expr) => {
        $crate::core::error::RankEvalError::dataset($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::core::error::RankEvalError::dataset(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err.into());
        }
    };
}
