//! Evaluation document: the ordered metric list and run options.

use super::{ConfigFormat, MetricConfig};
use crate::core::error::{RankEvalError, Result};
use crate::{config_error, ensure};
use crate::metrics::RankingMetric;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A complete evaluation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Run queries through rayon
    #[serde(default)]
    pub parallel: bool,
    /// Metrics in report order
    pub metrics: Vec<MetricConfig>,
}

impl EvaluationConfig {
    /// Create a configuration from metric entries.
    pub fn new(metrics: Vec<MetricConfig>) -> Self {
        EvaluationConfig {
            parallel: false,
            metrics,
        }
    }

    /// Enable or disable parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EvaluationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: EvaluationConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a `.toml` or `.json` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| RankEvalError::config(format!("Failed to read config file: {}", e)))?;

        log::debug!("Loading evaluation config from {}", path.display());
        match format {
            ConfigFormat::Toml => Self::from_toml_str(&content),
            ConfigFormat::Json => Self::from_json_str(&content),
        }
    }

    /// Render as a TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| RankEvalError::config(format!("Failed to serialize to TOML: {}", e)))
    }

    /// Render as a JSON document.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save configuration to a `.toml` or `.json` file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => self.to_toml_string()?,
            ConfigFormat::Json => self.to_json_string()?,
        };

        std::fs::write(path, content)
            .map_err(|e| RankEvalError::config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Structural checks that do not need the metrics built.
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.metrics.is_empty(), config_error!("No metrics configured"));
        Ok(())
    }

    /// Build every configured metric, failing on the first invalid entry.
    pub fn build_metrics(&self) -> Result<Vec<RankingMetric>> {
        self.validate()?;
        self.metrics
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                entry.build().map_err(|e| {
                    log::warn!("Metric entry {} ({}) rejected: {}", i, entry.kind(), e);
                    e
                })
            })
            .collect()
    }
}

impl From<&[RankingMetric]> for EvaluationConfig {
    fn from(metrics: &[RankingMetric]) -> Self {
        EvaluationConfig::new(metrics.iter().map(MetricConfig::from).collect())
    }
}
