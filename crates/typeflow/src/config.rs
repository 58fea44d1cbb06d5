//! Engine configuration

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::search::Pruning;
use crate::state::Strategy;

/// Configuration for the fuzzy search engine
///
/// Every field has a default, so a JSON document only needs the keys it
/// overrides:
///
/// ```rust
/// use typeflow::{EngineConfig, Pruning};
///
/// let config = EngineConfig::from_json(r#"{ "pruning": "disabled" }"#).unwrap();
/// assert_eq!(config.pruning, Pruning::Disabled);
/// assert_eq!(config.max_results, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Minimum similarity (0.0-1.0) used by [`FuzzyEngine::search`](crate::FuzzyEngine::search)
    pub min_similarity: f64,
    /// Maximum results returned by [`FuzzyEngine::search`](crate::FuzzyEngine::search)
    pub max_results: usize,
    /// Cost-table layout of the per-query distance state
    pub strategy: Strategy,
    /// Subtree pruning policy
    pub pruning: Pruning,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_similarity: 0.6,
            max_results: 20,
            strategy: Strategy::default(),
            pruning: Pruning::default(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_min_similarity(mut self, min_similarity: f64) -> Self {
        self.min_similarity = min_similarity;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_similarity) {
            return Err(Error::Config(format!(
                "min_similarity must be within [0, 1], got {}",
                self.min_similarity
            )));
        }
        if self.max_results == 0 {
            return Err(Error::Config("max_results must be positive".to_string()));
        }
        Ok(())
    }
}
