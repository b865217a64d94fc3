//! Configuration system for LinkForge.
//!
//! Load parse options from TOML or YAML files to tune how linkages are
//! scored and ranked without code changes.
//!
//! # Examples
//!
//! Load options from a TOML string:
//!
//! ```
//! use linkforge_config::{ParseOptions, SpanMeasure};
//! use linkforge_core::Cost;
//!
//! let options = ParseOptions::from_toml_str(r#"
//!     max_cost = 12.5
//!     null_word_penalty = 5.0
//!     prefer_fewer_nulls = true
//!     short_length_preference = true
//!     span_measure = "max"
//! "#).unwrap();
//!
//! assert_eq!(options.max_cost(), Some(Cost::of(12.5)));
//! assert_eq!(options.span_measure, SpanMeasure::Max);
//! assert_eq!(options.disjunct_cost_weight, 1.0);
//! ```
//!
//! Use defaults when the file is missing:
//!
//! ```
//! use linkforge_config::ParseOptions;
//!
//! let options = ParseOptions::load("parse.toml").unwrap_or_default();
//! assert!(options.max_cost.is_none());
//! ```

use std::path::Path;

use linkforge_core::Cost;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Read-only knobs for scoring and ranking linkages.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ParseOptions {
    /// Linkages costing more than this are flagged over budget.
    pub max_cost: Option<f64>,

    /// Multiplier for a linkage's cumulative disjunct cost.
    pub disjunct_cost_weight: f64,

    /// Cost added per null word.
    pub null_word_penalty: f64,

    /// Break cost ties by fewer null words first.
    pub prefer_fewer_nulls: bool,

    /// Penalize long links and break ties by shorter total span.
    pub short_length_preference: bool,

    /// How link spans are aggregated into the structural penalty.
    pub span_measure: SpanMeasure,

    /// Multiplier for the aggregated link span.
    pub link_span_weight: f64,

    /// What the ranking helper does with over-budget linkages.
    pub over_budget: OverBudgetPolicy,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_cost: None,
            disjunct_cost_weight: 1.0,
            null_word_penalty: 1.0,
            prefer_fewer_nulls: false,
            short_length_preference: false,
            span_measure: SpanMeasure::default(),
            link_span_weight: 1.0,
            over_budget: OverBudgetPolicy::default(),
        }
    }
}

impl ParseOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads options from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads options from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses options from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let options: Self = toml::from_str(s)?;
        options.validate()?;
        Ok(options)
    }

    /// Loads options from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses options from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let options: Self = serde_yaml::from_str(s)?;
        options.validate()?;
        Ok(options)
    }

    /// Checks that every weight is finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            ("disjunct_cost_weight", self.disjunct_cost_weight),
            ("null_word_penalty", self.null_word_penalty),
            ("link_span_weight", self.link_span_weight),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        if let Some(max) = self.max_cost {
            if max.is_nan() {
                return Err(ConfigError::Invalid("max_cost must not be NaN".to_string()));
            }
        }
        Ok(())
    }

    /// Sets the cost budget.
    pub fn with_max_cost(mut self, max_cost: f64) -> Self {
        self.max_cost = Some(max_cost);
        self
    }

    /// Sets the disjunct cost multiplier.
    pub fn with_disjunct_cost_weight(mut self, weight: f64) -> Self {
        self.disjunct_cost_weight = weight;
        self
    }

    /// Sets the per-null-word penalty.
    pub fn with_null_word_penalty(mut self, penalty: f64) -> Self {
        self.null_word_penalty = penalty;
        self
    }

    /// Enables or disables null-count tie-breaking.
    pub fn with_prefer_fewer_nulls(mut self, prefer: bool) -> Self {
        self.prefer_fewer_nulls = prefer;
        self
    }

    /// Enables or disables the link-span penalty and tie-break.
    pub fn with_short_length_preference(mut self, prefer: bool) -> Self {
        self.short_length_preference = prefer;
        self
    }

    /// Sets how link spans are aggregated.
    pub fn with_span_measure(mut self, measure: SpanMeasure) -> Self {
        self.span_measure = measure;
        self
    }

    /// Sets the link-span multiplier.
    pub fn with_link_span_weight(mut self, weight: f64) -> Self {
        self.link_span_weight = weight;
        self
    }

    /// Sets the over-budget ranking policy.
    pub fn with_over_budget(mut self, policy: OverBudgetPolicy) -> Self {
        self.over_budget = policy;
        self
    }

    /// Returns the cost budget, if configured.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkforge_config::ParseOptions;
    /// use linkforge_core::Cost;
    ///
    /// let options = ParseOptions::new().with_max_cost(10.0);
    /// assert_eq!(options.max_cost(), Some(Cost::of(10.0)));
    /// ```
    pub fn max_cost(&self) -> Option<Cost> {
        self.max_cost.map(Cost::saturating)
    }
}

/// Aggregation of link spans for the structural penalty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanMeasure {
    /// Sum of all link spans.
    #[default]
    Sum,

    /// Longest single link span.
    Max,
}

/// Ranking treatment of linkages whose cost exceeds the budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverBudgetPolicy {
    /// Rank purely by cost; the flag is informational.
    Keep,

    /// Rank every over-budget linkage after every in-budget one.
    #[default]
    Deprioritize,

    /// Leave over-budget linkages out of the ranking.
    Discard,
}

#[cfg(test)]
mod tests;
