//! Configuration system for natlog.
//!
//! Load cost levels, fact-index options and the invalid-input policy from
//! TOML or YAML without code changes. The fixed capacities (maximum token
//! count, maximum completions, ...) are constants in `natlog_core` and are
//! not configurable.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use natlog_config::{InvalidInputPolicy, NatlogConfig};
//!
//! let config = NatlogConfig::from_toml_str(r#"
//!     invalid_input = "panic"
//!
//!     [costs]
//!     small_constant_cost = 0.1
//!     ok_cost = 1.0
//!     bad_cost = 5.0
//!
//!     [index]
//!     completion_cache = true
//!     min_fact_weight = 3
//! "#).unwrap();
//!
//! assert_eq!(config.invalid_input, InvalidInputPolicy::Panic);
//! assert_eq!(config.costs.bad_cost, 5.0);
//! assert!(config.index.completion_cache);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use natlog_config::NatlogConfig;
//!
//! let config = NatlogConfig::load("natlog.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use natlog_core::MIN_FACT_WEIGHT;
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

/// Main natlog configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct NatlogConfig {
    /// Cost levels for the reference cost table.
    #[serde(default)]
    pub costs: CostConfig,

    /// Fact index construction options.
    #[serde(default)]
    pub index: IndexConfig,

    /// What to do when a corrupt code reaches projection or cost logic.
    #[serde(default)]
    pub invalid_input: InvalidInputPolicy,
}

impl NatlogConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the three cost levels.
    pub fn with_cost_levels(mut self, small_constant_cost: f32, ok_cost: f32, bad_cost: f32) -> Self {
        self.costs = CostConfig {
            small_constant_cost,
            ok_cost,
            bad_cost,
        };
        self
    }

    /// Enables or disables the per-node completion cache.
    pub fn with_completion_cache(mut self, enabled: bool) -> Self {
        self.index.completion_cache = enabled;
        self
    }

    /// Sets the minimum fact weight.
    pub fn with_min_fact_weight(mut self, weight: u32) -> Self {
        self.index.min_fact_weight = weight;
        self
    }

    /// Caps the number of facts read from the source.
    pub fn with_max_facts(mut self, max_facts: u64) -> Self {
        self.index.max_facts = Some(max_facts);
        self
    }

    /// Sets the invalid-input policy.
    pub fn with_invalid_input(mut self, policy: InvalidInputPolicy) -> Self {
        self.invalid_input = policy;
        self
    }

    /// Checks every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.costs.validate()?;
        self.index.validate()
    }
}

/// The three tunable levels of the reference cost table.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CostConfig {
    /// Lexical cost of ordinary edits.
    pub small_constant_cost: f32,

    /// Cost of plausible truth transitions.
    pub ok_cost: f32,

    /// Cost of implausible transitions and fishy mutation types.
    pub bad_cost: f32,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            small_constant_cost: 0.01,
            ok_cost: 1.0,
            bad_cost: 10.0,
        }
    }
}

impl CostConfig {
    /// Rejects negative or non-finite levels.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("small_constant_cost", self.small_constant_cost),
            ("ok_cost", self.ok_cost),
            ("bad_cost", self.bad_cost),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "costs.{name} must be finite and non-negative, was {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Fact index construction options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct IndexConfig {
    /// Keep a bounded completion cache on every node, so high fan-out nodes
    /// can still propose completions.
    #[serde(default)]
    pub completion_cache: bool,

    /// Facts lighter than this are not indexed.
    #[serde(default = "default_min_fact_weight")]
    pub min_fact_weight: u32,

    /// Maximum number of facts to read from the source.
    #[serde(default)]
    pub max_facts: Option<u64>,

    /// Number of facts between progress log events.
    #[serde(default = "default_progress_interval")]
    pub progress_interval: u64,
}

fn default_min_fact_weight() -> u32 {
    MIN_FACT_WEIGHT
}

fn default_progress_interval() -> u64 {
    1_000_000
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            completion_cache: false,
            min_fact_weight: default_min_fact_weight(),
            max_facts: None,
            progress_interval: default_progress_interval(),
        }
    }
}

impl IndexConfig {
    /// Rejects a zero progress interval.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.progress_interval == 0 {
            return Err(ConfigError::Invalid(
                "index.progress_interval must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Handling of corrupt enumeration codes reaching projection, transition or
/// cost logic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidInputPolicy {
    /// Return the error to the caller, who decides whether to drop one
    /// derivation or abort the run.
    #[default]
    Propagate,

    /// Treat the error as unrecoverable and panic at the call boundary.
    Panic,
}

impl InvalidInputPolicy {
    /// Applies the policy to the result of a core operation.
    ///
    /// Under [`Panic`](Self::Panic), a contract violation panics; every
    /// other result passes through unchanged.
    pub fn enforce<T>(self, result: natlog_core::Result<T>) -> natlog_core::Result<T> {
        match result {
            Err(err) if self == InvalidInputPolicy::Panic && err.is_contract_violation() => {
                panic!("corrupt natural-logic input: {err}")
            }
            other => other,
        }
    }
}
