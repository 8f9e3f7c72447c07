//! Top-level ORT configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    ConsensusConfig, DeductionConfig, EliminationConfig, ObservabilityConfig, TieBreak,
    TransformConfig,
};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ORT_*`)
/// 2. Project config (`ort.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OrtConfig {
    pub deduction: DeductionConfig,
    pub elimination: EliminationConfig,
    pub transform: TransformConfig,
    pub consensus: ConsensusConfig,
    pub observability: ObservabilityConfig,
}

impl OrtConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Serialize to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &OrtConfig) -> Result<(), ConfigError> {
        if let Some(max_passes) = config.deduction.max_passes {
            if max_passes == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "deduction.max_passes".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(ref level) = config.observability.log_level {
            if !LOG_LEVELS.contains(&level.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "observability.log_level".to_string(),
                    message: format!("must be one of {}", LOG_LEVELS.join(", ")),
                });
            }
        }
        Ok(())
    }

    fn merge_toml_file(config: &mut OrtConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let file_config: OrtConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut OrtConfig, other: &OrtConfig) {
        // Deduction
        if other.deduction.tie_break.is_some() {
            base.deduction.tie_break = other.deduction.tie_break;
        }
        if other.deduction.until_fixpoint.is_some() {
            base.deduction.until_fixpoint = other.deduction.until_fixpoint;
        }
        if other.deduction.max_passes.is_some() {
            base.deduction.max_passes = other.deduction.max_passes;
        }

        // Elimination
        if other.elimination.relabel_ambiguous.is_some() {
            base.elimination.relabel_ambiguous = other.elimination.relabel_ambiguous;
        }
        if other.elimination.eliminate_contradictions.is_some() {
            base.elimination.eliminate_contradictions =
                other.elimination.eliminate_contradictions;
        }

        // Transform
        if other.transform.parallel.is_some() {
            base.transform.parallel = other.transform.parallel;
        }
        if other.transform.min_parallel_connections.is_some() {
            base.transform.min_parallel_connections = other.transform.min_parallel_connections;
        }

        // Consensus
        if other.consensus.strict.is_some() {
            base.consensus.strict = other.consensus.strict;
        }

        // Observability
        if other.observability.log_level.is_some() {
            base.observability.log_level = other.observability.log_level.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `ORT_DEDUCTION_TIE_BREAK`, `ORT_TRANSFORM_PARALLEL`, etc.
    fn apply_env_overrides(config: &mut OrtConfig) {
        if let Ok(val) = std::env::var("ORT_DEDUCTION_TIE_BREAK") {
            match TieBreak::from_str_name(&val) {
                Some(policy) => config.deduction.tie_break = Some(policy),
                None => ::tracing::warn!(value = %val, "ignoring unknown ORT_DEDUCTION_TIE_BREAK"),
            }
        }
        if let Ok(val) = std::env::var("ORT_DEDUCTION_UNTIL_FIXPOINT") {
            if let Ok(v) = val.parse::<bool>() {
                config.deduction.until_fixpoint = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ORT_DEDUCTION_MAX_PASSES") {
            if let Ok(v) = val.parse::<usize>() {
                config.deduction.max_passes = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ORT_ELIMINATION_RELABEL_AMBIGUOUS") {
            if let Ok(v) = val.parse::<bool>() {
                config.elimination.relabel_ambiguous = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ORT_TRANSFORM_PARALLEL") {
            if let Ok(v) = val.parse::<bool>() {
                config.transform.parallel = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ORT_CONSENSUS_STRICT") {
            if let Ok(v) = val.parse::<bool>() {
                config.consensus.strict = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ORT_LOG_LEVEL") {
            config.observability.log_level = Some(val);
        }
    }
}
