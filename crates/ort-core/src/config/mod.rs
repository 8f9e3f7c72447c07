//! Configuration system for the ORT engine.
//! TOML-based, 3-layer resolution: env > project (`ort.toml`) > defaults.

pub mod consensus_config;
pub mod deduction_config;
pub mod defaults;
pub mod elimination_config;
pub mod observability_config;
pub mod ort_config;
pub mod transform_config;

pub use consensus_config::ConsensusConfig;
pub use deduction_config::{DeductionConfig, TieBreak};
pub use elimination_config::EliminationConfig;
pub use observability_config::ObservabilityConfig;
pub use ort_config::OrtConfig;
pub use transform_config::TransformConfig;
