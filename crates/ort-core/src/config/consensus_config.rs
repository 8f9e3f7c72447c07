//! Consensus configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration for resolving accumulated candidates on target edges.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConsensusConfig {
    /// Abort resolution on the first channel conflict. When false, conflicts are
    /// collected and the edge is left unresolved. Default: true.
    pub strict: Option<bool>,
}

impl ConsensusConfig {
    pub fn effective_strict(&self) -> bool {
        self.strict.unwrap_or(defaults::DEFAULT_STRICT_CONSENSUS)
    }
}
