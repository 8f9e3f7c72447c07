//! Elimination configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration for the contradiction eliminator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EliminationConfig {
    /// Relabel ambiguous (category 4) deductions before removing contradictions. Default: true.
    pub relabel_ambiguous: Option<bool>,
    /// Remove contradicting same-map edge groups. Default: true.
    pub eliminate_contradictions: Option<bool>,
}

impl EliminationConfig {
    pub fn effective_relabel_ambiguous(&self) -> bool {
        self.relabel_ambiguous
            .unwrap_or(defaults::DEFAULT_RELABEL_AMBIGUOUS)
    }

    pub fn effective_eliminate_contradictions(&self) -> bool {
        self.eliminate_contradictions
            .unwrap_or(defaults::DEFAULT_ELIMINATE_CONTRADICTIONS)
    }
}
