//! Transformation (AT) configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration for the algebra-of-transformation pass.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TransformConfig {
    /// Compute per-connection candidates on the rayon pool. Default: true.
    pub parallel: Option<bool>,
    /// Below this many connections the pass stays sequential. Default: 512.
    pub min_parallel_connections: Option<usize>,
}

impl TransformConfig {
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(defaults::DEFAULT_PARALLEL)
    }

    pub fn effective_min_parallel_connections(&self) -> usize {
        self.min_parallel_connections
            .unwrap_or(defaults::DEFAULT_MIN_PARALLEL_CONNECTIONS)
    }

    /// Whether a pass over `connections` edges should run in parallel.
    pub fn use_parallel_for(&self, connections: usize) -> bool {
        self.effective_parallel() && connections >= self.effective_min_parallel_connections()
    }
}
