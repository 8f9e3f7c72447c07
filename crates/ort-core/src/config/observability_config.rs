use serde::{Deserialize, Serialize};

use super::defaults;

/// Logging configuration. `ORT_LOG` still takes precedence at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Fallback log level for the `ort` crates. Default: "info".
    pub log_level: Option<String>,
}

impl ObservabilityConfig {
    pub fn effective_log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or(defaults::DEFAULT_LOG_LEVEL)
    }

    /// Filter directive for `init_tracing_with_default`.
    pub fn directive(&self) -> String {
        format!("ort={}", self.effective_log_level())
    }
}
