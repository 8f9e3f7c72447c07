//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Default filter directive when `ORT_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVE: &str = "ort=info";

/// Initialize the ORT tracing/logging system.
///
/// Reads the `ORT_LOG` environment variable for per-pass log levels.
/// Format: `ORT_LOG=ort_relations::deduction=debug,ort_transform=info`
///
/// Falls back to `ort=info` if `ORT_LOG` is not set or is invalid.
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    init_tracing_with_default(DEFAULT_DIRECTIVE);
}

/// Like [`init_tracing`], with a caller-chosen fallback directive
/// (typically `OrtConfig::observability` resolved to a directive).
pub fn init_tracing_with_default(default_directive: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(default_directive))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
