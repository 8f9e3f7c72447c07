//! OrtErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to provide a structured code string
/// that wrappers (CLI, bindings, log processors) can match on.
pub trait OrtErrorCode {
    /// Returns the error code string (e.g., "ALGEBRA_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const ALGEBRA_ERROR: &str = "ALGEBRA_ERROR";
pub const BROKEN_PATH: &str = "BROKEN_PATH";
pub const GRAPH_FORMAT_ERROR: &str = "GRAPH_FORMAT_ERROR";
pub const STRUCTURAL_INVARIANT: &str = "STRUCTURAL_INVARIANT";
pub const CONSENSUS_CONFLICT: &str = "CONSENSUS_CONFLICT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
