//! Top-level error and non-fatal error collection.

use super::{
    AlgebraError, ConfigError, ConsensusConflictError, GraphFormatError, OrtErrorCode,
    StructuralInvariantError,
};

/// Errors that can abort an ORT pass.
/// Aggregates the per-concern errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum OrtError {
    #[error("Algebra error: {0}")]
    Algebra(#[from] AlgebraError),

    #[error("Graph format error: {0}")]
    GraphFormat(#[from] GraphFormatError),

    #[error("Structural invariant violated: {0}")]
    Structural(#[from] StructuralInvariantError),

    #[error("Consensus conflict: {0}")]
    ConsensusConflict(#[from] ConsensusConflictError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl OrtErrorCode for OrtError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Algebra(e) => e.error_code(),
            Self::GraphFormat(e) => e.error_code(),
            Self::Structural(e) => e.error_code(),
            Self::ConsensusConflict(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Result alias used throughout the workspace.
pub type OrtResult<T> = Result<T, OrtError>;

/// Result of a pass that accumulates non-fatal errors.
/// Allows partial results to be returned when isolated records are rejected.
#[derive(Debug, Default)]
pub struct PassResult<T: Default = ()> {
    /// The successful result data.
    pub data: T,
    /// Non-fatal errors collected during the pass.
    pub errors: Vec<OrtError>,
}

impl<T: Default> PassResult<T> {
    /// Create a new pass result with no errors.
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    /// Add a non-fatal error to the result.
    pub fn add_error(&mut self, error: impl Into<OrtError>) {
        self.errors.push(error.into());
    }

    /// Returns true if there are no non-fatal errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of non-fatal errors.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
