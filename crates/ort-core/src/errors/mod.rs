//! Error handling for the ORT engine.
//! One error enum per concern, `thiserror` only, zero `anyhow`.

pub mod algebra_error;
pub mod config_error;
pub mod consensus_error;
pub mod error_code;
pub mod graph_format_error;
pub mod ort_error;
pub mod structural_error;

pub use algebra_error::AlgebraError;
pub use config_error::ConfigError;
pub use consensus_error::{ChannelVoteSummary, ConsensusConflictError};
pub use error_code::OrtErrorCode;
pub use graph_format_error::GraphFormatError;
pub use ort_error::{OrtError, OrtResult, PassResult};
pub use structural_error::StructuralInvariantError;
