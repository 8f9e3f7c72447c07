//! Structural invariant violations on graph input.

use super::error_code::{self, OrtErrorCode};

/// An input edge pair violates a structural invariant of the graph.
/// Only the offending pair is rejected; the rest of the batch proceeds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralInvariantError {
    #[error("self-loop on {region} is not allowed")]
    SelfLoop { region: String },

    #[error("{source_region} and {target_region} share map {map} and cannot be related directly")]
    SameMapRelation {
        source_region: String,
        target_region: String,
        map: String,
    },

    #[error(
        "asymmetric relation: {source_region} -> {target_region} is {forward} but the reverse edge is {reverse}"
    )]
    AsymmetricRelation {
        source_region: String,
        target_region: String,
        forward: String,
        reverse: String,
    },

    #[error("relation {source_region} -> {target_region} has no reverse edge")]
    MissingReverse {
        source_region: String,
        target_region: String,
    },
}

impl OrtErrorCode for StructuralInvariantError {
    fn error_code(&self) -> &'static str {
        error_code::STRUCTURAL_INVARIANT
    }
}
