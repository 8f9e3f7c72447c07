//! Relation-code / extent-code algebra errors.

use super::error_code::{self, OrtErrorCode};

/// A table lookup or classification found no entry.
/// Always fatal to the enclosing deduction, elimination, or transformation pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlgebraError {
    #[error("unrecognized relation code '{code}'")]
    UnknownRelationCode { code: String },

    #[error("unrecognized extent code '{code}'")]
    UnknownExtentCode { code: String },

    #[error("no composition defined for ({first}, {second})")]
    UndefinedComposition { first: String, second: String },

    #[error("no extent step defined for ({accumulated}, {rc}, {extent})")]
    UndefinedExtentStep {
        accumulated: String,
        rc: String,
        extent: String,
    },

    #[error("path category {category} does not determine a relation code")]
    UnresolvableCategory { category: u8 },

    #[error("transform path {path} has no edge between {from} and {to}")]
    BrokenChain {
        from: String,
        to: String,
        path: String,
    },

    #[error("multi-step composition over an empty region list for target {target}")]
    EmptyComposition { target: String },
}

impl OrtErrorCode for AlgebraError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::BrokenChain { .. } => error_code::BROKEN_PATH,
            _ => error_code::ALGEBRA_ERROR,
        }
    }
}
