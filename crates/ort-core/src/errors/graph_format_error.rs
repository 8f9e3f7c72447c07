//! Input format errors raised while building a graph from records.

use super::error_code::{self, OrtErrorCode};

/// A record could not be turned into typed graph data.
/// Fatal at construction time: the whole batch being added is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphFormatError {
    #[error("malformed region identifier '{id}': {reason}")]
    MalformedRegion { id: String, reason: String },

    #[error("precision code {value} is out of range (0..={max})")]
    PdcOutOfRange { value: u8, max: u8 },

    #[error("unknown precision letter '{letter}'")]
    UnknownPdcLetter { letter: String },

    #[error("connection degree {value} is out of range (0..={max})")]
    DegreeOutOfRange { value: u8, max: u8 },

    #[error("region {region} does not belong to map {map}")]
    ForeignRegion { region: String, map: String },
}

impl OrtErrorCode for GraphFormatError {
    fn error_code(&self) -> &'static str {
        error_code::GRAPH_FORMAT_ERROR
    }
}
