//! Consensus conflicts between vote channels of a transformed connection.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error_code::{self, OrtErrorCode};

/// One channel's vote, recorded for diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelVoteSummary {
    /// Channel name (e.g. "identical").
    pub channel: String,
    /// The channel's vote (e.g. "present").
    pub vote: String,
    /// Number of candidates that fed the channel.
    pub candidates: usize,
}

impl fmt::Display for ChannelVoteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.channel, self.vote, self.candidates)
    }
}

/// The vote channels for one target edge disagree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("consensus conflict on {source_region} -> {target_region}: {}", format_votes(.votes))]
pub struct ConsensusConflictError {
    pub source_region: String,
    pub target_region: String,
    pub votes: Vec<ChannelVoteSummary>,
}

fn format_votes(votes: &[ChannelVoteSummary]) -> String {
    votes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl OrtErrorCode for ConsensusConflictError {
    fn error_code(&self) -> &'static str {
        error_code::CONSENSUS_CONFLICT
    }
}
