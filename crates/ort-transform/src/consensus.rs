//! Consensus over the candidates accumulated on each target edge.
//!
//! Candidates vote per channel. A channel votes Present or Absent when all of
//! its decided candidates agree, Unknown when none decides, and Mixed when its
//! candidates disagree. The edge's consensus is the single decided value shared
//! by every voting channel; any disagreement is a modelling conflict and is
//! reported with all channel votes, never settled by majority.

use std::fmt;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use ort_core::config::ConsensusConfig;
use ort_core::errors::{ChannelVoteSummary, ConsensusConflictError};
use ort_core::{PassResult, Pdc, Region};

use crate::ec::Ec;
use crate::target_graph::{Candidate, Channel, TargetGraph};

/// Whether a connection exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    Present,
    Absent,
    Unknown,
}

impl Presence {
    /// Presence claimed by a candidate: absent if either end is absent, present
    /// if both ends certainly take part, unknown otherwise.
    pub fn of_candidate(candidate: &Candidate) -> Presence {
        Self::of_codes(candidate.ec_source, candidate.ec_target)
    }

    pub fn of_codes(source: Ec, target: Ec) -> Presence {
        if source.is_absent() || target.is_absent() {
            Self::Absent
        } else if source.is_present() && target.is_present() {
            Self::Present
        } else {
            Self::Unknown
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A channel's verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vote {
    Present,
    Absent,
    Unknown,
    Mixed,
}

impl Vote {
    fn decided(self) -> Option<Presence> {
        match self {
            Self::Present => Some(Presence::Present),
            Self::Absent => Some(Presence::Absent),
            Self::Unknown | Self::Mixed => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Unknown => "unknown",
            Self::Mixed => "mixed",
        }
    }
}

/// The vote of one channel that has candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelVote {
    pub channel: Channel,
    pub vote: Vote,
    pub candidates: usize,
}

impl From<ChannelVote> for ChannelVoteSummary {
    fn from(vote: ChannelVote) -> Self {
        ChannelVoteSummary {
            channel: vote.channel.as_str().to_string(),
            vote: vote.vote.as_str().to_string(),
            candidates: vote.candidates,
        }
    }
}

/// The settled value of a target edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub presence: Presence,
    /// Extent codes of the representative candidate.
    pub ec_source: Ec,
    pub ec_target: Ec,
    pub pdc: Pdc,
    pub channel: Channel,
    pub degree: Option<u8>,
    pub votes: Vec<ChannelVote>,
}

/// Counters for a consensus pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusReport {
    pub resolved: usize,
    pub present: usize,
    pub absent: usize,
    pub unknown: usize,
    pub conflicts: usize,
}

/// Votes of every channel holding at least one candidate, most precise first.
pub fn channel_votes(candidates: &[Candidate]) -> Vec<ChannelVote> {
    Channel::ALL
        .into_iter()
        .filter_map(|channel| {
            let mut count = 0;
            let mut vote = Vote::Unknown;
            for candidate in candidates.iter().filter(|c| c.channel == channel) {
                count += 1;
                vote = match (vote, Presence::of_candidate(candidate)) {
                    (current, Presence::Unknown) => current,
                    (Vote::Unknown, Presence::Present) => Vote::Present,
                    (Vote::Unknown, Presence::Absent) => Vote::Absent,
                    (Vote::Present, Presence::Present) => Vote::Present,
                    (Vote::Absent, Presence::Absent) => Vote::Absent,
                    _ => Vote::Mixed,
                };
            }
            (count > 0).then_some(ChannelVote {
                channel,
                vote,
                candidates: count,
            })
        })
        .collect()
}

/// Resolve the candidates of edge (source, target).
pub fn resolve_candidates(
    source: &Region,
    target: &Region,
    candidates: &[Candidate],
) -> Result<Resolution, ConsensusConflictError> {
    let votes = channel_votes(candidates);

    let conflict = || ConsensusConflictError {
        source_region: source.to_string(),
        target_region: target.to_string(),
        votes: votes.iter().copied().map(ChannelVoteSummary::from).collect(),
    };
    if votes.iter().any(|v| v.vote == Vote::Mixed) {
        return Err(conflict());
    }
    let mut decided = votes.iter().filter_map(|v| v.vote.decided());
    let presence = match decided.next() {
        None => Presence::Unknown,
        Some(first) => {
            if decided.any(|other| other != first) {
                return Err(conflict());
            }
            first
        }
    };

    let representative = representative(&votes, candidates, presence);
    Ok(match representative {
        Some(candidate) => Resolution {
            presence,
            ec_source: candidate.ec_source,
            ec_target: candidate.ec_target,
            pdc: candidate.pdc,
            channel: candidate.channel,
            degree: candidate.degree,
            votes,
        },
        None => Resolution {
            presence,
            ec_source: Ec::Unknown,
            ec_target: Ec::Unknown,
            pdc: Pdc::WORST,
            channel: Channel::SmallerOrOverlapping,
            degree: None,
            votes,
        },
    })
}

/// From the most precise channel that supports the consensus, the candidate
/// agreeing with it that has the best precision, then the most determined codes.
fn representative<'a>(
    votes: &[ChannelVote],
    candidates: &'a [Candidate],
    presence: Presence,
) -> Option<&'a Candidate> {
    let channel = votes
        .iter()
        .find(|v| presence == Presence::Unknown || v.vote.decided() == Some(presence))?
        .channel;
    candidates
        .iter()
        .enumerate()
        .filter(|(_, c)| c.channel == channel && Presence::of_candidate(c) == presence)
        .min_by_key(|(index, c)| {
            (
                c.pdc,
                c.ec_source.vagueness() + c.ec_target.vagueness(),
                *index,
            )
        })
        .map(|(_, c)| c)
}

/// Resolve every edge of the target graph.
///
/// In strict mode the first conflict aborts the pass. Otherwise conflicts are
/// collected in the returned `PassResult` and their edges stay unresolved.
pub fn resolve(
    graph: &mut TargetGraph,
    config: &ConsensusConfig,
) -> Result<PassResult<ConsensusReport>, ConsensusConflictError> {
    let started = Instant::now();
    let _span = tracing::info_span!("consensus", edges = graph.edge_count()).entered();
    let strict = config.effective_strict();

    let pairs: Vec<(Region, Region)> = graph
        .edges()
        .into_iter()
        .map(|(s, t, _)| (s.clone(), t.clone()))
        .collect();

    let mut result = PassResult::new(ConsensusReport::default());
    for (source, target) in pairs {
        let Some(edge) = graph.edge_mut(&source, &target) else {
            continue;
        };
        match resolve_candidates(&source, &target, &edge.candidates) {
            Ok(resolution) => {
                let report = &mut result.data;
                report.resolved += 1;
                match resolution.presence {
                    Presence::Present => report.present += 1,
                    Presence::Absent => report.absent += 1,
                    Presence::Unknown => report.unknown += 1,
                }
                edge.resolution = Some(resolution);
            }
            Err(conflict) => {
                tracing::warn!(error = %conflict, "channel votes disagree");
                edge.resolution = None;
                if strict {
                    return Err(conflict);
                }
                result.data.conflicts += 1;
                result.add_error(conflict);
            }
        }
    }

    tracing::info!(
        edges_resolved = result.data.resolved,
        conflicts = result.data.conflicts,
        pass_duration_ms = started.elapsed().as_millis() as u64,
        "consensus complete"
    );
    Ok(result)
}
