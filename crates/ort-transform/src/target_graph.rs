//! The target graph: translated connections between regions of the target map.
//!
//! Every source connection that translates onto a target pair leaves a
//! candidate on that pair's edge. Candidates are resolved into one value later
//! by the consensus pass.

use std::fmt;

use serde::{Deserialize, Serialize};

use ort_core::errors::{GraphFormatError, OrtError, StructuralInvariantError};
use ort_core::{Pdc, Region, RegionGraph};
use ort_relations::Rc;

use crate::consensus::Resolution;
use crate::ec::Ec;

/// Vote channel of a candidate, by how the original regions relate to the
/// target regions. Ordered from most to least precise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Identical,
    Larger,
    SmallerOrOverlapping,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Self::Identical, Self::Larger, Self::SmallerOrOverlapping];

    /// Channel of an original region with relation `rc` to its translation.
    pub fn of_relation(rc: Rc) -> Channel {
        match rc {
            Rc::Identical => Self::Identical,
            Rc::Larger => Self::Larger,
            Rc::Smaller | Rc::Overlapping => Self::SmallerOrOverlapping,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Identical => "identical",
            Self::Larger => "larger",
            Self::SmallerOrOverlapping => "smaller_or_overlapping",
        }
    }

    /// The less precise of two channels.
    pub fn worst(self, other: Channel) -> Channel {
        self.max(other)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One derivation of a target connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub ec_source: Ec,
    pub ec_target: Ec,
    pub channel: Channel,
    /// Worst precision over the relations and extent codes used.
    pub pdc: Pdc,
    pub degree: Option<u8>,
    /// The source connection this candidate was translated from.
    pub origin: (Region, Region),
}

/// Accumulated candidates of a target edge and, once resolved, their consensus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetEdge {
    pub candidates: Vec<Candidate>,
    pub resolution: Option<Resolution>,
}

/// Connections between regions of one target map.
#[derive(Debug, Clone)]
pub struct TargetGraph {
    map: String,
    inner: RegionGraph<TargetEdge>,
}

impl TargetGraph {
    pub fn new(map: impl Into<String>) -> Self {
        Self {
            map: map.into(),
            inner: RegionGraph::new(),
        }
    }

    /// Name of the target map.
    pub fn map(&self) -> &str {
        &self.map
    }

    /// Append a candidate to edge (source, target), creating the edge if needed.
    pub fn add_candidate(
        &mut self,
        source: &Region,
        target: &Region,
        candidate: Candidate,
    ) -> Result<(), OrtError> {
        for region in [source, target] {
            if !region.in_map(&self.map) {
                return Err(GraphFormatError::ForeignRegion {
                    region: region.to_string(),
                    map: self.map.clone(),
                }
                .into());
            }
        }
        if source == target {
            return Err(StructuralInvariantError::SelfLoop {
                region: source.to_string(),
            }
            .into());
        }
        self.push_candidate(source, target, candidate);
        Ok(())
    }

    pub(crate) fn push_candidate(&mut self, source: &Region, target: &Region, candidate: Candidate) {
        match self.inner.edge_mut(source, target) {
            Some(edge) => {
                edge.candidates.push(candidate);
                edge.resolution = None;
            }
            None => {
                self.inner.set_edge(
                    source,
                    target,
                    TargetEdge {
                        candidates: vec![candidate],
                        resolution: None,
                    },
                );
            }
        }
    }

    pub fn edge(&self, source: &Region, target: &Region) -> Option<&TargetEdge> {
        self.inner.edge(source, target)
    }

    pub(crate) fn edge_mut(&mut self, source: &Region, target: &Region) -> Option<&mut TargetEdge> {
        self.inner.edge_mut(source, target)
    }

    /// All edges in source then target insertion order.
    pub fn edges(&self) -> Vec<(&Region, &Region, &TargetEdge)> {
        self.inner.edges()
    }

    pub fn regions(&self) -> impl Iterator<Item = &Region> + '_ {
        self.inner.regions()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn candidate_count(&self) -> usize {
        self.inner
            .edges()
            .iter()
            .map(|(_, _, edge)| edge.candidates.len())
            .sum()
    }
}
