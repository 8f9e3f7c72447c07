//! Serializable snapshot of a target graph, for external formatters.

use serde::{Deserialize, Serialize};

use ort_core::Region;

use crate::consensus::Resolution;
use crate::target_graph::{Candidate, TargetGraph};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetEdgeSnapshot {
    pub source: Region,
    pub target: Region,
    pub candidates: Vec<Candidate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<Resolution>,
}

/// A target graph as plain data. Edges are in graph order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetGraphSnapshot {
    pub map: String,
    pub regions: Vec<Region>,
    pub edges: Vec<TargetEdgeSnapshot>,
}

impl TargetGraphSnapshot {
    pub fn of(graph: &TargetGraph) -> Self {
        Self {
            map: graph.map().to_string(),
            regions: graph.regions().cloned().collect(),
            edges: graph
                .edges()
                .into_iter()
                .map(|(source, target, edge)| TargetEdgeSnapshot {
                    source: source.clone(),
                    target: target.clone(),
                    candidates: edge.candidates.clone(),
                    resolution: edge.resolution.clone(),
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Edges whose consensus is settled.
    pub fn resolved_edges(&self) -> impl Iterator<Item = &TargetEdgeSnapshot> {
        self.edges.iter().filter(|edge| edge.resolution.is_some())
    }
}

impl TargetGraph {
    pub fn snapshot(&self) -> TargetGraphSnapshot {
        TargetGraphSnapshot::of(self)
    }
}
