//! Contradiction elimination.
//!
//! Runs after deduction. Ambiguous deductions are relabelled first, then every
//! node's same-map successor groups are checked for relations that would force
//! two disjoint regions to overlap. Removal always takes both directions of a
//! pair, so the graph stays symmetric. Deductions that relied on a removed pair
//! are removed afterwards.

pub mod contradictions;
pub mod relabel;

use std::time::Instant;

use serde::{Deserialize, Serialize};

use ort_core::config::EliminationConfig;
use ort_core::Region;

use crate::graph::RelationGraph;

pub use relabel::RelabelCounts;

/// What an elimination run did to the relation graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliminationReport {
    /// Ambiguous pairs given a definite relation.
    pub relabelled: usize,
    /// Of those, pairs that fell back to Overlapping.
    pub defaulted_to_overlapping: usize,
    /// Region pairs removed as contradictions.
    pub removed: usize,
    /// Deduced pairs removed because their transform path lost a link.
    #[serde(default)]
    pub unsupported: usize,
}

/// Relabels ambiguous relations and removes contradictions.
#[derive(Debug, Clone, Default)]
pub struct Eliminator {
    config: EliminationConfig,
}

impl Eliminator {
    pub fn new(config: EliminationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EliminationConfig {
        &self.config
    }

    /// Relabel (if enabled), then eliminate contradictions and the deductions
    /// that rested on them (if enabled).
    pub fn run(&self, graph: &mut RelationGraph) -> EliminationReport {
        let started = Instant::now();
        let _span = tracing::info_span!("elimination", nodes = graph.node_count()).entered();

        let mut report = EliminationReport::default();
        if self.config.effective_relabel_ambiguous() {
            let counts = relabel::relabel_ambiguous(graph);
            report.relabelled = counts.total();
            report.defaulted_to_overlapping = counts.overlapping;
        }
        if self.config.effective_eliminate_contradictions() {
            report.removed = self.eliminate_contradictions(graph);
            report.unsupported = contradictions::prune_unsupported(graph);
        }

        tracing::info!(
            edges_relabelled = report.relabelled,
            edges_removed = report.removed,
            unsupported_removed = report.unsupported,
            pass_duration_ms = started.elapsed().as_millis() as u64,
            "elimination complete"
        );
        report
    }

    /// One sweep over all nodes in insertion order. Returns the pairs removed.
    pub fn eliminate_contradictions(&self, graph: &mut RelationGraph) -> usize {
        let nodes: Vec<Region> = graph.regions().cloned().collect();
        nodes
            .iter()
            .map(|node| self.process_node(graph, node).len())
            .sum()
    }

    /// Resolve the contradictions around one node; returns the regions it lost
    /// its relation to.
    pub fn process_node(&self, graph: &mut RelationGraph, node: &Region) -> Vec<Region> {
        contradictions::resolve_node(graph, node)
    }
}
