//! Relation deduction.
//!
//! For every node, each (predecessor, successor) pair from different maps is a
//! candidate relation whose transform path runs through the node. The RC word
//! along the full path is classified by the automaton; valid candidates whose
//! path visits every map at most once become new edges, or replace an existing
//! edge with a worse path category.

pub mod report;
pub mod tie_break;

use std::time::Instant;

use ort_core::config::DeductionConfig;
use ort_core::errors::AlgebraError;
use ort_core::types::collections::FxHashSet;
use ort_core::Region;

use crate::automaton::{classify, PathCategory};
use crate::graph::{RelationEdge, RelationGraph};
use crate::rc::Rc;

pub use report::DeductionReport;
pub use tie_break::prefers_candidate;

/// Adds deduced relations to a relation graph.
#[derive(Debug, Clone, Default)]
pub struct Deducer {
    config: DeductionConfig,
}

impl Deducer {
    pub fn new(config: DeductionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DeductionConfig {
        &self.config
    }

    /// Run deduction: one pass, or passes until nothing changes when fixpoint
    /// mode is configured.
    ///
    /// On error the graph is restored to its state before the failing pass.
    pub fn run(&self, graph: &mut RelationGraph) -> Result<DeductionReport, AlgebraError> {
        let mut total = DeductionReport::default();
        let max_passes = if self.config.effective_until_fixpoint() {
            self.config.effective_max_passes()
        } else {
            1
        };

        let mut settled = false;
        for _ in 0..max_passes {
            let pass = self.iterate_nodes(graph)?;
            total.absorb(&pass);
            if pass.changes() == 0 {
                settled = true;
                break;
            }
        }

        if self.config.effective_until_fixpoint() && !settled {
            tracing::warn!(
                passes = total.passes,
                "deduction stopped at the pass limit before reaching a fixpoint"
            );
        }
        Ok(total)
    }

    /// One pass: `process_node` on every node in insertion order.
    pub fn iterate_nodes(&self, graph: &mut RelationGraph) -> Result<DeductionReport, AlgebraError> {
        let started = Instant::now();
        let _span = tracing::info_span!("deduction_pass", nodes = graph.node_count()).entered();

        let snapshot = graph.clone();
        let nodes: Vec<Region> = graph.regions().cloned().collect();
        let mut report = DeductionReport {
            passes: 1,
            ..Default::default()
        };

        for node in &nodes {
            if let Err(error) = self.visit(graph, node, &mut report) {
                tracing::error!(node = %node, error = %error, "deduction pass aborted");
                *graph = snapshot;
                return Err(error);
            }
        }

        tracing::info!(
            edges_added = report.edges_added,
            edges_replaced = report.edges_replaced,
            kept_existing = report.kept_existing,
            rejected_invalid = report.rejected_invalid,
            rejected_duplicate_map = report.rejected_duplicate_map,
            pass_duration_ms = started.elapsed().as_millis() as u64,
            "deduction pass complete"
        );
        Ok(report)
    }

    /// Deduce relations between the neighbours of a single node.
    pub fn process_node(
        &self,
        graph: &mut RelationGraph,
        node: &Region,
    ) -> Result<DeductionReport, AlgebraError> {
        let mut report = DeductionReport::default();
        self.visit(graph, node, &mut report)?;
        Ok(report)
    }

    fn visit(
        &self,
        graph: &mut RelationGraph,
        node: &Region,
        report: &mut DeductionReport,
    ) -> Result<(), AlgebraError> {
        // Neighbour lists are fixed when the node is entered; edges added while
        // processing it are picked up by later nodes.
        let predecessors = graph.graph().predecessor_regions(node);
        let successors = graph.graph().successor_regions(node);

        for p in &predecessors {
            for s in &successors {
                if p.same_map(s) {
                    continue;
                }
                let Some(candidate) = self.candidate(graph, p, node, s, report)? else {
                    continue;
                };
                self.offer(graph, p, s, candidate, report);
            }
        }
        Ok(())
    }

    /// Build the candidate edge (p, s) through `node`, or `None` if rejected.
    fn candidate(
        &self,
        graph: &RelationGraph,
        p: &Region,
        node: &Region,
        s: &Region,
        report: &mut DeductionReport,
    ) -> Result<Option<RelationEdge>, AlgebraError> {
        let (Some(left), Some(right)) = (graph.edge(p, node), graph.edge(node, s)) else {
            return Ok(None);
        };

        let mut tp = Vec::with_capacity(left.tp.len() + right.tp.len() + 1);
        tp.extend(left.tp.iter().cloned());
        tp.push(node.clone());
        tp.extend(right.tp.iter().cloned());
        let pdc = left.pdc.worst(right.pdc);

        let mut path = Vec::with_capacity(tp.len() + 2);
        path.push(p.clone());
        path.extend(tp.iter().cloned());
        path.push(s.clone());

        let word = graph.rc_chain(&path)?;
        let category = classify(&word);
        if category == PathCategory::Invalid {
            report.rejected_invalid += 1;
            return Ok(None);
        }
        if !maps_are_distinct(&path) {
            report.rejected_duplicate_map += 1;
            return Ok(None);
        }

        // Ambiguous deductions carry a provisional Overlapping until relabelled.
        let rc = match category {
            PathCategory::Ambiguous => Rc::Overlapping,
            determined => determined.resolve_rc()?,
        };
        Ok(Some(RelationEdge {
            rc,
            tp,
            pdc,
            category,
        }))
    }

    fn offer(
        &self,
        graph: &mut RelationGraph,
        p: &Region,
        s: &Region,
        candidate: RelationEdge,
        report: &mut DeductionReport,
    ) {
        match graph.edge(p, s) {
            Some(existing) => {
                if prefers_candidate(self.config.effective_tie_break(), existing, &candidate) {
                    tracing::debug!(
                        source = %p,
                        target = %s,
                        from = %existing.category,
                        to = %candidate.category,
                        "replacing relation"
                    );
                    graph.set_pair(p, s, candidate);
                    report.edges_replaced += 1;
                } else {
                    report.kept_existing += 1;
                }
            }
            None => {
                tracing::debug!(
                    source = %p,
                    target = %s,
                    rc = %candidate.rc,
                    category = %candidate.category,
                    "deduced relation"
                );
                if candidate.category == PathCategory::Ambiguous {
                    report.ambiguous_added += 1;
                }
                graph.set_pair(p, s, candidate);
                report.edges_added += 1;
            }
        }
    }
}

/// Whether every region on the path comes from a different map.
fn maps_are_distinct(path: &[Region]) -> bool {
    let mut seen = FxHashSet::default();
    path.iter().all(|region| seen.insert(region.map()))
}
