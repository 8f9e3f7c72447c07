//! Removal of relations that force two regions of one map to overlap.
//!
//! Regions of one map are disjoint. A region that is Identical to or Smaller
//! than one of them can therefore not intersect any other region of that map.
//! Deduced relations whose transform path ran through a removed pair lose their
//! support and are removed with it.

use ort_core::{Pdc, Region};

use crate::graph::{RelationEdge, RelationGraph};
use crate::rc::Rc;

/// A successor of the node being checked, with its rank in neighbour order.
struct Member {
    region: Region,
    rc: Rc,
    pdc: Pdc,
    tp_len: usize,
    position: usize,
}

impl Member {
    fn rank(&self) -> (Pdc, usize, usize) {
        (self.pdc, self.tp_len, self.position)
    }
}

/// Resolve every contradiction among the successors of `node`. Returns the
/// regions whose pairs with `node` were removed.
pub fn resolve_node(graph: &mut RelationGraph, node: &Region) -> Vec<Region> {
    let mut removed = Vec::new();
    for group in successor_groups(graph, node) {
        for loser in losers(group) {
            tracing::debug!(node = %node, other = %loser, "removing contradicting relation");
            graph.remove_pair(node, &loser);
            removed.push(loser);
        }
    }
    removed
}

/// Successors of `node`, grouped by map in order of first appearance.
fn successor_groups(graph: &RelationGraph, node: &Region) -> Vec<Vec<Member>> {
    let mut groups: Vec<Vec<Member>> = Vec::new();
    for (position, (region, edge)) in graph.successors(node).into_iter().enumerate() {
        let member = to_member(region, edge, position);
        match groups
            .iter_mut()
            .find(|group| group[0].region.same_map(region))
        {
            Some(group) => group.push(member),
            None => groups.push(vec![member]),
        }
    }
    groups
}

fn to_member(region: &Region, edge: &RelationEdge, position: usize) -> Member {
    Member {
        region: region.clone(),
        rc: edge.rc,
        pdc: edge.pdc,
        tp_len: edge.tp.len(),
        position,
    }
}

/// The members of one same-map group that have to go.
fn losers(group: Vec<Member>) -> Vec<Region> {
    if group.len() < 2 || !group.iter().any(|m| m.rc.is_contained()) {
        return Vec::new();
    }

    let best_of = |rc: Rc| {
        group
            .iter()
            .filter(|m| m.rc == rc)
            .min_by_key(|m| m.rank())
            .map(|m| m.position)
    };

    // Identical wins outright; failing that, the best Smaller is the candidate keeper.
    if let Some(keep) = best_of(Rc::Identical) {
        return all_but(group, keep);
    }
    let Some(keep) = best_of(Rc::Smaller) else {
        return Vec::new();
    };
    if group.iter().all(|m| m.rc == Rc::Smaller) {
        return all_but(group, keep);
    }

    // Mixed directions: trust the Larger/Overlapping side only if even its
    // least precise relation beats the most precise Smaller one.
    let worst_lo = group
        .iter()
        .filter(|m| !m.rc.is_contained())
        .map(|m| m.pdc)
        .max();
    let best_is = group
        .iter()
        .filter(|m| m.rc.is_contained())
        .map(|m| m.pdc)
        .min();
    match (worst_lo, best_is) {
        (Some(lo), Some(is)) if lo < is => group
            .into_iter()
            .filter(|m| m.rc.is_contained())
            .map(|m| m.region)
            .collect(),
        _ => all_but(group, keep),
    }
}

/// Remove deduced pairs whose transform path crosses a pair no longer in the
/// graph, until every remaining path is intact. Returns the pairs removed.
pub fn prune_unsupported(graph: &mut RelationGraph) -> usize {
    let mut pruned = 0;
    loop {
        let broken: Vec<(Region, Region)> = graph
            .edges()
            .into_iter()
            .filter(|(source, target, edge)| {
                !edge.is_stated() && !path_is_intact(graph, source, target, edge)
            })
            .map(|(source, target, _)| (source.clone(), target.clone()))
            .collect();
        if broken.is_empty() {
            return pruned;
        }
        for (source, target) in broken {
            if graph.remove_pair(&source, &target) {
                tracing::debug!(source = %source, target = %target, "removing unsupported deduction");
                pruned += 1;
            }
        }
    }
}

fn path_is_intact(
    graph: &RelationGraph,
    source: &Region,
    target: &Region,
    edge: &RelationEdge,
) -> bool {
    let path: Vec<&Region> = std::iter::once(source)
        .chain(edge.tp.iter())
        .chain(std::iter::once(target))
        .collect();
    path.windows(2).all(|pair| graph.has_edge(pair[0], pair[1]))
}

fn all_but(group: Vec<Member>, keep: usize) -> Vec<Region> {
    group
        .into_iter()
        .filter(|m| m.position != keep)
        .map(|m| m.region)
        .collect()
}
