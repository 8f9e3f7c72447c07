//! petgraph::StableGraph wrapper keyed by `Region`, generic over the edge attributes.
//!
//! Shared by the relation graph, the connectivity graph and the target graph.
//! Node iteration follows insertion order; neighbour lists are returned in node
//! insertion order as well, so every pass over the graph is deterministic.

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::{Directed, Direction};

use crate::types::collections::FxHashMap;
use crate::types::Region;

/// Directed graph of regions with one attribute value per edge.
#[derive(Debug, Clone)]
pub struct RegionGraph<E> {
    graph: StableGraph<Region, E, Directed>,
    node_index: FxHashMap<Region, NodeIndex>,
}

impl<E> RegionGraph<E> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: FxHashMap::default(),
        }
    }

    /// Get or create the node for `region`.
    pub fn ensure_node(&mut self, region: &Region) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(region) {
            return idx;
        }
        let idx = self.graph.add_node(region.clone());
        self.node_index.insert(region.clone(), idx);
        idx
    }

    /// Look up a node index by region.
    pub fn get_node(&self, region: &Region) -> Option<NodeIndex> {
        self.node_index.get(region).copied()
    }

    pub fn contains_region(&self, region: &Region) -> bool {
        self.node_index.contains_key(region)
    }

    /// Regions in insertion order.
    pub fn regions(&self) -> impl Iterator<Item = &Region> + '_ {
        self.graph.node_indices().filter_map(|idx| self.graph.node_weight(idx))
    }

    /// Regions of one map, in insertion order.
    pub fn regions_in_map<'a>(&'a self, map: &'a str) -> impl Iterator<Item = &'a Region> + 'a {
        self.regions().filter(move |r| r.in_map(map))
    }

    /// Distinct map names, in order of first appearance.
    pub fn maps(&self) -> Vec<&str> {
        let mut maps: Vec<&str> = Vec::new();
        for region in self.regions() {
            if !maps.contains(&region.map()) {
                maps.push(region.map());
            }
        }
        maps
    }

    fn find_edge(&self, source: &Region, target: &Region) -> Option<EdgeIndex> {
        let s = self.get_node(source)?;
        let t = self.get_node(target)?;
        self.graph.find_edge(s, t)
    }

    /// Attributes of edge (source, target).
    pub fn edge(&self, source: &Region, target: &Region) -> Option<&E> {
        self.find_edge(source, target)
            .and_then(|idx| self.graph.edge_weight(idx))
    }

    /// Mutable attributes of edge (source, target).
    pub fn edge_mut(&mut self, source: &Region, target: &Region) -> Option<&mut E> {
        let idx = self.find_edge(source, target)?;
        self.graph.edge_weight_mut(idx)
    }

    pub fn has_edge(&self, source: &Region, target: &Region) -> bool {
        self.find_edge(source, target).is_some()
    }

    /// Insert or replace edge (source, target), creating nodes as needed.
    /// Returns the previous attributes when the edge already existed.
    pub fn set_edge(&mut self, source: &Region, target: &Region, weight: E) -> Option<E> {
        let s = self.ensure_node(source);
        let t = self.ensure_node(target);
        match self.graph.find_edge(s, t) {
            Some(idx) => self
                .graph
                .edge_weight_mut(idx)
                .map(|slot| std::mem::replace(slot, weight)),
            None => {
                self.graph.add_edge(s, t, weight);
                None
            }
        }
    }

    /// Remove edge (source, target), returning its attributes.
    pub fn remove_edge(&mut self, source: &Region, target: &Region) -> Option<E> {
        let idx = self.find_edge(source, target)?;
        self.graph.remove_edge(idx)
    }

    fn neighbors(&self, region: &Region, direction: Direction) -> Vec<(&Region, &E)> {
        let Some(idx) = self.get_node(region) else {
            return Vec::new();
        };
        let mut others: Vec<NodeIndex> = self.graph.neighbors_directed(idx, direction).collect();
        others.sort();
        others
            .into_iter()
            .filter_map(|other| {
                let edge = match direction {
                    Direction::Outgoing => self.graph.find_edge(idx, other),
                    Direction::Incoming => self.graph.find_edge(other, idx),
                }?;
                Some((self.graph.node_weight(other)?, self.graph.edge_weight(edge)?))
            })
            .collect()
    }

    /// Outgoing neighbours with edge attributes, in node insertion order.
    pub fn successors(&self, region: &Region) -> Vec<(&Region, &E)> {
        self.neighbors(region, Direction::Outgoing)
    }

    /// Incoming neighbours with edge attributes, in node insertion order.
    pub fn predecessors(&self, region: &Region) -> Vec<(&Region, &E)> {
        self.neighbors(region, Direction::Incoming)
    }

    /// Owned snapshot of the successor regions.
    pub fn successor_regions(&self, region: &Region) -> Vec<Region> {
        self.successors(region)
            .into_iter()
            .map(|(r, _)| r.clone())
            .collect()
    }

    /// Owned snapshot of the predecessor regions.
    pub fn predecessor_regions(&self, region: &Region) -> Vec<Region> {
        self.predecessors(region)
            .into_iter()
            .map(|(r, _)| r.clone())
            .collect()
    }

    /// All edges as (source, target, attributes), ordered by source then target
    /// insertion order.
    pub fn edges(&self) -> Vec<(&Region, &Region, &E)> {
        let mut out = Vec::with_capacity(self.graph.edge_count());
        for source in self.regions() {
            for (target, weight) in self.successors(source) {
                out.push((source, target, weight));
            }
        }
        out
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl<E> Default for RegionGraph<E> {
    fn default() -> Self {
        Self::new()
    }
}
