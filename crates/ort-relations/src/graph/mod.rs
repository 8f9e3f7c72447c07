//! The spatial-relation graph, stored in the shared `RegionGraph`.

pub mod relation_graph;

pub use relation_graph::{RelationEdge, RelationGraph, RelationGraphStats, RelationRecord};
