//! Region-keyed graph storage shared by the relation, connectivity and target graphs.

pub mod region_graph;

pub use region_graph::RegionGraph;
