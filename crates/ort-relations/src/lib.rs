//! # ort-relations
//!
//! The spatial half of ORT. Maintains the region-to-region relation graph on
//! `ort_core::RegionGraph`, composes relation codes, classifies transform paths
//! with the path-category automaton, deduces new relations, and eliminates
//! contradictions.

pub mod automaton;
pub mod deduction;
pub mod elimination;
pub mod graph;
pub mod rc;

pub use automaton::{classify, PathCategory, PathState};
pub use deduction::{DeductionReport, Deducer};
pub use elimination::{EliminationReport, Eliminator};
pub use graph::{RelationEdge, RelationGraph, RelationGraphStats, RelationRecord};
pub use rc::{compose, Rc, RcSet, RcWord};
