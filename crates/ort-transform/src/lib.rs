//! # ort-transform
//!
//! The connectivity half of ORT. Translates extent codes between maps with the
//! algebra of transformation, builds the target graph, and resolves candidate
//! votes into one consensus per target edge. [`OrtEngine`] runs the whole
//! pipeline on top of `ort-relations`.

pub mod algebra;
pub mod connectivity;
pub mod consensus;
pub mod ec;
pub mod engine;
pub mod export;
pub mod target_graph;
pub mod transform;

pub use algebra::{multi_step, multi_step_step, single_step};
pub use connectivity::{ConnectionEdge, ConnectionRecord, ConnectivityGraph, Endpoint};
pub use consensus::{ConsensusReport, Presence, Resolution, Vote};
pub use ec::Ec;
pub use engine::{OrtEngine, OrtOutcome};
pub use export::TargetGraphSnapshot;
pub use target_graph::{Candidate, Channel, TargetEdge, TargetGraph};
pub use transform::{multi_step_regions, TransformReport, Transformer};
