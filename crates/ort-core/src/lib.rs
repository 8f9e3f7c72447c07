//! # ort-core
//!
//! Foundation crate for the ORT engine.
//! Defines region identifiers, precision codes, the region graph, errors, config,
//! tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod graph;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::OrtConfig;
pub use errors::{OrtError, OrtResult, PassResult};
pub use graph::RegionGraph;
pub use types::{Pdc, Region};
