//! Core identifier and value types.

pub mod collections;
pub mod pdc;
pub mod region;

pub use pdc::Pdc;
pub use region::Region;
