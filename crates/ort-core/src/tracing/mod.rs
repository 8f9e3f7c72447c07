//! Observability for the ORT engine.
//! `tracing` crate with `EnvFilter`, per-pass log levels.

pub mod setup;

pub use setup::{init_tracing, init_tracing_with_default};
