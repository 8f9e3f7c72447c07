//! Tests for the ORT tracing setup.

use std::sync::Mutex;

use ort_core::tracing::setup::{init_tracing, init_tracing_with_default};

/// Serializes tests that touch the ORT_LOG environment variable.
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn init_tracing_accepts_per_pass_filters() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("ORT_LOG", "ort_relations::deduction=debug,ort_transform=warn");
    init_tracing();
    std::env::remove_var("ORT_LOG");
}

#[test]
fn init_tracing_is_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing_with_default("ort=debug");
}

#[test]
fn invalid_ort_log_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("ORT_LOG", "this_is=not=a=filter");
    init_tracing_with_default("ort=info");
    std::env::remove_var("ORT_LOG");
}
