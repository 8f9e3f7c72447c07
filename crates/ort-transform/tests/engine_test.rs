//! Integration tests for the full pipeline and its configuration.

use std::fs;

use ort_core::config::TieBreak;
use ort_core::errors::ConfigError;
use ort_core::{OrtConfig, OrtError, Region};
use ort_relations::{Rc, RelationGraph, RelationRecord};
use ort_transform::{ConnectionRecord, ConnectivityGraph, Ec, OrtEngine, Presence};

fn r(id: &str) -> Region {
    Region::parse(id).unwrap()
}

/// A and C both describe B-1 identically; A-2 equals B-2 while C-2 contains it.
/// A-1 projects to A-2, C-1 does not project to C-2.
fn disagreeing_maps() -> (RelationGraph, ConnectivityGraph) {
    let relations = RelationGraph::from_records([
        RelationRecord::new("A-1", "B-1", Rc::Identical).with_pdc(1),
        RelationRecord::new("A-2", "B-2", Rc::Identical).with_pdc(1),
        RelationRecord::new("C-1", "B-1", Rc::Identical).with_pdc(1),
        RelationRecord::new("C-2", "B-2", Rc::Larger).with_pdc(1),
    ])
    .unwrap()
    .data;
    let connections = ConnectivityGraph::from_records([
        ConnectionRecord::new("A-1", "A-2", Ec::Complete, Ec::Complete),
        ConnectionRecord::new("C-1", "C-2", Ec::Complete, Ec::Absent),
    ])
    .unwrap()
    .data;
    (relations, connections)
}

#[test]
fn pipeline_resolves_a_consistent_projection() {
    let relations = RelationGraph::from_records([
        RelationRecord::new("A-1", "B-1", Rc::Identical).with_pdc(0),
        RelationRecord::new("A-2", "B-2", Rc::Larger).with_pdc(4),
    ])
    .unwrap()
    .data;
    let connections = ConnectivityGraph::from_records([
        ConnectionRecord::new("A-1", "A-2", Ec::Complete, Ec::Complete).with_pdcs(0, 0),
    ])
    .unwrap()
    .data;

    let outcome = OrtEngine::default().run(relations, &connections, "B").unwrap();
    assert!(outcome.is_clean());
    assert_eq!(outcome.transform.candidates_added, 1);
    assert_eq!(outcome.consensus.present, 1);
    let resolution = outcome
        .target
        .edge(&r("B-1"), &r("B-2"))
        .and_then(|edge| edge.resolution.as_ref())
        .unwrap();
    assert_eq!(resolution.presence, Presence::Present);
    assert_eq!((resolution.ec_source, resolution.ec_target), (Ec::Complete, Ec::Complete));
    assert_eq!(resolution.pdc.value(), 4);
}

#[test]
fn strict_engine_reports_the_conflict() {
    let (relations, connections) = disagreeing_maps();
    let err = OrtEngine::default().run(relations, &connections, "B").unwrap_err();
    match err {
        OrtError::ConsensusConflict(conflict) => assert_eq!(conflict.votes.len(), 2),
        other => panic!("expected a consensus conflict, got {other}"),
    }
}

#[test]
fn lenient_engine_keeps_going_and_deduces_across_maps() {
    let config = OrtConfig::from_toml("[consensus]\nstrict = false\n").unwrap();
    let (relations, connections) = disagreeing_maps();
    let outcome = OrtEngine::new(config).run(relations, &connections, "B").unwrap();

    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.consensus.conflicts, 1);
    assert!(outcome.deduction.edges_added >= 2);
    assert_eq!(outcome.relations.rc(&r("A-1"), &r("C-1")), Some(Rc::Identical));
    assert_eq!(outcome.relations.rc(&r("A-2"), &r("C-2")), Some(Rc::Smaller));
    assert!(outcome.relations.check_symmetry().is_empty());
}

#[test]
fn engine_reads_ort_toml_from_the_root() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("ort.toml"),
        "[deduction]\ntie_break = \"shortest_path_then_precision\"\n\n[consensus]\nstrict = false\n",
    )
    .unwrap();

    let engine = OrtEngine::from_root(dir.path()).unwrap();
    assert_eq!(
        engine.config().deduction.effective_tie_break(),
        TieBreak::ShortestPathThenPrecision
    );
    assert!(!engine.config().consensus.effective_strict());
}

#[test]
fn malformed_ort_toml_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("ort.toml"), "[deduction\n").unwrap();
    assert!(matches!(
        OrtEngine::from_root(dir.path()),
        Err(ConfigError::ParseError { .. })
    ));
}
