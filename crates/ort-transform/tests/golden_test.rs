//! Golden scenarios for the whole pipeline onto one target map.
//!
//! Each file under `golden/transform` holds stated relations, connections, the
//! target map, and the expected transform report, consensus report and edges.

use ort_core::{OrtConfig, Region};
use ort_relations::{RelationGraph, RelationRecord};
use ort_transform::{
    ConnectionRecord, ConnectivityGraph, ConsensusReport, OrtEngine, TransformReport,
};
use serde_json::Value;
use test_fixtures::{list_fixtures, load_fixture_value, relative_name};

fn region(value: &Value) -> Region {
    Region::parse(value.as_str().expect("region id")).unwrap()
}

fn check_fixture(name: &str) {
    let fixture = load_fixture_value(name);
    let relations: Vec<RelationRecord> =
        serde_json::from_value(fixture["relations"].clone()).expect("relations");
    let connections: Vec<ConnectionRecord> =
        serde_json::from_value(fixture["connections"].clone()).expect("connections");
    let target_map = fixture["target_map"].as_str().expect("target_map");

    let relations = RelationGraph::from_records(relations).unwrap();
    assert!(relations.is_clean(), "{name}: fixture relations must be well formed");
    let connections = ConnectivityGraph::from_records(connections).unwrap();
    assert!(connections.is_clean(), "{name}: fixture connections must be well formed");

    let outcome = OrtEngine::new(OrtConfig::default())
        .run(relations.data, &connections.data, target_map)
        .unwrap_or_else(|e| panic!("{name}: pipeline failed: {e}"));
    let expected = &fixture["expected"];

    let transform: TransformReport = serde_json::from_value(expected["transform"].clone()).unwrap();
    assert_eq!(outcome.transform, transform, "{name}: transform report");
    let consensus: ConsensusReport = serde_json::from_value(expected["consensus"].clone()).unwrap();
    assert_eq!(outcome.consensus, consensus, "{name}: consensus report");

    for want in expected["edges"].as_array().unwrap() {
        let source = region(&want["source"]);
        let target = region(&want["target"]);
        let edge = outcome
            .target
            .edge(&source, &target)
            .unwrap_or_else(|| panic!("{name}: missing target edge {source} -> {target}"));
        assert_eq!(
            edge.candidates.len() as u64,
            want["candidates"].as_u64().unwrap(),
            "{name}: candidates on {source} -> {target}"
        );
        let resolution = edge
            .resolution
            .as_ref()
            .unwrap_or_else(|| panic!("{name}: {source} -> {target} unresolved"));
        let actual = serde_json::to_value(resolution).unwrap();
        for field in ["presence", "ec_source", "ec_target", "channel", "pdc"] {
            assert_eq!(actual[field], want[field], "{name}: {field} of {source} -> {target}");
        }
    }
    assert_eq!(
        outcome.target.edge_count(),
        expected["edges"].as_array().unwrap().len(),
        "{name}: target edge count"
    );
}

#[test]
fn golden_partial_projection() {
    check_fixture("transform/partial_projection.json");
}

#[test]
fn golden_larger_absent() {
    check_fixture("transform/larger_absent.json");
}

#[test]
fn every_transform_fixture_runs() {
    let files = list_fixtures("transform");
    assert_eq!(files.len(), 2);
    for file in files {
        check_fixture(&relative_name(&file));
    }
}
