//! Property tests for the extent-code algebra and the transformation pass.

use proptest::prelude::*;

use ort_core::config::TransformConfig;
use ort_relations::{Rc, RelationGraph, RelationRecord};
use ort_transform::{
    multi_step, single_step, ConnectionRecord, ConnectivityGraph, Ec, Transformer,
};

fn rc_strategy() -> impl Strategy<Value = Rc> {
    prop::sample::select(Rc::ALL.to_vec())
}

fn ec_strategy() -> impl Strategy<Value = Ec> {
    prop::sample::select(Ec::ALL.to_vec())
}

fn parts_strategy() -> impl Strategy<Value = Vec<(Rc, Ec)>> {
    prop::collection::vec((rc_strategy(), ec_strategy()), 1..8)
}

/// Relations between sites of maps A and B.
fn relations_strategy() -> impl Strategy<Value = RelationGraph> {
    prop::collection::vec((1..5u8, 1..5u8, rc_strategy(), 0..=18u8), 0..16).prop_map(|raw| {
        let records = raw
            .into_iter()
            .map(|(a, b, rc, pdc)| RelationRecord::new(format!("A-{a}"), format!("B-{b}"), rc).with_pdc(pdc));
        RelationGraph::from_records(records).unwrap().data
    })
}

/// Connections between sites of map A.
fn connections_strategy() -> impl Strategy<Value = ConnectivityGraph> {
    prop::collection::vec((1..5u8, 1..5u8, ec_strategy(), ec_strategy()), 0..16).prop_map(|raw| {
        let records = raw
            .into_iter()
            .map(|(s, t, ec_s, ec_t)| ConnectionRecord::new(format!("A-{s}"), format!("A-{t}"), ec_s, ec_t));
        ConnectivityGraph::from_records(records).unwrap().data
    })
}

// =============================================================================
// Algebra
// =============================================================================
proptest! {
    #[test]
    fn multi_step_is_total_on_non_empty_lists(parts in parts_strategy()) {
        prop_assert!(matches!(multi_step(&parts), Some(Ok(_))));
    }

    #[test]
    fn covering_region_overrides_what_came_before(
        parts in parts_strategy(),
        rc in prop::sample::select(vec![Rc::Identical, Rc::Larger]),
        ec in ec_strategy(),
    ) {
        let mut extended = parts;
        extended.push((rc, ec));
        prop_assert_eq!(multi_step(&extended), Some(Ok(single_step(rc, ec))));
    }

    #[test]
    fn identical_translation_is_lossless(ec in ec_strategy()) {
        prop_assert_eq!(single_step(Rc::Identical, ec), ec);
    }
}

// =============================================================================
// Transformation
// =============================================================================
proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn parallel_transform_matches_sequential(
        relations in relations_strategy(),
        connections in connections_strategy(),
    ) {
        let sequential = Transformer::new(TransformConfig {
            parallel: Some(false),
            min_parallel_connections: None,
        });
        let parallel = Transformer::new(TransformConfig {
            parallel: Some(true),
            min_parallel_connections: Some(0),
        });
        let (a, report_a) = sequential.transform(&relations, &connections, "B").unwrap();
        let (b, report_b) = parallel.transform(&relations, &connections, "B").unwrap();
        prop_assert_eq!(report_a, report_b);
        prop_assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn target_graph_stays_inside_the_target_map(
        relations in relations_strategy(),
        connections in connections_strategy(),
    ) {
        let (graph, report) = Transformer::default().transform(&relations, &connections, "B").unwrap();
        prop_assert_eq!(report.connections_processed, connections.connection_count());
        prop_assert_eq!(report.candidates_added, graph.candidate_count());
        for (source, target, edge) in graph.edges() {
            prop_assert!(source.in_map("B") && target.in_map("B"));
            prop_assert!(source != target);
            for candidate in &edge.candidates {
                prop_assert!(!candidate.ec_source.is_unknown() && !candidate.ec_target.is_unknown());
            }
        }
    }
}
