//! Property tests for the relation algebra, the automaton and the
//! deduce/eliminate pipeline.

use proptest::prelude::*;

use ort_relations::automaton::{classify, transition, PathState};
use ort_relations::{compose, Deducer, Eliminator, PathCategory, Rc, RcWord, RelationGraph, RelationRecord};

const MAPS: [&str; 4] = ["A", "B", "C", "D"];

fn rc_strategy() -> impl Strategy<Value = Rc> {
    prop::sample::select(Rc::ALL.to_vec())
}

fn word_strategy() -> impl Strategy<Value = Vec<Rc>> {
    prop::collection::vec(rc_strategy(), 0..14)
}

fn records_strategy() -> impl Strategy<Value = Vec<RelationRecord>> {
    prop::collection::vec((0..4usize, 1..4u8, 0..4usize, 1..4u8, rc_strategy(), 0..=18u8), 0..24)
        .prop_map(|raw| {
            raw.into_iter()
                .map(|(sm, ss, tm, ts, rc, pdc)| {
                    RelationRecord::new(format!("{}-{ss}", MAPS[sm]), format!("{}-{ts}", MAPS[tm]), rc)
                        .with_pdc(pdc)
                })
                .collect()
        })
}

fn build(records: Vec<RelationRecord>) -> RelationGraph {
    RelationGraph::from_records(records).unwrap().data
}

fn snapshot(graph: &RelationGraph) -> Vec<(String, String, Rc)> {
    graph
        .edges()
        .into_iter()
        .map(|(s, t, e)| (s.to_string(), t.to_string(), e.rc))
        .collect()
}

// =============================================================================
// Automaton
// =============================================================================
proptest! {
    #[test]
    fn classification_is_deterministic(word in word_strategy()) {
        prop_assert_eq!(classify(&word), classify(&word));
    }

    #[test]
    fn reading_backwards_reverses_the_category(word in word_strategy()) {
        let backward: RcWord = word.iter().rev().map(|rc| rc.reverse()).collect();
        prop_assert_eq!(classify(&backward), classify(&word).reverse());
    }

    #[test]
    fn identical_letters_never_change_the_category(word in word_strategy(), at in 0usize..14) {
        let mut padded = word.clone();
        if !padded.is_empty() {
            padded.insert(at.min(padded.len()).max(1), Rc::Identical);
            prop_assert_eq!(classify(&padded), classify(&word));
        }
    }

    #[test]
    fn invalid_prefix_rejects_the_word(prefix in word_strategy(), suffix in word_strategy()) {
        if !prefix.is_empty() && classify(&prefix) == PathCategory::Invalid {
            let mut word = prefix.clone();
            word.extend(suffix);
            prop_assert_eq!(classify(&word), PathCategory::Invalid);
        }
    }

    #[test]
    fn single_steps_follow_composition(first in rc_strategy(), second in rc_strategy()) {
        let state = transition(transition(PathState::Start, first), second);
        let set = compose(first, second);
        let expected = if set.may_be_disjoint() {
            PathCategory::Invalid
        } else {
            set.single().map(PathCategory::of_relation).unwrap_or(PathCategory::Ambiguous)
        };
        prop_assert_eq!(state, PathState::At(expected));
    }
}

// =============================================================================
// Deduction and elimination
// =============================================================================
proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn deduction_preserves_symmetry(records in records_strategy()) {
        let mut graph = build(records);
        prop_assert!(graph.check_symmetry().is_empty());
        Deducer::default().run(&mut graph).unwrap();
        prop_assert!(graph.check_symmetry().is_empty());
    }

    #[test]
    fn deduced_edges_never_join_one_map(records in records_strategy()) {
        let mut graph = build(records);
        Deducer::default().run(&mut graph).unwrap();
        for (source, target, edge) in graph.edges() {
            prop_assert!(!source.same_map(target));
            prop_assert_ne!(edge.category, PathCategory::Invalid);
        }
    }

    #[test]
    fn elimination_preserves_symmetry_and_is_idempotent(records in records_strategy()) {
        let mut graph = build(records);
        Deducer::default().run(&mut graph).unwrap();
        let eliminator = Eliminator::default();
        eliminator.run(&mut graph);
        prop_assert!(graph.check_symmetry().is_empty());

        let settled = snapshot(&graph);
        let second = eliminator.run(&mut graph);
        prop_assert_eq!(second.removed, 0);
        prop_assert_eq!(second.unsupported, 0);
        prop_assert_eq!(second.relabelled, 0);
        prop_assert_eq!(snapshot(&graph), settled);
    }

    #[test]
    fn elimination_leaves_every_transform_path_intact(records in records_strategy()) {
        let mut graph = build(records);
        Deducer::default().run(&mut graph).unwrap();
        Eliminator::default().run(&mut graph);
        for (source, target, edge) in graph.edges() {
            let mut path = vec![source.clone()];
            path.extend(edge.tp.iter().cloned());
            path.push(target.clone());
            prop_assert!(graph.rc_chain(&path).is_ok());
        }
        prop_assert!(Deducer::default().run(&mut graph).is_ok());
    }
}
