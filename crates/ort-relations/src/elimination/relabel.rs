//! Relabelling of ambiguous (category 4) deductions.
//!
//! An ambiguous pair (A, C) is known to intersect, but the path did not say
//! how. Determined relations to third regions settle it:
//! - A reaches into another region of C's map, so A has tissue outside C;
//! - another region of A's map reaches into C, so C has tissue outside A.
//!
//! Only the first means A is Larger; only the second means A is Smaller.
//! Both, or neither, leave Overlapping as the worst-case answer.

use ort_core::Region;

use crate::automaton::PathCategory;
use crate::graph::{RelationEdge, RelationGraph};
use crate::rc::Rc;

/// Outcome of a relabelling pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelabelCounts {
    pub larger: usize,
    pub smaller: usize,
    pub overlapping: usize,
}

impl RelabelCounts {
    pub fn total(&self) -> usize {
        self.larger + self.smaller + self.overlapping
    }
}

/// Decide the relation of `a` to `c` for an ambiguous pair.
pub fn decide(graph: &RelationGraph, a: &Region, c: &Region) -> Rc {
    let a_outside = graph
        .successors_in_map(a, c.map())
        .into_iter()
        .any(|(other, edge)| {
            other != c
                && edge.category != PathCategory::Ambiguous
                && matches!(edge.rc, Rc::Larger | Rc::Overlapping)
        });
    let c_outside = graph.predecessors(c).into_iter().any(|(other, edge)| {
        other != a
            && other.same_map(a)
            && edge.category != PathCategory::Ambiguous
            && matches!(edge.rc, Rc::Smaller | Rc::Overlapping)
    });

    match (a_outside, c_outside) {
        (true, false) => Rc::Larger,
        (false, true) => Rc::Smaller,
        _ => Rc::Overlapping,
    }
}

/// Relabel every ambiguous pair. Decisions are taken on the graph as it was
/// before the pass, then applied together.
pub fn relabel_ambiguous(graph: &mut RelationGraph) -> RelabelCounts {
    let decisions: Vec<(Region, Region, Rc)> = graph
        .edges()
        .into_iter()
        .filter(|(a, c, edge)| edge.category == PathCategory::Ambiguous && a < c)
        .map(|(a, c, _)| (a.clone(), c.clone(), decide(graph, a, c)))
        .collect();

    let mut counts = RelabelCounts::default();
    for (a, c, rc) in decisions {
        let Some(edge) = graph.edge(&a, &c) else {
            continue;
        };
        let relabelled = RelationEdge {
            rc,
            tp: edge.tp.clone(),
            pdc: edge.pdc,
            category: PathCategory::of_relation(rc),
        };
        tracing::debug!(source = %a, target = %c, rc = %rc, "relabelled ambiguous relation");
        graph.set_pair(&a, &c, relabelled);
        match rc {
            Rc::Larger => counts.larger += 1,
            Rc::Smaller => counts.smaller += 1,
            Rc::Overlapping | Rc::Identical => counts.overlapping += 1,
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::RelationRecord;
    use ort_core::Pdc;

    fn r(id: &str) -> Region {
        Region::parse(id).unwrap()
    }

    fn ambiguous(graph: &mut RelationGraph, a: &str, c: &str) {
        graph.set_pair(
            &r(a),
            &r(c),
            RelationEdge {
                rc: Rc::Overlapping,
                tp: vec![r("X-1")],
                pdc: Pdc::new(4).unwrap(),
                category: PathCategory::Ambiguous,
            },
        );
    }

    #[test]
    fn reaching_into_a_sibling_makes_larger() {
        let mut graph = RelationGraph::new();
        graph
            .add_relations([RelationRecord::new("A-1", "C-2", Rc::Overlapping)])
            .unwrap();
        ambiguous(&mut graph, "A-1", "C-1");
        assert_eq!(decide(&graph, &r("A-1"), &r("C-1")), Rc::Larger);

        let counts = relabel_ambiguous(&mut graph);
        assert_eq!(counts.larger, 1);
        let edge = graph.edge(&r("A-1"), &r("C-1")).unwrap();
        assert_eq!(edge.rc, Rc::Larger);
        assert_eq!(edge.category, PathCategory::Larger);
        assert_eq!(graph.rc(&r("C-1"), &r("A-1")), Some(Rc::Smaller));
    }

    #[test]
    fn sibling_inside_the_other_end_makes_smaller() {
        let mut graph = RelationGraph::new();
        graph
            .add_relations([RelationRecord::new("A-2", "C-1", Rc::Smaller)])
            .unwrap();
        ambiguous(&mut graph, "A-1", "C-1");
        assert_eq!(decide(&graph, &r("A-1"), &r("C-1")), Rc::Smaller);
    }

    #[test]
    fn conflicting_or_missing_evidence_defaults_to_overlapping() {
        let mut graph = RelationGraph::new();
        ambiguous(&mut graph, "A-1", "C-1");
        assert_eq!(decide(&graph, &r("A-1"), &r("C-1")), Rc::Overlapping);

        graph
            .add_relations([
                RelationRecord::new("A-1", "C-2", Rc::Larger),
                RelationRecord::new("A-2", "C-1", Rc::Overlapping),
            ])
            .unwrap();
        assert_eq!(decide(&graph, &r("A-1"), &r("C-1")), Rc::Overlapping);
        let counts = relabel_ambiguous(&mut graph);
        assert_eq!(counts.overlapping, 1);
        assert_eq!(
            graph.edge(&r("A-1"), &r("C-1")).unwrap().category,
            PathCategory::Overlapping
        );
    }

    #[test]
    fn ambiguous_edges_are_not_evidence() {
        let mut graph = RelationGraph::new();
        ambiguous(&mut graph, "A-1", "C-1");
        ambiguous(&mut graph, "A-1", "C-2");
        assert_eq!(decide(&graph, &r("A-1"), &r("C-1")), Rc::Overlapping);
    }
}
