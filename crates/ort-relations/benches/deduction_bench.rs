use criterion::{criterion_group, criterion_main, Criterion};

use ort_relations::{Deducer, Eliminator, Rc, RelationGraph, RelationRecord};

/// Eight maps of twenty sites each. Site `i` of map `m` lies inside site `i / 2`
/// of map `m + 1`, and overlaps site `i + 1` of the next map.
fn build_layered_graph() -> RelationGraph {
    let maps = 8;
    let sites = 20;
    let mut records = Vec::new();
    for m in 0..maps - 1 {
        for i in 0..sites {
            records.push(
                RelationRecord::new(format!("M{m}-{i}"), format!("M{}-{}", m + 1, i / 2), Rc::Smaller)
                    .with_pdc((i % 18) as u8),
            );
            if i + 1 < sites && i % 3 == 0 {
                records.push(RelationRecord::new(
                    format!("M{m}-{i}"),
                    format!("M{}-{}", m + 1, i + 1),
                    Rc::Overlapping,
                ));
            }
        }
    }
    let built = RelationGraph::from_records(records).unwrap();
    assert!(built.data.edge_count() > 200, "graph too small for a meaningful bench");
    built.data
}

fn bench_single_pass(c: &mut Criterion) {
    let graph = build_layered_graph();
    let deducer = Deducer::default();
    c.bench_function("deduction_single_pass", |b| {
        b.iter(|| {
            let mut g = graph.clone();
            deducer.run(&mut g).unwrap()
        })
    });
}

fn bench_deduce_and_eliminate(c: &mut Criterion) {
    let graph = build_layered_graph();
    let deducer = Deducer::default();
    let eliminator = Eliminator::default();
    c.bench_function("deduce_then_eliminate", |b| {
        b.iter(|| {
            let mut g = graph.clone();
            deducer.run(&mut g).unwrap();
            eliminator.run(&mut g)
        })
    });
}

criterion_group!(benches, bench_single_pass, bench_deduce_and_eliminate);
criterion_main!(benches);
