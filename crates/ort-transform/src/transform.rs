//! The transformation pass: re-express every connection of the connectivity
//! graph in terms of one target map.
//!
//! Each endpoint of a connection translates to the target-map regions it is
//! related to. For a target region T, the endpoint's map regions related to T
//! (its back-translation set) are folded with the extent-code algebra to give
//! T's extent code. Every pair of distinct, non-unknown translations becomes a
//! candidate on the corresponding target edge.
//!
//! Per-connection work only reads the input graphs, so it runs on the rayon
//! pool for large inputs. Candidates are merged back in connection order, which
//! keeps the target graph identical to a sequential run.

use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use ort_core::config::TransformConfig;
use ort_core::errors::AlgebraError;
use ort_core::{Pdc, Region};
use ort_relations::{Rc, RelationGraph};

use crate::algebra::multi_step;
use crate::connectivity::{ConnectionEdge, ConnectivityGraph, Endpoint};
use crate::ec::Ec;
use crate::target_graph::{Candidate, Channel, TargetGraph};

/// One target-map region an endpoint translates to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub region: Region,
    pub ec: Ec,
    pub channel: Channel,
    pub pdc: Pdc,
}

/// Counters for a transformation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformReport {
    pub connections_processed: usize,
    /// Connection endpoints with no translation into the target map.
    pub unmapped_endpoints: usize,
    pub candidates_added: usize,
    pub target_edges: usize,
}

#[derive(Debug, Default)]
struct ConnectionCandidates {
    candidates: Vec<(Region, Region, Candidate)>,
    unmapped: usize,
}

/// Runs the transformation pass.
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    config: TransformConfig,
}

impl Transformer {
    pub fn new(config: TransformConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Translate every connection onto `target_map`.
    ///
    /// Fails on the first algebra error; no partial target graph is returned.
    pub fn transform(
        &self,
        relations: &RelationGraph,
        connections: &ConnectivityGraph,
        target_map: &str,
    ) -> Result<(TargetGraph, TransformReport), AlgebraError> {
        let started = Instant::now();
        let all = connections.connections();
        let parallel = self.config.use_parallel_for(all.len());
        let _span = tracing::info_span!(
            "transform",
            target_map,
            connections = all.len(),
            parallel
        )
        .entered();

        let translate = |&(source, target, edge): &(&Region, &Region, &ConnectionEdge)| {
            translate_connection(relations, connections, source, target, edge, target_map)
        };
        let per_connection: Vec<ConnectionCandidates> = if parallel {
            all.par_iter().map(translate).collect::<Result<_, _>>()?
        } else {
            all.iter().map(translate).collect::<Result<_, _>>()?
        };

        let mut graph = TargetGraph::new(target_map);
        let mut report = TransformReport {
            connections_processed: all.len(),
            ..TransformReport::default()
        };
        for outcome in per_connection {
            report.unmapped_endpoints += outcome.unmapped;
            for (source, target, candidate) in outcome.candidates {
                graph.push_candidate(&source, &target, candidate);
                report.candidates_added += 1;
            }
        }
        report.target_edges = graph.edge_count();

        tracing::info!(
            connections_processed = report.connections_processed,
            candidates_added = report.candidates_added,
            target_edges = report.target_edges,
            unmapped_endpoints = report.unmapped_endpoints,
            pass_duration_ms = started.elapsed().as_millis() as u64,
            "transform complete"
        );
        Ok((graph, report))
    }
}

fn translate_connection(
    relations: &RelationGraph,
    connections: &ConnectivityGraph,
    source: &Region,
    target: &Region,
    edge: &ConnectionEdge,
    target_map: &str,
) -> Result<ConnectionCandidates, AlgebraError> {
    let from = translate_endpoint(relations, connections, source, target, Endpoint::Source, target_map)?;
    let to = translate_endpoint(relations, connections, target, source, Endpoint::Target, target_map)?;

    let mut outcome = ConnectionCandidates {
        unmapped: usize::from(from.is_empty()) + usize::from(to.is_empty()),
        ..ConnectionCandidates::default()
    };
    for tf in &from {
        for tt in &to {
            if tf.region == tt.region || tf.ec.is_unknown() || tt.ec.is_unknown() {
                continue;
            }
            outcome.candidates.push((
                tf.region.clone(),
                tt.region.clone(),
                Candidate {
                    ec_source: tf.ec,
                    ec_target: tt.ec,
                    channel: tf.channel.worst(tt.channel),
                    pdc: tf.pdc.worst(tt.pdc),
                    degree: edge.degree,
                    origin: (source.clone(), target.clone()),
                },
            ));
        }
    }
    tracing::trace!(
        source = %source,
        target = %target,
        candidates = outcome.candidates.len(),
        "connection translated"
    );
    Ok(outcome)
}

/// Translations of `endpoint`, one end of its connection with `other`, onto
/// `target_map`.
///
/// An endpoint already in the target map stands for itself with its stored
/// extent code. Otherwise there is one translation per related target region,
/// in graph order.
pub fn translate_endpoint(
    relations: &RelationGraph,
    connections: &ConnectivityGraph,
    endpoint: &Region,
    other: &Region,
    end: Endpoint,
    target_map: &str,
) -> Result<Vec<Translation>, AlgebraError> {
    let end_pdc = match end {
        Endpoint::Source => connections.edge(endpoint, other),
        Endpoint::Target => connections.edge(other, endpoint),
    }
    .map_or(Pdc::WORST, |edge| edge.pdc(end));

    if endpoint.in_map(target_map) {
        return Ok(vec![Translation {
            region: endpoint.clone(),
            ec: connections.extent_code(endpoint, other, end),
            channel: Channel::Identical,
            pdc: end_pdc,
        }]);
    }

    relations
        .successors_in_map(endpoint, target_map)
        .into_iter()
        .map(|(translated, relation)| -> Result<Translation, AlgebraError> {
            let back: Vec<Region> = relations
                .successors_in_map(translated, endpoint.map())
                .into_iter()
                .map(|(region, _)| region.clone())
                .collect();
            let ec = multi_step_regions(relations, connections, &back, translated, other, end)?;
            Ok(Translation {
                region: translated.clone(),
                ec,
                channel: Channel::of_relation(relation.rc),
                pdc: relation.pdc.worst(end_pdc),
            })
        })
        .collect()
}

/// Fold the extent codes of `regions`, all describing `target`, in list order.
///
/// Each region contributes its relation to `target` and its extent code as the
/// `end` of a connection with `other`.
pub fn multi_step_regions(
    relations: &RelationGraph,
    connections: &ConnectivityGraph,
    regions: &[Region],
    target: &Region,
    other: &Region,
    end: Endpoint,
) -> Result<Ec, AlgebraError> {
    let parts = regions
        .iter()
        .map(|region| {
            let rc: Rc = relations
                .rc(region, target)
                .ok_or_else(|| AlgebraError::BrokenChain {
                    from: region.to_string(),
                    to: target.to_string(),
                    path: format!("{region} > {target}"),
                })?;
            Ok((rc, connections.extent_code(region, other, end)))
        })
        .collect::<Result<Vec<_>, AlgebraError>>()?;

    multi_step(&parts).unwrap_or_else(|| {
        Err(AlgebraError::EmptyComposition {
            target: target.to_string(),
        })
    })
}
