//! The spatial-relation graph: one edge per ordered region pair, always stored
//! together with its reverse.

use serde::{Deserialize, Serialize};

use ort_core::errors::{AlgebraError, GraphFormatError, StructuralInvariantError};
use ort_core::types::collections::FxHashMap;
use ort_core::{PassResult, Pdc, Region, RegionGraph};

use crate::automaton::PathCategory;
use crate::rc::{Rc, RcWord};

/// Attributes of a relation edge (A, B).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationEdge {
    /// A's relation to B.
    pub rc: Rc,
    /// Intermediate regions the relation was deduced through. Empty when stated.
    pub tp: Vec<Region>,
    /// Worst precision code along the derivation.
    pub pdc: Pdc,
    /// Path category of the edge's RC word.
    pub category: PathCategory,
}

impl RelationEdge {
    /// A relation stated directly in the literature.
    pub fn stated(rc: Rc, pdc: Pdc) -> Self {
        Self {
            rc,
            tp: Vec::new(),
            pdc,
            category: PathCategory::of_relation(rc),
        }
    }

    /// The same relation seen from the other end: reversed RC, TP and category.
    pub fn reversed(&self) -> Self {
        Self {
            rc: self.rc.reverse(),
            tp: self.tp.iter().rev().cloned().collect(),
            pdc: self.pdc,
            category: self.category.reverse(),
        }
    }

    pub fn is_stated(&self) -> bool {
        self.tp.is_empty()
    }
}

/// One raw mapping statement, as delivered by an external relation source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationRecord {
    pub source: String,
    pub target: String,
    pub rc: Rc,
    /// Numeric precision code; missing means least precise.
    #[serde(default)]
    pub pdc: Option<u8>,
}

impl RelationRecord {
    pub fn new(source: impl Into<String>, target: impl Into<String>, rc: Rc) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            rc,
            pdc: None,
        }
    }

    pub fn with_pdc(mut self, pdc: u8) -> Self {
        self.pdc = Some(pdc);
        self
    }

    /// Attach a precision code given as a CoCoMac letter (`A`..`R`).
    pub fn with_pdc_letter(mut self, letter: Option<&str>) -> Result<Self, GraphFormatError> {
        self.pdc = Some(Pdc::from_letter(letter)?.value());
        Ok(self)
    }

    fn parse(&self) -> Result<(Region, Region, Rc, Pdc), GraphFormatError> {
        let source = Region::parse(&self.source)?;
        let target = Region::parse(&self.target)?;
        let pdc = match self.pdc {
            Some(value) => Pdc::new(value)?,
            None => Pdc::WORST,
        };
        Ok((source, target, self.rc, pdc))
    }
}

/// Summary counts over a relation graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationGraphStats {
    pub regions: usize,
    pub maps: usize,
    /// Unordered region pairs (each stored as two directed edges).
    pub relations: usize,
    pub stated: usize,
    pub deduced: usize,
    /// Pairs still carrying an ambiguous (category 4) relation.
    pub ambiguous: usize,
}

/// Directed, symmetric graph of spatial relations between regions of different maps.
#[derive(Debug, Clone, Default)]
pub struct RelationGraph {
    inner: RegionGraph<RelationEdge>,
}

impl RelationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a batch of records.
    pub fn from_records(
        records: impl IntoIterator<Item = RelationRecord>,
    ) -> Result<PassResult<Self>, GraphFormatError> {
        let mut graph = Self::new();
        let added = graph.add_relations(records)?;
        Ok(PassResult {
            data: graph,
            errors: added.errors,
        })
    }

    /// Read-only access to the underlying adjacency.
    pub fn graph(&self) -> &RegionGraph<RelationEdge> {
        &self.inner
    }

    /// Add a batch of stated relations, inserting each with its reverse.
    ///
    /// Region identifiers and precision codes are validated for the whole batch
    /// first; a single malformed record rejects the batch and leaves the graph
    /// untouched. Pairs that break a structural invariant (self-loop, same map,
    /// contradicting restatement) are rejected individually and reported in the
    /// returned `PassResult`. `data` is the number of new region pairs.
    pub fn add_relations(
        &mut self,
        records: impl IntoIterator<Item = RelationRecord>,
    ) -> Result<PassResult<usize>, GraphFormatError> {
        let parsed = records
            .into_iter()
            .map(|record| record.parse())
            .collect::<Result<Vec<_>, _>>()?;

        // First statement of every ordered pair, to catch asymmetric input pairs.
        let mut stated: FxHashMap<(Region, Region), Rc> = FxHashMap::default();
        for (source, target, rc, _) in &parsed {
            stated
                .entry((source.clone(), target.clone()))
                .or_insert(*rc);
        }

        let mut result = PassResult::new(0usize);
        for (source, target, rc, pdc) in parsed {
            if let Err(violation) = self.check_statement(&source, &target, rc, &stated) {
                tracing::warn!(
                    source = %source,
                    target = %target,
                    rc = %rc,
                    error = %violation,
                    "rejected relation"
                );
                result.add_error(violation);
                continue;
            }
            match self.inner.edge(&source, &target) {
                Some(existing) => {
                    // Same relation restated: keep the more precise statement.
                    // A statement always replaces a deduction.
                    if existing.is_stated() && pdc >= existing.pdc {
                        continue;
                    }
                    self.set_pair(&source, &target, RelationEdge::stated(rc, pdc));
                }
                None => {
                    self.set_pair(&source, &target, RelationEdge::stated(rc, pdc));
                    result.data += 1;
                }
            }
        }

        tracing::debug!(
            added = result.data,
            rejected = result.error_count(),
            "relation batch added"
        );
        Ok(result)
    }

    fn check_statement(
        &self,
        source: &Region,
        target: &Region,
        rc: Rc,
        batch: &FxHashMap<(Region, Region), Rc>,
    ) -> Result<(), StructuralInvariantError> {
        if source == target {
            return Err(StructuralInvariantError::SelfLoop {
                region: source.to_string(),
            });
        }
        if source.same_map(target) {
            return Err(StructuralInvariantError::SameMapRelation {
                source_region: source.to_string(),
                target_region: target.to_string(),
                map: source.map().to_string(),
            });
        }
        let asymmetric = |reverse: Rc| StructuralInvariantError::AsymmetricRelation {
            source_region: source.to_string(),
            target_region: target.to_string(),
            forward: rc.to_string(),
            reverse: reverse.to_string(),
        };
        if let Some(&reverse) = batch.get(&(target.clone(), source.clone())) {
            if reverse != rc.reverse() {
                return Err(asymmetric(reverse));
            }
        }
        if let Some(&first) = batch.get(&(source.clone(), target.clone())) {
            if first != rc {
                return Err(asymmetric(first.reverse()));
            }
        }
        if let Some(existing) = self.inner.edge(target, source) {
            if existing.is_stated() && existing.rc != rc.reverse() {
                return Err(asymmetric(existing.rc));
            }
        }
        Ok(())
    }

    /// Set edge (source, target) and its reverse.
    pub fn set_pair(&mut self, source: &Region, target: &Region, edge: RelationEdge) {
        let reverse = edge.reversed();
        self.inner.set_edge(source, target, edge);
        self.inner.set_edge(target, source, reverse);
    }

    /// Remove edge (a, b) and its reverse. Returns whether anything was removed.
    pub fn remove_pair(&mut self, a: &Region, b: &Region) -> bool {
        let forward = self.inner.remove_edge(a, b).is_some();
        let backward = self.inner.remove_edge(b, a).is_some();
        forward || backward
    }

    pub fn edge(&self, source: &Region, target: &Region) -> Option<&RelationEdge> {
        self.inner.edge(source, target)
    }

    pub fn rc(&self, source: &Region, target: &Region) -> Option<Rc> {
        self.inner.edge(source, target).map(|e| e.rc)
    }

    pub fn has_edge(&self, source: &Region, target: &Region) -> bool {
        self.inner.has_edge(source, target)
    }

    pub fn contains_region(&self, region: &Region) -> bool {
        self.inner.contains_region(region)
    }

    /// Regions in insertion order.
    pub fn regions(&self) -> impl Iterator<Item = &Region> + '_ {
        self.inner.regions()
    }

    pub fn regions_in_map<'a>(&'a self, map: &'a str) -> impl Iterator<Item = &'a Region> + 'a {
        self.inner.regions_in_map(map)
    }

    pub fn successors(&self, region: &Region) -> Vec<(&Region, &RelationEdge)> {
        self.inner.successors(region)
    }

    pub fn predecessors(&self, region: &Region) -> Vec<(&Region, &RelationEdge)> {
        self.inner.predecessors(region)
    }

    /// Successors of `region` that belong to `map`, with their edges.
    pub fn successors_in_map<'a>(
        &'a self,
        region: &Region,
        map: &str,
    ) -> Vec<(&'a Region, &'a RelationEdge)> {
        self.inner
            .successors(region)
            .into_iter()
            .filter(|(other, _)| other.in_map(map))
            .collect()
    }

    /// All directed edges, ordered by source then target insertion order.
    pub fn edges(&self) -> Vec<(&Region, &Region, &RelationEdge)> {
        self.inner.edges()
    }

    /// Read the RC word along `path` (`[p, tp..., s]`) from the graph.
    pub fn rc_chain(&self, path: &[Region]) -> Result<RcWord, AlgebraError> {
        path.windows(2)
            .map(|pair| {
                self.rc(&pair[0], &pair[1])
                    .ok_or_else(|| AlgebraError::BrokenChain {
                        from: pair[0].to_string(),
                        to: pair[1].to_string(),
                        path: render_path(path),
                    })
            })
            .collect()
    }

    /// Every violation of the symmetry invariant, one per offending pair.
    pub fn check_symmetry(&self) -> Vec<StructuralInvariantError> {
        let mut violations = Vec::new();
        for (source, target, edge) in self.inner.edges() {
            match self.inner.edge(target, source) {
                None => violations.push(StructuralInvariantError::MissingReverse {
                    source_region: source.to_string(),
                    target_region: target.to_string(),
                }),
                Some(reverse) if reverse.rc != edge.rc.reverse() && source < target => {
                    violations.push(StructuralInvariantError::AsymmetricRelation {
                        source_region: source.to_string(),
                        target_region: target.to_string(),
                        forward: edge.rc.to_string(),
                        reverse: reverse.rc.to_string(),
                    })
                }
                Some(_) => {}
            }
        }
        violations
    }

    pub fn stats(&self) -> RelationGraphStats {
        let mut stats = RelationGraphStats {
            regions: self.inner.node_count(),
            maps: self.inner.maps().len(),
            ..Default::default()
        };
        for (source, target, edge) in self.inner.edges() {
            if source > target {
                continue;
            }
            stats.relations += 1;
            if edge.is_stated() {
                stats.stated += 1;
            } else {
                stats.deduced += 1;
            }
            if edge.category == PathCategory::Ambiguous {
                stats.ambiguous += 1;
            }
        }
        stats
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }
}

/// Render a region path as `A-1 > B-2 > C-3`.
pub(crate) fn render_path(path: &[Region]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" > ")
}
