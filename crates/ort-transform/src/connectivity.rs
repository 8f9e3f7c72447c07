//! The connectivity graph: anatomical connections between regions, read-only
//! during transformation.

use serde::{Deserialize, Serialize};

use ort_core::constants::MAX_DEGREE;
use ort_core::errors::{GraphFormatError, StructuralInvariantError};
use ort_core::{PassResult, Pdc, Region, RegionGraph};

use crate::ec::Ec;

/// Which end of a connection a region is being translated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    /// The sending region.
    Source,
    /// The receiving region.
    Target,
}

impl Endpoint {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Target => "target",
        }
    }
}

/// Attributes of a connection (A, B).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionEdge {
    pub ec_source: Ec,
    pub ec_target: Ec,
    /// Connection density, 0..=3, when reported.
    pub degree: Option<u8>,
    pub pdc_source: Pdc,
    pub pdc_target: Pdc,
    pub pdc_density: Pdc,
}

impl ConnectionEdge {
    pub fn new(ec_source: Ec, ec_target: Ec) -> Self {
        Self {
            ec_source,
            ec_target,
            degree: None,
            pdc_source: Pdc::WORST,
            pdc_target: Pdc::WORST,
            pdc_density: Pdc::WORST,
        }
    }

    /// Extent code of one end.
    pub fn ec(&self, end: Endpoint) -> Ec {
        match end {
            Endpoint::Source => self.ec_source,
            Endpoint::Target => self.ec_target,
        }
    }

    /// Precision code of one end.
    pub fn pdc(&self, end: Endpoint) -> Pdc {
        match end {
            Endpoint::Source => self.pdc_source,
            Endpoint::Target => self.pdc_target,
        }
    }

    /// Worst precision over both extent codes.
    pub fn precision(&self) -> Pdc {
        self.pdc_source.worst(self.pdc_target)
    }
}

/// One raw connection statement, as delivered by an external connectivity source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub source: String,
    pub target: String,
    pub ec_source: Ec,
    pub ec_target: Ec,
    #[serde(default)]
    pub degree: Option<u8>,
    #[serde(default)]
    pub pdc_source: Option<u8>,
    #[serde(default)]
    pub pdc_target: Option<u8>,
    #[serde(default)]
    pub pdc_density: Option<u8>,
}

impl ConnectionRecord {
    pub fn new(source: impl Into<String>, target: impl Into<String>, ec_source: Ec, ec_target: Ec) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            ec_source,
            ec_target,
            degree: None,
            pdc_source: None,
            pdc_target: None,
            pdc_density: None,
        }
    }

    pub fn with_degree(mut self, degree: u8) -> Self {
        self.degree = Some(degree);
        self
    }

    pub fn with_pdcs(mut self, source: u8, target: u8) -> Self {
        self.pdc_source = Some(source);
        self.pdc_target = Some(target);
        self
    }

    fn parse(&self) -> Result<(Region, Region, ConnectionEdge), GraphFormatError> {
        let source = Region::parse(&self.source)?;
        let target = Region::parse(&self.target)?;
        if let Some(degree) = self.degree {
            if degree > MAX_DEGREE {
                return Err(GraphFormatError::DegreeOutOfRange {
                    value: degree,
                    max: MAX_DEGREE,
                });
            }
        }
        let pdc = |value: Option<u8>| value.map(Pdc::new).transpose().map(|p| p.unwrap_or(Pdc::WORST));
        let edge = ConnectionEdge {
            ec_source: self.ec_source,
            ec_target: self.ec_target,
            degree: self.degree,
            pdc_source: pdc(self.pdc_source)?,
            pdc_target: pdc(self.pdc_target)?,
            pdc_density: pdc(self.pdc_density)?,
        };
        Ok((source, target, edge))
    }
}

/// Directed graph of connections between regions.
#[derive(Debug, Clone, Default)]
pub struct ConnectivityGraph {
    inner: RegionGraph<ConnectionEdge>,
}

impl ConnectivityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a batch of records.
    pub fn from_records(
        records: impl IntoIterator<Item = ConnectionRecord>,
    ) -> Result<PassResult<Self>, GraphFormatError> {
        let mut graph = Self::new();
        let added = graph.add_connections(records)?;
        Ok(PassResult {
            data: graph,
            errors: added.errors,
        })
    }

    /// Add a batch of connections.
    ///
    /// Every record is parsed before anything is inserted; a malformed record
    /// rejects the batch. Self-loops are rejected per record. Connections
    /// within one map are intra-areal projections and are kept. A repeated
    /// connection replaces the stored one only when it is more precise.
    /// `data` is the number of new connections.
    pub fn add_connections(
        &mut self,
        records: impl IntoIterator<Item = ConnectionRecord>,
    ) -> Result<PassResult<usize>, GraphFormatError> {
        let parsed = records
            .into_iter()
            .map(|record| record.parse())
            .collect::<Result<Vec<_>, _>>()?;

        let mut result = PassResult::new(0usize);
        for (source, target, edge) in parsed {
            if source == target {
                let violation = StructuralInvariantError::SelfLoop {
                    region: source.to_string(),
                };
                tracing::warn!(region = %source, "rejected self-connection");
                result.add_error(violation);
                continue;
            }
            let keeps_existing = self
                .inner
                .edge(&source, &target)
                .map(|existing| edge.precision() >= existing.precision());
            match keeps_existing {
                Some(true) => {}
                Some(false) => {
                    self.inner.set_edge(&source, &target, edge);
                }
                None => {
                    self.inner.set_edge(&source, &target, edge);
                    result.data += 1;
                }
            }
        }
        Ok(result)
    }

    pub fn edge(&self, source: &Region, target: &Region) -> Option<&ConnectionEdge> {
        self.inner.edge(source, target)
    }

    /// All connections in source then target insertion order.
    pub fn connections(&self) -> Vec<(&Region, &Region, &ConnectionEdge)> {
        self.inner.edges()
    }

    pub fn regions(&self) -> impl Iterator<Item = &Region> + '_ {
        self.inner.regions()
    }

    /// Extent code of `region` as one end of a connection with `other`.
    ///
    /// `C` when `region` is `other` itself; the stored code of the connection
    /// (`region` → `other` for a source, `other` → `region` for a target) when
    /// one exists; `U` otherwise.
    pub fn extent_code(&self, region: &Region, other: &Region, end: Endpoint) -> Ec {
        if region == other {
            return Ec::Complete;
        }
        let stored = match end {
            Endpoint::Source => self.inner.edge(region, other),
            Endpoint::Target => self.inner.edge(other, region),
        };
        stored.map_or(Ec::Unknown, |edge| edge.ec(end))
    }

    pub fn connection_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(id: &str) -> Region {
        Region::parse(id).unwrap()
    }

    fn sample() -> ConnectivityGraph {
        ConnectivityGraph::from_records([
            ConnectionRecord::new("A-1", "A-3", Ec::Absent, Ec::Complete),
            ConnectionRecord::new("A-2", "A-3", Ec::Complete, Ec::Complete),
        ])
        .unwrap()
        .data
    }

    #[test]
    fn extent_code_lookup() {
        let graph = sample();
        assert_eq!(graph.extent_code(&r("A-1"), &r("A-3"), Endpoint::Source), Ec::Absent);
        assert_eq!(graph.extent_code(&r("A-3"), &r("A-1"), Endpoint::Target), Ec::Complete);
        assert_eq!(graph.extent_code(&r("A-3"), &r("A-3"), Endpoint::Source), Ec::Complete);
        assert_eq!(graph.extent_code(&r("A-4"), &r("A-3"), Endpoint::Source), Ec::Unknown);
        // Direction matters: A-3 never sends to A-1.
        assert_eq!(graph.extent_code(&r("A-3"), &r("A-1"), Endpoint::Source), Ec::Unknown);
    }

    #[test]
    fn self_loops_are_rejected_per_record() {
        let result = ConnectivityGraph::from_records([
            ConnectionRecord::new("A-1", "A-1", Ec::Complete, Ec::Complete),
            ConnectionRecord::new("A-1", "B-1", Ec::Complete, Ec::Partial),
        ])
        .unwrap();
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.data.connection_count(), 1);
    }

    #[test]
    fn bad_degree_rejects_the_batch() {
        let err = ConnectivityGraph::from_records([
            ConnectionRecord::new("A-1", "B-1", Ec::Complete, Ec::Complete),
            ConnectionRecord::new("A-2", "B-1", Ec::Complete, Ec::Complete).with_degree(7),
        ])
        .unwrap_err();
        assert_eq!(err, GraphFormatError::DegreeOutOfRange { value: 7, max: 3 });
    }

    #[test]
    fn more_precise_restatement_wins() {
        let mut graph = ConnectivityGraph::new();
        graph
            .add_connections([
                ConnectionRecord::new("A-1", "B-1", Ec::Exists, Ec::Exists).with_pdcs(9, 9),
                ConnectionRecord::new("A-1", "B-1", Ec::Complete, Ec::Partial).with_pdcs(2, 4),
                ConnectionRecord::new("A-1", "B-1", Ec::Absent, Ec::Absent).with_pdcs(5, 5),
            ])
            .unwrap();
        let edge = graph.edge(&r("A-1"), &r("B-1")).unwrap();
        assert_eq!(edge.ec_source, Ec::Complete);
        assert_eq!(edge.precision().value(), 4);
    }
}
