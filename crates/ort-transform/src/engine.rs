//! The full ORT pipeline: deduce, eliminate, transform, resolve.

use std::path::Path;

use ort_core::constants::VERSION;
use ort_core::errors::{AlgebraError, ConfigError};
use ort_core::{OrtConfig, OrtError};
use ort_relations::{DeductionReport, Deducer, EliminationReport, Eliminator, RelationGraph};

use crate::connectivity::ConnectivityGraph;
use crate::consensus::{self, ConsensusReport};
use crate::target_graph::TargetGraph;
use crate::transform::{TransformReport, Transformer};

/// Everything a pipeline run produced.
#[derive(Debug)]
pub struct OrtOutcome {
    /// The relation graph after deduction and elimination.
    pub relations: RelationGraph,
    pub target: TargetGraph,
    pub deduction: DeductionReport,
    pub elimination: EliminationReport,
    pub transform: TransformReport,
    pub consensus: ConsensusReport,
    /// Non-fatal errors, currently consensus conflicts in lenient mode.
    pub errors: Vec<OrtError>,
}

impl OrtOutcome {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Runs ORT passes with one configuration.
#[derive(Debug, Clone, Default)]
pub struct OrtEngine {
    config: OrtConfig,
}

impl OrtEngine {
    pub fn new(config: OrtConfig) -> Self {
        Self { config }
    }

    /// Engine configured from `ort.toml` under `root` and `ORT_*` overrides.
    pub fn from_root(root: &Path) -> Result<Self, ConfigError> {
        Ok(Self::new(OrtConfig::load(root)?))
    }

    pub fn config(&self) -> &OrtConfig {
        &self.config
    }

    /// Deduce new relations, then relabel and eliminate contradictions.
    pub fn refine(
        &self,
        relations: &mut RelationGraph,
    ) -> Result<(DeductionReport, EliminationReport), AlgebraError> {
        let deduction = Deducer::new(self.config.deduction.clone()).run(relations)?;
        let elimination = Eliminator::new(self.config.elimination.clone()).run(relations);
        Ok((deduction, elimination))
    }

    /// Run the whole pipeline onto `target_map`.
    pub fn run(
        &self,
        mut relations: RelationGraph,
        connections: &ConnectivityGraph,
        target_map: &str,
    ) -> Result<OrtOutcome, OrtError> {
        let _span = tracing::info_span!("ort_run", target_map, version = VERSION).entered();

        let (deduction, elimination) = self.refine(&mut relations)?;
        let (mut target, transform) = Transformer::new(self.config.transform.clone()).transform(
            &relations,
            connections,
            target_map,
        )?;
        let resolved = consensus::resolve(&mut target, &self.config.consensus)?;

        Ok(OrtOutcome {
            relations,
            target,
            deduction,
            elimination,
            transform,
            consensus: resolved.data,
            errors: resolved.errors,
        })
    }
}
