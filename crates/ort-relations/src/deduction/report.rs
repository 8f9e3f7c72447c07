//! Counters returned by a deduction run.

use serde::{Deserialize, Serialize};

/// What a deduction run did to the relation graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionReport {
    /// Passes over the node list.
    pub passes: usize,
    /// New region pairs.
    pub edges_added: usize,
    /// Existing pairs replaced by a better candidate.
    pub edges_replaced: usize,
    /// Candidates that lost against an existing pair.
    pub kept_existing: usize,
    /// Candidates whose path category was 0.
    pub rejected_invalid: usize,
    /// Candidates whose path visits one map twice.
    pub rejected_duplicate_map: usize,
    /// Added pairs with an ambiguous (category 4) relation.
    pub ambiguous_added: usize,
}

impl DeductionReport {
    /// Number of pairs whose relation changed.
    pub fn changes(&self) -> usize {
        self.edges_added + self.edges_replaced
    }

    /// Total candidates considered.
    pub fn candidates(&self) -> usize {
        self.changes() + self.kept_existing + self.rejected_invalid + self.rejected_duplicate_map
    }

    pub(crate) fn absorb(&mut self, other: &DeductionReport) {
        self.passes += other.passes;
        self.edges_added += other.edges_added;
        self.edges_replaced += other.edges_replaced;
        self.kept_existing += other.kept_existing;
        self.rejected_invalid += other.rejected_invalid;
        self.rejected_duplicate_map += other.rejected_duplicate_map;
        self.ambiguous_added += other.ambiguous_added;
    }
}
