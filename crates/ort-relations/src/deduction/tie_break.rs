//! Choosing between an existing relation and a new candidate for the same pair.

use ort_core::config::TieBreak;

use crate::automaton::PathCategory;
use crate::graph::RelationEdge;

/// Whether `candidate` should replace `existing`.
///
/// A strictly better path category always wins. Equal categories are settled
/// by the configured policy; anything else keeps the existing edge. Smaller
/// and Larger are one category read from opposite ends, so a clash between
/// them is a tie.
pub fn prefers_candidate(policy: TieBreak, existing: &RelationEdge, candidate: &RelationEdge) -> bool {
    let (new, old) = (strength(candidate.category), strength(existing.category));
    if new < old {
        return true;
    }
    if new != old {
        return false;
    }
    match policy {
        TieBreak::FirstWins => false,
        TieBreak::ShortestPathThenPrecision => {
            (candidate.tp.len(), candidate.pdc) < (existing.tp.len(), existing.pdc)
        }
    }
}

/// Rank of a category regardless of which end the path is read from.
fn strength(category: PathCategory) -> u8 {
    category.rank().min(category.reverse().rank())
}
