//! Deduction configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// How the deducer settles two candidates for the same edge that share a path category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Keep the edge that was found first.
    FirstWins,
    /// Prefer the shorter transform path, then the better PDC; keep the existing
    /// edge if both are equal.
    ShortestPathThenPrecision,
}

impl TieBreak {
    /// Parse from string (matching the serde rename).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "first_wins" => Some(Self::FirstWins),
            "shortest_path_then_precision" => Some(Self::ShortestPathThenPrecision),
            _ => None,
        }
    }

    /// String name for this policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstWins => "first_wins",
            Self::ShortestPathThenPrecision => "shortest_path_then_precision",
        }
    }
}

/// Configuration for the relation deducer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DeductionConfig {
    /// Tie-break between equal-category candidates. Default: `first_wins`.
    pub tie_break: Option<TieBreak>,
    /// Repeat passes until no edge changes. Default: false (single pass).
    pub until_fixpoint: Option<bool>,
    /// Upper bound on passes in fixpoint mode. Default: 16.
    pub max_passes: Option<usize>,
}

impl DeductionConfig {
    /// Returns the effective tie-break policy.
    pub fn effective_tie_break(&self) -> TieBreak {
        self.tie_break.unwrap_or(defaults::DEFAULT_TIE_BREAK)
    }

    /// Returns whether deduction iterates to a fixpoint.
    pub fn effective_until_fixpoint(&self) -> bool {
        self.until_fixpoint.unwrap_or(defaults::DEFAULT_UNTIL_FIXPOINT)
    }

    /// Returns the effective pass bound for fixpoint mode.
    pub fn effective_max_passes(&self) -> usize {
        self.max_passes.unwrap_or(defaults::DEFAULT_MAX_PASSES)
    }
}
