// Single source of truth for all default values.

use super::deduction_config::TieBreak;

// --- Deduction ---
pub const DEFAULT_TIE_BREAK: TieBreak = TieBreak::FirstWins;
pub const DEFAULT_UNTIL_FIXPOINT: bool = false;
pub const DEFAULT_MAX_PASSES: usize = 16;

// --- Elimination ---
pub const DEFAULT_RELABEL_AMBIGUOUS: bool = true;
pub const DEFAULT_ELIMINATE_CONTRADICTIONS: bool = true;

// --- Transform ---
pub const DEFAULT_PARALLEL: bool = true;
pub const DEFAULT_MIN_PARALLEL_CONNECTIONS: usize = 512;

// --- Consensus ---
pub const DEFAULT_STRICT_CONSENSUS: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
