//! Path-category automaton.
//!
//! A deterministic finite automaton over {I, S, L, O}. Reading the RC word of a
//! transform path from `Start` lands in the path's category; category 0 rejects
//! the path. State 0 is absorbing. The transition (5, S) goes to 4: an overlapping
//! region followed by a containing one still intersects the end region.

use std::fmt;

use ort_core::errors::AlgebraError;
use serde::{Deserialize, Serialize};

use crate::rc::{Rc, RcWord};

/// Classification of a chained RC word. Lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathCategory {
    /// 0: the path does not determine any relation.
    Invalid,
    /// 1: identical end regions.
    Identical,
    /// 2: the first region lies inside the last.
    Smaller,
    /// 3: the first region contains the last.
    Larger,
    /// 4: the end regions intersect, relation undetermined.
    Ambiguous,
    /// 5: the end regions overlap.
    Overlapping,
}

/// Automaton state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathState {
    Start,
    At(PathCategory),
}

impl PathCategory {
    /// Numeric category as used in the ORT literature.
    pub fn rank(self) -> u8 {
        match self {
            Self::Invalid => 0,
            Self::Identical => 1,
            Self::Smaller => 2,
            Self::Larger => 3,
            Self::Ambiguous => 4,
            Self::Overlapping => 5,
        }
    }

    /// The relation code a category stands for. `None` for 0 and 4.
    pub fn determine_rc(self) -> Option<Rc> {
        match self {
            Self::Identical => Some(Rc::Identical),
            Self::Smaller => Some(Rc::Smaller),
            Self::Larger => Some(Rc::Larger),
            Self::Overlapping => Some(Rc::Overlapping),
            Self::Invalid | Self::Ambiguous => None,
        }
    }

    /// Like [`determine_rc`](Self::determine_rc), as an error for 0 and 4.
    pub fn resolve_rc(self) -> Result<Rc, AlgebraError> {
        self.determine_rc()
            .ok_or(AlgebraError::UnresolvableCategory {
                category: self.rank(),
            })
    }

    /// Category of a directly stated relation (its one-letter word).
    pub fn of_relation(rc: Rc) -> PathCategory {
        classify(&[rc])
    }

    /// Category of the same path read backwards.
    pub fn reverse(self) -> PathCategory {
        match self {
            Self::Smaller => Self::Larger,
            Self::Larger => Self::Smaller,
            other => other,
        }
    }
}

impl fmt::Display for PathCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank())
    }
}

/// One automaton step.
pub fn transition(state: PathState, letter: Rc) -> PathState {
    use PathCategory as C;
    use Rc::*;

    let next = match (state, letter) {
        (PathState::Start | PathState::At(C::Identical), Identical) => C::Identical,
        (PathState::Start | PathState::At(C::Identical), Smaller) => C::Smaller,
        (PathState::Start | PathState::At(C::Identical), Larger) => C::Larger,
        (PathState::Start | PathState::At(C::Identical), Overlapping) => C::Overlapping,

        (PathState::At(C::Smaller), Identical | Smaller) => C::Smaller,
        (PathState::At(C::Smaller), Larger | Overlapping) => C::Invalid,

        (PathState::At(C::Larger), Identical | Larger) => C::Larger,
        (PathState::At(C::Larger), Smaller | Overlapping) => C::Ambiguous,

        (PathState::At(C::Ambiguous), Identical | Smaller) => C::Ambiguous,
        (PathState::At(C::Ambiguous), Larger | Overlapping) => C::Invalid,

        (PathState::At(C::Overlapping), Identical) => C::Overlapping,
        (PathState::At(C::Overlapping), Smaller) => C::Ambiguous,
        (PathState::At(C::Overlapping), Larger | Overlapping) => C::Invalid,

        (PathState::At(C::Invalid), _) => C::Invalid,
    };
    PathState::At(next)
}

/// Run a word through the automaton. The empty word is invalid.
pub fn classify(word: &[Rc]) -> PathCategory {
    let end = word
        .iter()
        .fold(PathState::Start, |state, &letter| transition(state, letter));
    match end {
        PathState::Start => PathCategory::Invalid,
        PathState::At(category) => category,
    }
}

/// Classify a word given as letters, e.g. `"IISS"`.
pub fn classify_codes(word: &str) -> Result<PathCategory, AlgebraError> {
    let word: RcWord = Rc::parse_word(word)?;
    Ok(classify(&word))
}
