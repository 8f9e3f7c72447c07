//! Extent codes (EC): how much of a region takes part in a connection.

use std::fmt;

use ort_core::errors::AlgebraError;
use serde::{Deserialize, Serialize};

/// Extent of a region's participation in a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ec {
    /// The whole region participates.
    #[serde(rename = "C")]
    Complete,
    /// Part of the region participates, part does not.
    #[serde(rename = "P", alias = "Nc")]
    Partial,
    /// Some of the region participates; the extent is unknown.
    #[serde(rename = "X")]
    Exists,
    /// No part of the region participates.
    #[serde(rename = "N")]
    Absent,
    /// Some of the region does not participate; the rest is unknown.
    #[serde(rename = "Nx")]
    AbsentInPart,
    /// Nothing is known.
    #[serde(rename = "U")]
    Unknown,
}

impl Ec {
    pub const ALL: [Ec; 6] = [
        Self::Complete,
        Self::Partial,
        Self::Exists,
        Self::Absent,
        Self::AbsentInPart,
        Self::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "C",
            Self::Partial => "P",
            Self::Exists => "X",
            Self::Absent => "N",
            Self::AbsentInPart => "Nx",
            Self::Unknown => "U",
        }
    }

    /// Parse a code. `Nc` (absent in part, present in the rest) is read as `P`.
    pub fn from_code(code: &str) -> Result<Ec, AlgebraError> {
        match code.trim() {
            "C" => Ok(Self::Complete),
            "P" | "Nc" => Ok(Self::Partial),
            "X" => Ok(Self::Exists),
            "N" => Ok(Self::Absent),
            "Nx" => Ok(Self::AbsentInPart),
            "U" => Ok(Self::Unknown),
            other => Err(AlgebraError::UnknownExtentCode {
                code: other.to_string(),
            }),
        }
    }

    /// What the code says about the region's tissue.
    pub fn knowledge(self) -> Knowledge {
        match self {
            Self::Complete => Knowledge::YES,
            Self::Partial => Knowledge::YES.union(Knowledge::NO),
            Self::Exists => Knowledge::YES.union(Knowledge::UNKNOWN),
            Self::Absent => Knowledge::NO,
            Self::AbsentInPart => Knowledge::NO.union(Knowledge::UNKNOWN),
            Self::Unknown => Knowledge::UNKNOWN,
        }
    }

    /// The code describing a knowledge set. Participating and non-participating
    /// tissue together make `P` whether or not some tissue is unknown.
    pub fn from_knowledge(knowledge: Knowledge) -> Option<Ec> {
        let (yes, no, unknown) = (
            knowledge.contains(Knowledge::YES),
            knowledge.contains(Knowledge::NO),
            knowledge.contains(Knowledge::UNKNOWN),
        );
        match (yes, no, unknown) {
            (true, false, false) => Some(Self::Complete),
            (true, true, _) => Some(Self::Partial),
            (true, false, true) => Some(Self::Exists),
            (false, true, false) => Some(Self::Absent),
            (false, true, true) => Some(Self::AbsentInPart),
            (false, false, true) => Some(Self::Unknown),
            (false, false, false) => None,
        }
    }

    /// Whether the region certainly takes part.
    pub fn is_present(self) -> bool {
        matches!(self, Self::Complete | Self::Partial | Self::Exists)
    }

    pub fn is_absent(self) -> bool {
        self == Self::Absent
    }

    pub fn is_unknown(self) -> bool {
        self == Self::Unknown
    }

    /// How fully determined the code is; lower is stronger.
    pub fn vagueness(self) -> u8 {
        match self {
            Self::Complete | Self::Absent => 0,
            Self::Partial => 1,
            Self::Exists | Self::AbsentInPart => 2,
            Self::Unknown => 3,
        }
    }
}

impl fmt::Display for Ec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of statements about a region's tissue: some participates (`YES`), some
/// does not (`NO`), some is undetermined (`UNKNOWN`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Knowledge(u8);

impl Knowledge {
    pub const EMPTY: Knowledge = Knowledge(0);
    pub const YES: Knowledge = Knowledge(1);
    pub const NO: Knowledge = Knowledge(1 << 1);
    pub const UNKNOWN: Knowledge = Knowledge(1 << 2);

    pub const fn union(self, other: Knowledge) -> Knowledge {
        Knowledge(self.0 | other.0)
    }

    pub fn contains(self, other: Knowledge) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}
