//! Precision-of-description codes (PDC): 0 is the most precise, 18 the least.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_PDC, PDC_LETTERS};
use crate::errors::GraphFormatError;

/// Precision code attached to a relation or connection statement.
///
/// Along a transform path, the path's precision is the worst (maximum) code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Pdc(u8);

impl Pdc {
    /// Most precise code.
    pub const BEST: Pdc = Pdc(0);
    /// Least precise code; also the code of a statement with no recorded PDC.
    pub const WORST: Pdc = Pdc(MAX_PDC);

    /// Build from a numeric rank.
    pub fn new(value: u8) -> Result<Self, GraphFormatError> {
        if value > MAX_PDC {
            return Err(GraphFormatError::PdcOutOfRange {
                value,
                max: MAX_PDC,
            });
        }
        Ok(Self(value))
    }

    /// Build from a CoCoMac letter (`A`..`R`). `None` or an empty string maps to
    /// the worst code.
    pub fn from_letter(letter: Option<&str>) -> Result<Self, GraphFormatError> {
        let letter = match letter.map(str::trim) {
            None | Some("") => return Ok(Self::WORST),
            Some(l) => l,
        };
        let mut chars = letter.chars();
        let rank = match (chars.next(), chars.next()) {
            (Some(c), None) => PDC_LETTERS.find(c.to_ascii_uppercase()),
            _ => None,
        };
        match rank {
            Some(idx) => Ok(Self(idx as u8)),
            None => Err(GraphFormatError::UnknownPdcLetter {
                letter: letter.to_string(),
            }),
        }
    }

    /// Numeric rank.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The less precise of two codes.
    pub fn worst(self, other: Pdc) -> Pdc {
        self.max(other)
    }
}

impl Default for Pdc {
    fn default() -> Self {
        Self::WORST
    }
}

impl TryFrom<u8> for Pdc {
    type Error = GraphFormatError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Pdc> for u8 {
    fn from(pdc: Pdc) -> Self {
        pdc.0
    }
}

impl fmt::Display for Pdc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
