//! Relation codes (RC) and their composition table.
//!
//! An RC states how region A relates spatially to region B. Composing two
//! chained relations (A→B, B→C) yields the set of relations A→C may have, and
//! whether A and C may be disjoint.

use std::fmt;

use ort_core::errors::AlgebraError;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The four spatial relations between two regions from different maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rc {
    /// A and B cover the same tissue.
    #[serde(rename = "I")]
    Identical,
    /// A lies inside B.
    #[serde(rename = "S")]
    Smaller,
    /// A contains B.
    #[serde(rename = "L")]
    Larger,
    /// A and B share some tissue and each has tissue outside the other.
    #[serde(rename = "O")]
    Overlapping,
}

/// An ordered chain of relation codes read along a transform path.
pub type RcWord = SmallVec<[Rc; 8]>;

impl Rc {
    /// All variants, in alphabet order.
    pub const ALL: [Rc; 4] = [Self::Identical, Self::Smaller, Self::Larger, Self::Overlapping];

    /// The relation of B to A given the relation of A to B.
    pub fn reverse(self) -> Rc {
        match self {
            Self::Identical => Self::Identical,
            Self::Smaller => Self::Larger,
            Self::Larger => Self::Smaller,
            Self::Overlapping => Self::Overlapping,
        }
    }

    /// Single-letter code.
    pub fn code(self) -> char {
        match self {
            Self::Identical => 'I',
            Self::Smaller => 'S',
            Self::Larger => 'L',
            Self::Overlapping => 'O',
        }
    }

    /// String form of the single-letter code.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Identical => "I",
            Self::Smaller => "S",
            Self::Larger => "L",
            Self::Overlapping => "O",
        }
    }

    /// Parse a single-letter code.
    pub fn from_code(code: &str) -> Result<Rc, AlgebraError> {
        match code.trim() {
            "I" => Ok(Self::Identical),
            "S" => Ok(Self::Smaller),
            "L" => Ok(Self::Larger),
            "O" => Ok(Self::Overlapping),
            other => Err(AlgebraError::UnknownRelationCode {
                code: other.to_string(),
            }),
        }
    }

    /// Parse a word such as `IISS`.
    pub fn parse_word(word: &str) -> Result<RcWord, AlgebraError> {
        word.chars()
            .map(|c| Self::from_code(c.encode_utf8(&mut [0; 4])))
            .collect()
    }

    /// Whether this relation places A's tissue within B's (I or S).
    pub fn is_contained(self) -> bool {
        matches!(self, Self::Identical | Self::Smaller)
    }
}

impl fmt::Display for Rc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a word as its letter string.
pub fn word_to_string(word: &[Rc]) -> String {
    word.iter().map(|rc| rc.code()).collect()
}

/// The possible outcomes of composing two relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RcSet(u8);

impl RcSet {
    const IDENTICAL: u8 = 1;
    const SMALLER: u8 = 1 << 1;
    const LARGER: u8 = 1 << 2;
    const OVERLAPPING: u8 = 1 << 3;
    const DISJOINT: u8 = 1 << 4;

    fn bit(rc: Rc) -> u8 {
        match rc {
            Rc::Identical => Self::IDENTICAL,
            Rc::Smaller => Self::SMALLER,
            Rc::Larger => Self::LARGER,
            Rc::Overlapping => Self::OVERLAPPING,
        }
    }

    /// A set holding exactly one relation.
    pub fn only(rc: Rc) -> Self {
        Self(Self::bit(rc))
    }

    /// A set of relations, without the disjoint outcome.
    pub fn of(rcs: &[Rc]) -> Self {
        Self(rcs.iter().fold(0, |acc, &rc| acc | Self::bit(rc)))
    }

    /// All four relations (the regions certainly intersect).
    pub fn intersecting() -> Self {
        Self::of(&Rc::ALL)
    }

    /// Add the disjoint outcome.
    pub fn or_disjoint(self) -> Self {
        Self(self.0 | Self::DISJOINT)
    }

    pub fn contains(self, rc: Rc) -> bool {
        self.0 & Self::bit(rc) != 0
    }

    /// Whether the two end regions may share no tissue at all.
    pub fn may_be_disjoint(self) -> bool {
        self.0 & Self::DISJOINT != 0
    }

    /// The relation, when the composition determines exactly one and excludes disjointness.
    pub fn single(self) -> Option<Rc> {
        if self.may_be_disjoint() {
            return None;
        }
        let mut members = self.relations();
        match (members.next(), members.next()) {
            (Some(rc), None) => Some(rc),
            _ => None,
        }
    }

    /// Member relations in alphabet order.
    pub fn relations(self) -> impl Iterator<Item = Rc> {
        Rc::ALL.into_iter().filter(move |&rc| self.contains(rc))
    }

    pub fn union(self, other: RcSet) -> RcSet {
        Self(self.0 | other.0)
    }
}

impl fmt::Display for RcSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rc in self.relations() {
            write!(f, "{}", rc.code())?;
        }
        if self.may_be_disjoint() {
            f.write_str("|D")?;
        }
        Ok(())
    }
}

/// Compose A→B (`first`) with B→C (`second`) into the possible A→C relations.
///
/// Regions within one map are disjoint, so whenever C may lie wholly outside A
/// the result carries the disjoint outcome.
pub fn compose(first: Rc, second: Rc) -> RcSet {
    use Rc::*;
    match (first, second) {
        (Identical, r) => RcSet::only(r),
        (r, Identical) => RcSet::only(r),
        (Smaller, Smaller) => RcSet::only(Smaller),
        (Smaller, Larger) => RcSet::intersecting().or_disjoint(),
        (Smaller, Overlapping) => RcSet::of(&[Smaller, Overlapping]).or_disjoint(),
        (Larger, Smaller) => RcSet::intersecting(),
        (Larger, Larger) => RcSet::only(Larger),
        (Larger, Overlapping) => RcSet::of(&[Larger, Overlapping]),
        (Overlapping, Smaller) => RcSet::of(&[Smaller, Overlapping]),
        (Overlapping, Larger) => RcSet::of(&[Larger, Overlapping]).or_disjoint(),
        (Overlapping, Overlapping) => RcSet::intersecting().or_disjoint(),
    }
}

/// Compose two relations given as letter codes.
pub fn compose_codes(first: &str, second: &str) -> Result<RcSet, AlgebraError> {
    match (Rc::from_code(first), Rc::from_code(second)) {
        (Ok(a), Ok(b)) => Ok(compose(a, b)),
        _ => Err(AlgebraError::UndefinedComposition {
            first: first.to_string(),
            second: second.to_string(),
        }),
    }
}
