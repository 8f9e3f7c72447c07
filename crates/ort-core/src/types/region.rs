//! Region identifiers: a map (nomenclature) name and a site name, written `MAP-SITE`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::REGION_SEPARATOR;
use crate::errors::GraphFormatError;

/// A brain region in a specific parcellation map.
///
/// Regions from the same map are assumed disjoint. Ordering is by map, then site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Region {
    map: String,
    site: String,
}

impl Region {
    /// Build a region from its parts. Both must be non-empty and the map must not
    /// contain the separator.
    pub fn new(map: impl Into<String>, site: impl Into<String>) -> Result<Self, GraphFormatError> {
        let map = map.into();
        let site = site.into();
        let id = format!("{map}{REGION_SEPARATOR}{site}");
        if map.is_empty() {
            return Err(malformed(&id, "empty map name"));
        }
        if map.contains(REGION_SEPARATOR) {
            return Err(malformed(&id, "map name contains the separator"));
        }
        if site.is_empty() {
            return Err(malformed(&id, "empty site name"));
        }
        Ok(Self { map, site })
    }

    /// Parse `MAP-SITE`, splitting at the first separator. The site may itself
    /// contain separators (`PHT00-V2-V3` is map `PHT00`, site `V2-V3`).
    pub fn parse(id: &str) -> Result<Self, GraphFormatError> {
        let id = id.trim();
        match id.split_once(REGION_SEPARATOR) {
            Some((map, site)) => Self::new(map, site),
            None => Err(malformed(id, "missing map/site separator")),
        }
    }

    /// The map (nomenclature) this region belongs to.
    pub fn map(&self) -> &str {
        &self.map
    }

    /// The site name within its map.
    pub fn site(&self) -> &str {
        &self.site
    }

    /// Whether both regions come from the same map.
    pub fn same_map(&self, other: &Region) -> bool {
        self.map == other.map
    }

    /// Whether this region belongs to `map`.
    pub fn in_map(&self, map: &str) -> bool {
        self.map == map
    }
}

fn malformed(id: &str, reason: &str) -> GraphFormatError {
    GraphFormatError::MalformedRegion {
        id: id.to_string(),
        reason: reason.to_string(),
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.map, REGION_SEPARATOR, self.site)
    }
}

impl FromStr for Region {
    type Err = GraphFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Region {
    type Error = GraphFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Region {
    type Error = GraphFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_map_and_site() {
        let region = Region::parse("BP89-V46").unwrap();
        assert_eq!(region.map(), "BP89");
        assert_eq!(region.site(), "V46");
        assert_eq!(region.to_string(), "BP89-V46");
    }

    #[test]
    fn site_keeps_inner_separators() {
        let region = Region::parse("PHT00-V2-V3").unwrap();
        assert_eq!(region.map(), "PHT00");
        assert_eq!(region.site(), "V2-V3");
    }

    #[test]
    fn rejects_missing_parts() {
        assert!(Region::parse("B09").is_err());
        assert!(Region::parse("-9").is_err());
        assert!(Region::parse("B09-").is_err());
        assert!(Region::new("A-B", "1").is_err());
    }

    #[test]
    fn serde_uses_the_string_form() {
        let region = Region::parse("W40-46").unwrap();
        let json = serde_json::to_string(&region).unwrap();
        assert_eq!(json, "\"W40-46\"");
        let back: Region = serde_json::from_str(&json).unwrap();
        assert_eq!(back, region);
        assert!(serde_json::from_str::<Region>("\"nodash\"").is_err());
    }
}
