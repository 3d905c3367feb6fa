//! Geographic entities and drill-down levels
//!
//! The dashboard knows four levels of geography. Provinces, districts and
//! municipalities are identified by codes that are unique within their level.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Drill-down level, ordered from coarsest to finest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeoLevel {
    /// All of South Africa
    National,
    /// A single province
    Province,
    /// A district within a province
    District,
    /// A local municipality within a district
    Municipality,
}

impl GeoLevel {
    /// All levels from coarsest to finest
    pub const ALL: [Self; 4] = [
        Self::National,
        Self::Province,
        Self::District,
        Self::Municipality,
    ];

    /// Lowercase identifier used in serialized selections
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::National => "national",
            Self::Province => "province",
            Self::District => "district",
            Self::Municipality => "municipality",
        }
    }

    /// Human readable name for this level
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::National => "National",
            Self::Province => "Province",
            Self::District => "District",
            Self::Municipality => "Municipality",
        }
    }

    /// The level directly above this one, if any
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::National => None,
            Self::Province => Some(Self::National),
            Self::District => Some(Self::Province),
            Self::Municipality => Some(Self::District),
        }
    }

    /// The level directly below this one, if any
    #[must_use]
    pub const fn child(self) -> Option<Self> {
        match self {
            Self::National => Some(Self::Province),
            Self::Province => Some(Self::District),
            Self::District => Some(Self::Municipality),
            Self::Municipality => None,
        }
    }
}

impl fmt::Display for GeoLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeoLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "national" => Ok(Self::National),
            "province" => Ok(Self::Province),
            "district" => Ok(Self::District),
            "municipality" => Ok(Self::Municipality),
            other => Err(format!("Unknown geographic level: {other}")),
        }
    }
}

/// A `(code, name)` pair identifying one area at some level
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AreaRef {
    /// Code, unique within its level
    pub code: String,
    /// Display name
    pub name: String,
}

impl AreaRef {
    /// Create a new area reference
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for AreaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// A province
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    pub code: String,
    pub name: String,
}

/// A district and the province it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    pub code: String,
    pub name: String,
    pub province_code: String,
}

/// A local municipality and the district it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Municipality {
    pub code: String,
    pub name: String,
    pub district_code: String,
}

/// Common accessors for catalog entries
pub trait GeoEntity {
    /// The level this entity lives at
    const LEVEL: GeoLevel;

    fn code(&self) -> &str;

    fn name(&self) -> &str;

    /// Code of the parent entity, `None` for provinces
    fn parent_code(&self) -> Option<&str>;

    /// The entity as a `(code, name)` pair
    fn to_area_ref(&self) -> AreaRef {
        AreaRef::new(self.code(), self.name())
    }
}

impl GeoEntity for Province {
    const LEVEL: GeoLevel = GeoLevel::Province;

    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn parent_code(&self) -> Option<&str> {
        None
    }
}

impl GeoEntity for District {
    const LEVEL: GeoLevel = GeoLevel::District;

    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn parent_code(&self) -> Option<&str> {
        Some(self.province_code.as_str())
    }
}

impl GeoEntity for Municipality {
    const LEVEL: GeoLevel = GeoLevel::Municipality;

    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn parent_code(&self) -> Option<&str> {
        Some(self.district_code.as_str())
    }
}
