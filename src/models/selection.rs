//! The current drill-down state
//!
//! A `Selection` only ever carries the levels that are populated, so the
//! level and the populated fields cannot disagree. Whether a district really
//! belongs to the selected province is checked by the selector that builds
//! the value.

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::models::geography::{AreaRef, GeoLevel};

/// Drill-down path from province to the finest selected level
pub type Breadcrumb<'a> = SmallVec<[(GeoLevel, &'a AreaRef); 3]>;

/// Current geographic selection
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "level", rename_all = "snake_case")]
pub enum Selection {
    /// Nothing selected, the whole country
    #[default]
    National,
    /// A province
    Province {
        province: AreaRef,
    },
    /// A district within a province
    District {
        province: AreaRef,
        district: AreaRef,
    },
    /// A municipality within a district within a province
    Municipality {
        province: AreaRef,
        district: AreaRef,
        municipality: AreaRef,
    },
}

impl Selection {
    /// The canonical national selection
    #[must_use]
    pub const fn national() -> Self {
        Self::National
    }

    /// The finest populated level
    #[must_use]
    pub const fn level(&self) -> GeoLevel {
        match self {
            Self::National => GeoLevel::National,
            Self::Province { .. } => GeoLevel::Province,
            Self::District { .. } => GeoLevel::District,
            Self::Municipality { .. } => GeoLevel::Municipality,
        }
    }

    #[must_use]
    pub const fn province(&self) -> Option<&AreaRef> {
        match self {
            Self::National => None,
            Self::Province { province }
            | Self::District { province, .. }
            | Self::Municipality { province, .. } => Some(province),
        }
    }

    #[must_use]
    pub const fn district(&self) -> Option<&AreaRef> {
        match self {
            Self::District { district, .. } | Self::Municipality { district, .. } => Some(district),
            _ => None,
        }
    }

    #[must_use]
    pub const fn municipality(&self) -> Option<&AreaRef> {
        match self {
            Self::Municipality { municipality, .. } => Some(municipality),
            _ => None,
        }
    }

    /// The area at `level`, if that level is populated
    #[must_use]
    pub const fn area_at(&self, level: GeoLevel) -> Option<&AreaRef> {
        match level {
            GeoLevel::National => None,
            GeoLevel::Province => self.province(),
            GeoLevel::District => self.district(),
            GeoLevel::Municipality => self.municipality(),
        }
    }

    /// The finest selected area, `None` at national level
    #[must_use]
    pub const fn current_area(&self) -> Option<&AreaRef> {
        self.area_at(self.level())
    }

    #[must_use]
    pub const fn is_national(&self) -> bool {
        matches!(self, Self::National)
    }

    /// Drop every level finer than `level`
    #[must_use]
    pub fn truncated_to(&self, level: GeoLevel) -> Self {
        if level >= self.level() {
            return self.clone();
        }
        match (level, self) {
            (GeoLevel::National, _) => Self::National,
            (
                GeoLevel::Province,
                Self::District { province, .. } | Self::Municipality { province, .. },
            ) => Self::Province {
                province: province.clone(),
            },
            (
                GeoLevel::District,
                Self::Municipality {
                    province, district, ..
                },
            ) => Self::District {
                province: province.clone(),
                district: district.clone(),
            },
            _ => self.clone(),
        }
    }

    /// Ordered path of selected areas, province first
    #[must_use]
    pub fn breadcrumb(&self) -> Breadcrumb<'_> {
        [GeoLevel::Province, GeoLevel::District, GeoLevel::Municipality]
            .into_iter()
            .filter_map(|level| self.area_at(level).map(|area| (level, area)))
            .collect()
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_national() {
            return f.write_str("All South Africa");
        }
        let path = self
            .breadcrumb()
            .iter()
            .map(|(level, area)| format!("{}: {}", level.display_name(), area.name))
            .join(" > ");
        f.write_str(&path)
    }
}
