//! Cascading geographic selection
//!
//! `GeographicSelector` applies the drill-down rules over an immutable
//! catalog. Every operation takes the caller's current `Selection` and
//! returns a new one; the selector itself holds no per-session state and can
//! be shared freely.

use std::sync::Arc;

use log::{debug, warn};

use crate::collections::{CatalogStore, GeographicCatalog};
use crate::error::{DashboardError, Result};
use crate::models::{AreaRef, GeoEntity, GeoLevel, Selection};

/// What the user picked at one level
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// "All" at this level: clears it and everything below
    All,
    /// A specific area code
    Code(String),
}

impl Choice {
    pub fn code(code: impl Into<String>) -> Self {
        Self::Code(code.into())
    }
}

impl From<&str> for Choice {
    fn from(code: &str) -> Self {
        Self::Code(code.to_string())
    }
}

impl From<String> for Choice {
    fn from(code: String) -> Self {
        Self::Code(code)
    }
}

/// Drill-down rules over a catalog snapshot
#[derive(Debug, Clone)]
pub struct GeographicSelector {
    catalog: Arc<GeographicCatalog>,
}

impl GeographicSelector {
    #[must_use]
    pub const fn new(catalog: Arc<GeographicCatalog>) -> Self {
        Self { catalog }
    }

    /// Selector over the store's current snapshot
    #[must_use]
    pub fn from_store(store: &CatalogStore) -> Self {
        Self::new(store.snapshot())
    }

    #[must_use]
    pub fn catalog(&self) -> &GeographicCatalog {
        &self.catalog
    }

    /// Valid choices at `level` given the levels already chosen above it
    ///
    /// Provinces are always listed. Districts require a selected province
    /// and municipalities a selected district; without one the list is
    /// empty. The national level has no choices. Lists are sorted by name.
    #[must_use]
    pub fn options_for(&self, level: GeoLevel, selection: &Selection) -> Vec<AreaRef> {
        match level {
            GeoLevel::National => Vec::new(),
            GeoLevel::Province => self
                .catalog
                .provinces()
                .iter()
                .map(GeoEntity::to_area_ref)
                .collect(),
            GeoLevel::District => selection
                .province()
                .map(|province| {
                    self.catalog
                        .districts_of(&province.code)
                        .map(GeoEntity::to_area_ref)
                        .collect()
                })
                .unwrap_or_default(),
            GeoLevel::Municipality => selection
                .district()
                .map(|district| {
                    self.catalog
                        .municipalities_of(&district.code)
                        .map(GeoEntity::to_area_ref)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    /// Apply a choice at `level` to `selection`
    ///
    /// Choosing a code sets that level and clears every deeper level.
    /// Choosing "all" clears the level and everything below it, leaving the
    /// nearest populated ancestor (or national). A code that is not among
    /// `options_for(level, selection)` is rejected with
    /// `DashboardError::InvalidSelection`; the input selection is never
    /// modified.
    pub fn select(
        &self,
        level: GeoLevel,
        choice: impl Into<Choice>,
        selection: &Selection,
    ) -> Result<Selection> {
        let next = match choice.into() {
            Choice::All => match level.parent() {
                Some(parent) => selection.truncated_to(parent),
                None => Selection::National,
            },
            Choice::Code(code) => self.select_code(level, &code, selection)?,
        };
        debug!("Selection {} -> {} ({})", selection.level(), next.level(), next);
        Ok(next)
    }

    fn select_code(&self, level: GeoLevel, code: &str, selection: &Selection) -> Result<Selection> {
        let invalid = || DashboardError::invalid_selection(level, code);
        match level {
            GeoLevel::National => Err(invalid()),
            GeoLevel::Province => {
                let province = self.catalog.province(code).ok_or_else(invalid)?;
                Ok(Selection::Province {
                    province: province.to_area_ref(),
                })
            }
            GeoLevel::District => {
                let province = selection.province().ok_or_else(invalid)?;
                let district = self
                    .catalog
                    .district(code)
                    .filter(|d| d.province_code == province.code)
                    .ok_or_else(invalid)?;
                Ok(Selection::District {
                    province: province.clone(),
                    district: district.to_area_ref(),
                })
            }
            GeoLevel::Municipality => {
                let (province, district) = selection
                    .province()
                    .zip(selection.district())
                    .ok_or_else(invalid)?;
                let municipality = self
                    .catalog
                    .municipality(code)
                    .filter(|m| m.district_code == district.code)
                    .ok_or_else(invalid)?;
                Ok(Selection::Municipality {
                    province: province.clone(),
                    district: district.clone(),
                    municipality: municipality.to_area_ref(),
                })
            }
        }
    }

    /// The empty, national selection
    #[must_use]
    pub const fn reset(&self) -> Selection {
        Selection::National
    }

    /// Re-validate a selection against this selector's catalog
    ///
    /// Keeps the deepest prefix of the selection that still exists in the
    /// catalog with the same parent links, refreshing names from the
    /// catalog. Used after a catalog refresh, where an earlier selection may
    /// refer to areas that no longer exist.
    #[must_use]
    pub fn normalize(&self, selection: &Selection) -> Selection {
        let mut normalized = Selection::National;
        for (level, area) in selection.breadcrumb() {
            match self.select_code(level, &area.code, &normalized) {
                Ok(next) => normalized = next,
                Err(_) => {
                    warn!(
                        "{} '{}' is no longer in the catalog; narrowing selection to {}",
                        level.display_name(),
                        area.code,
                        normalized.level()
                    );
                    break;
                }
            }
        }
        normalized
    }
}
