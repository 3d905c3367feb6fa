//! Map viewport for a selection
//!
//! The map always shows the level below the current selection: provinces
//! nationally, the districts of a selected province, the municipalities of
//! a selected district. A selected municipality is shown together with its
//! neighbours inside the configured radius.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::algorithm::map::layer::MapLayer;
use crate::algorithm::summary::AreaSummary;
use crate::config::MapConfig;
use crate::filter::{AreaFilter, FilterCriteria};
use crate::models::{AreaRecord, AreaRef, GeoLevel, Selection};

/// Which boundaries are drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum MapScope {
    Provinces,
    DistrictsOf { province: AreaRef },
    MunicipalitiesOf { district: AreaRef },
    MunicipalityWithNeighbors { municipality: AreaRef, radius_km: f64 },
}

impl MapScope {
    /// Level of the areas drawn as separate shapes
    #[must_use]
    pub const fn display_level(&self) -> GeoLevel {
        match self {
            Self::Provinces => GeoLevel::Province,
            Self::DistrictsOf { .. } => GeoLevel::District,
            Self::MunicipalitiesOf { .. } | Self::MunicipalityWithNeighbors { .. } => {
                GeoLevel::Municipality
            }
        }
    }
}

/// Zoom level for a selection depth, before clamping to the configured bounds
#[must_use]
pub const fn zoom_for(level: GeoLevel) -> u8 {
    match level {
        GeoLevel::National => 5,
        GeoLevel::Province => 7,
        GeoLevel::District => 9,
        GeoLevel::Municipality => 11,
    }
}

/// Boundaries and zoom for a selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub scope: MapScope,
    pub zoom: u8,
}

impl MapView {
    #[must_use]
    pub fn for_selection(selection: &Selection, config: &MapConfig) -> Self {
        let scope = match selection {
            Selection::National => MapScope::Provinces,
            Selection::Province { province } => MapScope::DistrictsOf {
                province: province.clone(),
            },
            Selection::District { district, .. } => MapScope::MunicipalitiesOf {
                district: district.clone(),
            },
            Selection::Municipality { municipality, .. } => MapScope::MunicipalityWithNeighbors {
                municipality: municipality.clone(),
                radius_km: config.neighboring_radius_km,
            },
        };
        Self {
            scope,
            zoom: config.clamp_zoom(zoom_for(selection.level())),
        }
    }

    /// Per-area values of `layer` for the shapes in this view, sorted by name
    ///
    /// Rows are grouped by their code at the display level and aggregated
    /// with the layer's aggregation. Neighbour geometry is not part of the
    /// row data, so a municipality view only carries the selected area.
    #[must_use]
    pub fn layer_values(&self, records: &[AreaRecord], layer: MapLayer) -> Vec<(AreaRef, Option<f64>)> {
        let filter = match &self.scope {
            MapScope::Provinces => AreaFilter::Everything,
            MapScope::DistrictsOf { province } => {
                AreaFilter::Code(GeoLevel::Province, province.code.clone())
            }
            MapScope::MunicipalitiesOf { district } => {
                AreaFilter::Code(GeoLevel::District, district.code.clone())
            }
            MapScope::MunicipalityWithNeighbors { municipality, .. } => {
                AreaFilter::Code(GeoLevel::Municipality, municipality.code.clone())
            }
        };
        let level = self.scope.display_level();

        records
            .iter()
            .filter(|r| filter.meets_criteria(*r))
            .filter_map(|r| r.area_at(level).map(|area| (area, r)))
            .into_group_map_by(|(area, _)| area.code.clone())
            .into_values()
            .filter_map(|group| {
                let area = group.first()?.0.clone();
                let summary = AreaSummary::from_records(group.into_iter().map(|(_, r)| r));
                Some((area, summary.value(layer.indicator())))
            })
            .sorted_by(|(a, _), (b, _)| a.name.cmp(&b.name).then_with(|| a.code.cmp(&b.code)))
            .collect()
    }
}
