//! Choropleth layers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algorithm::performance::{Aggregation, Indicator};
use crate::models::AreaRecord;

/// An indicator column that can be drawn on the map
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapLayer {
    #[default]
    HealthWorkerDensity,
    HivCases,
    TbTreatmentSuccess,
    HealthFacilities,
    Population,
}

impl MapLayer {
    pub const ALL: [Self; 5] = [
        Self::HealthWorkerDensity,
        Self::HivCases,
        Self::TbTreatmentSuccess,
        Self::HealthFacilities,
        Self::Population,
    ];

    /// Source column the layer reads
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::HealthWorkerDensity => "Health_worker_density__index_",
            Self::HivCases => "Total_living_with_HIV",
            Self::TbTreatmentSuccess => "TB_DS_treatment_success_rate",
            Self::HealthFacilities => "Number_of_health_facilities",
            Self::Population => "Total_population",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::HealthWorkerDensity => "Health Worker Density",
            Self::HivCases => "HIV Cases",
            Self::TbTreatmentSuccess => "TB Treatment Success",
            Self::HealthFacilities => "Health Facilities",
            Self::Population => "Population Density",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::HealthWorkerDensity => "Health workers per 10,000 population",
            Self::HivCases => "Total people living with HIV",
            Self::TbTreatmentSuccess => "DS-TB treatment success rate",
            Self::HealthFacilities => "Number of health facilities",
            Self::Population => "Total population",
        }
    }

    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::HealthWorkerDensity => "per 10,000",
            Self::HivCases => "cases",
            Self::TbTreatmentSuccess => "%",
            Self::HealthFacilities => "facilities",
            Self::Population => "people",
        }
    }

    /// Colour scale name understood by the map renderer
    #[must_use]
    pub const fn color_scheme(self) -> &'static str {
        match self {
            Self::HealthWorkerDensity => "YlOrRd",
            Self::HivCases => "Reds",
            Self::TbTreatmentSuccess => "Greens",
            Self::HealthFacilities => "Blues",
            Self::Population => "Purples",
        }
    }

    #[must_use]
    pub const fn indicator(self) -> Indicator {
        match self {
            Self::HealthWorkerDensity => Indicator::HealthWorkerDensity,
            Self::HivCases => Indicator::PeopleLivingWithHiv,
            Self::TbTreatmentSuccess => Indicator::TbTreatmentSuccess,
            Self::HealthFacilities => Indicator::HealthFacilities,
            Self::Population => Indicator::Population,
        }
    }

    /// Layers whose legend uses rounded count bins
    #[must_use]
    pub const fn uses_rounded_bins(self) -> bool {
        matches!(self, Self::HivCases | Self::Population)
    }

    #[must_use]
    pub const fn aggregation(self) -> Aggregation {
        self.indicator().aggregation()
    }

    #[must_use]
    pub fn from_column(column: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|layer| layer.column() == column)
    }

    /// This layer's value in a record
    #[must_use]
    pub const fn value(self, record: &AreaRecord) -> Option<f64> {
        match self {
            Self::HealthWorkerDensity => record.health_worker_density,
            Self::HivCases => record.total_living_with_hiv,
            Self::TbTreatmentSuccess => record.tb_treatment_success_rate,
            Self::HealthFacilities => record.health_facilities,
            Self::Population => record.total_population,
        }
    }
}

impl fmt::Display for MapLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for MapLayer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_column(s).ok_or_else(|| format!("Unknown map layer column: {s}"))
    }
}
