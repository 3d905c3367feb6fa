//! Municipality-level indicator rows
//!
//! One `AreaRecord` is one row of the precomputed indicator table, keyed by
//! its municipality code and carrying the codes and names of every level
//! above it. Serialized field names follow the source table's columns.

use serde::{Deserialize, Serialize};

use crate::models::geography::{AreaRef, GeoLevel};

/// One row of aggregated indicator values for a municipality
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaRecord {
    #[serde(rename = "PROVINCE")]
    pub province_code: String,
    #[serde(rename = "Province_name")]
    pub province_name: String,
    #[serde(rename = "DISTRICT")]
    pub district_code: String,
    #[serde(rename = "DISTRICT_N")]
    pub district_name: String,
    #[serde(rename = "CAT_B")]
    pub municipality_code: String,
    #[serde(rename = "MUNICNAME_1")]
    pub municipality_name: String,

    /// Health workers per 10,000 population
    #[serde(rename = "Health_worker_density__index_", default)]
    pub health_worker_density: Option<f64>,
    /// People living with HIV
    #[serde(rename = "Total_living_with_HIV", default)]
    pub total_living_with_hiv: Option<f64>,
    /// Drug-sensitive TB treatment success rate (%)
    #[serde(rename = "TB_DS_treatment_success_rate", default)]
    pub tb_treatment_success_rate: Option<f64>,
    #[serde(rename = "Number_of_health_facilities", default)]
    pub health_facilities: Option<f64>,
    #[serde(rename = "Total_population", default)]
    pub total_population: Option<f64>,
}

impl AreaRecord {
    /// Create a record with no indicator values
    pub fn new(province: AreaRef, district: AreaRef, municipality: AreaRef) -> Self {
        Self {
            province_code: province.code,
            province_name: province.name,
            district_code: district.code,
            district_name: district.name,
            municipality_code: municipality.code,
            municipality_name: municipality.name,
            health_worker_density: None,
            total_living_with_hiv: None,
            tb_treatment_success_rate: None,
            health_facilities: None,
            total_population: None,
        }
    }

    /// Code of the area this record belongs to at `level`
    #[must_use]
    pub fn code_at(&self, level: GeoLevel) -> Option<&str> {
        match level {
            GeoLevel::National => None,
            GeoLevel::Province => Some(self.province_code.as_str()),
            GeoLevel::District => Some(self.district_code.as_str()),
            GeoLevel::Municipality => Some(self.municipality_code.as_str()),
        }
    }

    /// Area this record belongs to at `level`
    #[must_use]
    pub fn area_at(&self, level: GeoLevel) -> Option<AreaRef> {
        match level {
            GeoLevel::National => None,
            GeoLevel::Province => Some(AreaRef::new(&self.province_code, &self.province_name)),
            GeoLevel::District => Some(AreaRef::new(&self.district_code, &self.district_name)),
            GeoLevel::Municipality => Some(AreaRef::new(
                &self.municipality_code,
                &self.municipality_name,
            )),
        }
    }
}
