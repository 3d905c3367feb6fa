//! Immutable geographic catalog
//!
//! The catalog is the reference set of provinces, districts and
//! municipalities together with their parent links. It is validated once
//! when it is built and never mutated afterwards; integrity problems are
//! reported as `DashboardError::MalformedCatalog` instead of surfacing later
//! during a drill-down.

use std::cmp::Ordering;
use std::path::Path;
use std::time::Instant;

use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::util::read_json;
use crate::error::{DashboardError, Result};
use crate::models::{AreaRecord, District, GeoEntity, GeoLevel, Municipality, Province};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Serializable form of a catalog, as exchanged with the data layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub provinces: Vec<Province>,
    #[serde(default)]
    pub districts: Vec<District>,
    #[serde(default)]
    pub municipalities: Vec<Municipality>,
}

/// Read-only snapshot of all known areas
#[derive(Debug, Clone, Default)]
pub struct GeographicCatalog {
    provinces: Vec<Province>,
    districts: Vec<District>,
    municipalities: Vec<Municipality>,
    province_index: FxHashMap<String, usize>,
    district_index: FxHashMap<String, usize>,
    municipality_index: FxHashMap<String, usize>,
    // Child indices are kept in name order
    districts_by_province: FxHashMap<String, Vec<usize>>,
    municipalities_by_district: FxHashMap<String, Vec<usize>>,
}

/// Name order with the code as tie-break so listings are deterministic
fn by_name<T: GeoEntity>(a: &T, b: &T) -> Ordering {
    a.name().cmp(b.name()).then_with(|| a.code().cmp(b.code()))
}

/// Index entities by code, rejecting blanks and duplicates
fn index_by_code<T: GeoEntity>(entities: &[T]) -> Result<FxHashMap<String, usize>> {
    let mut index = FxHashMap::default();
    for (position, entity) in entities.iter().enumerate() {
        if entity.code().trim().is_empty() {
            return Err(DashboardError::malformed_catalog(format!(
                "{} '{}' has an empty code",
                T::LEVEL.display_name(),
                entity.name()
            )));
        }
        if index.insert(entity.code().to_string(), position).is_some() {
            return Err(DashboardError::malformed_catalog(format!(
                "duplicate {} code '{}'",
                T::LEVEL,
                entity.code()
            )));
        }
    }
    Ok(index)
}

/// Group children under their parent, failing on orphans
fn group_by_parent<T: GeoEntity>(
    children: &[T],
    parents: &FxHashMap<String, usize>,
) -> Result<FxHashMap<String, Vec<usize>>> {
    let mut groups: FxHashMap<String, Vec<usize>> = FxHashMap::default();
    for (position, child) in children.iter().enumerate() {
        let parent = child.parent_code().unwrap_or_default();
        if !parents.contains_key(parent) {
            return Err(DashboardError::malformed_catalog(format!(
                "{} '{}' references unknown parent '{}'",
                T::LEVEL,
                child.code(),
                parent
            )));
        }
        groups.entry(parent.to_string()).or_default().push(position);
    }
    Ok(groups)
}

impl GeographicCatalog {
    /// Build and validate a catalog
    ///
    /// Fails when a code is duplicated within its level or when a district or
    /// municipality references a parent that is not in the catalog.
    pub fn new(
        provinces: Vec<Province>,
        districts: Vec<District>,
        municipalities: Vec<Municipality>,
    ) -> Result<Self> {
        let provinces = provinces.into_iter().sorted_by(by_name).collect_vec();
        let districts = districts.into_iter().sorted_by(by_name).collect_vec();
        let municipalities = municipalities.into_iter().sorted_by(by_name).collect_vec();

        let province_index = index_by_code(&provinces)?;
        let district_index = index_by_code(&districts)?;
        let municipality_index = index_by_code(&municipalities)?;

        let districts_by_province = group_by_parent(&districts, &province_index)?;
        let municipalities_by_district = group_by_parent(&municipalities, &district_index)?;

        Ok(Self {
            provinces,
            districts,
            municipalities,
            province_index,
            district_index,
            municipality_index,
            districts_by_province,
            municipalities_by_district,
        })
    }

    /// A catalog with no areas at all
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from a serialized snapshot
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Result<Self> {
        Self::new(snapshot.provinces, snapshot.districts, snapshot.municipalities)
    }

    /// Load a catalog snapshot from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        log_operation_start("Loading geographic catalog from", path);
        let start = Instant::now();
        let snapshot: CatalogSnapshot = read_json(path, "geographic catalog")?;
        let catalog = Self::from_snapshot(snapshot)?;
        log_operation_complete("loaded", path, catalog.area_count(), Some(start.elapsed()));
        Ok(catalog)
    }

    /// Derive the catalog from indicator rows
    ///
    /// Each row names its municipality, district and province; the distinct
    /// areas become the catalog. A code that appears with two different
    /// names or two different parents is a malformed catalog.
    pub fn from_records(records: &[AreaRecord]) -> Result<Self> {
        let mut provinces: FxHashMap<&str, &str> = FxHashMap::default();
        let mut districts: FxHashMap<&str, (&str, &str)> = FxHashMap::default();
        let mut municipalities: FxHashMap<&str, (&str, &str)> = FxHashMap::default();

        for record in records {
            let province_name = *provinces
                .entry(record.province_code.as_str())
                .or_insert(record.province_name.as_str());
            if province_name != record.province_name {
                return Err(DashboardError::malformed_catalog(format!(
                    "province '{}' has conflicting names '{}' and '{}'",
                    record.province_code, province_name, record.province_name
                )));
            }

            let district = *districts
                .entry(record.district_code.as_str())
                .or_insert((record.district_name.as_str(), record.province_code.as_str()));
            if district != (record.district_name.as_str(), record.province_code.as_str()) {
                return Err(DashboardError::malformed_catalog(format!(
                    "district '{}' appears with conflicting name or province",
                    record.district_code
                )));
            }

            let municipality = *municipalities
                .entry(record.municipality_code.as_str())
                .or_insert((
                    record.municipality_name.as_str(),
                    record.district_code.as_str(),
                ));
            if municipality != (record.municipality_name.as_str(), record.district_code.as_str())
            {
                return Err(DashboardError::malformed_catalog(format!(
                    "municipality '{}' appears with conflicting name or district",
                    record.municipality_code
                )));
            }
        }

        Self::new(
            provinces
                .into_iter()
                .map(|(code, name)| Province {
                    code: code.to_string(),
                    name: name.to_string(),
                })
                .collect(),
            districts
                .into_iter()
                .map(|(code, (name, province_code))| District {
                    code: code.to_string(),
                    name: name.to_string(),
                    province_code: province_code.to_string(),
                })
                .collect(),
            municipalities
                .into_iter()
                .map(|(code, (name, district_code))| Municipality {
                    code: code.to_string(),
                    name: name.to_string(),
                    district_code: district_code.to_string(),
                })
                .collect(),
        )
    }

    /// Serializable copy of this catalog
    #[must_use]
    pub fn to_snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            provinces: self.provinces.clone(),
            districts: self.districts.clone(),
            municipalities: self.municipalities.clone(),
        }
    }

    /// All provinces sorted by name
    #[must_use]
    pub fn provinces(&self) -> &[Province] {
        &self.provinces
    }

    /// All districts sorted by name
    #[must_use]
    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    /// All municipalities sorted by name
    #[must_use]
    pub fn municipalities(&self) -> &[Municipality] {
        &self.municipalities
    }

    #[must_use]
    pub fn province(&self, code: &str) -> Option<&Province> {
        self.province_index.get(code).map(|&i| &self.provinces[i])
    }

    #[must_use]
    pub fn district(&self, code: &str) -> Option<&District> {
        self.district_index.get(code).map(|&i| &self.districts[i])
    }

    #[must_use]
    pub fn municipality(&self, code: &str) -> Option<&Municipality> {
        self.municipality_index
            .get(code)
            .map(|&i| &self.municipalities[i])
    }

    /// Districts of a province, sorted by name
    pub fn districts_of<'a>(&'a self, province_code: &str) -> impl Iterator<Item = &'a District> + use<'a> {
        self.districts_by_province
            .get(province_code)
            .into_iter()
            .flatten()
            .map(|&i| &self.districts[i])
    }

    /// Municipalities of a district, sorted by name
    pub fn municipalities_of<'a>(
        &'a self,
        district_code: &str,
    ) -> impl Iterator<Item = &'a Municipality> + use<'a> {
        self.municipalities_by_district
            .get(district_code)
            .into_iter()
            .flatten()
            .map(|&i| &self.municipalities[i])
    }

    /// Number of entries at `level`; national counts as one area
    #[must_use]
    pub fn count_at(&self, level: GeoLevel) -> usize {
        match level {
            GeoLevel::National => 1,
            GeoLevel::Province => self.provinces.len(),
            GeoLevel::District => self.districts.len(),
            GeoLevel::Municipality => self.municipalities.len(),
        }
    }

    /// Total number of provinces, districts and municipalities
    #[must_use]
    pub fn area_count(&self) -> usize {
        self.provinces.len() + self.districts.len() + self.municipalities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.provinces.is_empty()
    }
}
