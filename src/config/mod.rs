//! Dashboard configuration
//!
//! Cache lifetimes and map defaults. Every field has a default, so a
//! configuration file only needs to name the values it overrides.

use std::fmt;
use std::path::Path;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::util::read_json;
use crate::error::{DashboardError, Result};
use crate::utils::logging::log_operation_start;

/// Cache lifetimes, in seconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Lifetime of the geographic catalog
    pub geographic_data_ttl: u64,
    pub health_indicators_ttl: u64,
    /// Lifetime of boundary geometry
    pub spatial_data_ttl: u64,
    pub summary_stats_ttl: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            geographic_data_ttl: 3600 * 24,
            health_indicators_ttl: 3600 * 24,
            spatial_data_ttl: 3600 * 6,
            summary_stats_ttl: 3600,
        }
    }
}

fn seconds(value: u64) -> Duration {
    i64::try_from(value)
        .ok()
        .and_then(Duration::try_seconds)
        .unwrap_or(Duration::MAX)
}

impl CacheConfig {
    #[must_use]
    pub fn geographic_ttl(&self) -> Duration {
        seconds(self.geographic_data_ttl)
    }

    #[must_use]
    pub fn indicators_ttl(&self) -> Duration {
        seconds(self.health_indicators_ttl)
    }

    #[must_use]
    pub fn spatial_ttl(&self) -> Duration {
        seconds(self.spatial_data_ttl)
    }

    #[must_use]
    pub fn summary_ttl(&self) -> Duration {
        seconds(self.summary_stats_ttl)
    }
}

/// Map viewport defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub default_zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub center_lat: f64,
    pub center_lon: f64,
    /// Radius around a selected municipality within which neighbours are shown
    pub neighboring_radius_km: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_zoom: 6,
            min_zoom: 5,
            max_zoom: 12,
            center_lat: -28.5,
            center_lon: 24.5,
            neighboring_radius_km: 50.0,
        }
    }
}

impl MapConfig {
    /// Clamp a zoom level into the configured bounds
    #[must_use]
    pub fn clamp_zoom(&self, zoom: u8) -> u8 {
        zoom.max(self.min_zoom).min(self.max_zoom)
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub cache: CacheConfig,
    pub map: MapConfig,
}

impl DashboardConfig {
    /// Load and validate a configuration file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// fails validation
    pub fn from_json_file(path: &Path) -> Result<Self> {
        log_operation_start("Loading dashboard configuration from", path);
        let config: Self = read_json(path, "dashboard configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration is internally consistent
    ///
    /// # Errors
    /// Returns `DashboardError::Config` describing the first problem found
    pub fn validate(&self) -> Result<()> {
        let map = &self.map;
        if map.min_zoom > map.max_zoom {
            return Err(DashboardError::config(format!(
                "min_zoom ({}) is greater than max_zoom ({})",
                map.min_zoom, map.max_zoom
            )));
        }
        if !(map.min_zoom..=map.max_zoom).contains(&map.default_zoom) {
            return Err(DashboardError::config(format!(
                "default_zoom ({}) is outside {}..={}",
                map.default_zoom, map.min_zoom, map.max_zoom
            )));
        }
        if !(-90.0..=90.0).contains(&map.center_lat) || !(-180.0..=180.0).contains(&map.center_lon) {
            return Err(DashboardError::config(format!(
                "map centre ({}, {}) is not a valid coordinate",
                map.center_lat, map.center_lon
            )));
        }
        if !map.neighboring_radius_km.is_finite() || map.neighboring_radius_km < 0.0 {
            return Err(DashboardError::config(format!(
                "neighboring_radius_km must be a non-negative number, got {}",
                map.neighboring_radius_km
            )));
        }
        if self.cache.geographic_data_ttl == 0 {
            return Err(DashboardError::config("geographic_data_ttl must be positive"));
        }
        Ok(())
    }
}

impl fmt::Display for DashboardConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dashboard Configuration:")?;
        writeln!(f, "  Geographic Data TTL: {}s", self.cache.geographic_data_ttl)?;
        writeln!(f, "  Health Indicators TTL: {}s", self.cache.health_indicators_ttl)?;
        writeln!(f, "  Spatial Data TTL: {}s", self.cache.spatial_data_ttl)?;
        writeln!(f, "  Summary Stats TTL: {}s", self.cache.summary_stats_ttl)?;
        writeln!(
            f,
            "  Map: zoom {} ({}-{}), centre ({}, {})",
            self.map.default_zoom,
            self.map.min_zoom,
            self.map.max_zoom,
            self.map.center_lat,
            self.map.center_lon
        )?;
        writeln!(f, "  Neighbour Radius: {} km", self.map.neighboring_radius_km)
    }
}
