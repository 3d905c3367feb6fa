//! Core of a South African SDG 3 health dashboard: a cascading geographic
//! selector over the province/district/municipality hierarchy, and a
//! classifier grading local health indicators against national baselines.

pub mod algorithm;
pub mod collections;
pub mod common;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
pub use config::{CacheConfig, DashboardConfig, MapConfig};
pub use error::{DashboardError, Result};

// Geography and selection
pub use collections::{CatalogSnapshot, CatalogStore, GeographicCatalog};
pub use filter::{AreaFilter, Choice, FilterCriteria, GeographicSelector};
pub use models::{AreaRecord, AreaRef, District, GeoLevel, Municipality, Province, Selection};

// Performance comparison
pub use algorithm::performance::{
    Indicator, PerformanceClassifier, PerformanceResult, PerformanceStatus, Polarity,
    ThresholdProfile, ThresholdRegistry,
};
pub use algorithm::summary::{AreaSummary, PerformanceReport, RecordSource};
pub use common::IndicatorSource;

// Map helpers
pub use algorithm::map::{MapLayer, MapView, choropleth_bins};
