//! Catalog loading and sharing

use chrono::Duration;
use sdg_health::utils::test::{generate_test_catalog, sample_catalog, write_temp_json};
use sdg_health::{
    CatalogSnapshot, CatalogStore, DashboardConfig, DashboardError, GeoLevel, GeographicCatalog,
    GeographicSelector,
};

#[test]
fn test_snapshot_file_round_trip() {
    let catalog = sample_catalog();
    let path = write_temp_json("catalog.json", &catalog.to_snapshot()).unwrap();
    let loaded = GeographicCatalog::from_json_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    for level in [GeoLevel::Province, GeoLevel::District, GeoLevel::Municipality] {
        assert_eq!(loaded.count_at(level), catalog.count_at(level));
    }
    assert_eq!(loaded.to_snapshot(), catalog.to_snapshot());
}

#[test]
fn test_orphan_in_file_is_malformed() {
    let mut snapshot: CatalogSnapshot = sample_catalog().to_snapshot();
    snapshot.districts[0].province_code = "ZZ".into();
    let path = write_temp_json("orphan-catalog.json", &snapshot).unwrap();
    let err = GeographicCatalog::from_json_file(&path).unwrap_err();
    std::fs::remove_file(&path).ok();
    assert!(matches!(err, DashboardError::MalformedCatalog(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = GeographicCatalog::from_json_file(std::path::Path::new("/no/such/catalog.json")).unwrap_err();
    assert!(matches!(err, DashboardError::Io { .. }));
}

#[test]
fn test_generated_catalog_sizes() {
    let catalog = generate_test_catalog(5, 4, 3, 5);
    assert_eq!(catalog.count_at(GeoLevel::Province), 4);
    assert_eq!(catalog.count_at(GeoLevel::District), 12);
    assert_eq!(catalog.count_at(GeoLevel::Municipality), 60);
    // Same seed, same hierarchy
    assert_eq!(generate_test_catalog(5, 4, 3, 5).to_snapshot(), catalog.to_snapshot());
}

#[test]
fn test_selector_sees_published_catalog() {
    let config = DashboardConfig::default();
    let store = CatalogStore::new(GeographicCatalog::empty(), config.cache.geographic_ttl());
    let before = GeographicSelector::from_store(&store);

    store.publish(sample_catalog());
    let after = GeographicSelector::from_store(&store);

    assert!(before.catalog().is_empty());
    assert_eq!(after.catalog().count_at(GeoLevel::Province), 3);
    assert_eq!(store.ttl(), Duration::hours(24));
}
