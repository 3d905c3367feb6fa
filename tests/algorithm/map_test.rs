//! Map view and legend bins

use sdg_health::algorithm::map::MapScope;
use sdg_health::utils::test::{drill_down, sample_records};
use sdg_health::{GeoLevel, MapConfig, MapLayer, MapView, Selection, choropleth_bins};

use crate::utils::sample_selector;

#[test]
fn test_view_shows_children_of_selection() {
    let config = MapConfig::default();
    let selector = sample_selector();

    let national = MapView::for_selection(&Selection::National, &config);
    assert_eq!(national.scope, MapScope::Provinces);

    let province = drill_down(&selector, &[(GeoLevel::Province, "GP")]).unwrap();
    let view = MapView::for_selection(&province, &config);
    assert_eq!(view.zoom, 7);
    assert!(matches!(view.scope, MapScope::DistrictsOf { ref province } if province.code == "GP"));

    let names = view
        .layer_values(&sample_records(), MapLayer::HealthFacilities)
        .into_iter()
        .map(|(area, _)| area.name)
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["City of Johannesburg", "Sedibeng", "West Rand"]);
}

#[test]
fn test_rate_layer_values_are_means() {
    let selector = sample_selector();
    let district = drill_down(&selector, &[(GeoLevel::Province, "WC"), (GeoLevel::District, "DC1")]).unwrap();
    let view = MapView::for_selection(&district, &MapConfig::default());
    assert_eq!(view.zoom, 9);

    let values = view.layer_values(&sample_records(), MapLayer::TbTreatmentSuccess);
    assert_eq!(values.len(), 2);
    let cederberg = values.iter().find(|(area, _)| area.code == "WC012").unwrap();
    assert_eq!(cederberg.1, None);
}

#[test]
fn test_bins_for_sample_population() {
    let view = MapView::for_selection(&Selection::National, &MapConfig::default());
    let values: Vec<f64> = view
        .layer_values(&sample_records(), MapLayer::Population)
        .into_iter()
        .filter_map(|(_, v)| v)
        .collect();
    let bins = choropleth_bins(MapLayer::Population, &values, 5).unwrap();
    assert_eq!(bins.len(), 5);
    assert!(bins[0] <= values.iter().copied().fold(f64::INFINITY, f64::min));
    assert!(bins[4] >= values.iter().copied().fold(f64::NEG_INFINITY, f64::max));
    // Smallest province total 118,260 and largest 7,429,000
    assert_eq!(bins[0], 110_000.0);
    assert_eq!(bins[4], 7_500_000.0);
}
