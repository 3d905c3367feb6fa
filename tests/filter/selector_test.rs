//! Drill-down behaviour of the geographic selector

use itertools::Itertools;
use sdg_health::utils::test::drill_down;
use sdg_health::{Choice, DashboardError, GeoLevel, GeographicCatalog, GeographicSelector, Selection};
use std::sync::Arc;

use crate::utils::{SEEDS, sample_selector, synthetic_selector};

#[test]
fn test_district_options_are_exactly_the_children_sorted_by_name() {
    for seed in SEEDS {
        let selector = synthetic_selector(seed);
        for province in selector.catalog().provinces() {
            let selection = selector
                .select(GeoLevel::Province, province.code.as_str(), &Selection::National)
                .unwrap();
            let options = selector.options_for(GeoLevel::District, &selection);

            let expected = selector
                .catalog()
                .districts()
                .iter()
                .filter(|d| d.province_code == province.code)
                .map(|d| d.code.clone())
                .sorted()
                .collect_vec();
            assert_eq!(options.iter().map(|a| a.code.clone()).sorted().collect_vec(), expected);
            assert!(options.windows(2).all(|w| w[0].name <= w[1].name));
        }
    }
}

#[test]
fn test_municipality_options_follow_selected_district() {
    let selector = sample_selector();
    let selection = drill_down(&selector, &[(GeoLevel::Province, "GP"), (GeoLevel::District, "DC42")]).unwrap();
    let names = selector
        .options_for(GeoLevel::Municipality, &selection)
        .into_iter()
        .map(|a| a.name)
        .collect_vec();
    assert_eq!(names, vec!["Emfuleni", "Lesedi", "Midvaal"]);
}

#[test]
fn test_invalid_code_is_rejected_and_selection_unchanged() {
    let selector = sample_selector();
    let before = drill_down(&selector, &[(GeoLevel::Province, "GP")]).unwrap();
    let snapshot = before.clone();

    // A district that exists, but in another province
    let err = selector.select(GeoLevel::District, "DC1", &before).unwrap_err();
    assert!(matches!(
        err,
        DashboardError::InvalidSelection { level: GeoLevel::District, ref code } if code == "DC1"
    ));
    assert_eq!(before, snapshot);

    assert!(selector.select(GeoLevel::Province, "XX", &before).is_err());
    assert!(selector.select(GeoLevel::Municipality, "GT421", &before).is_err());
    assert_eq!(before, snapshot);
}

#[test]
fn test_selecting_province_clears_deeper_levels() {
    let selector = sample_selector();
    let deep = drill_down(
        &selector,
        &[
            (GeoLevel::Province, "GP"),
            (GeoLevel::District, "DC42"),
            (GeoLevel::Municipality, "GT421"),
        ],
    )
    .unwrap();
    assert_eq!(deep.level(), GeoLevel::Municipality);

    let moved = selector.select(GeoLevel::Province, "WC", &deep).unwrap();
    assert_eq!(moved.level(), GeoLevel::Province);
    assert_eq!(moved.province().map(|p| p.code.as_str()), Some("WC"));
    assert!(moved.district().is_none());
    assert!(moved.municipality().is_none());
}

#[test]
fn test_all_truncates_to_parent_level() {
    let selector = sample_selector();
    let deep = drill_down(
        &selector,
        &[
            (GeoLevel::Province, "GP"),
            (GeoLevel::District, "DC48"),
            (GeoLevel::Municipality, "GT481"),
        ],
    )
    .unwrap();

    let district = selector.select(GeoLevel::Municipality, Choice::All, &deep).unwrap();
    assert_eq!(district.level(), GeoLevel::District);
    let province = selector.select(GeoLevel::District, Choice::All, &deep).unwrap();
    assert_eq!(province.level(), GeoLevel::Province);
    assert_eq!(province.province().unwrap().name, "Gauteng");
}

#[test]
fn test_reset_round_trip_from_any_path() {
    for seed in SEEDS {
        let selector = synthetic_selector(seed);
        assert_eq!(selector.reset(), Selection::National);
        for municipality in selector.catalog().municipalities() {
            let district = selector.catalog().district(&municipality.district_code).unwrap();
            let selection = drill_down(
                &selector,
                &[
                    (GeoLevel::Province, district.province_code.as_str()),
                    (GeoLevel::District, district.code.as_str()),
                    (GeoLevel::Municipality, municipality.code.as_str()),
                ],
            )
            .unwrap();
            assert_eq!(selection.level(), GeoLevel::Municipality);
            assert_eq!(selector.reset(), Selection::National);
        }
    }
}

#[test]
fn test_breadcrumb_and_display() {
    let selector = sample_selector();
    let selection = drill_down(&selector, &[(GeoLevel::Province, "GP"), (GeoLevel::District, "DC42")]).unwrap();
    let levels = selection.breadcrumb().iter().map(|(level, _)| *level).collect_vec();
    assert_eq!(levels, vec![GeoLevel::Province, GeoLevel::District]);
    assert_eq!(Selection::National.to_string(), "All South Africa");
}

#[test]
fn test_normalize_drops_areas_missing_from_new_catalog() {
    let selector = sample_selector();
    let selection = drill_down(
        &selector,
        &[
            (GeoLevel::Province, "GP"),
            (GeoLevel::District, "DC42"),
            (GeoLevel::Municipality, "GT422"),
        ],
    )
    .unwrap();

    let records = sdg_health::utils::test::sample_records()
        .into_iter()
        .filter(|r| r.municipality_code != "GT422")
        .collect_vec();
    let refreshed = GeographicSelector::new(Arc::new(GeographicCatalog::from_records(&records).unwrap()));

    let normalized = refreshed.normalize(&selection);
    assert_eq!(normalized.level(), GeoLevel::District);
    assert_eq!(normalized.district().unwrap().code, "DC42");
    assert_eq!(selector.normalize(&selection), selection);
}

#[test]
fn test_empty_catalog_has_no_options() {
    let selector = GeographicSelector::new(Arc::new(GeographicCatalog::empty()));
    assert!(selector.options_for(GeoLevel::Province, &Selection::National).is_empty());
    assert!(selector.select(GeoLevel::Province, "GP", &Selection::National).is_err());
    assert_eq!(
        selector.select(GeoLevel::Province, Choice::All, &Selection::National).unwrap(),
        Selection::National
    );
}
