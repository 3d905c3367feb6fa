//! Area summaries and comparison reports over sample rows

use sdg_health::algorithm::summary::{Comparison, DASHBOARD_INDICATORS};
use sdg_health::utils::test::{drill_down, generate_test_records, sample_records};
use sdg_health::{
    AreaSummary, GeoLevel, Indicator, IndicatorSource, PerformanceClassifier, PerformanceReport,
    PerformanceStatus, RecordSource, Selection,
};

use crate::utils::sample_selector;

#[test]
fn test_district_summary() {
    let records = sample_records();
    let selection = drill_down(&sample_selector(), &[(GeoLevel::Province, "WC"), (GeoLevel::District, "DC1")]).unwrap();

    let summary = AreaSummary::for_selection(&records, &selection);
    let stats = summary.statistics().unwrap();
    assert_eq!(stats.total_areas, 2);
    // Cederberg has no population figure
    assert_eq!(stats.total_population, Some(77_841.0));
    assert_eq!(stats.avg_tb_success_rate, Some(84.6));
    assert_eq!(stats.total_facilities, Some(24.0));
}

#[test]
fn test_area_without_rows_is_no_data() {
    let records = sample_records();
    let selection = Selection::Province {
        province: sdg_health::AreaRef::new("NC", "Northern Cape"),
    };
    let summary = AreaSummary::for_selection(&records, &selection);
    assert_eq!(summary, AreaSummary::NoData);
    assert!(!summary.has_data());
    assert!(summary.to_string().contains("No data"));
}

#[test]
fn test_province_shares_add_up_to_national() {
    let source = RecordSource::new(generate_test_records(11, 3, 2, 4));
    let national = source.national_value(Indicator::HealthFacilities).unwrap();
    let provinces: f64 = ["P01", "P02", "P03"]
        .into_iter()
        .map(|code| {
            let selection = Selection::Province {
                province: sdg_health::AreaRef::new(code, code),
            };
            source.local_value(&selection, Indicator::HealthFacilities).unwrap_or(0.0)
        })
        .sum();
    assert!((provinces - national).abs() < 1e-6);
}

#[test]
fn test_dashboard_report_for_municipality() {
    let source = RecordSource::new(sample_records());
    let selection = drill_down(
        &sample_selector(),
        &[
            (GeoLevel::Province, "GP"),
            (GeoLevel::District, "JHB"),
            (GeoLevel::Municipality, "JHB"),
        ],
    )
    .unwrap();

    let report = PerformanceReport::dashboard(&source, &selection, &PerformanceClassifier::default());
    assert_eq!(report.comparisons.len(), DASHBOARD_INDICATORS.len());
    assert_eq!(report.selection, selection);

    let density = report.get(Indicator::HealthWorkerDensity).unwrap();
    assert_eq!(density.local, Some(27.4));
    match &density.comparison {
        Comparison::Performance(result) => assert_eq!(result.status, PerformanceStatus::Excellent),
        other => panic!("unexpected comparison {other:?}"),
    }

    let population = report.get(Indicator::Population).unwrap();
    match population.comparison {
        Comparison::ShareOfNational { percent: Some(percent) } => {
            assert!(percent > 0.0 && percent < 100.0);
        }
        ref other => panic!("unexpected comparison {other:?}"),
    }
}

#[test]
fn test_national_report_compares_against_itself() {
    let source = RecordSource::new(sample_records());
    let report = PerformanceReport::dashboard(&source, &Selection::National, &PerformanceClassifier::default());
    for row in &report.comparisons {
        assert_eq!(row.local, row.national);
        if let Comparison::ShareOfNational { percent } = row.comparison {
            assert!((percent.unwrap() - 100.0).abs() < 1e-9);
        }
    }
}
