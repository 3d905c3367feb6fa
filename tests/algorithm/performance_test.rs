//! National comparison grading

use sdg_health::algorithm::performance::{fallback_tier, percentage_diff};
use sdg_health::{
    Indicator, PerformanceClassifier, PerformanceStatus, Polarity, ThresholdProfile,
    ThresholdRegistry,
};

#[test]
fn test_missing_or_zero_baseline_is_insufficient_data() {
    let classifier = PerformanceClassifier::default();
    for v in [-3.5, 0.0, 1.0, 42.0, 1e9] {
        for result in [
            classifier.classify(Some(v), Some(0.0), "x"),
            classifier.classify(Some(v), None, "x"),
            classifier.classify(None, Some(v), "x"),
        ] {
            assert_eq!(result.status, PerformanceStatus::InsufficientData);
            assert_eq!(result.percentage_diff, None);
        }
    }
}

#[test]
fn test_equal_to_baseline_is_never_critical() {
    let classifier = PerformanceClassifier::default();
    let result = classifier.classify(Some(100.0), Some(100.0), "tb_success_rate");
    assert_eq!(result.percentage_diff, Some(0.0));
    assert!(result.status.is_at_least(PerformanceStatus::Moderate));

    for name in ["unknown_metric", "art_coverage", "hiv_prevalence"] {
        let result = classifier.classify(Some(50.0), Some(50.0), name);
        assert_eq!(result.status, PerformanceStatus::Moderate, "{name}");
    }
}

#[test]
fn test_tb_profile_grades_local_value() {
    let classifier = PerformanceClassifier::default();
    let status = |local| classifier.classify(Some(local), Some(80.0), "tb_success_rate").status;
    assert_eq!(status(90.0), PerformanceStatus::Excellent);
    assert_eq!(status(60.0), PerformanceStatus::Poor);
    assert_eq!(status(40.0), PerformanceStatus::Critical);
}

#[test]
fn test_fallback_band_edges() {
    let classifier = PerformanceClassifier::default();
    let status = |local| classifier.classify(Some(local), Some(100.0), "unknown_metric").status;
    assert_eq!(status(115.0), PerformanceStatus::Excellent);
    assert_eq!(status(114.0), PerformanceStatus::Good);
    assert_eq!(status(105.0), PerformanceStatus::Good);
    assert_eq!(status(95.0), PerformanceStatus::Moderate);
    assert_eq!(status(85.0), PerformanceStatus::Poor);
    assert_eq!(status(84.0), PerformanceStatus::Critical);
}

#[test]
fn test_fallback_is_monotonic_in_deviation() {
    let mut previous = PerformanceStatus::Critical;
    for step in -40..=40 {
        let status = fallback_tier(f64::from(step), Polarity::HigherIsBetter);
        assert!(status.is_at_least(previous));
        previous = status;
        assert_eq!(
            fallback_tier(-f64::from(step), Polarity::LowerIsBetter),
            status
        );
    }
}

#[test]
fn test_percentage_diff_sign() {
    assert_eq!(percentage_diff(120.0, 100.0), 20.0);
    assert_eq!(percentage_diff(80.0, 100.0), -20.0);
    // Negative baselines keep the arithmetic sign
    assert_eq!(percentage_diff(-50.0, -100.0), -50.0);
}

#[test]
fn test_custom_registry() {
    let registry = ThresholdRegistry::empty()
        .with_profile(Indicator::ArtCoverage, ThresholdProfile::new(90.0, 80.0, 70.0, 60.0))
        .unwrap();
    let classifier = PerformanceClassifier::new(registry);

    let result = classifier.classify(Some(72.0), Some(90.0), "ART coverage");
    assert!(result.threshold_used);
    assert_eq!(result.status, PerformanceStatus::Moderate);

    // Built-in profiles are absent from an empty registry
    let result = classifier.classify(Some(90.0), Some(80.0), "tb_success_rate");
    assert!(!result.threshold_used);
    assert_eq!(result.status, PerformanceStatus::Good);
}

#[test]
fn test_results_serialize_with_snake_case_status() {
    let classifier = PerformanceClassifier::default();
    let result = classifier.classify(None, Some(1.0), "x");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["status"], "insufficient_data");
}
