//! National-vs-local performance classification
//!
//! Compares a local indicator value with the national value. When the
//! indicator has a threshold profile, the local value itself is graded
//! against the profile's cut points; otherwise the percentage deviation
//! from the national value is graded against fixed bands. Missing values
//! and a zero baseline are not errors, they classify as insufficient data.

use serde::{Deserialize, Serialize};

use crate::algorithm::performance::indicator::{Indicator, Polarity};
use crate::algorithm::performance::status::PerformanceStatus;
use crate::algorithm::performance::threshold::ThresholdRegistry;

/// Lower edges of the fallback bands, in percent deviation from national
pub const FALLBACK_EXCELLENT_PCT: f64 = 15.0;
pub const FALLBACK_GOOD_PCT: f64 = 5.0;
pub const FALLBACK_MODERATE_PCT: f64 = -5.0;
pub const FALLBACK_POOR_PCT: f64 = -15.0;

/// Result of one comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceResult {
    /// Indicator the name resolved to, if any
    pub indicator: Option<Indicator>,
    pub status: PerformanceStatus,
    /// Signed deviation from the national value in percent
    pub percentage_diff: Option<f64>,
    pub interpretation: String,
    /// Whether a registered threshold profile was used
    pub threshold_used: bool,
}

impl PerformanceResult {
    fn insufficient(indicator: Option<Indicator>) -> Self {
        Self {
            indicator,
            status: PerformanceStatus::InsufficientData,
            percentage_diff: None,
            interpretation: "Insufficient data for national comparison".to_string(),
            threshold_used: false,
        }
    }
}

/// Grade a percentage deviation against the fallback bands
#[must_use]
pub fn fallback_tier(percentage_diff: f64, polarity: Polarity) -> PerformanceStatus {
    let score = match polarity {
        Polarity::HigherIsBetter => percentage_diff,
        Polarity::LowerIsBetter => -percentage_diff,
    };
    if score >= FALLBACK_EXCELLENT_PCT {
        PerformanceStatus::Excellent
    } else if score >= FALLBACK_GOOD_PCT {
        PerformanceStatus::Good
    } else if score >= FALLBACK_MODERATE_PCT {
        PerformanceStatus::Moderate
    } else if score >= FALLBACK_POOR_PCT {
        PerformanceStatus::Poor
    } else {
        PerformanceStatus::Critical
    }
}

/// Signed deviation of `local` from `national` in percent
///
/// Multiplies before dividing so whole-number inputs on a round baseline
/// give exact band edges.
#[must_use]
pub fn percentage_diff(local: f64, national: f64) -> f64 {
    (local - national) * 100.0 / national
}

fn direction(percentage_diff: f64) -> &'static str {
    if percentage_diff >= 0.0 { "above" } else { "below" }
}

/// Classifies local values against national baselines
#[derive(Debug, Clone, Default)]
pub struct PerformanceClassifier {
    registry: ThresholdRegistry,
}

impl PerformanceClassifier {
    #[must_use]
    pub const fn new(registry: ThresholdRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub const fn registry(&self) -> &ThresholdRegistry {
        &self.registry
    }

    /// Classify by free-form indicator name
    ///
    /// The name is resolved with `Indicator::resolve`; unknown names fall
    /// back to percentage banding as a higher-is-better indicator.
    #[must_use]
    pub fn classify(
        &self,
        local: Option<f64>,
        national: Option<f64>,
        indicator_name: &str,
    ) -> PerformanceResult {
        self.classify_resolved(local, national, Indicator::resolve(indicator_name))
    }

    /// Classify a known indicator
    #[must_use]
    pub fn classify_indicator(
        &self,
        local: Option<f64>,
        national: Option<f64>,
        indicator: Indicator,
    ) -> PerformanceResult {
        self.classify_resolved(local, national, Some(indicator))
    }

    fn classify_resolved(
        &self,
        local: Option<f64>,
        national: Option<f64>,
        indicator: Option<Indicator>,
    ) -> PerformanceResult {
        let (Some(local), Some(national)) = (
            local.filter(|v| v.is_finite()),
            national.filter(|v| v.is_finite()),
        ) else {
            return PerformanceResult::insufficient(indicator);
        };
        if national == 0.0 {
            return PerformanceResult::insufficient(indicator);
        }

        let diff = percentage_diff(local, national);
        let polarity = indicator.map_or(Polarity::HigherIsBetter, Indicator::polarity);
        let profile = indicator.and_then(|i| self.registry.profile_for(i));

        match profile {
            Some(profile) => {
                let status = profile.tier_for(local, polarity);
                PerformanceResult {
                    indicator,
                    status,
                    percentage_diff: Some(diff),
                    interpretation: format!(
                        "{local:.1} ({status}) | {:.1}% {} national avg",
                        diff.abs(),
                        direction(diff)
                    ),
                    threshold_used: true,
                }
            }
            None => PerformanceResult {
                indicator,
                status: fallback_tier(diff, polarity),
                percentage_diff: Some(diff),
                interpretation: format!(
                    "{:.1}% {} national average",
                    diff.abs(),
                    direction(diff)
                ),
                threshold_used: false,
            },
        }
    }
}
