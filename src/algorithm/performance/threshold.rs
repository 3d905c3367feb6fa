//! Indicator threshold profiles
//!
//! A profile holds the four cut points separating the five tiers. For
//! higher-is-better indicators the cut points descend from `excellent` to
//! `poor`; for lower-is-better indicators they ascend. Profiles are
//! registered up front and never change while the dashboard runs.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::algorithm::performance::indicator::{Indicator, Polarity};
use crate::algorithm::performance::status::PerformanceStatus;
use crate::error::{DashboardError, Result};

/// Cut points for one indicator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdProfile {
    pub excellent: f64,
    pub good: f64,
    pub moderate: f64,
    pub poor: f64,
}

impl ThresholdProfile {
    #[must_use]
    pub const fn new(excellent: f64, good: f64, moderate: f64, poor: f64) -> Self {
        Self {
            excellent,
            good,
            moderate,
            poor,
        }
    }

    /// Cut points from most to least stringent, paired with their tier
    #[must_use]
    pub const fn cut_points(&self) -> [(f64, PerformanceStatus); 4] {
        [
            (self.excellent, PerformanceStatus::Excellent),
            (self.good, PerformanceStatus::Good),
            (self.moderate, PerformanceStatus::Moderate),
            (self.poor, PerformanceStatus::Poor),
        ]
    }

    /// Check the cut points are finite and strictly ordered for `polarity`
    pub fn validate(&self, indicator: Indicator, polarity: Polarity) -> Result<()> {
        let points = self.cut_points().map(|(value, _)| value);
        let invalid = |reason: String| DashboardError::InvalidThresholdProfile {
            indicator: indicator.key().to_string(),
            reason,
        };

        if let Some(value) = points.iter().find(|v| !v.is_finite()) {
            return Err(invalid(format!("cut point {value} is not finite")));
        }

        let ordered = points.windows(2).all(|pair| match polarity {
            Polarity::HigherIsBetter => pair[0] > pair[1],
            Polarity::LowerIsBetter => pair[0] < pair[1],
        });
        if !ordered {
            let expected = match polarity {
                Polarity::HigherIsBetter => "descending",
                Polarity::LowerIsBetter => "ascending",
            };
            return Err(invalid(format!(
                "cut points {points:?} must be strictly {expected} from excellent to poor"
            )));
        }
        Ok(())
    }

    /// Tier of `value`: the first cut point it satisfies, else critical
    #[must_use]
    pub fn tier_for(&self, value: f64, polarity: Polarity) -> PerformanceStatus {
        self.cut_points()
            .into_iter()
            .find(|&(cut, _)| match polarity {
                Polarity::HigherIsBetter => value >= cut,
                Polarity::LowerIsBetter => value <= cut,
            })
            .map_or(PerformanceStatus::Critical, |(_, status)| status)
    }
}

/// Built-in profiles
const DEFAULT_PROFILES: [(Indicator, ThresholdProfile); 4] = [
    // Health workers per 10,000 population
    (
        Indicator::HealthWorkerDensity,
        ThresholdProfile::new(25.0, 15.0, 10.0, 5.0),
    ),
    (
        Indicator::TbTreatmentSuccess,
        ThresholdProfile::new(85.0, 75.0, 65.0, 50.0),
    ),
    (
        Indicator::HivViralSuppression,
        ThresholdProfile::new(90.0, 80.0, 70.0, 60.0),
    ),
    (
        Indicator::ImmunizationCoverage,
        ThresholdProfile::new(95.0, 85.0, 75.0, 65.0),
    ),
];

/// Lookup table from indicator to its threshold profile
#[derive(Debug, Clone)]
pub struct ThresholdRegistry {
    profiles: FxHashMap<Indicator, ThresholdProfile>,
}

impl Default for ThresholdRegistry {
    fn default() -> Self {
        Self {
            profiles: DEFAULT_PROFILES.into_iter().collect(),
        }
    }
}

impl ThresholdRegistry {
    /// A registry without any profiles; every comparison uses the fallback bands
    #[must_use]
    pub fn empty() -> Self {
        Self {
            profiles: FxHashMap::default(),
        }
    }

    /// Register (or replace) the profile for `indicator`
    pub fn with_profile(mut self, indicator: Indicator, profile: ThresholdProfile) -> Result<Self> {
        profile.validate(indicator, indicator.polarity())?;
        self.profiles.insert(indicator, profile);
        Ok(self)
    }

    #[must_use]
    pub fn profile_for(&self, indicator: Indicator) -> Option<&ThresholdProfile> {
        self.profiles.get(&indicator)
    }

    /// Indicators that have a registered profile
    pub fn indicators(&self) -> impl Iterator<Item = Indicator> + '_ {
        self.profiles.keys().copied()
    }
}
