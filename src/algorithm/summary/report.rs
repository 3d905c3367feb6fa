//! National comparison report for a selection
//!
//! Rates and densities are graded with the performance classifier. Counts
//! (population, facilities, people living with HIV) can't be compared
//! directly against a national total, so they are reported as a share of
//! the national figure instead.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::algorithm::performance::{Aggregation, Indicator, PerformanceClassifier, PerformanceResult};
use crate::common::traits::IndicatorSource;
use crate::models::Selection;

/// Indicators shown on the dashboard's comparison panel
pub const DASHBOARD_INDICATORS: [Indicator; 5] = [
    Indicator::HealthWorkerDensity,
    Indicator::TbTreatmentSuccess,
    Indicator::PeopleLivingWithHiv,
    Indicator::HealthFacilities,
    Indicator::Population,
];

/// How a local value relates to the national one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Comparison {
    /// Graded comparison for a rate or density
    Performance(PerformanceResult),
    /// Local count as a percentage of the national count
    ShareOfNational { percent: Option<f64> },
}

/// One indicator row of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorComparison {
    pub indicator: Indicator,
    pub local: Option<f64>,
    pub national: Option<f64>,
    pub comparison: Comparison,
}

/// Local share of a national count in percent
///
/// `None` unless both values are finite and the national count is positive.
#[must_use]
pub fn share_of_national(local: Option<f64>, national: Option<f64>) -> Option<f64> {
    let local = local.filter(|v| v.is_finite())?;
    let national = national.filter(|v| v.is_finite() && *v > 0.0)?;
    Some(local * 100.0 / national)
}

/// Comparison of every requested indicator for one selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub selection: Selection,
    pub comparisons: Vec<IndicatorComparison>,
}

impl PerformanceReport {
    /// Build a report for `selection` over `indicators`
    ///
    /// # Arguments
    /// * `source` - Where local and national values come from
    /// * `selection` - The area being compared
    /// * `indicators` - Indicators to include, in display order
    /// * `classifier` - Grades rate and density indicators
    pub fn build<S>(
        source: &S,
        selection: &Selection,
        indicators: &[Indicator],
        classifier: &PerformanceClassifier,
    ) -> Self
    where
        S: IndicatorSource + ?Sized,
    {
        let comparisons = indicators
            .iter()
            .map(|&indicator| {
                let local = source.local_value(selection, indicator);
                let national = source.national_value(indicator);
                let comparison = match indicator.aggregation() {
                    Aggregation::Mean => Comparison::Performance(
                        classifier.classify_indicator(local, national, indicator),
                    ),
                    Aggregation::Sum => Comparison::ShareOfNational {
                        percent: share_of_national(local, national),
                    },
                };
                IndicatorComparison {
                    indicator,
                    local,
                    national,
                    comparison,
                }
            })
            .collect::<Vec<_>>();

        debug!(
            "Built comparison report for {} with {} indicators",
            selection,
            comparisons.len()
        );

        Self {
            selection: selection.clone(),
            comparisons,
        }
    }

    /// Report over the dashboard's standard indicators
    pub fn dashboard<S>(source: &S, selection: &Selection, classifier: &PerformanceClassifier) -> Self
    where
        S: IndicatorSource + ?Sized,
    {
        Self::build(source, selection, &DASHBOARD_INDICATORS, classifier)
    }

    #[must_use]
    pub fn get(&self, indicator: Indicator) -> Option<&IndicatorComparison> {
        self.comparisons.iter().find(|c| c.indicator == indicator)
    }

    /// Graded rows only
    pub fn graded(&self) -> impl Iterator<Item = (Indicator, &PerformanceResult)> {
        self.comparisons.iter().filter_map(|c| match &c.comparison {
            Comparison::Performance(result) => Some((c.indicator, result)),
            Comparison::ShareOfNational { .. } => None,
        })
    }
}
