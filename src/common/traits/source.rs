//! Indicator data source trait
//!
//! The comparison report only needs two numbers per indicator: the value
//! for the selected area and the national value. Anything able to answer
//! those two questions (in-memory rows, a query layer, a test stub) can
//! drive a report.

use crate::algorithm::performance::Indicator;
use crate::models::Selection;

/// Provides aggregated indicator values for areas
pub trait IndicatorSource {
    /// Aggregated value of `indicator` within the selected area
    ///
    /// Returns `None` when the area has no rows, or none of its rows
    /// carries a value for the indicator.
    fn local_value(&self, selection: &Selection, indicator: Indicator) -> Option<f64>;

    /// Aggregated value of `indicator` across the whole country
    fn national_value(&self, indicator: Indicator) -> Option<f64> {
        self.local_value(&Selection::National, indicator)
    }
}
