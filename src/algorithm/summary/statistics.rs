//! Summary statistics for a geographic area
//!
//! Aggregates municipality rows the way the dashboard's summary panel does:
//! densities and rates are averaged, counts are summed, and missing values
//! are skipped. An area without any rows is `AreaSummary::NoData`, which is
//! distinct from an area whose rows carry no value for some column.

use std::fmt;

use crate::algorithm::performance::Indicator;
use crate::filter::{AreaFilter, FilterCriteria};
use crate::models::{AreaRecord, Selection};

/// Running sum and count of the non-missing values in one column
#[derive(Debug, Clone, Copy, Default)]
struct ColumnAccumulator {
    sum: f64,
    count: usize,
}

impl ColumnAccumulator {
    fn push(&mut self, value: Option<f64>) {
        if let Some(value) = value.filter(|v| v.is_finite()) {
            self.sum += value;
            self.count += 1;
        }
    }

    fn sum(self) -> Option<f64> {
        (self.count > 0).then_some(self.sum)
    }

    fn mean(self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Aggregated indicator values for an area
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStatistics {
    pub total_population: Option<f64>,
    pub avg_health_worker_density: Option<f64>,
    pub total_hiv_cases: Option<f64>,
    pub avg_tb_success_rate: Option<f64>,
    pub total_facilities: Option<f64>,
    /// Number of municipality rows aggregated
    pub total_areas: usize,
}

/// Summary of an area, or the explicit absence of rows for it
#[derive(Debug, Clone, PartialEq)]
pub enum AreaSummary {
    /// No rows matched the area
    NoData,
    Summary(SummaryStatistics),
}

impl AreaSummary {
    /// Aggregate a set of rows
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a AreaRecord>,
    {
        let mut population = ColumnAccumulator::default();
        let mut density = ColumnAccumulator::default();
        let mut hiv = ColumnAccumulator::default();
        let mut tb = ColumnAccumulator::default();
        let mut facilities = ColumnAccumulator::default();
        let mut total_areas = 0;

        for record in records {
            population.push(record.total_population);
            density.push(record.health_worker_density);
            hiv.push(record.total_living_with_hiv);
            tb.push(record.tb_treatment_success_rate);
            facilities.push(record.health_facilities);
            total_areas += 1;
        }

        if total_areas == 0 {
            return Self::NoData;
        }

        Self::Summary(SummaryStatistics {
            total_population: population.sum(),
            avg_health_worker_density: density.mean(),
            total_hiv_cases: hiv.sum(),
            avg_tb_success_rate: tb.mean(),
            total_facilities: facilities.sum(),
            total_areas,
        })
    }

    /// Aggregate the rows inside the selected area
    #[must_use]
    pub fn for_selection(records: &[AreaRecord], selection: &Selection) -> Self {
        let filter = AreaFilter::for_selection(selection);
        Self::from_records(records.iter().filter(|r| filter.meets_criteria(*r)))
    }

    #[must_use]
    pub const fn statistics(&self) -> Option<&SummaryStatistics> {
        match self {
            Self::NoData => None,
            Self::Summary(stats) => Some(stats),
        }
    }

    #[must_use]
    pub const fn has_data(&self) -> bool {
        matches!(self, Self::Summary(_))
    }

    /// Aggregated value for an indicator the summary table carries
    #[must_use]
    pub fn value(&self, indicator: Indicator) -> Option<f64> {
        let stats = self.statistics()?;
        match indicator {
            Indicator::HealthWorkerDensity => stats.avg_health_worker_density,
            Indicator::TbTreatmentSuccess => stats.avg_tb_success_rate,
            Indicator::PeopleLivingWithHiv => stats.total_hiv_cases,
            Indicator::HealthFacilities => stats.total_facilities,
            Indicator::Population => stats.total_population,
            _ => None,
        }
    }
}

impl fmt::Display for AreaSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self::Summary(stats) = self else {
            return writeln!(f, "No data available for current selection");
        };

        let line = |f: &mut fmt::Formatter<'_>, label: &str, value: Option<f64>| match value {
            Some(value) => writeln!(f, "  {label}: {value:.1}"),
            None => writeln!(f, "  {label}: No data"),
        };

        writeln!(f, "Area Summary ({} areas):", stats.total_areas)?;
        line(f, "Total Population", stats.total_population)?;
        line(f, "Health Worker Density", stats.avg_health_worker_density)?;
        line(f, "People Living with HIV", stats.total_hiv_cases)?;
        line(f, "TB Treatment Success", stats.avg_tb_success_rate)?;
        line(f, "Health Facilities", stats.total_facilities)
    }
}
