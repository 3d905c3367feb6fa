//! In-memory indicator source over municipality rows

use std::path::Path;
use std::time::Instant;

use crate::algorithm::performance::Indicator;
use crate::algorithm::summary::statistics::AreaSummary;
use crate::common::traits::IndicatorSource;
use crate::error::Result;
use crate::error::util::read_json;
use crate::models::{AreaRecord, Selection};
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};

/// Serves indicator values by aggregating an owned set of rows
#[derive(Debug, Clone)]
pub struct RecordSource {
    records: Vec<AreaRecord>,
    national: AreaSummary,
}

impl RecordSource {
    #[must_use]
    pub fn new(records: Vec<AreaRecord>) -> Self {
        let national = AreaSummary::from_records(&records);
        Self { records, national }
    }

    /// Load rows from a JSON array file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not an array of rows
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let start = Instant::now();
        log_operation_start("Loading area records from", path);

        let records: Vec<AreaRecord> = read_json(path, "area records")?;
        if records.is_empty() {
            log_warning("Area record file contains no rows", Some(path));
        }

        log_operation_complete("loaded", path, records.len(), Some(start.elapsed()));
        Ok(Self::new(records))
    }

    #[must_use]
    pub fn records(&self) -> &[AreaRecord] {
        &self.records
    }

    /// Summary of the selected area
    #[must_use]
    pub fn summary(&self, selection: &Selection) -> AreaSummary {
        if selection.is_national() {
            return self.national.clone();
        }
        AreaSummary::for_selection(&self.records, selection)
    }

    #[must_use]
    pub const fn national_summary(&self) -> &AreaSummary {
        &self.national
    }
}

impl IndicatorSource for RecordSource {
    fn local_value(&self, selection: &Selection, indicator: Indicator) -> Option<f64> {
        if selection.is_national() {
            return self.national.value(indicator);
        }
        AreaSummary::for_selection(&self.records, selection).value(indicator)
    }

    fn national_value(&self, indicator: Indicator) -> Option<f64> {
        self.national.value(indicator)
    }
}
