//! Test helper functions

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::filter::GeographicSelector;
use crate::models::{GeoLevel, Selection};

/// Apply a sequence of code choices starting from national
///
/// # Errors
/// Returns the first rejected choice
pub fn drill_down(selector: &GeographicSelector, path: &[(GeoLevel, &str)]) -> Result<Selection> {
    path.iter()
        .try_fold(selector.reset(), |selection, &(level, code)| {
            selector.select(level, code, &selection)
        })
}

/// Write `value` as JSON into a per-process temporary file
///
/// # Errors
/// Returns an error if serialization or the write fails
pub fn write_temp_json<T: Serialize>(name: &str, value: &T) -> Result<PathBuf> {
    let path = std::env::temp_dir().join(format!("sdg-health-{}-{name}", std::process::id()));
    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(&path, content).map_err(|e| {
        crate::error::DashboardError::io_error_with_source("Failed to write test fixture", &path, e)
    })?;
    Ok(path)
}
