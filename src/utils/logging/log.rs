//! Standard log lines for load operations

use std::path::Path;
use std::time::Duration;

use crate::collections::GeographicCatalog;
use crate::models::GeoLevel;

/// Log the start of an operation on a file
///
/// # Arguments
/// * `operation` - What is being done, e.g. "Loading geographic catalog from"
/// * `path` - File the operation reads
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{operation} {}", path.display());
}

/// Log the end of an operation on a file
///
/// # Arguments
/// * `operation` - Past-tense verb, e.g. "loaded"
/// * `path` - File the operation read
/// * `items` - Number of entries produced
/// * `elapsed` - Time taken, if measured
pub fn log_operation_complete(operation: &str, path: &Path, items: usize, elapsed: Option<Duration>) {
    match elapsed {
        Some(elapsed) => log::info!(
            "Successfully {operation} {items} entries from {} in {elapsed:.2?}",
            path.display()
        ),
        None => log::info!("Successfully {operation} {items} entries from {}", path.display()),
    }
}

/// Log a warning, optionally about a specific file
pub fn log_warning(message: &str, path: Option<&Path>) {
    match path {
        Some(path) => log::warn!("{message}: {}", path.display()),
        None => log::warn!("{message}"),
    }
}

/// Log how many areas a catalog holds at each level
pub fn log_catalog_counts(catalog: &GeographicCatalog) {
    log::debug!(
        "Catalog holds {} provinces, {} districts, {} municipalities",
        catalog.count_at(GeoLevel::Province),
        catalog.count_at(GeoLevel::District),
        catalog.count_at(GeoLevel::Municipality)
    );
}
