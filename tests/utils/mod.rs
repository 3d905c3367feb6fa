use std::sync::Arc;

use sdg_health::utils::test::{generate_test_catalog, sample_catalog};
use sdg_health::GeographicSelector;

/// Seeds used for the synthetic hierarchy checks
pub const SEEDS: [u64; 4] = [1, 7, 42, 2024];

#[must_use]
pub fn sample_selector() -> GeographicSelector {
    GeographicSelector::new(Arc::new(sample_catalog()))
}

/// Selector over a generated hierarchy of 4 provinces x 3 districts x 5 municipalities
#[must_use]
pub fn synthetic_selector(seed: u64) -> GeographicSelector {
    GeographicSelector::new(Arc::new(generate_test_catalog(seed, 4, 3, 5)))
}
