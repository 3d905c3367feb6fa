//! Fixtures and helpers shared by unit and integration tests

pub mod helpers;

pub use fixtures::{
    generate_test_catalog, generate_test_records, sample_catalog, sample_records,
};
pub use helpers::{drill_down, write_temp_json};
