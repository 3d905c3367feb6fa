//! Logging helpers
//!
//! Consistent messages for file loads and catalog refreshes, on top of the
//! `log` facade. The binary decides where they go.

pub mod log;

pub use log::{log_catalog_counts, log_operation_complete, log_operation_start, log_warning};
