//! Error handling for the dashboard core.

pub mod util;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::geography::GeoLevel;

/// Specialized error type for the dashboard core
#[derive(Debug, Error)]
pub enum DashboardError {
    /// A code was chosen that is not among the valid options at that level
    #[error("Invalid selection at {level} level: '{code}' is not a valid option")]
    InvalidSelection {
        /// Level the selection was attempted at
        level: GeoLevel,
        /// The rejected code
        code: String,
    },

    /// Catalog integrity violation detected at load time
    #[error("Malformed catalog: {0}")]
    MalformedCatalog(String),

    /// Threshold profile with cut points out of order for its polarity
    #[error("Invalid threshold profile for '{indicator}': {reason}")]
    InvalidThresholdProfile {
        /// Indicator the profile was registered for
        indicator: String,
        /// What is wrong with the cut points
        reason: String,
    },

    /// Configuration value out of range
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error opening or reading a file
    #[error("IO error: {context} ({})", path.display())]
    Io {
        /// What was being attempted
        context: String,
        /// Path involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Error decoding a JSON document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DashboardError {
    /// Create an invalid selection error
    pub fn invalid_selection(level: GeoLevel, code: impl Into<String>) -> Self {
        Self::InvalidSelection {
            level,
            code: code.into(),
        }
    }

    /// Create a malformed catalog error
    pub fn malformed_catalog(message: impl Into<String>) -> Self {
        Self::MalformedCatalog(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Wrap an I/O error with context and the path involved
    pub fn io_error_with_source(context: impl Into<String>, path: &Path, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;
