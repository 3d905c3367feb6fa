//! Utility functions for error handling
//!
//! This module provides helpers that turn file access failures into
//! contextual `DashboardError`s.

use std::fs;
use std::io;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{DashboardError, Result};

/// Safely read a file to string with rich error information
///
/// # Arguments
/// * `path` - The path to the file to read
/// * `purpose` - Why the file is being read (for error context)
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    if !path.exists() {
        return Err(DashboardError::io_error_with_source(
            format!("File not found, needed for: {purpose}"),
            path,
            io::Error::from(io::ErrorKind::NotFound),
        ));
    }

    if !path.is_file() {
        return Err(DashboardError::io_error_with_source(
            format!("Expected a file for: {purpose}"),
            path,
            io::Error::from(io::ErrorKind::InvalidInput),
        ));
    }

    fs::read_to_string(path).map_err(|e| {
        // Provide different error messages based on the error kind
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => "Permission denied - check file permissions".to_string(),
            io::ErrorKind::InvalidData => {
                "File contains invalid UTF-8 data - cannot read as text".to_string()
            }
            _ => format!("Failed to read file content for: {purpose}"),
        };
        DashboardError::io_error_with_source(context, path, e)
    })
}

/// Read and deserialize a JSON document
pub fn read_json<T: DeserializeOwned>(path: &Path, purpose: &str) -> Result<T> {
    let content = safe_read_to_string(path, purpose)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reports_purpose() {
        let err = safe_read_to_string(Path::new("/definitely/not/here.json"), "catalog snapshot")
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("catalog snapshot"));
        assert!(message.contains("/definitely/not/here.json"));
    }

    #[test]
    fn test_directory_is_rejected() {
        let err = safe_read_to_string(&std::env::temp_dir(), "config").unwrap_err();
        assert!(matches!(err, DashboardError::Io { .. }));
    }
}
