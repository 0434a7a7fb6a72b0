//! Input validation for file paths and destinations

use std::path::Path;

use crate::error::{EtlError, Result};

/// Validation utilities for pipeline inputs
#[derive(Debug, Copy, Clone)]
pub struct InputValidator;

impl InputValidator {
    /// Validate that an input CSV path exists and is a regular file
    pub fn validate_input_file(path: &Path) -> Result<()> {
        if !path.exists() || !path.is_file() {
            return Err(EtlError::NotFound(path.to_path_buf()));
        }
        Ok(())
    }

    /// Validate a destination database path. The file itself may not exist
    /// yet; an existing parent directory must be a directory.
    pub fn validate_destination(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(EtlError::InvalidConfig(
                "Database path cannot be empty".to_string(),
            ));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && parent.exists() && !parent.is_dir() {
                return Err(EtlError::Io(std::io::Error::other(format!(
                    "Parent of destination is not a directory: {}",
                    parent.display()
                ))));
            }
        }
        Ok(())
    }
}
