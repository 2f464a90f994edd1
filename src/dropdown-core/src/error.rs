//! Error types for the dropdown core.
//!
//! Transitions never fail: rejected input (disabled options, keys while
//! closed, empty lists) is a silent no-op. Errors only surface when building
//! a control from bad data or when the caller misuses the value channel.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dropdown operations.
pub type DropdownResult<T> = std::result::Result<T, DropdownError>;

/// Errors that can occur while building or feeding a dropdown.
#[derive(Error, Debug)]
pub enum DropdownError {
    /// Two options in one catalog share a value.
    #[error("Duplicate option value '{0}' in catalog")]
    DuplicateValue(String),

    /// `set_value` was called on an instance that owns its own value.
    #[error("Cannot set value on an uncontrolled dropdown")]
    NotControlled,

    /// More than one value supplied for a single-select instance.
    #[error("Single-select dropdown received {count} values")]
    TooManyValues { count: usize },

    /// Manifest file could not be read.
    #[error("Failed to read manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML manifest parsing error.
    #[error("Failed to parse manifest: {0}")]
    ManifestParse(#[from] toml::de::Error),

    /// JSON manifest parsing error.
    #[error("Failed to parse manifest JSON: {0}")]
    ManifestJson(#[from] serde_json::Error),

    /// Manifest extension is neither `.toml` nor `.json`.
    #[error("Unsupported manifest format: {0}")]
    UnsupportedFormat(PathBuf),
}

impl DropdownError {
    /// Returns a user-friendly error message for terminal display.
    pub fn user_message(&self) -> String {
        match self {
            DropdownError::DuplicateValue(value) => {
                format!(
                    "Option value '{}' appears more than once.\n\n\
                     Every option in a manifest needs a unique `value`.",
                    value
                )
            }
            DropdownError::UnsupportedFormat(path) => {
                format!(
                    "Cannot load {}.\n\nManifests must end in .toml or .json.",
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }

    /// Returns the exit code for CLI error reporting.
    pub fn exit_code(&self) -> i32 {
        match self {
            DropdownError::ManifestRead { .. } => 2,
            DropdownError::ManifestParse(_)
            | DropdownError::ManifestJson(_)
            | DropdownError::UnsupportedFormat(_) => 3,
            DropdownError::DuplicateValue(_) | DropdownError::TooManyValues { .. } => 4,
            DropdownError::NotControlled => 1,
        }
    }
}
