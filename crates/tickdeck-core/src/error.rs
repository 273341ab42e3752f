//! Core error types for tickdeck-core.
//!
//! Two failure families exist: configuration that never should have been
//! accepted (`ValidationError`) and operations invoked from an incompatible
//! timer phase (`StateError`). Both are reported synchronously at the call
//! site and never retried.

use std::path::PathBuf;
use thiserror::Error;

use crate::timer::Phase;

/// Core error type for tickdeck-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Phase/state machine errors
    #[error("State error: {0}")]
    State(#[from] StateError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors: bad timer configuration or an invalid random-draw
/// request. The caller must re-submit corrected input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// A run cannot be configured with a zero-length duration
    #[error("Duration must be strictly positive")]
    ZeroDuration,

    /// A threshold must fire strictly before the run's natural end
    #[error("Threshold '{label}' at {remaining_ms}ms must be below the duration ({duration_ms}ms)")]
    ThresholdOutOfRange {
        label: String,
        remaining_ms: u64,
        duration_ms: u64,
    },

    /// Thresholds must be listed from most to least remaining time
    #[error("Threshold '{label}' at index {index} breaks strictly decreasing order")]
    ThresholdsNotDescending { index: usize, label: String },

    /// Uniform draw over an empty outcome set
    #[error("Cannot draw from an empty range (n = 0)")]
    EmptyRange,

    /// Inclusive range with min >= max
    #[error("Minimum ({min}) must be less than maximum ({max})")]
    InvalidBounds { min: i64, max: i64 },

    /// Empty collection
    #[error("Empty collection: {0}")]
    EmptyCollection(String),

    /// Group count outside [2, item count]
    #[error("Group count must be between 2 and {item_count} (the number of items), got {group_count}")]
    GroupCountOutOfRange {
        group_count: usize,
        item_count: usize,
    },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// State errors: an operation was invoked from a phase that does not permit
/// it. These indicate a host-side logic bug, not bad user input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StateError {
    #[error("Cannot {operation} while {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: Phase,
    },
}

impl StateError {
    pub(crate) fn invalid(operation: &'static str, phase: Phase) -> Self {
        StateError::InvalidPhase { operation, phase }
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
